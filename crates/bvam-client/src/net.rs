pub mod http;

pub use http::HttpApi;

#[cfg(feature = "reqwest")]
pub use http::ReqwestApi;
