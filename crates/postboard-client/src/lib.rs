pub mod config;
pub mod error;
pub mod gateway;
pub mod http;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use gateway::{ApiGateway, Gateway};
pub use http::ApiClient;
