//! Single-endpoint fetch proxy library.

pub mod config;
pub mod fetch;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::FetchProxyConfig;
pub use fetch::{FetchError, FetchService, FetchedHtml};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
