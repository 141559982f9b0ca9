//! HTTP upload service.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;

/// Bind address and limits for `titlecheck serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
}
