use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod extract;
pub mod fetcher;
pub mod input;
pub mod single_shot;
pub mod spider;

// Re-export commonly used types
pub use self::config::SpiderConfig;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use spider::{RangeReport, Spider};

/// The `SpiderError` enum represents the errors that can occur while fetching pages.
#[derive(Error, Debug)]
pub enum SpiderError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP request failed: {0}")]
    NetworkError(#[source] reqwest::Error),
    /// The response body could not be read to the end.
    #[error("Reading response body failed: {0}")]
    ReadError(#[source] reqwest::Error),
    /// The HTTP client could not be built.
    #[error("HTTP client could not be built: {0}")]
    ClientError(#[source] reqwest::Error),
    /// Represents an error that occurs while loading configuration layers.
    #[error("Configuration failed: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Writing output or reading the page bounds failed.
    #[error("I/O failed: {0}")]
    IoError(#[from] std::io::Error),
}

/// A type alias for `Result` with the `SpiderError` error type.
pub type Result<T> = std::result::Result<T, SpiderError>;

// Constants

/// Listing page that the spider walks by default.
pub const DEFAULT_BASE_URL: &str = "https://movie.douban.com/top250";
/// Number of results on one listing page.
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Installs the global `tracing` subscriber, writing to stdout.
///
/// Verbosity follows `RUST_LOG` and falls back to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
