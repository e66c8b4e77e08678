use crate::{Result, SpiderConfig, SpiderError};
use reqwest::Client;
use std::future::Future;
use tracing::{debug, error, info, instrument};

/// Capability to turn a URL into the full text of its response body.
///
/// The spider only depends on this trait, so tests can hand it a canned fetcher
/// instead of a network client.
pub trait PageFetcher {
    /// Performs a single GET against `url` and returns the whole body.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// The `HttpFetcher` struct performs page fetches with a `reqwest` client.
pub struct HttpFetcher {
    /// The HTTP client used for making requests.
    client: Client,
}

impl HttpFetcher {
    /// Creates a new `HttpFetcher` from the given configuration.
    ///
    /// No timeout is set. The only header added is the `Accept-Encoding` that
    /// gzip support sends; a user agent is only sent when the configuration
    /// names one.
    pub fn new(config: &SpiderConfig) -> Result<Self> {
        let mut builder = Client::builder().gzip(true);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(SpiderError::ClientError)?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Sending GET request");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = %e, "http get failed");
            SpiderError::NetworkError(e)
        })?;

        let status = response.status();
        debug!("Response status: {}", status);

        // `text` consumes the response, so the connection goes back on every path.
        let body = response.text().await.map_err(|e| {
            error!(error = %e, "reading body failed");
            SpiderError::ReadError(e)
        })?;

        info!(%status, bytes = body.len(), "page fetched");
        Ok(body)
    }
}
