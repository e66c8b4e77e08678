use crate::{HttpFetcher, PageFetcher, Result, SpiderConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;

/// Fetches `url` and writes the raw body to `out`.
///
/// Nothing is written unless the whole body was read.
pub async fn fetch_and_print<F: PageFetcher, W: Write>(
    fetcher: &F,
    url: &str,
    out: &mut W,
) -> Result<()> {
    let body = fetcher.fetch(url).await?;
    out.write_all(body.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Runs a single-shot fetch of `url` to stdout.
///
/// Any failure is logged and turned into a failing exit code.
pub async fn run(url: &str) -> ExitCode {
    let result = match HttpFetcher::new(&SpiderConfig::default()) {
        Ok(fetcher) => fetch_and_print(&fetcher, url, &mut io::stdout()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(url, error = %e, "fetch failed");
            ExitCode::FAILURE
        }
    }
}
