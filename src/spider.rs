use crate::extract::extract_titles;
use crate::{PageFetcher, Result, SpiderConfig};
use std::io::Write;
use tracing::{error, info, instrument};

/// Returns the zero-based result offset of a 1-based page index.
pub fn page_offset(index: i64, page_size: i64) -> i64 {
    index.saturating_sub(1).saturating_mul(page_size)
}

/// Builds the listing URL for a page index, e.g. `.../top250?start=25&filter=` for page 2.
pub fn page_url(base_url: &str, index: i64, page_size: i64) -> String {
    format!(
        "{}?start={}&filter=",
        base_url,
        page_offset(index, page_size)
    )
}

/// What one `run_range` call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeReport {
    /// Every URL that was requested, in request order.
    pub urls: Vec<String>,
    /// Page indices whose fetch failed and were skipped.
    pub failed: Vec<i64>,
    /// Number of titles extracted across all pages.
    pub titles: usize,
}

/// The `Spider` struct walks listing pages one at a time and prints the poster titles it finds.
pub struct Spider<F> {
    /// Source of page bodies.
    fetcher: F,
    /// The listing URL offsets are appended to.
    base_url: String,
    /// Results per listing page.
    page_size: i64,
}

impl<F: PageFetcher> Spider<F> {
    /// Creates a new `Spider` over the given fetcher.
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Where page bodies come from.
    /// * `config` - Supplies the listing URL and page size.
    pub fn new(fetcher: F, config: &SpiderConfig) -> Self {
        Self {
            fetcher,
            base_url: config.base_url.clone(),
            page_size: config.page_size,
        }
    }

    /// Fetches every page from `start` to `end` inclusive, in ascending order.
    ///
    /// A page whose fetch fails is logged and skipped; the remaining pages are
    /// still attempted. An empty range (`end < start`) fetches nothing.
    ///
    /// # Returns
    ///
    /// A `RangeReport` describing the run, or an error if writing to `out` fails.
    pub async fn run_range<W: Write>(&self, start: i64, end: i64, out: &mut W) -> Result<RangeReport> {
        info!("reading from {} to {} pages", start, end);

        let mut report = RangeReport::default();
        for index in start..=end {
            let url = page_url(&self.base_url, index, self.page_size);
            match self.spider_page(index, &url, out).await? {
                Some(titles) => report.titles += titles.len(),
                None => report.failed.push(index),
            }
            report.urls.push(url);
        }

        info!(
            pages = report.urls.len(),
            failed = report.failed.len(),
            titles = report.titles,
            "range finished"
        );
        Ok(report)
    }

    /// Fetches one page and prints its body and titles.
    ///
    /// Returns `Ok(None)` when the fetch failed, so the caller can move on.
    #[instrument(skip(self, url, out))]
    async fn spider_page<W: Write>(
        &self,
        index: i64,
        url: &str,
        out: &mut W,
    ) -> Result<Option<Vec<String>>> {
        writeln!(out, "Url: {}", url)?;

        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "page fetch failed");
                return Ok(None);
            }
        };
        writeln!(out, "result: {}", body)?;

        let titles = extract_titles(&body);
        writeln!(out, "titles: {}", titles.len())?;
        for title in &titles {
            writeln!(out, "Name: {}", title)?;
        }

        Ok(Some(titles))
    }
}
