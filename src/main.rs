use std::io;
use topspider::{
    input::{parse_bound, TokenReader},
    HttpFetcher, Result, Spider, SpiderConfig,
};

const START_PROMPT: &str = "Please input the start page (>=1)";
const END_PROMPT: &str = "Please input the end pages (>=start)";

/// The main entry point of the spider.
///
/// Page bounds come from the first two command line arguments; any that are
/// missing are prompted for on stdin. Fetch failures are logged per page and
/// never change the exit status.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    topspider::init_tracing();

    // Load configuration
    let config = SpiderConfig::load()?;

    let mut args = std::env::args().skip(1);
    let mut stdout = io::stdout();
    let mut tokens = TokenReader::new(io::stdin().lock());

    let start = match args.next() {
        Some(arg) => parse_bound(&arg),
        None => tokens.prompt_bound(START_PROMPT, &mut stdout)?,
    };
    let end = match args.next() {
        Some(arg) => parse_bound(&arg),
        None => tokens.prompt_bound(END_PROMPT, &mut stdout)?,
    };

    let spider = Spider::new(HttpFetcher::new(&config)?, &config);
    spider.run_range(start, end, &mut stdout).await?;

    Ok(())
}
