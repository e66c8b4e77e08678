use std::process::ExitCode;

const URL: &str = "https://en.wikipedia.org/wiki/IMDb";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    topspider::init_tracing();
    topspider::single_shot::run(URL).await
}
