use std::process::ExitCode;

const URL: &str = "http://www.google.com/robots.txt";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    topspider::init_tracing();
    topspider::single_shot::run(URL).await
}
