use std::time::Duration;

use anyhow::Result;
use orinium_engine::{FetchConfig, FetchRequest, Fetcher, UserAgentSpec};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Configure the fetch pipeline through the config builder. Defaults
    // are fine for most uses; we tighten the deadline a little here.
    let config = FetchConfig::builder()
        .timeout(Duration::from_secs(10))
        .max_redirects(5)
        .build()?;

    let fetcher = Fetcher::new(config);
    let request = FetchRequest::new("https://example.com/", UserAgentSpec::Auto)?;

    let resp = fetcher.fetch(&request).await?;
    log::info!("loaded {} with status {}", resp.url, resp.status);

    println!("{} {}", resp.status, resp.status_text);
    for line in resp.body_text().lines().take(10) {
        println!("{line}");
    }

    Ok(())
}
