use anyhow::Result;
use orinium_engine::{fetch, FetchConfig, FetchRequest, UserAgentSpec};

/// Fetch a URL given on the command line and print the result.
///
/// Usage: `fetch_url -u <url>`. Without `-u`, the default is
/// `about:blank`, which is answered locally and never hits the network.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut url = String::from("about:blank");
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-u" => {
                if let Some(value) = args.next() {
                    url = value;
                } else {
                    eprintln!("-u requires a URL argument");
                    std::process::exit(2);
                }
            }
            other => eprintln!("ignoring unknown argument: {other}"),
        }
    }

    let request = FetchRequest::new(&url, UserAgentSpec::Auto)?;
    let config = FetchConfig::default();

    log::info!("fetching {url}");
    match fetch(&request, &config).await {
        Ok(resp) => {
            println!(
                "{} {} <- {} ({} bytes)",
                resp.status,
                resp.status_text,
                resp.url,
                resp.body.len()
            );
            println!("{}", resp.body_text());
        }
        Err(e) => {
            // The pipeline never prints; displaying failures is our job.
            eprintln!("fetch failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
