use retry_json::{fetch_json, FetchOptions, JsonFetcher};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/json".to_owned());

    match fetch_json(&url, 3, 1.0) {
        Some(data) => println!("{data:#}"),
        None => println!("no data for {url}"),
    }

    // Same fetch from an async context.
    let runtime = tokio::runtime::Runtime::new()?;
    let fetcher = JsonFetcher::new().with_options(FetchOptions::default().backoff_factor(0.5));
    if let Some(data) = runtime.block_on(fetcher.fetch_json(&url)) {
        println!("async: {data}");
    }

    Ok(())
}
