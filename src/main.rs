//! 1inch calldata fetcher - Main executable
//!
//! Requests swap calldata for the configured preset on Arbitrum and prints
//! it without the function selector, ready to be appended to a contract call.
use dotenv::dotenv;
use log::{debug, info};
use oneinch_calldata::{Config, OneInchSwapFetcher};
use std::process;

/// Application entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    // Stdout carries the calldata only, so logging defaults to warnings
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    info!("Starting 1inch calldata fetcher v{}", oneinch_calldata::VERSION);

    match run().await {
        Ok(calldata) => println!("{}", calldata),
        Err(e) => {
            debug!("Request failed: {:?}", e);
            // One line on stderr, the error messages already name the cause
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Fetches the calldata of the configured preset, formatted for output
async fn run() -> anyhow::Result<String> {
    let config = Config::from_env()?;

    // Fail before touching the network when the token is absent
    config.require_token()?;

    let request = config.preset.request();
    info!("Using preset {} on chain {}", config.preset, config.chain_id);

    let hex_prefix = config.hex_prefix;
    let fetcher = OneInchSwapFetcher::new(config)?;
    let calldata = fetcher.fetch_configured(&request).await?;

    Ok(calldata.to_hex_string(hex_prefix))
}
