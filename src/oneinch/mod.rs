// src/oneinch/mod.rs
pub mod config;
pub mod models;
pub mod presets;
pub mod swap_service;

pub use models::{
    SwapApiResponse, TxFields, ARBITRUM_CHAIN_ID, NATIVE_ETH, PSM_ARBITRUM, USDCE_ARBITRUM,
    USDC_ARBITRUM, USDT_ARBITRUM, WETH_ARBITRUM,
};

pub use config::Config;
pub use presets::Preset;
pub use swap_service::{OneInchSwapFetcher, SwapQuoteFetcher};
