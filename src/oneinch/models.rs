// src/oneinch/models.rs
use serde::Deserialize;

// Arbitrum One token addresses
pub const PSM_ARBITRUM: &str = "0x17A8541B82BF67e10B0874284b4Ae66858cb1fd5";
pub const USDC_ARBITRUM: &str = "0xaf88d065e77c8cC2239327C5EDb3A432268e5831";
pub const USDCE_ARBITRUM: &str = "0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8";
pub const USDT_ARBITRUM: &str = "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9";
pub const WETH_ARBITRUM: &str = "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1";
/// 1inch placeholder for the chain's native coin
pub const NATIVE_ETH: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";

pub const ARBITRUM_CHAIN_ID: u64 = 42161;

// Body of a successful /swap answer. Only `tx.data` is read; both levels are
// optional so a missing key is reported by the service instead of serde.
#[derive(Debug, Deserialize)]
pub struct SwapApiResponse {
    pub tx: Option<TxFields>,
}

#[derive(Debug, Deserialize)]
pub struct TxFields {
    pub data: Option<serde_json::Value>,
}
