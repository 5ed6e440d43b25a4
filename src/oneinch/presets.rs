use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::entity::{FetchError, SwapRequest};
use crate::oneinch::models::{NATIVE_ETH, PSM_ARBITRUM, WETH_ARBITRUM};

/// Compiled-in swap requests, selected with `SWAP_PRESET`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// PSM into native ETH through Uniswap V3 only
    #[default]
    PsmToEth,
    /// PSM into WETH for the portal liquidity flow. Unlike the script it
    /// replaces, this also pins routing to Uniswap V3 and goes through the
    /// configured API version (v5.2 unless overridden) instead of v6.0.
    PsmToWeth,
}

impl Preset {
    pub fn request(&self) -> SwapRequest {
        match self {
            Preset::PsmToEth => SwapRequest::new(
                PSM_ARBITRUM,
                NATIVE_ETH,
                "59410765679358251996998",
            )
            .with_from("0x5615dEB798BB3E4dFa0139dFa1b3D433Cc23b72f")
            .with_receiver("0x3440326f551B8A7ee198cEE35cb5D517f2d296a2")
            .with_slippage(Decimal::from(10))
            .with_disable_estimate(true)
            .with_compatibility(true)
            .with_protocols("ARBITRUM_UNISWAP_V3"),
            Preset::PsmToWeth => SwapRequest::new(
                PSM_ARBITRUM,
                WETH_ARBITRUM,
                "25000000000000000000000",
            )
            .with_wallet("0x35f0DB0b238D3d0653d75FB67Cd64eE65C32DeFc")
            .with_slippage(Decimal::ONE)
            .with_disable_estimate(true)
            .with_compatibility(true)
            .with_protocols("ARBITRUM_UNISWAP_V3"),
        }
    }
}

impl FromStr for Preset {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "psm_to_eth" => Ok(Self::PsmToEth),
            "psm_to_weth" => Ok(Self::PsmToWeth),
            other => Err(FetchError::Configuration(format!(
                "Unknown SWAP_PRESET '{}', expected psm_to_eth or psm_to_weth",
                other
            ))),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::PsmToEth => write!(f, "psm_to_eth"),
            Self::PsmToWeth => write!(f, "psm_to_weth"),
        }
    }
}
