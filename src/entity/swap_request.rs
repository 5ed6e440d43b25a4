use rust_decimal::Decimal;

use crate::entity::FetchError;
use crate::utils::{validate_evm_address, validate_integer_amount, validate_slippage};

/// Parameters of one `/swap` call. Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapRequest {
    pub source_token: String,
    pub destination_token: String,
    /// Integer amount in the source token's smallest unit
    pub amount: String,
    pub from_address: String,
    pub receiver_address: String,
    pub slippage_percent: Decimal,
    pub disable_estimate: bool,
    pub compatibility_mode: bool,
    pub protocol_filter: String,
}

impl SwapRequest {
    pub fn new(
        source_token: impl Into<String>,
        destination_token: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            source_token: source_token.into(),
            destination_token: destination_token.into(),
            amount: amount.into(),
            from_address: String::new(),
            receiver_address: String::new(),
            slippage_percent: Decimal::ONE,
            disable_estimate: true,
            compatibility_mode: true,
            protocol_filter: String::new(),
        }
    }

    /// Sets both the sender and the receiver
    pub fn with_wallet(self, address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            from_address: address.clone(),
            receiver_address: address,
            ..self
        }
    }

    pub fn with_from(self, from_address: impl Into<String>) -> Self {
        Self {
            from_address: from_address.into(),
            ..self
        }
    }

    pub fn with_receiver(self, receiver_address: impl Into<String>) -> Self {
        Self {
            receiver_address: receiver_address.into(),
            ..self
        }
    }

    pub fn with_slippage(self, slippage_percent: Decimal) -> Self {
        Self {
            slippage_percent,
            ..self
        }
    }

    pub fn with_disable_estimate(self, disable_estimate: bool) -> Self {
        Self {
            disable_estimate,
            ..self
        }
    }

    pub fn with_compatibility(self, compatibility_mode: bool) -> Self {
        Self {
            compatibility_mode,
            ..self
        }
    }

    pub fn with_protocols(self, protocol_filter: impl Into<String>) -> Self {
        Self {
            protocol_filter: protocol_filter.into(),
            ..self
        }
    }

    /// Checks addresses, amount and slippage before anything is sent
    pub fn validate(&self) -> Result<(), FetchError> {
        let addresses = [
            ("src", &self.source_token),
            ("dst", &self.destination_token),
            ("from", &self.from_address),
            ("receiver", &self.receiver_address),
        ];
        for (name, address) in addresses {
            if !validate_evm_address(address) {
                return Err(FetchError::InvalidRequest(format!(
                    "{} is not a 0x-prefixed 20-byte address: {:?}",
                    name, address
                )));
            }
        }

        if !validate_integer_amount(&self.amount) {
            return Err(FetchError::InvalidRequest(format!(
                "amount must be a non-negative integer in the token's smallest unit: {:?}",
                self.amount
            )));
        }

        if !validate_slippage(self.slippage_percent) {
            return Err(FetchError::InvalidRequest(format!(
                "slippage must be between 0 and 50 percent: {}",
                self.slippage_percent
            )));
        }

        Ok(())
    }

    /// Query parameters of the `/swap` endpoint, in wire order
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("src", self.source_token.clone()),
            ("dst", self.destination_token.clone()),
            ("amount", self.amount.clone()),
            ("from", self.from_address.clone()),
            ("slippage", self.slippage_percent.normalize().to_string()),
            ("receiver", self.receiver_address.clone()),
            ("disableEstimate", self.disable_estimate.to_string()),
            ("compatibility", self.compatibility_mode.to_string()),
            ("protocols", self.protocol_filter.clone()),
        ]
    }
}
