use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

lazy_static! {
    static ref EVM_ADDRESS_RE: Regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
    static ref INTEGER_AMOUNT_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Highest slippage the aggregator accepts, in percent
pub const MAX_SLIPPAGE_PERCENT: u32 = 50;

// Validate EVM address (0x + 20 bytes hex), checksum casing is not verified
pub fn validate_evm_address(address: &str) -> bool {
    EVM_ADDRESS_RE.is_match(address)
}

// Amounts travel as integer strings in the token's smallest unit
pub fn validate_integer_amount(amount: &str) -> bool {
    INTEGER_AMOUNT_RE.is_match(amount)
}

// Slippage is a percentage between 0 and MAX_SLIPPAGE_PERCENT inclusive
pub fn validate_slippage(slippage_percent: Decimal) -> bool {
    !slippage_percent.is_sign_negative() && slippage_percent <= Decimal::from(MAX_SLIPPAGE_PERCENT)
}

// Parse boolean flags from environment values ("true", "1", "yes")
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
