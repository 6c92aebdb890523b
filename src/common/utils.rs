// src/common/utils.rs
use crate::common::BithumbError;

// Parse a string to a f64, return an InvalidResponse error if the parsing fails
pub fn parse_f64(value: &str, field_name: &str) -> Result<f64, BithumbError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| BithumbError::InvalidResponse(format!("Invalid {} format: {}", field_name, value)))
}

// get timestamp in milliseconds
pub fn get_timestamp_millis() -> u64 {
    chrono::Utc::now()
        .timestamp_millis()
        .try_into()
        .unwrap_or(0)
}

/// Bithumb Global writes pairs with a hyphen: `BTC/USDT` -> `BTC-USDT`.
pub fn format_symbol(symbol: &str) -> String {
    symbol.replace('/', "-")
}

/// Price and quantity fields are sent with exactly eight decimals.
pub fn format_decimal8(value: f64, field_name: &str) -> Result<String, BithumbError> {
    if !value.is_finite() {
        return Err(BithumbError::InvalidArgument(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(format!("{:.8}", value))
}
