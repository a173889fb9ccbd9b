//! Ether unit conversion.
//!
//! Amounts travel on the wire in wei and are shown to the user in ether.
//! Formatting drops trailing fractional zeros but always keeps one fractional
//! digit, so `1.5 ETH` reads `"1.5"` and `2 ETH` reads `"2.0"`.

use alloy_primitives::U256;
use alloy_primitives::utils::{format_units, parse_ether};

use super::DashboardError;

/// Number of decimals between wei and ether.
pub const ETHER_DECIMALS: u8 = 18;

/// Balance shown before the first successful query.
pub const INITIAL_BALANCE: &str = "0";

/// Formats a wei amount as a human readable ether string.
#[must_use]
pub fn format_ether(wei: U256) -> String {
    match format_units(wei, ETHER_DECIMALS) {
        Ok(full) => trim_fraction(&full),
        // 18 is always a valid unit; fall back to the raw wei value otherwise.
        Err(_) => wei.to_string(),
    }
}

/// Parses a user-entered ether amount into wei.
///
/// # Errors
///
/// Returns [`DashboardError::InvalidAmount`] when the input is empty, signed,
/// not a decimal number, has no digits at all (a lone `.`), or has more than
/// 18 fractional digits.
pub fn parse_fund_amount(input: &str) -> Result<U256, DashboardError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DashboardError::invalid_amount(input, "amount is empty"));
    }
    if trimmed.starts_with(['-', '+']) {
        return Err(DashboardError::invalid_amount(
            input,
            "amount must be an unsigned decimal",
        ));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(DashboardError::invalid_amount(input, "not a decimal number"));
    }
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return Err(DashboardError::invalid_amount(input, "missing value"));
    }
    if let Some((_, fraction)) = trimmed.split_once('.')
        && fraction.len() > usize::from(ETHER_DECIMALS)
    {
        return Err(DashboardError::invalid_amount(
            input,
            "more than 18 fractional digits",
        ));
    }

    parse_ether(trimmed).map_err(|e| DashboardError::invalid_amount(input, e.to_string()))
}

fn trim_fraction(full: &str) -> String {
    match full.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => format!("{full}.0"),
    }
}

// ============================================================================
// Tests
// ============================================================================
