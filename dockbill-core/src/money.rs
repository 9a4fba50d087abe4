//! Minor-unit money handling.
//!
//! All arithmetic in dockbill is done on `i64` cents. Decimal strings
//! only exist at the parse/format boundary, so there is no float drift
//! in totals.

use anyhow::{Context, Result, bail};
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a user-entered decimal rate (e.g. "0.30") into minor units.
///
/// Rounds half-away-from-zero at the cent boundary: "0.005" -> 1,
/// "0.004" -> 0. Negative and non-numeric input is rejected before
/// anything touches the network.
pub fn parse_rate(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let value =
        Decimal::from_str(trimmed).with_context(|| format!("not a valid rate: {trimmed:?}"))?;
    if value.is_sign_negative() && !value.is_zero() {
        bail!("rate must not be negative: {trimmed}");
    }
    let cents = (value * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    cents
        .to_i64()
        .with_context(|| format!("rate out of range: {trimmed}"))
}

/// Render minor units as a plain decimal string ("1234" -> "12.34").
pub fn format_minor(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_cents() {
        assert_eq!(parse_rate("0.30").unwrap(), 30);
        assert_eq!(parse_rate("12").unwrap(), 1200);
        assert_eq!(parse_rate(" 1.05 ").unwrap(), 105);
    }

    #[test]
    fn test_parse_rounds_half_away_from_zero() {
        assert_eq!(parse_rate("0.005").unwrap(), 1);
        assert_eq!(parse_rate("0.004").unwrap(), 0);
        assert_eq!(parse_rate("2.675").unwrap(), 268);
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(parse_rate("-0.30").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_rate("abc").is_err());
        assert!(parse_rate("").is_err());
        assert!(parse_rate("1.2.3").is_err());
    }

    #[test]
    fn test_format_minor() {
        assert_eq!(format_minor(1234), "12.34");
        assert_eq!(format_minor(5), "0.05");
        assert_eq!(format_minor(0), "0.00");
        assert_eq!(format_minor(-250), "-2.50");
    }
}
