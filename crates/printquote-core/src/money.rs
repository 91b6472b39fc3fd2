//! # Money Module
//!
//! Display rounding and percentage helpers for quote amounts.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Price tables are full of base-10 fractions:                            │
//! │    multiplier 1.5, tier factor 0.55, tax 23%                            │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Every step of the quote pipeline is exact base-10 arithmetic.        │
//! │    Rounding happens ONCE, when a quote is prepared for display.         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown for currency amounts (base price, margin, tax, total).
pub const CURRENCY_DECIMALS: u32 = 2;

/// Decimal places shown for the per-unit price.
pub const PER_UNIT_DECIMALS: u32 = 3;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds a value for display, half away from zero.
///
/// ## Example
/// ```rust
/// use printquote_core::money::round_for_display;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_for_display(dec!(1.005), 2), dec!(1.01));
/// assert_eq!(round_for_display(dec!(-1.005), 2), dec!(-1.01));
/// assert_eq!(round_for_display(dec!(0.66), 3), dec!(0.660));
/// ```
#[inline]
pub fn round_for_display(value: Decimal, decimals: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    // Pad so that 0.66 renders as "0.660" at 3 places.
    rounded.rescale(decimals);
    rounded
}

/// Rounds a currency amount to [`CURRENCY_DECIMALS`].
#[inline]
pub fn round_currency(value: Decimal) -> Decimal {
    round_for_display(value, CURRENCY_DECIMALS)
}

/// Rounds a per-unit price to [`PER_UNIT_DECIMALS`].
#[inline]
pub fn round_per_unit(value: Decimal) -> Decimal {
    round_for_display(value, PER_UNIT_DECIMALS)
}

/// Converts a percentage (e.g. `23`) into a fraction (`0.23`).
///
/// Returns `None` on overflow.
#[inline]
pub fn percent_to_fraction(percent: Decimal) -> Option<Decimal> {
    percent.checked_div(HUNDRED)
}

/// Formats an amount with a currency symbol.
///
/// ## Example
/// ```rust
/// use printquote_core::money::format_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount("€", dec!(811.80)), "€811.80");
/// assert_eq!(format_amount("€", dec!(-5.5)), "-€5.5");
/// ```
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}", sign, symbol, amount.abs())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_pads_and_rounds() {
        assert_eq!(round_currency(dec!(151.8)).to_string(), "151.80");
        assert_eq!(round_currency(dec!(811.8)).to_string(), "811.80");
        assert_eq!(round_currency(dec!(0.125)).to_string(), "0.13");
        assert_eq!(round_currency(dec!(600)).to_string(), "600.00");
    }

    #[test]
    fn test_round_per_unit() {
        assert_eq!(round_per_unit(dec!(0.66)).to_string(), "0.660");
        assert_eq!(round_per_unit(dec!(0.0005)).to_string(), "0.001");
        assert_eq!(round_per_unit(dec!(0.12345)).to_string(), "0.123");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_currency(dec!(2.345)), dec!(2.35));
        assert_eq!(round_currency(dec!(-2.345)), dec!(-2.35));
    }

    #[test]
    fn test_percent_to_fraction() {
        assert_eq!(percent_to_fraction(dec!(23)), Some(dec!(0.23)));
        assert_eq!(percent_to_fraction(dec!(0)), Some(dec!(0)));
        assert_eq!(percent_to_fraction(dec!(-10)), Some(dec!(-0.1)));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("$", dec!(10.99)), "$10.99");
        assert_eq!(format_amount("€", dec!(0.00)), "€0.00");
        assert_eq!(format_amount("€", dec!(-0.00)), "€0.00");
    }
}
