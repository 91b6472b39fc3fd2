//! # Domain Types
//!
//! Core domain types used throughout PrintQuote.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Paper       │   │  DiscountTier   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  threshold      │       │
//! │  │  display_name   │   │  display_name   │   │  factor         │       │
//! │  │  base_price     │   │  multiplier     │   │  1000 → 0.6     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Extras      │   │ SelectionInput  │   │     Quote       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  margin %       │   │  product_id     │   │  base_price     │       │
//! │  │  tax %          │   │  paper_id       │   │  margin, tax    │       │
//! │  └─────────────────┘   │  quantity       │   │  total,per_unit │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unit of 100
//! Base prices are quoted per 100 printed units. A quantity of 250 flyers
//! costs `2.5 ×` the base price before paper, discount, margin and tax.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{round_currency, round_per_unit};

// =============================================================================
// Product
// =============================================================================

/// A printable product (business card, flyer, poster...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stable identifier, e.g. `flyer`.
    pub id: String,

    /// Name shown in the product picker.
    pub display_name: String,

    /// Price per 100 units at paper multiplier 1.
    #[ts(type = "string")]
    pub base_price: Decimal,

    /// Whether the product is normally priced by size (flyers, posters).
    /// Informational only; the calculator does not read it.
    #[serde(default)]
    pub price_by_size: bool,
}

impl Product {
    /// Creates a product.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        base_price: Decimal,
    ) -> Self {
        Product {
            id: id.into(),
            display_name: display_name.into(),
            base_price,
            price_by_size: false,
        }
    }

    /// Marks the product as priced by size.
    pub fn priced_by_size(mut self) -> Self {
        self.price_by_size = true;
        self
    }
}

// =============================================================================
// Paper
// =============================================================================

/// A paper stock with its price multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Paper {
    pub id: String,
    pub display_name: String,
    /// Applied to the product base price; 1 is the reference stock.
    #[ts(type = "string")]
    pub multiplier: Decimal,
}

impl Paper {
    /// Creates a paper.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        multiplier: Decimal,
    ) -> Self {
        Paper {
            id: id.into(),
            display_name: display_name.into(),
            multiplier,
        }
    }
}

// =============================================================================
// Discount Tier
// =============================================================================

/// A quantity threshold and the price factor that applies from it upwards.
///
/// A factor of `0.6` means the job costs 60% of the undiscounted price,
/// i.e. a 40% discount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountTier {
    /// Smallest quantity (inclusive) this tier applies to.
    pub quantity_threshold: i64,

    #[ts(type = "string")]
    pub factor: Decimal,
}

impl DiscountTier {
    /// Creates a tier.
    #[inline]
    pub const fn new(quantity_threshold: i64, factor: Decimal) -> Self {
        DiscountTier {
            quantity_threshold,
            factor,
        }
    }

    /// Discount as a whole percentage, for admin display.
    ///
    /// ## Example
    /// ```rust
    /// use printquote_core::DiscountTier;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(DiscountTier::new(1500, dec!(0.55)).discount_percent(), dec!(45));
    /// assert_eq!(DiscountTier::new(100, dec!(1)).discount_percent(), dec!(0));
    /// ```
    pub fn discount_percent(&self) -> Decimal {
        Decimal::ONE
            .saturating_sub(self.factor)
            .saturating_mul(Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

// =============================================================================
// Extras
// =============================================================================

/// Global adjustments applied to every quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Extras {
    /// Markup on top of the discounted price, in percent.
    #[ts(type = "string")]
    pub margin_percent: Decimal,

    /// Tax on top of price plus margin, in percent.
    #[ts(type = "string")]
    pub tax_percent: Decimal,
}

impl Extras {
    /// Creates an extras record.
    #[inline]
    pub const fn new(margin_percent: Decimal, tax_percent: Decimal) -> Self {
        Extras {
            margin_percent,
            tax_percent,
        }
    }
}

// =============================================================================
// Selection Input
// =============================================================================

/// What the quote form submits: one product, one paper, one quantity.
///
/// The form is responsible for turning text into numbers. An unselected
/// product or paper arrives as an empty string and an empty quantity as `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectionInput {
    pub product_id: String,
    pub paper_id: String,
    pub quantity: i64,
}

impl SelectionInput {
    /// Creates a selection.
    pub fn new(product_id: impl Into<String>, paper_id: impl Into<String>, quantity: i64) -> Self {
        SelectionInput {
            product_id: product_id.into(),
            paper_id: paper_id.into(),
            quantity,
        }
    }
}

// =============================================================================
// Quote
// =============================================================================

/// Result of a quote calculation, unrounded.
///
/// ## Fields
/// - `base_price`: discounted price before margin
/// - `margin`: markup amount
/// - `tax`: tax on price plus margin
/// - `total`: price plus margin plus tax
/// - `per_unit`: price plus margin divided by quantity (tax NOT included)
///
/// Call [`Quote::rounded`] to get display values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quote {
    #[ts(type = "string")]
    pub base_price: Decimal,
    #[ts(type = "string")]
    pub margin: Decimal,
    #[ts(type = "string")]
    pub tax: Decimal,
    #[ts(type = "string")]
    pub total: Decimal,
    #[ts(type = "string")]
    pub per_unit: Decimal,

    /// Tier factor that was applied (1 when no tier qualified).
    #[ts(type = "string")]
    pub discount_factor: Decimal,

    pub quantity: i64,
}

impl Quote {
    /// Price plus margin, before tax.
    #[inline]
    pub fn with_margin(&self) -> Decimal {
        self.base_price + self.margin
    }

    /// Rounds every field for display.
    ///
    /// Each field is rounded from its own unrounded value, so the rounded
    /// total is `round(total)`, not the sum of the rounded parts.
    pub fn rounded(&self) -> RoundedQuote {
        RoundedQuote {
            base_price: round_currency(self.base_price),
            margin: round_currency(self.margin),
            tax: round_currency(self.tax),
            total: round_currency(self.total),
            per_unit: round_per_unit(self.per_unit),
        }
    }
}

/// Display form of a [`Quote`]: 2 decimals for currency, 3 for per-unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundedQuote {
    #[ts(type = "string")]
    pub base_price: Decimal,
    #[ts(type = "string")]
    pub margin: Decimal,
    #[ts(type = "string")]
    pub tax: Decimal,
    #[ts(type = "string")]
    pub total: Decimal,
    #[ts(type = "string")]
    pub per_unit: Decimal,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_discount_percent() {
        assert_eq!(DiscountTier::new(250, dec!(0.8)).discount_percent(), dec!(20));
        assert_eq!(DiscountTier::new(2000, dec!(0.5)).discount_percent(), dec!(50));
        // Factors above 1 show up as a negative discount, not clamped.
        assert_eq!(DiscountTier::new(10, dec!(1.25)).discount_percent(), dec!(-25));
    }

    #[test]
    fn test_product_builder() {
        let flyer = Product::new("flyer", "Flyer", dec!(100)).priced_by_size();
        assert!(flyer.price_by_size);
        assert_eq!(flyer.base_price, dec!(100));

        let card = Product::new("business_card", "Business Card", dec!(50));
        assert!(!card.price_by_size);
    }

    #[test]
    fn test_product_deserializes_numbers_and_missing_flag() {
        let json = r#"{"id":"flyer","display_name":"Flyer","base_price":100.5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.base_price, dec!(100.5));
        assert!(!product.price_by_size);
    }

    #[test]
    fn test_rounded_quote_is_computed_per_field() {
        let quote = Quote {
            base_price: dec!(1.00),
            margin: dec!(0.005),
            tax: dec!(0.005025),
            total: dec!(1.010025),
            per_unit: dec!(1.005),
            discount_factor: dec!(1),
            quantity: 1,
        };
        let rounded = quote.rounded();
        assert_eq!(rounded.margin, dec!(0.01));
        assert_eq!(rounded.tax, dec!(0.01));
        assert_eq!(rounded.total, dec!(1.01));
        assert_ne!(rounded.total, rounded.base_price + rounded.margin + rounded.tax);
        assert_eq!(rounded.per_unit, dec!(1.005));

        // Unrounded values are untouched.
        assert_eq!(quote.margin, dec!(0.005));
        assert_eq!(quote.with_margin(), dec!(1.005));
    }
}
