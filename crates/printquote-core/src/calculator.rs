//! # Quote Calculator
//!
//! Turns a [`SelectionInput`] into a [`Quote`] using a read-only
//! [`PriceCatalog`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate selection ──► look up product + paper                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. base_for_100 = product.base_price × paper.multiplier                │
//! │  2. discount     = factor of highest tier with threshold ≤ quantity     │
//! │                    (1 when none qualifies)                              │
//! │  3. raw_price    = base_for_100 × (quantity / 100) × discount           │
//! │  4. with_margin  = raw_price × (1 + margin% / 100)                      │
//! │  5. tax          = with_margin × (tax% / 100)                           │
//! │  6. total        = with_margin + tax                                    │
//! │  7. per_unit     = with_margin / quantity        ◄── tax NOT included   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The steps run in exactly this order on unrounded decimals. Rounding is
//! left to [`Quote::rounded`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::PriceCatalog;
use crate::error::{CoreError, CoreResult};
use crate::money::percent_to_fraction;
use crate::types::{DiscountTier, Quote, SelectionInput};
use crate::validation::validate_selection;

/// Quantity that a product's base price refers to.
pub const PRICE_UNIT_QUANTITY: i64 = 100;

/// Calculates a quote.
///
/// ## Errors
/// - [`CoreError::Validation`] when product or paper is unselected or the
///   quantity is not positive
/// - [`CoreError::ProductNotFound`] / [`CoreError::PaperNotFound`] when an id
///   is not in the catalog
/// - [`CoreError::Overflow`] when catalog values are too large to multiply
///
/// ## Example
/// ```rust
/// use printquote_core::{calculate, PriceCatalog, SelectionInput};
/// use rust_decimal_macros::dec;
///
/// let catalog = PriceCatalog::default();
/// let quote = calculate(&catalog, &SelectionInput::new("flyer", "offset90", 1000)).unwrap();
///
/// assert_eq!(quote.base_price, dec!(600));
/// assert_eq!(quote.margin, dec!(60));
/// assert_eq!(quote.rounded().total.to_string(), "811.80");
/// assert_eq!(quote.rounded().per_unit.to_string(), "0.660");
/// ```
pub fn calculate(catalog: &PriceCatalog, selection: &SelectionInput) -> CoreResult<Quote> {
    validate_selection(selection)?;

    let product = catalog.get_product(&selection.product_id)?;
    let paper = catalog.get_paper(&selection.paper_id)?;
    let extras = catalog.extras();
    let quantity = Decimal::from(selection.quantity);

    let base_for_100 = product
        .base_price
        .checked_mul(paper.multiplier)
        .ok_or(CoreError::Overflow { step: "base price" })?;

    let discount = resolve_discount(catalog.discount_tiers(), selection.quantity);

    let units_of_100 = quantity
        .checked_div(Decimal::from(PRICE_UNIT_QUANTITY))
        .ok_or(CoreError::Overflow { step: "quantity" })?;
    let raw_price = base_for_100
        .checked_mul(units_of_100)
        .and_then(|p| p.checked_mul(discount))
        .ok_or(CoreError::Overflow { step: "discounted price" })?;

    let with_margin = percent_to_fraction(extras.margin_percent)
        .and_then(|m| Decimal::ONE.checked_add(m))
        .and_then(|m| raw_price.checked_mul(m))
        .ok_or(CoreError::Overflow { step: "margin" })?;

    let tax = percent_to_fraction(extras.tax_percent)
        .and_then(|t| with_margin.checked_mul(t))
        .ok_or(CoreError::Overflow { step: "tax" })?;

    let total = with_margin
        .checked_add(tax)
        .ok_or(CoreError::Overflow { step: "total" })?;

    let per_unit = with_margin
        .checked_div(quantity)
        .ok_or(CoreError::Overflow { step: "per-unit price" })?;

    let margin = with_margin
        .checked_sub(raw_price)
        .ok_or(CoreError::Overflow { step: "margin" })?;

    debug!(
        product_id = %product.id,
        paper_id = %paper.id,
        quantity = selection.quantity,
        %discount,
        %total,
        "Quote calculated"
    );

    Ok(Quote {
        base_price: raw_price,
        margin,
        tax,
        total,
        per_unit,
        discount_factor: discount,
        quantity: selection.quantity,
    })
}

/// Resolves the discount factor for a quantity.
///
/// Tiers are sorted by ascending threshold and scanned in that order; every
/// tier whose threshold is `<= quantity` replaces the previous choice, so the
/// highest qualifying threshold wins. Returns `1` when no tier qualifies.
///
/// ## Example
/// ```rust
/// use printquote_core::calculator::resolve_discount;
/// use printquote_core::DiscountTier;
/// use rust_decimal_macros::dec;
///
/// let tiers = [
///     DiscountTier::new(500, dec!(0.7)),
///     DiscountTier::new(100, dec!(1)),
///     DiscountTier::new(250, dec!(0.8)),
/// ];
/// assert_eq!(resolve_discount(&tiers, 300), dec!(0.8));
/// assert_eq!(resolve_discount(&tiers, 500), dec!(0.7));
/// assert_eq!(resolve_discount(&tiers, 99), dec!(1));
/// ```
pub fn resolve_discount(tiers: &[DiscountTier], quantity: i64) -> Decimal {
    let mut sorted = tiers.to_vec();
    sorted.sort_by_key(|t| t.quantity_threshold);

    let mut discount = Decimal::ONE;
    for tier in &sorted {
        if quantity >= tier.quantity_threshold {
            discount = tier.factor;
        }
    }
    discount
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};
    use crate::types::{Paper, Product};
    use rust_decimal_macros::dec;

    fn quote(catalog: &PriceCatalog, product: &str, paper: &str, quantity: i64) -> Quote {
        calculate(catalog, &SelectionInput::new(product, paper, quantity)).unwrap()
    }

    #[test]
    fn test_flyer_offset_1000() {
        let catalog = PriceCatalog::default();
        let q = quote(&catalog, "flyer", "offset90", 1000);

        assert_eq!(q.discount_factor, dec!(0.6));
        assert_eq!(q.base_price, dec!(600));
        assert_eq!(q.with_margin(), dec!(660));
        assert_eq!(q.margin, dec!(60));
        assert_eq!(q.tax, dec!(151.80));
        assert_eq!(q.total, dec!(811.80));
        assert_eq!(q.per_unit, dec!(0.66));

        let rounded = q.rounded();
        assert_eq!(rounded.base_price.to_string(), "600.00");
        assert_eq!(rounded.margin.to_string(), "60.00");
        assert_eq!(rounded.tax.to_string(), "151.80");
        assert_eq!(rounded.total.to_string(), "811.80");
        assert_eq!(rounded.per_unit.to_string(), "0.660");
    }

    #[test]
    fn test_below_smallest_tier_is_undiscounted() {
        let catalog = PriceCatalog::default();
        let q = quote(&catalog, "flyer", "offset90", 50);

        assert_eq!(q.discount_factor, dec!(1));
        assert_eq!(q.base_price, dec!(50));
        assert_eq!(q.total, dec!(50) * dec!(1.1) * dec!(1.23));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let catalog = PriceCatalog::default();
        assert_eq!(quote(&catalog, "flyer", "offset90", 249).discount_factor, dec!(1));
        assert_eq!(quote(&catalog, "flyer", "offset90", 250).discount_factor, dec!(0.8));
        assert_eq!(quote(&catalog, "flyer", "offset90", 1499).discount_factor, dec!(0.6));
        assert_eq!(quote(&catalog, "flyer", "offset90", 1500).discount_factor, dec!(0.55));
        assert_eq!(quote(&catalog, "flyer", "offset90", 100_000).discount_factor, dec!(0.5));
    }

    #[test]
    fn test_unsorted_tiers_resolve_by_threshold() {
        let mut catalog = PriceCatalog::empty();
        catalog.insert_product(Product::new("flyer", "Flyer", dec!(100)));
        catalog.insert_paper(Paper::new("offset90", "Offset 90g", dec!(1)));
        catalog.update_discount_factor(2000, dec!(0.5));
        catalog.update_discount_factor(100, dec!(1));
        catalog.update_discount_factor(1000, dec!(0.6));
        catalog.update_discount_factor(250, dec!(0.8));

        assert_eq!(quote(&catalog, "flyer", "offset90", 1200).discount_factor, dec!(0.6));
        assert_eq!(quote(&catalog, "flyer", "offset90", 300).discount_factor, dec!(0.8));
        assert_eq!(quote(&catalog, "flyer", "offset90", 2000).discount_factor, dec!(0.5));
    }

    #[test]
    fn test_non_monotonic_factors_still_use_highest_threshold() {
        // A larger threshold wins even when its factor is worse for the customer.
        let tiers = [DiscountTier::new(100, dec!(0.5)), DiscountTier::new(1000, dec!(0.9))];
        assert_eq!(resolve_discount(&tiers, 1000), dec!(0.9));
        assert_eq!(resolve_discount(&[], 1000), dec!(1));
    }

    #[test]
    fn test_per_unit_excludes_tax() {
        let catalog = PriceCatalog::default();
        for (product, paper, qty) in [
            ("business_card", "couche300", 333),
            ("poster", "couche150", 1750),
            ("flyer", "offset90", 7),
        ] {
            let q = quote(&catalog, product, paper, qty);
            assert_eq!(q.per_unit, q.with_margin() / Decimal::from(qty));
            assert_ne!(q.per_unit, q.total / Decimal::from(qty));
        }
    }

    #[test]
    fn test_total_is_with_margin_plus_tax() {
        let catalog = PriceCatalog::default();
        let tax_percent = catalog.extras().tax_percent;
        for qty in [1, 99, 250, 777, 2500] {
            let q = quote(&catalog, "poster", "couche150", qty);
            let with_margin = q.with_margin();
            assert_eq!(q.total, with_margin + with_margin * (tax_percent / dec!(100)));
        }
    }

    #[test]
    fn test_rounding_is_display_only() {
        let mut catalog = PriceCatalog::default();
        catalog.update_extras(Some(dec!(0.5)), Some(dec!(0.5)));

        // 100 per 100 units → 1.00 for a single unit.
        let q = quote(&catalog, "flyer", "offset90", 1);
        assert_eq!(q.base_price, dec!(1));
        assert_eq!(q.margin, dec!(0.005));
        assert_eq!(q.tax, dec!(0.005025));
        assert_eq!(q.total, dec!(1.010025));

        let rounded = q.rounded();
        assert_eq!(rounded.margin, dec!(0.01));
        assert_eq!(rounded.tax, dec!(0.01));
        assert_eq!(rounded.total, dec!(1.01));
        assert_eq!(rounded.per_unit, dec!(1.005));
        // Rounding twice gives the same display values.
        assert_eq!(q.rounded(), rounded);
    }

    #[test]
    fn test_catalog_edits_are_visible_immediately() {
        let mut catalog = PriceCatalog::default();
        let before = quote(&catalog, "flyer", "couche150", 500);

        catalog.update_product_base_price("flyer", dec!(200));
        let after = quote(&catalog, "flyer", "couche150", 500);

        assert_eq!(after.base_price, before.base_price * dec!(2));
    }

    #[test]
    fn test_negative_and_zero_values_are_not_fixed() {
        let mut catalog = PriceCatalog::default();
        catalog.update_product_base_price("flyer", dec!(-100));
        catalog.update_extras(Some(dec!(0)), Some(dec!(0)));

        let q = quote(&catalog, "flyer", "offset90", 1000);
        assert_eq!(q.base_price, dec!(-600));
        assert_eq!(q.margin, dec!(0));
        assert_eq!(q.total, dec!(-600));

        catalog.update_paper_multiplier("offset90", dec!(0));
        assert_eq!(quote(&catalog, "flyer", "offset90", 1000).total, dec!(0));
    }

    #[test]
    fn test_missing_fields_are_invalid_input() {
        let catalog = PriceCatalog::default();

        let err = calculate(&catalog, &SelectionInput::new("flyer", "offset90", 0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = calculate(&catalog, &SelectionInput::new("flyer", "offset90", -10)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));

        let err = calculate(&catalog, &SelectionInput::new("", "offset90", 100)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let catalog = PriceCatalog::default();

        let err = calculate(&catalog, &SelectionInput::new("banner", "offset90", 100)).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));

        let err = calculate(&catalog, &SelectionInput::new("flyer", "vinyl", 100)).unwrap_err();
        assert!(matches!(err, CoreError::PaperNotFound(_)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut catalog = PriceCatalog::default();
        catalog.update_product_base_price("poster", Decimal::MAX);
        catalog.update_paper_multiplier("couche300", Decimal::MAX);

        let err =
            calculate(&catalog, &SelectionInput::new("poster", "couche300", 100)).unwrap_err();
        assert!(matches!(err, CoreError::Overflow { step: "base price" }));
    }
}
