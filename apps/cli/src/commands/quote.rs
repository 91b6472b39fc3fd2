//! # Quote Commands
//!
//! Computes a quote for the form and shapes it for display.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Quote form                                                             │
//! │    Product: Flyer   Paper: Offset 90g   Quantity: 1000                  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  calculate_quote(selection) ← THIS MODULE                               │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Base price:                                  €600.00          │    │
//! │  │  Margin (10%):                                 €60.00          │    │
//! │  │  Tax (23%):                                   €151.80          │    │
//! │  │  Total:                                       €811.80          │    │
//! │  │  Price per unit: €0.660                                        │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use printquote_core::{calculate, RoundedQuote, SelectionInput};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState};

/// One labelled amount on the quote card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub label: String,
    pub amount: String,
}

/// Quote response for the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteView {
    pub product_id: String,
    pub product_name: String,
    pub paper_id: String,
    pub paper_name: String,
    pub quantity: i64,

    /// Tier factor applied (1 = no discount)
    pub discount_factor: Decimal,
    pub margin_percent: Decimal,
    pub tax_percent: Decimal,
    pub currency_code: String,

    /// Display-rounded amounts
    pub amounts: RoundedQuote,

    /// Base price, margin, tax and total, formatted with the currency symbol
    pub lines: Vec<QuoteLine>,

    /// Per-unit price, formatted. Excludes tax.
    pub per_unit: String,

    pub quoted_at: DateTime<Utc>,
}

impl QuoteView {
    /// Renders the quote card as plain text.
    pub fn to_text(&self) -> String {
        let width = self.lines.iter().map(|l| l.label.len()).max().unwrap_or(0) + 1;
        let mut out = format!(
            "{} on {}, {} units\n",
            self.product_name, self.paper_name, self.quantity
        );
        for line in &self.lines {
            out.push_str(&format!(
                "  {:<width$} {:>12}\n",
                format!("{}:", line.label),
                line.amount,
                width = width
            ));
        }
        out.push_str(&format!("  Price per unit: {}\n", self.per_unit));
        out
    }
}

/// Calculates a quote against the session catalog.
///
/// The calculation and the name/extras lookups for the view all run under
/// one read guard, so a concurrent admin edit is either fully before or
/// fully after this quote.
///
/// ## Errors
/// - `VALIDATION_ERROR` "Please fill in all required fields" for an
///   incomplete selection
/// - `NOT_FOUND` for an unknown product or paper
pub fn calculate_quote(
    catalog: &CatalogState,
    config: &ConfigState,
    selection: SelectionInput,
) -> Result<QuoteView, ApiError> {
    debug!(
        product_id = %selection.product_id,
        paper_id = %selection.paper_id,
        quantity = selection.quantity,
        "calculate_quote command"
    );

    let view = catalog.with_catalog(|c| -> Result<QuoteView, ApiError> {
        let quote = calculate(c, &selection)?;
        let product = c.get_product(&selection.product_id)?;
        let paper = c.get_paper(&selection.paper_id)?;
        let extras = c.extras();
        let amounts = quote.rounded();

        let lines = vec![
            QuoteLine {
                label: "Base price".to_string(),
                amount: config.format_currency(amounts.base_price),
            },
            QuoteLine {
                label: format!("Margin ({}%)", extras.margin_percent.normalize()),
                amount: config.format_currency(amounts.margin),
            },
            QuoteLine {
                label: format!("Tax ({}%)", extras.tax_percent.normalize()),
                amount: config.format_currency(amounts.tax),
            },
            QuoteLine {
                label: "Total".to_string(),
                amount: config.format_currency(amounts.total),
            },
        ];

        Ok(QuoteView {
            product_id: product.id.clone(),
            product_name: product.display_name.clone(),
            paper_id: paper.id.clone(),
            paper_name: paper.display_name.clone(),
            quantity: quote.quantity,
            discount_factor: quote.discount_factor,
            margin_percent: extras.margin_percent,
            tax_percent: extras.tax_percent,
            currency_code: config.currency_code.clone(),
            amounts,
            lines,
            per_unit: config.format_currency(amounts.per_unit),
            quoted_at: Utc::now(),
        })
    })?;

    info!(
        product_id = %view.product_id,
        paper_id = %view.paper_id,
        quantity = view.quantity,
        total = %view.amounts.total,
        "Quote issued"
    );
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, FILL_REQUIRED_FIELDS};
    use rust_decimal_macros::dec;

    #[test]
    fn test_flyer_quote_view() {
        let catalog = CatalogState::default();
        let config = ConfigState::default();

        let view = calculate_quote(
            &catalog,
            &config,
            SelectionInput::new("flyer", "offset90", 1000),
        )
        .unwrap();

        assert_eq!(view.product_name, "Flyer");
        assert_eq!(view.paper_name, "Offset 90g");
        assert_eq!(view.discount_factor, dec!(0.6));
        assert_eq!(
            view.lines,
            vec![
                QuoteLine {
                    label: "Base price".into(),
                    amount: "€600.00".into(),
                },
                QuoteLine {
                    label: "Margin (10%)".into(),
                    amount: "€60.00".into(),
                },
                QuoteLine {
                    label: "Tax (23%)".into(),
                    amount: "€151.80".into(),
                },
                QuoteLine {
                    label: "Total".into(),
                    amount: "€811.80".into(),
                },
            ]
        );
        assert_eq!(view.per_unit, "€0.660");
    }

    #[test]
    fn test_incomplete_form_prompts_for_required_fields() {
        let catalog = CatalogState::default();
        let config = ConfigState::default();

        let err = calculate_quote(&catalog, &config, SelectionInput::new("flyer", "", 100))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, FILL_REQUIRED_FIELDS);
    }

    #[test]
    fn test_unknown_product_is_not_found() {
        let catalog = CatalogState::default();
        let config = ConfigState::default();

        let err = calculate_quote(&catalog, &config, SelectionInput::new("banner", "offset90", 100))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_labels_follow_edited_extras() {
        let catalog = CatalogState::default();
        catalog.with_catalog_mut(|c| c.update_extras(Some(dec!(12.5)), Some(dec!(0))));

        let view = calculate_quote(
            &catalog,
            &ConfigState::default(),
            SelectionInput::new("poster", "couche300", 50),
        )
        .unwrap();

        assert_eq!(view.lines[1].label, "Margin (12.5%)");
        assert_eq!(view.lines[2].label, "Tax (0%)");
        // 200 × 2 × 0.5 = 200, +12.5% = 225, no tax.
        assert_eq!(view.lines[3].amount, "€225.00");
        assert_eq!(view.per_unit, "€4.500");
    }

    #[test]
    fn test_to_text() {
        let view = calculate_quote(
            &CatalogState::default(),
            &ConfigState::default(),
            SelectionInput::new("flyer", "offset90", 1000),
        )
        .unwrap();

        let text = view.to_text();
        assert!(text.starts_with("Flyer on Offset 90g, 1000 units\n"));
        assert!(text.contains("Total:"));
        assert!(text.contains("€811.80"));
        assert!(text.ends_with("Price per unit: €0.660\n"));
    }
}
