//! # Catalog Commands
//!
//! Admin panel commands: read the price table and edit it in place.
//!
//! Every edit is infallible. Unknown product or paper ids are ignored (the
//! core logs a warning); an unknown discount threshold adds a new tier.
//! Each command returns the catalog as it stands after the edit.

use printquote_core::{DiscountTier, Extras, Paper, PriceCatalog, Product};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::state::CatalogState;

/// A discount tier as shown in the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierView {
    pub quantity_threshold: i64,
    pub factor: Decimal,
    /// Whole-percent discount, e.g. 40 for a 0.6 factor
    pub discount_percent: Decimal,
}

impl From<DiscountTier> for TierView {
    fn from(tier: DiscountTier) -> Self {
        TierView {
            quantity_threshold: tier.quantity_threshold,
            factor: tier.factor,
            discount_percent: tier.discount_percent(),
        }
    }
}

/// The full price table for the admin panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub papers: Vec<Paper>,
    /// Ascending threshold order
    pub discount_tiers: Vec<TierView>,
    pub extras: Extras,
}

impl From<&PriceCatalog> for CatalogView {
    fn from(catalog: &PriceCatalog) -> Self {
        CatalogView {
            products: catalog.list_products().cloned().collect(),
            papers: catalog.list_papers().cloned().collect(),
            discount_tiers: catalog
                .list_discount_tiers()
                .into_iter()
                .map(TierView::from)
                .collect(),
            extras: catalog.extras(),
        }
    }
}

impl CatalogView {
    /// Renders the price table as plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::from("Products (price per 100 units)\n");
        for p in &self.products {
            let sized = if p.price_by_size { "  [by size]" } else { "" };
            out.push_str(&format!(
                "  {:<16} {:<20} {:>10}{}\n",
                p.id, p.display_name, p.base_price, sized
            ));
        }

        out.push_str("Papers (multiplier)\n");
        for p in &self.papers {
            out.push_str(&format!("  {:<16} {:<20} {:>10}\n", p.id, p.display_name, p.multiplier));
        }

        out.push_str("Quantity discounts\n");
        for t in &self.discount_tiers {
            out.push_str(&format!(
                "  {:>8} units   x{:<8} {}% discount\n",
                t.quantity_threshold, t.factor, t.discount_percent
            ));
        }

        out.push_str(&format!(
            "Margin {}%, tax {}%\n",
            self.extras.margin_percent.normalize(),
            self.extras.tax_percent.normalize()
        ));
        out
    }
}

/// Gets the current price table.
pub fn get_catalog(catalog: &CatalogState) -> CatalogView {
    debug!("get_catalog command");
    catalog.with_catalog(|c| CatalogView::from(c))
}

/// Sets a product's base price (per 100 units).
pub fn update_product_base_price(
    catalog: &CatalogState,
    product_id: &str,
    value: Decimal,
) -> CatalogView {
    catalog.with_catalog_mut(|c| {
        if c.update_product_base_price(product_id, value) {
            info!(product_id, %value, "Product base price changed");
        }
        CatalogView::from(&*c)
    })
}

/// Sets a paper's multiplier.
pub fn update_paper_multiplier(
    catalog: &CatalogState,
    paper_id: &str,
    value: Decimal,
) -> CatalogView {
    catalog.with_catalog_mut(|c| {
        if c.update_paper_multiplier(paper_id, value) {
            info!(paper_id, %value, "Paper multiplier changed");
        }
        CatalogView::from(&*c)
    })
}

/// Sets the factor of a quantity tier, creating the tier if needed.
pub fn update_discount_factor(
    catalog: &CatalogState,
    threshold: i64,
    value: Decimal,
) -> CatalogView {
    catalog.with_catalog_mut(|c| {
        c.update_discount_factor(threshold, value);
        info!(threshold, %value, "Discount factor changed");
        CatalogView::from(&*c)
    })
}

/// Sets margin and/or tax percentages.
pub fn update_extras(
    catalog: &CatalogState,
    margin_percent: Option<Decimal>,
    tax_percent: Option<Decimal>,
) -> CatalogView {
    catalog.with_catalog_mut(|c| {
        c.update_extras(margin_percent, tax_percent);
        info!(?margin_percent, ?tax_percent, "Extras changed");
        CatalogView::from(&*c)
    })
}
