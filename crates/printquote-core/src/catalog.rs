//! # Price Catalog
//!
//! The editable price table: products, papers, discount tiers and extras.
//!
//! ## Read / Write Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         PriceCatalog                                    │
//! │                                                                         │
//! │  Quote form ──► get_product / get_paper ──► calculator (read only)     │
//! │                 discount_tiers / extras                                 │
//! │                                                                         │
//! │  Admin panel ─► update_product_base_price ─┐                           │
//! │                 update_paper_multiplier    ├──► in-place, infallible   │
//! │                 update_discount_factor     │                           │
//! │                 update_extras ─────────────┘                           │
//! │                                                                         │
//! │  Stored values are NOT range checked. Zero or negative prices are kept │
//! │  exactly as entered and flow into the next quote unchanged.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! A catalog (de)serializes as a [`CatalogSeed`]: plain lists of products,
//! papers and tiers plus the extras record. This is the format of the JSON
//! file a session can be seeded from.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::types::{DiscountTier, Extras, Paper, Product};

// =============================================================================
// Price Catalog
// =============================================================================

/// In-memory price table for one session.
///
/// ## Invariants
/// - Products and papers are unique by id and listed in insertion order
/// - Discount tiers are unique by threshold; stored in insertion order and
///   listed in ascending threshold order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CatalogSeed", into = "CatalogSeed")]
pub struct PriceCatalog {
    products: IndexMap<String, Product>,
    papers: IndexMap<String, Paper>,
    discount_tiers: Vec<DiscountTier>,
    extras: Extras,
}

impl PriceCatalog {
    /// Creates a catalog with no products, papers or tiers and zero extras.
    pub fn empty() -> Self {
        PriceCatalog {
            products: IndexMap::new(),
            papers: IndexMap::new(),
            discount_tiers: Vec::new(),
            extras: Extras::new(Decimal::ZERO, Decimal::ZERO),
        }
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Adds a product, replacing any product with the same id in place.
    pub fn insert_product(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id.clone(), product)
    }

    /// Adds a paper, replacing any paper with the same id in place.
    pub fn insert_paper(&mut self, paper: Paper) -> Option<Paper> {
        self.papers.insert(paper.id.clone(), paper)
    }

    /// Adds a tier, replacing the factor of an existing tier with the same
    /// threshold.
    pub fn insert_discount_tier(&mut self, tier: DiscountTier) -> Option<DiscountTier> {
        match self
            .discount_tiers
            .iter_mut()
            .find(|t| t.quantity_threshold == tier.quantity_threshold)
        {
            Some(existing) => Some(std::mem::replace(existing, tier)),
            None => {
                self.discount_tiers.push(tier);
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    /// Looks up a product by id.
    pub fn get_product(&self, id: &str) -> CoreResult<&Product> {
        self.products
            .get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Looks up a paper by id.
    pub fn get_paper(&self, id: &str) -> CoreResult<&Paper> {
        self.papers
            .get(id)
            .ok_or_else(|| CoreError::PaperNotFound(id.to_string()))
    }

    /// Products in insertion order.
    pub fn list_products(&self) -> impl ExactSizeIterator<Item = &Product> + '_ {
        self.products.values()
    }

    /// Papers in insertion order.
    pub fn list_papers(&self) -> impl ExactSizeIterator<Item = &Paper> + '_ {
        self.papers.values()
    }

    /// Discount tiers in ascending threshold order.
    pub fn list_discount_tiers(&self) -> Vec<DiscountTier> {
        let mut tiers = self.discount_tiers.clone();
        tiers.sort_by_key(|t| t.quantity_threshold);
        tiers
    }

    /// Discount tiers in insertion order, as stored.
    pub fn discount_tiers(&self) -> &[DiscountTier] {
        &self.discount_tiers
    }

    /// Current margin and tax.
    #[inline]
    pub fn extras(&self) -> Extras {
        self.extras
    }

    // -------------------------------------------------------------------------
    // Admin Edits
    // -------------------------------------------------------------------------

    /// Replaces a product's base price.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub fn update_product_base_price(&mut self, id: &str, value: Decimal) -> bool {
        match self.products.get_mut(id) {
            Some(product) => {
                debug!(
                    product_id = id,
                    old = %product.base_price,
                    new = %value,
                    "Base price updated"
                );
                product.base_price = value;
                true
            }
            None => {
                warn!(product_id = id, "Ignoring base price update for unknown product");
                false
            }
        }
    }

    /// Replaces a paper's multiplier.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub fn update_paper_multiplier(&mut self, id: &str, value: Decimal) -> bool {
        match self.papers.get_mut(id) {
            Some(paper) => {
                debug!(
                    paper_id = id,
                    old = %paper.multiplier,
                    new = %value,
                    "Paper multiplier updated"
                );
                paper.multiplier = value;
                true
            }
            None => {
                warn!(paper_id = id, "Ignoring multiplier update for unknown paper");
                false
            }
        }
    }

    /// Sets the factor for a threshold, adding the tier if it does not exist.
    pub fn update_discount_factor(&mut self, threshold: i64, value: Decimal) {
        let previous = self.insert_discount_tier(DiscountTier::new(threshold, value));
        debug!(
            threshold,
            old = ?previous.map(|t| t.factor),
            new = %value,
            "Discount factor updated"
        );
    }

    /// Replaces margin and/or tax. `None` leaves a field unchanged.
    pub fn update_extras(&mut self, margin_percent: Option<Decimal>, tax_percent: Option<Decimal>) {
        if let Some(margin) = margin_percent {
            self.extras.margin_percent = margin;
        }
        if let Some(tax) = tax_percent {
            self.extras.tax_percent = tax;
        }
        debug!(
            margin = %self.extras.margin_percent,
            tax = %self.extras.tax_percent,
            "Extras updated"
        );
    }
}

impl Default for PriceCatalog {
    /// The shipped price table.
    ///
    /// ## Default Values
    /// - Products (per 100): Business Card 50, Flyer 100, Poster 200
    /// - Papers: Offset 90g ×1, Couché 150g ×1.5, Couché 300g ×2
    /// - Tiers: 100 → 1, 250 → 0.8, 500 → 0.7, 1000 → 0.6, 1500 → 0.55, 2000 → 0.5
    /// - Margin 10%, tax 23%
    fn default() -> Self {
        let mut catalog = PriceCatalog::empty();

        catalog.insert_product(Product::new("business_card", "Business Card", Decimal::from(50)));
        let flyer = Product::new("flyer", "Flyer", Decimal::from(100))
            .priced_by_size();
        let poster = Product::new("poster", "Poster", Decimal::from(200))
            .priced_by_size();
        catalog.insert_product(flyer);
        catalog.insert_product(poster);

        catalog.insert_paper(Paper::new("offset90", "Offset 90g", Decimal::ONE));
        catalog.insert_paper(Paper::new("couche150", "Couché 150g", Decimal::new(15, 1)));
        catalog.insert_paper(Paper::new("couche300", "Couché 300g", Decimal::TWO));

        for (threshold, factor) in [
            (100, Decimal::ONE),
            (250, Decimal::new(8, 1)),
            (500, Decimal::new(7, 1)),
            (1000, Decimal::new(6, 1)),
            (1500, Decimal::new(55, 2)),
            (2000, Decimal::new(5, 1)),
        ] {
            catalog.insert_discount_tier(DiscountTier::new(threshold, factor));
        }

        catalog.extras = Extras::new(Decimal::TEN, Decimal::from(23));
        catalog
    }
}

// =============================================================================
// Catalog Seed
// =============================================================================

/// Serialized form of a [`PriceCatalog`].
///
/// ```json
/// {
///   "products": [{ "id": "flyer", "display_name": "Flyer", "base_price": 100 }],
///   "papers": [{ "id": "offset90", "display_name": "Offset 90g", "multiplier": 1 }],
///   "discount_tiers": [{ "quantity_threshold": 1000, "factor": 0.6 }],
///   "extras": { "margin_percent": 10, "tax_percent": 23 }
/// }
/// ```
///
/// Duplicate ids or thresholds in a seed collapse to the last entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub papers: Vec<Paper>,
    #[serde(default)]
    pub discount_tiers: Vec<DiscountTier>,
    pub extras: Extras,
}

impl From<CatalogSeed> for PriceCatalog {
    fn from(seed: CatalogSeed) -> Self {
        let mut catalog = PriceCatalog::empty();
        for product in seed.products {
            catalog.insert_product(product);
        }
        for paper in seed.papers {
            catalog.insert_paper(paper);
        }
        for tier in seed.discount_tiers {
            catalog.insert_discount_tier(tier);
        }
        catalog.extras = seed.extras;
        catalog
    }
}

impl From<PriceCatalog> for CatalogSeed {
    fn from(catalog: PriceCatalog) -> Self {
        CatalogSeed {
            products: catalog.products.into_values().collect(),
            papers: catalog.papers.into_values().collect(),
            discount_tiers: catalog.discount_tiers,
            extras: catalog.extras,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
