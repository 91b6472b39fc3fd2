//! # Catalog State
//!
//! Owns the session's price table.
//!
//! ## Thread Safety
//! The catalog is wrapped in `Arc<RwLock<T>>`:
//! 1. A quote reads product, paper, tiers and extras under ONE read guard,
//!    so an admin edit can never land halfway through a calculation
//! 2. Admin edits take the write guard and are visible to the next quote
//!
//! ## Why RwLock (and not Mutex like a cart)?
//! Quotes vastly outnumber price edits, and quotes never write.
//!
//! ## Poisoning
//! Every edit replaces a single field, so a panicking writer cannot leave the
//! table half-updated. A poisoned lock is therefore recovered, not propagated.

use std::sync::{Arc, PoisonError, RwLock};

use printquote_core::PriceCatalog;

/// Session-managed price table.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<RwLock<PriceCatalog>>,
}

impl CatalogState {
    /// Wraps a catalog for the session.
    pub fn new(catalog: PriceCatalog) -> Self {
        CatalogState {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Executes a function with read access to the catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let quote = catalog_state.with_catalog(|c| calculate(c, &selection))?;
    /// ```
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PriceCatalog) -> R,
    {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PriceCatalog) -> R,
    {
        let mut catalog = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut catalog)
    }

    /// Returns an owned copy of the current catalog.
    pub fn snapshot(&self) -> PriceCatalog {
        self.with_catalog(PriceCatalog::clone)
    }
}
