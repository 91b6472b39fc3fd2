//! # printquote-core: Pure Business Logic for PrintQuote
//!
//! This crate computes print-shop quotes from an editable price table. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PrintQuote Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (quote form, admin panel)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Session layer (apps/cli)                           │   │
//! │  │    calculate_quote, update_* commands, CatalogState             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ printquote-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │calculator │  │ validation│  │   │
//! │  │   │  Product  │  │  Price-   │  │ calculate │  │ selection │  │   │
//! │  │   │  Quote    │  │  Catalog  │  │ discount  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Paper, DiscountTier, Quote, etc.)
//! - [`catalog`] - The editable price table
//! - [`calculator`] - The quote pipeline
//! - [`money`] - Display rounding and formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Selection validation
//!
//! ## Open Question
//! The per-unit price is `with_margin / quantity` and therefore EXCLUDES tax,
//! while the total includes it. This matches the shop's existing quotes and is
//! kept as-is pending confirmation from the business owner.
//!
//! ## Example Usage
//!
//! ```rust
//! use printquote_core::{calculate, PriceCatalog, SelectionInput};
//! use rust_decimal_macros::dec;
//!
//! let mut catalog = PriceCatalog::default();
//! catalog.update_extras(None, Some(dec!(0)));
//!
//! let quote = calculate(&catalog, &SelectionInput::new("flyer", "offset90", 50)).unwrap();
//! // Below the smallest tier: no discount, 50 units = half the base price.
//! assert_eq!(quote.base_price, dec!(50));
//! assert_eq!(quote.total, dec!(55));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::calculate;
pub use catalog::{CatalogSeed, PriceCatalog};
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use types::*;
