//! # Commands Module
//!
//! Session commands invoked by the presentation layer (here: the CLI).
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Commands                                  │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │  quote.rs                    │  │  catalog.rs                  │    │
//! │  │  • calculate_quote           │  │  • get_catalog               │    │
//! │  │                              │  │  • update_product_base_price │    │
//! │  │  Result<QuoteView, ApiError> │  │  • update_paper_multiplier   │    │
//! │  │                              │  │  • update_discount_factor    │    │
//! │  │                              │  │  • update_extras             │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod quote;
