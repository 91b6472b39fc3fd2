//! # State Module
//!
//! Session state for PrintQuote.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      CatalogState        │        │       ConfigState        │      │
//! │  │                          │        │                          │      │
//! │  │  Arc<RwLock<             │        │  currency code/symbol    │      │
//! │  │    PriceCatalog>>        │        │  catalog seed path       │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: one read guard per quote, write guard per edit        │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;

pub use catalog::CatalogState;
pub use config::{ConfigState, ENV_CATALOG_PATH, ENV_CURRENCY_CODE, ENV_CURRENCY_SYMBOL};
