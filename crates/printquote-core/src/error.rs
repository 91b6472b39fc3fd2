//! # Error Types
//!
//! Domain-specific error types for printquote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  printquote-core errors (this file)                                    │
//! │  ├── CoreError        - Lookup and calculation failures                │
//! │  └── ValidationError  - Incomplete or malformed selections             │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Quote form             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, step name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Admin edits on the catalog never produce an error

use thiserror::Error;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse classification of a [`CoreError`].
///
/// The presentation layer only needs to know which prompt to show, not
/// which lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced product or paper id is not in the catalog.
    NotFound,
    /// The selection is incomplete or the quantity is not positive.
    InvalidInput,
    /// A pipeline step left the representable decimal range.
    Overflow,
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by catalog lookups and quote calculation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Paper id is not in the catalog.
    #[error("Paper not found: {0}")]
    PaperNotFound(String),

    /// Decimal arithmetic overflowed.
    ///
    /// ## When This Occurs
    /// Only with extreme admin values (e.g. a base price near the decimal
    /// maximum combined with a large quantity). The catalog accepts such
    /// values, so the calculator reports the failing step instead of
    /// panicking.
    #[error("Arithmetic overflow while computing {step}")]
    Overflow { step: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ProductNotFound(_) | CoreError::PaperNotFound(_) => ErrorKind::NotFound,
            CoreError::Overflow { .. } => ErrorKind::Overflow,
            CoreError::Validation(_) => ErrorKind::InvalidInput,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Selection validation errors.
///
/// Raised before any catalog lookup or arithmetic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
