//! # Validation Module
//!
//! Selection checks that run before a quote is calculated.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Quote form (presentation)                                    │
//! │  ├── Text → number coercion                                            │
//! │  └── Required-field prompts                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Product and paper selected                                        │
//! │  └── Quantity positive                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog lookup (calculator)                                  │
//! │  └── Ids resolve, else NotFound                                        │
//! │                                                                         │
//! │  Catalog VALUES are never validated: admins may store any number.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::SelectionInput;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that a picker field has a value.
///
/// ## Example
/// ```rust
/// use printquote_core::validation::validate_required_id;
///
/// assert!(validate_required_id("product", "flyer").is_ok());
/// assert!(validate_required_id("product", "  ").is_err());
/// ```
pub fn validate_required_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - `0` is an empty form field → `Required`
/// - Negative → `MustBePositive`
/// - Anything positive is accepted, including values below the smallest
///   discount tier and values that are not multiples of 100
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    if qty < 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a complete selection.
///
/// Fields are checked in form order: product, paper, quantity.
pub fn validate_selection(selection: &SelectionInput) -> ValidationResult<()> {
    validate_required_id("product", &selection.product_id)?;
    validate_required_id("paper", &selection.paper_id)?;
    validate_quantity(selection.quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
