//! # Error Types
//!
//! Domain-specific error types for hearth-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hearth-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Field-level validation failures                │
//! │                                                                         │
//! │  Storage layer errors (separate repository)                            │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → Frontend                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each error variant maps to a symbolic message key; the frontend owns
//!    the message catalog and localizes from the key, not the Display text
//!
//! ## Message Keys
//! A failed rule must abort the commit AND tell the user which rule broke,
//! in their language. `Display` strings here are for developers and logs;
//! `message_key()` is the stable contract the message catalog is indexed by.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent cross-field business rule violations. They should
/// be caught before persisting an entity and translated to user-facing
/// messages via [`CoreError::message_key`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// A debit card has no funding wallet attached.
    ///
    /// ## When This Occurs
    /// - The user picks the DEBIT type on the card form but leaves the
    ///   wallet selector empty
    /// - An import produces a debit card whose wallet reference was lost
    ///
    /// Debit spending is always drawn from a wallet, so a debit card
    /// without one can never be charged against anything.
    #[error("debit cards must be linked to a wallet")]
    DebitCardWithoutWallet,

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// The symbolic key the frontend's message catalog is indexed by.
    pub fn message_key(&self) -> String {
        match self {
            CoreError::DebitCardWithoutWallet => "error.card.no-debit-wallet".to_string(),
            CoreError::Validation(err) => err.message_key(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
///
/// These errors occur when a single field doesn't meet its requirements.
/// Used for early validation before business rules run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// The symbolic catalog key for this violation, `card.{field}`.
    pub fn message_key(&self) -> String {
        let field = match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        };
        format!("card.{field}")
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
