//! # hearth-core: Pure Business Logic for Hearth Budget
//!
//! This crate is the **heart** of Hearth Budget. It contains the card
//! domain model as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Hearth Budget Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (card forms, lists)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hearth-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │   Card    │  │   Money   │  │ CoreError │  │   rules   │  │   │
//! │  │   │ CardType  │  │           │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Storage layer (separate repository)                │   │
//! │  │           persistence, auditing, wallet resolution              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Card, CardType, EntityMeta)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use hearth_core::types::{Card, CardType};
//!
//! let mut card = Card::new();
//! card.name = "Gold".to_string();
//! card.number = "1234567890123456".to_string();
//! card.flag = "Visa".to_string();
//! card.owner = "Maria Souza".to_string();
//! card.card_type = Some(CardType::Credit);
//!
//! // Credit cards need no wallet; this passes
//! assert!(card.validate().is_ok());
//!
//! // Masked for display contexts
//! assert_eq!(card.secure_number(), "12**************3456");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use hearth_core::Card` instead of
// `use hearth_core::types::Card`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of the card's text fields (name, number, flag, owner)
///
/// ## Why 45?
/// Matches the column width the storage schema reserves for these fields,
/// so validation rejects the value before the database ever sees it.
pub const CARD_FIELD_MAX_LEN: usize = 45;

/// Smallest valid statement expiration day
pub const MIN_EXPIRATION_DAY: u32 = 1;

/// Largest valid statement expiration day
///
/// Months shorter than 31 days are the storage/UI layer's problem; the
/// domain only rules out values no month can have.
pub const MAX_EXPIRATION_DAY: u32 = 31;
