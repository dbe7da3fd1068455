//! # Validation Module
//!
//! Field-level validation rules for the card registry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (card form)                                         │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - field rules, all violations collected          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Card::validate - cross-field business rule                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Database (NOT NULL, foreign keys)                            │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use hearth_core::types::Card;
//! use hearth_core::validation::validate_card;
//!
//! let card = Card::new();
//!
//! // Collect every field violation before the commit
//! let violations = validate_card(&card).unwrap_err();
//! assert!(!violations.is_empty());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Card;
use crate::{CARD_FIELD_MAX_LEN, MAX_EXPIRATION_DAY, MIN_EXPIRATION_DAY};

// =============================================================================
// String Validators
// =============================================================================

/// Shared rule for the card's required text fields.
///
/// ## Rules
/// - Must not be blank (whitespace-only counts as blank)
/// - Must be at most 45 characters, the column width the schema reserves
fn validate_required_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > CARD_FIELD_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: CARD_FIELD_MAX_LEN,
        });
    }

    Ok(())
}

/// Validates the card's display name.
///
/// ## Example
/// ```rust
/// use hearth_core::validation::validate_card_name;
///
/// assert!(validate_card_name("Gold").is_ok());
/// assert!(validate_card_name("").is_err());
/// ```
pub fn validate_card_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name)
}

/// Validates the printed card number.
///
/// The format is deliberately unconstrained beyond non-blank; banks and
/// prepaid issuers disagree on digit counts and separators.
pub fn validate_card_number(number: &str) -> ValidationResult<()> {
    validate_required_text("number", number)
}

/// Validates the card network/brand name.
pub fn validate_card_flag(flag: &str) -> ValidationResult<()> {
    validate_required_text("flag", flag)
}

/// Validates the cardholder name.
pub fn validate_card_owner(owner: &str) -> ValidationResult<()> {
    validate_required_text("owner", owner)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a statement expiration day.
///
/// ## Rules
/// - Must be a day some month has: 1 to 31
///
/// ## Example
/// ```rust
/// use hearth_core::validation::validate_expiration_day;
///
/// assert!(validate_expiration_day(15).is_ok());
/// assert!(validate_expiration_day(0).is_err());
/// assert!(validate_expiration_day(32).is_err());
/// ```
pub fn validate_expiration_day(day: u32) -> ValidationResult<()> {
    if !(MIN_EXPIRATION_DAY..=MAX_EXPIRATION_DAY).contains(&day) {
        return Err(ValidationError::OutOfRange {
            field: "expiration_day".to_string(),
            min: MIN_EXPIRATION_DAY as i64,
            max: MAX_EXPIRATION_DAY as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Reference Validators
// =============================================================================

/// Validates a wallet reference id.
///
/// ## Rules
/// - Must not be empty
/// - Must be a valid UUID (the storage layer's key format)
///
/// ## Example
/// ```rust
/// use hearth_core::validation::validate_wallet_id;
///
/// assert!(validate_wallet_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_wallet_id("not-a-uuid").is_err());
/// ```
pub fn validate_wallet_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "wallet".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "wallet".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Entity-Wide Pass
// =============================================================================

/// Runs every field rule on a card and collects all violations.
///
/// Returns the full list rather than stopping at the first failure, so the
/// form can mark every offending field in one round trip. The cross-field
/// debit/wallet rule is NOT checked here; that is [`Card::validate`]'s job.
pub fn validate_card(card: &Card) -> Result<(), Vec<ValidationError>> {
    let mut violations = Vec::new();

    let checks = [
        validate_card_name(&card.name),
        validate_card_number(&card.number),
        validate_card_flag(&card.flag),
        validate_card_owner(&card.owner),
    ];
    violations.extend(checks.into_iter().filter_map(Result::err));

    // card_type has a NOT NULL column; catch it before the database does
    if card.card_type.is_none() {
        violations.push(ValidationError::Required {
            field: "card_type".to_string(),
        });
    }

    if let Some(day) = card.expiration_day {
        if let Err(err) = validate_expiration_day(day) {
            violations.push(err);
        }
    }

    if let Some(wallet_id) = &card.wallet_id {
        if let Err(err) = validate_wallet_id(wallet_id) {
            violations.push(err);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardType;

    fn valid_card() -> Card {
        let mut card = Card::new();
        card.name = "Gold".to_string();
        card.number = "1234567890123456".to_string();
        card.flag = "Visa".to_string();
        card.owner = "Maria Souza".to_string();
        card.card_type = Some(CardType::Credit);
        card
    }

    #[test]
    fn test_validate_required_text_fields() {
        assert!(validate_card_name("Gold").is_ok());
        assert!(validate_card_name("").is_err());
        assert!(validate_card_name("   ").is_err());

        assert!(validate_card_number("1234567890123456").is_ok());
        assert!(validate_card_number("").is_err());

        assert!(validate_card_flag("Visa").is_ok());
        assert!(validate_card_owner("Maria Souza").is_ok());
    }

    #[test]
    fn test_validate_rejects_overlong_fields() {
        let long = "A".repeat(46);
        let err = validate_card_name(&long).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 45, .. }));

        assert!(validate_card_name(&"A".repeat(45)).is_ok());
    }

    #[test]
    fn test_validate_expiration_day() {
        assert!(validate_expiration_day(1).is_ok());
        assert!(validate_expiration_day(15).is_ok());
        assert!(validate_expiration_day(31).is_ok());

        assert!(validate_expiration_day(0).is_err());
        assert!(validate_expiration_day(32).is_err());
    }

    #[test]
    fn test_validate_wallet_id() {
        assert!(validate_wallet_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_wallet_id("").is_err());
        assert!(validate_wallet_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_card_accepts_valid_card() {
        assert!(validate_card(&valid_card()).is_ok());
    }

    #[test]
    fn test_validate_card_collects_all_violations() {
        // Fresh card: four blank text fields plus the unset type
        let violations = validate_card(&Card::new()).unwrap_err();
        assert_eq!(violations.len(), 5);

        let fields: Vec<String> = violations.iter().map(|v| v.message_key()).collect();
        assert!(fields.contains(&"card.name".to_string()));
        assert!(fields.contains(&"card.number".to_string()));
        assert!(fields.contains(&"card.flag".to_string()));
        assert!(fields.contains(&"card.owner".to_string()));
        assert!(fields.contains(&"card.card_type".to_string()));
    }

    #[test]
    fn test_validate_card_checks_optional_fields_when_set() {
        let mut card = valid_card();
        card.expiration_day = Some(32);
        card.wallet_id = Some("not-a-uuid".to_string());

        let violations = validate_card(&card).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
