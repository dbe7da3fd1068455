//! # Domain Types
//!
//! Core domain types for the card registry of Hearth Budget.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Card       │   │    CardType     │   │   EntityMeta    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  meta           │   │  Credit         │   │  id (UUID)      │       │
//! │  │  name/number    │   │  Debit          │   │  created_at     │       │
//! │  │  flag/owner     │   └─────────────────┘   │  updated_at     │       │
//! │  │  card_type      │                         └─────────────────┘       │
//! │  │  wallet_id ─────┼──► Wallet (storage layer, by id only)            │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Entities don't inherit persistence machinery; they hold an [`EntityMeta`]
//! value. The id is assigned by the storage layer on first save and stays
//! `None` until then.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Entity Metadata
// =============================================================================

/// Identity and audit metadata shared by persistable entities.
///
/// ## Why Composition?
/// The storage layer owns id assignment and timestamp bumping. Keeping that
/// state in one value the entity *holds* (instead of a base "entity" type it
/// extends) keeps the domain types plain data.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntityMeta {
    /// Unique identifier (UUID v4). `None` until first persisted.
    pub id: Option<String>,

    /// When the entity was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the entity was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl EntityMeta {
    /// Fresh metadata for a not-yet-persisted entity.
    pub fn new() -> Self {
        let now = Utc::now();
        EntityMeta {
            id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the entity has been persisted (id assigned).
    #[inline]
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }
}

impl Default for EntityMeta {
    fn default() -> Self {
        EntityMeta::new()
    }
}

// =============================================================================
// Card Type
// =============================================================================

/// The kind of payment card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// Spending against a limit, settled by a monthly invoice.
    Credit,
    /// Spending drawn directly from a funding wallet.
    Debit,
}

// =============================================================================
// Card
// =============================================================================

/// A payment card registered by the user.
///
/// Cards tag expenses so spending can be grouped per instrument. A card is
/// built empty (only `active` is set), populated field by field from the
/// registration form, and must pass [`Card::validate`] before any commit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Card {
    /// Identity and audit metadata.
    pub meta: EntityMeta,

    /// User-chosen label, e.g. "Gold".
    pub name: String,

    /// Printed card number. Free-form; banks disagree on formats.
    pub number: String,

    /// Card network/brand, e.g. "Visa".
    pub flag: String,

    /// Cardholder name as printed.
    pub owner: String,

    /// Credit limit in cents. Only meaningful for credit cards.
    pub credit_limit_cents: Option<i64>,

    /// Day of month the statement expires.
    pub expiration_day: Option<u32>,

    /// Whether the card can still be picked when entering expenses.
    pub active: bool,

    /// Credit or debit. Unset until the form is filled in.
    pub card_type: Option<CardType>,

    /// Funding wallet reference, by id. Required for debit cards.
    /// The wallet itself is resolved by the storage layer.
    pub wallet_id: Option<String>,
}

impl Card {
    /// Creates an empty card. Only `active` starts set.
    pub fn new() -> Self {
        Card {
            meta: EntityMeta::new(),
            name: String::new(),
            number: String::new(),
            flag: String::new(),
            owner: String::new(),
            credit_limit_cents: None,
            expiration_day: None,
            active: true,
            card_type: None,
            wallet_id: None,
        }
    }

    /// Checks the cross-field business rule before a commit.
    ///
    /// ## The Rule
    /// A debit card spends straight from a wallet, so `card_type == Debit`
    /// requires `wallet_id` to be present. Credit cards may or may not be
    /// linked to a wallet.
    ///
    /// Field presence/format checks live in [`crate::validation`] and are
    /// expected to have passed before this is called.
    pub fn validate(&self) -> CoreResult<()> {
        if matches!(self.card_type, Some(CardType::Debit)) && self.wallet_id.is_none() {
            return Err(CoreError::DebitCardWithoutWallet);
        }

        Ok(())
    }

    /// A display name for list rows: `"{name} - {last digits} - {flag}"`.
    ///
    /// Numbers longer than 3 characters are shortened to their last 4;
    /// shorter ones are shown as-is.
    ///
    /// ## Example
    /// ```rust
    /// use hearth_core::types::Card;
    ///
    /// let mut card = Card::new();
    /// card.name = "Gold".to_string();
    /// card.number = "1234567890123456".to_string();
    /// card.flag = "Visa".to_string();
    ///
    /// assert_eq!(card.readable_name(), "Gold - 3456 - Visa");
    /// ```
    pub fn readable_name(&self) -> String {
        let len = self.number.chars().count();
        let fragment: String = if len > 3 {
            self.number.chars().skip(len - 4).collect()
        } else {
            self.number.clone()
        };

        format!("{} - {} - {}", self.name, fragment, self.flag)
    }

    /// The card number masked for display contexts.
    ///
    /// Keeps the first 2 and last 4 characters; everything in between is
    /// replaced by `len - 2` asterisks, so the output width tracks the
    /// input width. Numbers shorter than 8 characters (including an unset,
    /// empty number) pass through unmasked.
    ///
    /// ## Example
    /// ```rust
    /// use hearth_core::types::Card;
    ///
    /// let mut card = Card::new();
    /// card.number = "12345678".to_string();
    ///
    /// assert_eq!(card.secure_number(), "12******5678");
    /// ```
    pub fn secure_number(&self) -> String {
        let len = self.number.chars().count();
        if len < 8 {
            return self.number.clone();
        }

        let first: String = self.number.chars().take(2).collect();
        let last: String = self.number.chars().skip(len - 4).collect();

        format!("{}{}{}", first, "*".repeat(len - 2), last)
    }

    /// Whether this is a credit card. False while `card_type` is unset.
    #[inline]
    pub fn is_credit_card(&self) -> bool {
        matches!(self.card_type, Some(CardType::Credit))
    }

    /// Whether this is a debit card. False while `card_type` is unset.
    #[inline]
    pub fn is_debit_card(&self) -> bool {
        matches!(self.card_type, Some(CardType::Debit))
    }

    /// Returns the credit limit as a Money type.
    #[inline]
    pub fn credit_limit(&self) -> Option<Money> {
        self.credit_limit_cents.map(Money::from_cents)
    }
}

impl Default for Card {
    fn default() -> Self {
        Card::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> Card {
        let mut card = Card::new();
        card.name = "Gold".to_string();
        card.number = "1234567890123456".to_string();
        card.flag = "Visa".to_string();
        card.owner = "Maria Souza".to_string();
        card
    }

    #[test]
    fn test_new_card_starts_active_and_empty() {
        let card = Card::new();
        assert!(card.active);
        assert!(card.name.is_empty());
        assert!(card.number.is_empty());
        assert!(card.flag.is_empty());
        assert!(card.owner.is_empty());
        assert!(card.credit_limit_cents.is_none());
        assert!(card.expiration_day.is_none());
        assert!(card.card_type.is_none());
        assert!(card.wallet_id.is_none());
        assert!(!card.meta.is_saved());
    }

    #[test]
    fn test_validate_debit_without_wallet_fails() {
        let mut card = sample_card();
        card.card_type = Some(CardType::Debit);

        let err = card.validate().unwrap_err();
        assert!(matches!(err, CoreError::DebitCardWithoutWallet));
        assert_eq!(err.message_key(), "error.card.no-debit-wallet");
    }

    #[test]
    fn test_validate_debit_with_wallet_succeeds() {
        let mut card = sample_card();
        card.card_type = Some(CardType::Debit);
        card.wallet_id = Some("550e8400-e29b-41d4-a716-446655440000".to_string());

        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_validate_credit_ignores_wallet() {
        let mut card = sample_card();
        card.card_type = Some(CardType::Credit);
        assert!(card.validate().is_ok());

        card.wallet_id = Some("550e8400-e29b-41d4-a716-446655440000".to_string());
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_validate_unset_type_succeeds() {
        // Presence of card_type is the field validation layer's job
        let card = sample_card();
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_readable_name_long_number() {
        let mut card = sample_card();
        card.name = "Nubank".to_string();
        card.number = "5555444433332222".to_string();
        card.flag = "Mastercard".to_string();

        assert_eq!(card.readable_name(), "Nubank - 2222 - Mastercard");
    }

    #[test]
    fn test_readable_name_short_number() {
        let mut card = sample_card();
        card.number = "123".to_string();

        assert_eq!(card.readable_name(), "Gold - 123 - Visa");
    }

    #[test]
    fn test_readable_name_four_char_number() {
        let mut card = sample_card();
        card.number = "1234".to_string();

        assert_eq!(card.readable_name(), "Gold - 1234 - Visa");
    }

    #[test]
    fn test_readable_name_is_idempotent() {
        let card = sample_card();
        assert_eq!(card.readable_name(), card.readable_name());
    }

    #[test]
    fn test_secure_number_masks_middle() {
        let card = sample_card();
        // 16 chars: first 2, 14 asterisks, last 4
        assert_eq!(card.secure_number(), "12**************3456");

        let mut card = sample_card();
        card.number = "12345678".to_string();
        assert_eq!(card.secure_number(), "12******5678");
    }

    #[test]
    fn test_secure_number_short_passthrough() {
        let mut card = sample_card();
        card.number = "123".to_string();
        assert_eq!(card.secure_number(), "123");

        card.number = "1234567".to_string();
        assert_eq!(card.secure_number(), "1234567");

        // Unset number stays unset
        card.number = String::new();
        assert_eq!(card.secure_number(), "");
    }

    #[test]
    fn test_card_type_predicates_are_exclusive() {
        let mut card = sample_card();
        assert!(!card.is_credit_card());
        assert!(!card.is_debit_card());

        card.card_type = Some(CardType::Credit);
        assert!(card.is_credit_card());
        assert!(!card.is_debit_card());

        card.card_type = Some(CardType::Debit);
        assert!(!card.is_credit_card());
        assert!(card.is_debit_card());
    }

    #[test]
    fn test_credit_limit_accessor() {
        let mut card = sample_card();
        assert!(card.credit_limit().is_none());

        card.credit_limit_cents = Some(150000);
        assert_eq!(card.credit_limit(), Some(Money::from_cents(150000)));
    }

    #[test]
    fn test_entity_meta_is_saved() {
        let mut meta = EntityMeta::new();
        assert!(!meta.is_saved());

        meta.id = Some("550e8400-e29b-41d4-a716-446655440000".to_string());
        assert!(meta.is_saved());
    }

    #[test]
    fn test_card_type_serde_names() {
        assert_eq!(serde_json::to_string(&CardType::Credit).unwrap(), "\"credit\"");
        assert_eq!(
            serde_json::from_str::<CardType>("\"debit\"").unwrap(),
            CardType::Debit
        );
    }
}
