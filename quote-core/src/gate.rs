//! Contact-capture access gate.
//!
//! Quoting is blocked until the visitor leaves a name and phone number. The
//! gate is a two-state machine, `Locked` then `Unlocked`, with no way back:
//! once a valid contact is captured and persisted, returning visitors start
//! unlocked and are never re-prompted.
//!
//! Storage is injected through the [`ContactStore`] capability so the engine
//! never touches a concrete storage API.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::warn;

use crate::models::ContactRecord;

/// Versioned storage key for the persisted contact record. Bump the suffix
/// if the record's wire shape ever changes incompatibly.
pub const CONTACT_KEY: &str = "quote.contact.v1";

/// Loose Indonesian mobile pattern: optional `+62`/`62`/`0` prefix, then
/// 9 to 12 digits. Matched after separator characters are stripped.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+62|62|0)[0-9]{9,12}$").expect("phone pattern is a valid regex")
});

/// Errors from the durable contact store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("contact storage i/o: {0}")]
    Io(String),

    #[error("contact serialization: {0}")]
    Serialization(String),
}

/// Field-level validation failures surfaced inline at the gate form.
#[derive(Debug, Error)]
pub enum ContactValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("'{0}' is not a valid Indonesian mobile number")]
    InvalidPhone(String),

    /// The record was valid but could not be persisted. The gate still
    /// unlocks for this session; the next session will re-prompt.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Durable single-record store for the captured contact.
///
/// `load` returns `Ok(None)` both when nothing was stored and when the
/// stored value is unparseable; an unreadable record must leave the gate
/// locked, never crash it.
pub trait ContactStore {
    fn load(&self) -> Result<Option<ContactRecord>, StoreError>;
    fn save(&self, record: &ContactRecord) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked(ContactRecord),
}

/// The access gate itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    state: GateState,
}

impl AccessGate {
    /// A gate with no capture yet.
    pub fn locked() -> Self {
        Self {
            state: GateState::Locked,
        }
    }

    /// Initializes the gate from durable storage: a previously captured
    /// contact unlocks immediately. Store failures degrade to `Locked`.
    pub fn restore<S: ContactStore>(store: &S) -> Self {
        match store.load() {
            Ok(Some(record)) => Self {
                state: GateState::Unlocked(record),
            },
            Ok(None) => Self::locked(),
            Err(error) => {
                warn!(%error, "contact store unreadable, gate stays locked");
                Self::locked()
            }
        }
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self.state, GateState::Unlocked(_))
    }

    pub fn contact(&self) -> Option<&ContactRecord> {
        match &self.state {
            GateState::Unlocked(record) => Some(record),
            GateState::Locked => None,
        }
    }

    /// Validates the submitted fields, persists the record and unlocks.
    ///
    /// Re-submission while already unlocked overwrites the in-memory record
    /// but in practice never happens: the surrounding flow hides the form
    /// once the gate is open.
    ///
    /// # Errors
    ///
    /// Field validation failures leave the gate locked. A store failure
    /// (`ContactValidationError::Store`) still unlocks for this session,
    /// since the contact itself was valid.
    pub fn submit<S: ContactStore>(
        &mut self,
        store: &S,
        name: &str,
        phone: &str,
    ) -> Result<ContactRecord, ContactValidationError> {
        let record = validate_contact(name, phone)?;

        let saved = store.save(&record);
        self.state = GateState::Unlocked(record.clone());
        saved?;
        Ok(record)
    }
}

/// Validates and normalizes the gate form fields into a [`ContactRecord`].
pub fn validate_contact(name: &str, phone: &str) -> Result<ContactRecord, ContactValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ContactValidationError::EmptyName);
    }

    let normalized: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();
    if !PHONE_PATTERN.is_match(&normalized) {
        return Err(ContactValidationError::InvalidPhone(phone.to_string()));
    }

    Ok(ContactRecord {
        name: name.to_string(),
        phone: normalized,
        captured_at: chrono::Utc::now(),
    })
}
