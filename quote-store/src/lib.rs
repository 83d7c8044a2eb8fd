//! File-backed implementation of the contact store.
//!
//! The engine persists exactly one record: the contact captured by the
//! access gate. It lives in a single JSON document under a versioned key,
//! mirroring the key-value store the quoting front-end uses in the browser.
//! A document that cannot be parsed, or that carries a different key, reads
//! as "nothing stored": the gate must fall back to locked, never crash.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use quote_core::{CONTACT_KEY, ContactRecord, ContactStore, StoreError};

/// On-disk shape: the versioned key wraps the record so an incompatible
/// future layout can be detected before deserializing fields.
#[derive(Debug, Serialize, Deserialize)]
struct StoredContact {
    key: String,
    #[serde(flatten)]
    record: ContactRecord,
}

/// A [`ContactStore`] holding one JSON document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileContactStore {
    path: PathBuf,
}

impl FileContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactStore for FileContactStore {
    fn load(&self) -> Result<Option<ContactRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };

        let stored: StoredContact = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "stored contact unparseable, treating as absent");
                return Ok(None);
            }
        };

        if stored.key != CONTACT_KEY {
            warn!(
                path = %self.path.display(),
                key = %stored.key,
                "stored contact has a foreign key, treating as absent"
            );
            return Ok(None);
        }

        Ok(Some(stored.record))
    }

    fn save(&self, record: &ContactRecord) -> Result<(), StoreError> {
        let stored = StoredContact {
            key: CONTACT_KEY.to_string(),
            record: record.clone(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        // Write-then-rename so a crash mid-write cannot leave a torn record.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(())
    }
}
