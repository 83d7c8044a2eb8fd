use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact details captured once by the access gate before any quoting is
/// permitted.
///
/// Never mutated after creation. `captured_at` defaults on deserialization so
/// records persisted by older builds (name and phone only) still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    /// Normalized digits with an optional `+62`/`62`/`0` prefix.
    pub phone: String,
    #[serde(default = "Utc::now")]
    pub captured_at: DateTime<Utc>,
}
