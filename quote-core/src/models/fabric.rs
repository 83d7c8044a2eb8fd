use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A primary-fabric catalog entry.
///
/// Selected once per quote session and shared by every line item in that
/// session; there is no per-item fabric override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FabricSelection {
    pub id: String,
    pub name: String,
    /// Catalog category tag (e.g. "blackout", "sheer", "printed").
    pub category: String,
    /// Price in whole Rupiah per meter of fabric.
    pub price_per_meter: Decimal,
}
