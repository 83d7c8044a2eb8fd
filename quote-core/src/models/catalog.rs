use serde::{Deserialize, Serialize};

use crate::models::{AccessorySlot, AccessoryVariant, FabricSelection};

/// Snapshot of the catalog data supplied by the external catalog source:
/// the fabric list plus one variant list per accessory slot.
///
/// The engine does not validate catalog data beyond treating a missing
/// `max_width` as unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub fabrics: Vec<FabricSelection>,
    pub rails: Vec<AccessoryVariant>,
    pub tassels: Vec<AccessoryVariant>,
    pub hooks: Vec<AccessoryVariant>,
    pub sheer_fabrics: Vec<AccessoryVariant>,
    pub sheer_rails: Vec<AccessoryVariant>,
}

impl Catalog {
    pub fn variants_for(&self, slot: AccessorySlot) -> &[AccessoryVariant] {
        match slot {
            AccessorySlot::Rail => &self.rails,
            AccessorySlot::Tassel => &self.tassels,
            AccessorySlot::Hook => &self.hooks,
            AccessorySlot::SheerFabric => &self.sheer_fabrics,
            AccessorySlot::SheerRail => &self.sheer_rails,
        }
    }

    pub fn push_variant(&mut self, slot: AccessorySlot, variant: AccessoryVariant) {
        match slot {
            AccessorySlot::Rail => self.rails.push(variant),
            AccessorySlot::Tassel => self.tassels.push(variant),
            AccessorySlot::Hook => self.hooks.push(variant),
            AccessorySlot::SheerFabric => self.sheer_fabrics.push(variant),
            AccessorySlot::SheerRail => self.sheer_rails.push(variant),
        }
    }

    pub fn fabric_by_id(&self, id: &str) -> Option<&FabricSelection> {
        self.fabrics.iter().find(|f| f.id == id)
    }
}
