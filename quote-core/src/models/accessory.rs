use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five accessory slots of a complete-package item.
///
/// Rail slots are width-constrained (a track only spans so far); quantity
/// slots are not physically limited by the opening width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessorySlot {
    /// Primary curtain rail, priced per meter of width.
    Rail,
    /// Tieback tassel set, priced per set, one set per unit.
    Tassel,
    /// Curtain hook, priced per piece, ten per meter of width.
    Hook,
    /// Vitrase sheer fabric, priced per meter of consumption.
    SheerFabric,
    /// Rail for the sheer layer, priced per meter of width.
    SheerRail,
}

impl AccessorySlot {
    pub const ALL: [AccessorySlot; 5] = [
        Self::Rail,
        Self::Tassel,
        Self::Hook,
        Self::SheerFabric,
        Self::SheerRail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rail => "rail",
            Self::Tassel => "tassel",
            Self::Hook => "hook",
            Self::SheerFabric => "sheer_fabric",
            Self::SheerRail => "sheer_rail",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rail" => Some(Self::Rail),
            "tassel" => Some(Self::Tassel),
            "hook" => Some(Self::Hook),
            "sheer_fabric" => Some(Self::SheerFabric),
            "sheer_rail" => Some(Self::SheerRail),
            _ => None,
        }
    }

    /// Display name used on order-message component lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rail => "Rel",
            Self::Tassel => "Tali",
            Self::Hook => "Kait",
            Self::SheerFabric => "Vitrase",
            Self::SheerRail => "Rel Vitrase",
        }
    }

    /// Rail-type slots carry a maximum supported width; quantity-type slots
    /// offer their full catalog at any width.
    pub fn is_width_constrained(&self) -> bool {
        matches!(self, Self::Rail | Self::SheerRail)
    }
}

/// One selectable variant inside an accessory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryVariant {
    pub id: String,
    pub name: String,
    /// Price in whole Rupiah, per meter / piece / set depending on the slot.
    pub price: Decimal,
    pub description: Option<String>,
    /// Maximum supported width in centimeters. `None` means unconstrained;
    /// only rail-type slots ever carry a value.
    pub max_width: Option<Decimal>,
}

/// Per-slot accessory choices on a window item.
///
/// The selection is kept even while the item is in fabric-only mode; the
/// line-item pricer is the single authority that ignores it there, so a stale
/// selection can never leak into a fabric-only total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorySelection {
    pub rail: Option<AccessoryVariant>,
    pub tassel: Option<AccessoryVariant>,
    pub hook: Option<AccessoryVariant>,
    pub sheer_fabric: Option<AccessoryVariant>,
    pub sheer_rail: Option<AccessoryVariant>,
}

impl AccessorySelection {
    pub fn get(&self, slot: AccessorySlot) -> Option<&AccessoryVariant> {
        match slot {
            AccessorySlot::Rail => self.rail.as_ref(),
            AccessorySlot::Tassel => self.tassel.as_ref(),
            AccessorySlot::Hook => self.hook.as_ref(),
            AccessorySlot::SheerFabric => self.sheer_fabric.as_ref(),
            AccessorySlot::SheerRail => self.sheer_rail.as_ref(),
        }
    }

    pub fn set(&mut self, slot: AccessorySlot, variant: AccessoryVariant) {
        match slot {
            AccessorySlot::Rail => self.rail = Some(variant),
            AccessorySlot::Tassel => self.tassel = Some(variant),
            AccessorySlot::Hook => self.hook = Some(variant),
            AccessorySlot::SheerFabric => self.sheer_fabric = Some(variant),
            AccessorySlot::SheerRail => self.sheer_rail = Some(variant),
        }
    }

    pub fn clear(&mut self, slot: AccessorySlot) {
        match slot {
            AccessorySlot::Rail => self.rail = None,
            AccessorySlot::Tassel => self.tassel = None,
            AccessorySlot::Hook => self.hook = None,
            AccessorySlot::SheerFabric => self.sheer_fabric = None,
            AccessorySlot::SheerRail => self.sheer_rail = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        AccessorySlot::ALL.iter().all(|s| self.get(*s).is_none())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn variant(id: &str) -> AccessoryVariant {
        AccessoryVariant {
            id: id.to_string(),
            name: id.to_string(),
            price: dec!(10000),
            description: None,
            max_width: None,
        }
    }

    #[test]
    fn slot_codes_round_trip() {
        for slot in AccessorySlot::ALL {
            assert_eq!(AccessorySlot::parse(slot.as_str()), Some(slot));
        }
    }

    #[test]
    fn only_rail_slots_are_width_constrained() {
        assert!(AccessorySlot::Rail.is_width_constrained());
        assert!(AccessorySlot::SheerRail.is_width_constrained());
        assert!(!AccessorySlot::Tassel.is_width_constrained());
        assert!(!AccessorySlot::Hook.is_width_constrained());
        assert!(!AccessorySlot::SheerFabric.is_width_constrained());
    }

    #[test]
    fn selection_set_get_clear() {
        let mut selection = AccessorySelection::default();
        assert!(selection.is_empty());

        selection.set(AccessorySlot::Hook, variant("h1"));
        assert_eq!(
            selection.get(AccessorySlot::Hook).map(|v| v.id.as_str()),
            Some("h1")
        );
        assert!(!selection.is_empty());

        selection.clear(AccessorySlot::Hook);
        assert!(selection.is_empty());
    }
}
