use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AccessorySelection, CalculationMethod};

/// Input-validation failures raised when an item form is submitted.
///
/// These surface as inline form messages; they never unwind past the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("width must be positive, got {0}cm")]
    NonPositiveWidth(Decimal),

    #[error("height must be positive, got {0}cm")]
    NonPositiveHeight(Decimal),

    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// A panel count of zero would divide by zero in the kupu-kupu formula,
    /// so it is rejected here before any calculation runs.
    #[error("panel count must be at least 1")]
    ZeroPanelCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Window,
    Door,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Door => "door",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "window" => Some(Self::Window),
            "door" => Some(Self::Door),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Window => "Jendela",
            Self::Door => "Pintu",
        }
    }
}

/// Whether a line covers only the primary fabric or the full accessory set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageKind {
    FabricOnly,
    CompletePackage,
}

impl PackageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FabricOnly => "fabric_only",
            Self::CompletePackage => "complete_package",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fabric_only" => Some(Self::FabricOnly),
            "complete_package" => Some(Self::CompletePackage),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FabricOnly => "Kain Saja",
            Self::CompletePackage => "Paket Lengkap",
        }
    }
}

/// Form values for creating or editing a window item (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowItemDraft {
    pub item_kind: ItemKind,
    pub package_kind: PackageKind,
    pub width_cm: Decimal,
    pub height_cm: Decimal,
    /// Meaningful for kupu-kupu only; stored as 1 for the other methods.
    pub panel_count: u32,
    pub quantity: u32,
}

impl WindowItemDraft {
    /// Validates the form values against the session's method.
    ///
    /// The panel count is only checked for kupu-kupu; the other methods
    /// overwrite it with 1 when the item is created.
    pub fn validate(&self, method: CalculationMethod) -> Result<(), ValidationError> {
        if self.width_cm <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveWidth(self.width_cm));
        }
        if self.height_cm <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveHeight(self.height_cm));
        }
        if self.quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        if method.uses_panels() && self.panel_count == 0 {
            return Err(ValidationError::ZeroPanelCount);
        }
        Ok(())
    }
}

/// One billable window or door line in a quote session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowItem {
    pub id: u64,
    pub item_kind: ItemKind,
    pub package_kind: PackageKind,
    pub width_cm: Decimal,
    pub height_cm: Decimal,
    pub panel_count: u32,
    /// Multiplies every cost component of the line.
    pub quantity: u32,
    /// Kept across package-kind toggles; ignored by the pricer for
    /// fabric-only items.
    pub accessories: AccessorySelection,
}

impl WindowItem {
    /// Builds an item from a validated draft. Callers must have run
    /// [`WindowItemDraft::validate`] first; this only normalizes the panel
    /// count for single-panel methods.
    pub fn from_draft(id: u64, method: CalculationMethod, draft: WindowItemDraft) -> Self {
        let panel_count = if method.uses_panels() {
            draft.panel_count
        } else {
            1
        };
        Self {
            id,
            item_kind: draft.item_kind,
            package_kind: draft.package_kind,
            width_cm: draft.width_cm,
            height_cm: draft.height_cm,
            panel_count,
            quantity: draft.quantity,
            accessories: AccessorySelection::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn draft() -> WindowItemDraft {
        WindowItemDraft {
            item_kind: ItemKind::Window,
            package_kind: PackageKind::FabricOnly,
            width_cm: dec!(200),
            height_cm: dec!(250),
            panel_count: 2,
            quantity: 1,
        }
    }

    #[test]
    fn validate_accepts_well_formed_draft() {
        assert_eq!(draft().validate(CalculationMethod::ButterflyPleat), Ok(()));
    }

    #[test]
    fn validate_rejects_non_positive_width() {
        let mut d = draft();
        d.width_cm = dec!(0);
        assert_eq!(
            d.validate(CalculationMethod::Smokering),
            Err(ValidationError::NonPositiveWidth(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_non_positive_height() {
        let mut d = draft();
        d.height_cm = dec!(-10);
        assert_eq!(
            d.validate(CalculationMethod::Smokering),
            Err(ValidationError::NonPositiveHeight(dec!(-10)))
        );
    }

    #[test]
    fn validate_rejects_zero_quantity() {
        let mut d = draft();
        d.quantity = 0;
        assert_eq!(
            d.validate(CalculationMethod::Blind),
            Err(ValidationError::ZeroQuantity)
        );
    }

    #[test]
    fn validate_rejects_zero_panels_for_butterfly_only() {
        let mut d = draft();
        d.panel_count = 0;
        assert_eq!(
            d.validate(CalculationMethod::ButterflyPleat),
            Err(ValidationError::ZeroPanelCount)
        );
        // Smokering ignores the field entirely.
        assert_eq!(d.validate(CalculationMethod::Smokering), Ok(()));
    }

    #[test]
    fn from_draft_pins_panel_count_for_single_panel_methods() {
        let item = WindowItem::from_draft(1, CalculationMethod::Smokering, draft());
        assert_eq!(item.panel_count, 1);

        let item = WindowItem::from_draft(2, CalculationMethod::ButterflyPleat, draft());
        assert_eq!(item.panel_count, 2);
    }
}
