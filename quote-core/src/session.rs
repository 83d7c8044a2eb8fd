//! Quote session state and its transitions.
//!
//! The session is a plain value object; every operation is a pure
//! reducer-style transition that leaves `self` untouched and returns the next
//! session state. Nothing here knows about any UI framework, storage, or
//! messaging channel.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::aggregate::{QuoteSummary, aggregate};
use crate::calculations::consumption::ConsumptionError;
use crate::models::{
    AccessorySlot, AccessoryVariant, CalculationMethod, FabricSelection, PackageKind,
    ValidationError, WindowItem, WindowItemDraft,
};

/// Errors raised by session transitions. All are recoverable; the session
/// that produced them is unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("no item with id {0} in this quote")]
    ItemNotFound(u64),

    /// Defense in depth behind the eligibility filter: a rail variant whose
    /// maximum span is below the item width is rejected even if a caller
    /// bypassed the filter.
    #[error("'{variant_id}' supports at most {max_width}cm, item is {width_cm}cm wide")]
    VariantTooNarrow {
        variant_id: String,
        max_width: Decimal,
        width_cm: Decimal,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The aggregate root of one quoting interaction: the chosen method and
/// fabric plus the ordered item list.
///
/// Invariant: every item was entered under the session's current method.
/// [`QuoteSession::change_method`] maintains it destructively by discarding
/// all items; there is no per-item migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSession {
    method: CalculationMethod,
    fabric: FabricSelection,
    items: Vec<WindowItem>,
    next_item_id: u64,
}

impl QuoteSession {
    pub fn new(method: CalculationMethod, fabric: FabricSelection) -> Self {
        Self {
            method,
            fabric,
            items: Vec::new(),
            next_item_id: 1,
        }
    }

    pub fn method(&self) -> CalculationMethod {
        self.method
    }

    pub fn fabric(&self) -> &FabricSelection {
        &self.fabric
    }

    /// Items in insertion order. The order drives display and message
    /// numbering.
    pub fn items(&self) -> &[WindowItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn item_index(&self, id: u64) -> Result<usize, SessionError> {
        self.items
            .iter()
            .position(|i| i.id == id)
            .ok_or(SessionError::ItemNotFound(id))
    }

    /// Validates the draft and appends a new item.
    pub fn add_item(&self, draft: WindowItemDraft) -> Result<Self, SessionError> {
        draft.validate(self.method)?;

        let mut next = self.clone();
        let item = WindowItem::from_draft(next.next_item_id, next.method, draft);
        next.next_item_id += 1;
        next.items.push(item);
        Ok(next)
    }

    /// Replaces an item's form fields in place, keeping its id, position and
    /// accessory selection.
    pub fn edit_item(&self, id: u64, draft: WindowItemDraft) -> Result<Self, SessionError> {
        draft.validate(self.method)?;
        let index = self.item_index(id)?;

        let mut next = self.clone();
        let accessories = next.items[index].accessories.clone();
        let mut item = WindowItem::from_draft(id, next.method, draft);
        item.accessories = accessories;
        next.items[index] = item;
        Ok(next)
    }

    pub fn remove_item(&self, id: u64) -> Result<Self, SessionError> {
        let index = self.item_index(id)?;

        let mut next = self.clone();
        next.items.remove(index);
        Ok(next)
    }

    /// Selects an accessory variant for one slot of an item.
    ///
    /// Width-constrained slots re-check the variant's maximum span here even
    /// though the eligibility filter should have removed unfit variants from
    /// the offered list.
    pub fn select_accessory(
        &self,
        id: u64,
        slot: AccessorySlot,
        variant: AccessoryVariant,
    ) -> Result<Self, SessionError> {
        let index = self.item_index(id)?;

        if slot.is_width_constrained()
            && let Some(max_width) = variant.max_width
            && max_width < self.items[index].width_cm
        {
            return Err(SessionError::VariantTooNarrow {
                variant_id: variant.id,
                max_width,
                width_cm: self.items[index].width_cm,
            });
        }

        let mut next = self.clone();
        next.items[index].accessories.set(slot, variant);
        Ok(next)
    }

    pub fn clear_accessory(&self, id: u64, slot: AccessorySlot) -> Result<Self, SessionError> {
        let index = self.item_index(id)?;

        let mut next = self.clone();
        next.items[index].accessories.clear(slot);
        Ok(next)
    }

    /// Switches an item between fabric-only and complete-package.
    ///
    /// The accessory selection is left untouched either way; the pricer alone
    /// decides that fabric-only lines cost nothing beyond fabric.
    pub fn set_package_kind(&self, id: u64, kind: PackageKind) -> Result<Self, SessionError> {
        let index = self.item_index(id)?;

        let mut next = self.clone();
        next.items[index].package_kind = kind;
        Ok(next)
    }

    /// Switches the calculation method, discarding every entered item.
    ///
    /// Destructive by design; callers confirm with the user before invoking.
    pub fn change_method(&self, method: CalculationMethod) -> Self {
        let mut next = self.clone();
        next.method = method;
        next.items.clear();
        next
    }

    /// Prices the whole session.
    pub fn summary(&self) -> Result<QuoteSummary, ConsumptionError> {
        aggregate(self.method, &self.items, &self.fabric)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::ItemKind;

    fn fabric() -> FabricSelection {
        FabricSelection {
            id: "fab-1".to_string(),
            name: "Blackout Premium".to_string(),
            category: "blackout".to_string(),
            price_per_meter: dec!(100000),
        }
    }

    fn draft(width: Decimal) -> WindowItemDraft {
        WindowItemDraft {
            item_kind: ItemKind::Window,
            package_kind: PackageKind::CompletePackage,
            width_cm: width,
            height_cm: dec!(250),
            panel_count: 1,
            quantity: 1,
        }
    }

    fn rail(id: &str, max_width: Option<Decimal>) -> AccessoryVariant {
        AccessoryVariant {
            id: id.to_string(),
            name: id.to_string(),
            price: dec!(80000),
            description: None,
            max_width,
        }
    }

    #[test]
    fn add_item_assigns_sequential_ids() {
        let session = QuoteSession::new(CalculationMethod::Smokering, fabric());

        let session = session.add_item(draft(dec!(200))).unwrap();
        let session = session.add_item(draft(dec!(300))).unwrap();

        let ids: Vec<u64> = session.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn add_item_rejects_invalid_draft_without_mutating() {
        let session = QuoteSession::new(CalculationMethod::Smokering, fabric());

        let result = session.add_item(draft(dec!(0)));

        assert_eq!(
            result,
            Err(SessionError::Validation(ValidationError::NonPositiveWidth(
                dec!(0)
            )))
        );
        assert!(session.is_empty());
    }

    #[test]
    fn edit_item_keeps_id_position_and_accessories() {
        let session = QuoteSession::new(CalculationMethod::Smokering, fabric())
            .add_item(draft(dec!(200)))
            .unwrap()
            .add_item(draft(dec!(300)))
            .unwrap()
            .select_accessory(1, AccessorySlot::Rail, rail("rel", None))
            .unwrap();

        let edited = session.edit_item(1, draft(dec!(250))).unwrap();

        assert_eq!(edited.items()[0].id, 1);
        assert_eq!(edited.items()[0].width_cm, dec!(250));
        assert!(edited.items()[0].accessories.rail.is_some());
        assert_eq!(edited.items()[1].id, 2);
    }

    #[test]
    fn remove_item_unknown_id_fails() {
        let session = QuoteSession::new(CalculationMethod::Smokering, fabric());

        assert_eq!(session.remove_item(42), Err(SessionError::ItemNotFound(42)));
    }

    #[test]
    fn select_accessory_rejects_too_narrow_rail() {
        let session = QuoteSession::new(CalculationMethod::Smokering, fabric())
            .add_item(draft(dec!(350)))
            .unwrap();

        let result = session.select_accessory(1, AccessorySlot::Rail, rail("rel", Some(dec!(300))));

        assert_eq!(
            result,
            Err(SessionError::VariantTooNarrow {
                variant_id: "rel".to_string(),
                max_width: dec!(300),
                width_cm: dec!(350),
            })
        );
    }

    #[test]
    fn select_accessory_accepts_unconstrained_variant_on_wide_item() {
        let session = QuoteSession::new(CalculationMethod::Smokering, fabric())
            .add_item(draft(dec!(600)))
            .unwrap();

        let session = session
            .select_accessory(1, AccessorySlot::Rail, rail("telescopic", None))
            .unwrap();

        assert!(session.items()[0].accessories.rail.is_some());
    }

    #[test]
    fn package_kind_toggle_resets_costs_idempotently() {
        let session = QuoteSession::new(CalculationMethod::Smokering, fabric())
            .add_item(draft(dec!(200)))
            .unwrap()
            .select_accessory(1, AccessorySlot::Rail, rail("rel", None))
            .unwrap();

        let complete_total = session.summary().unwrap().grand_total;

        let fabric_only = session
            .set_package_kind(1, PackageKind::FabricOnly)
            .unwrap();
        let fabric_only_summary = fabric_only.summary().unwrap();
        assert_eq!(fabric_only_summary.per_item[0].rail, None);
        assert_eq!(
            fabric_only_summary.grand_total,
            fabric_only_summary.per_item[0].fabric_cost
        );

        let back = fabric_only
            .set_package_kind(1, PackageKind::CompletePackage)
            .unwrap();
        assert_eq!(back.summary().unwrap().grand_total, complete_total);
    }

    #[test]
    fn change_method_discards_items() {
        let session = QuoteSession::new(CalculationMethod::Smokering, fabric())
            .add_item(draft(dec!(200)))
            .unwrap();

        let switched = session.change_method(CalculationMethod::Blind);

        assert_eq!(switched.method(), CalculationMethod::Blind);
        assert!(switched.is_empty());
        // The original value is untouched.
        assert_eq!(session.items().len(), 1);
    }
}
