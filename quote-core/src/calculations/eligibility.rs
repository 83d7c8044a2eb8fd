//! Width-based accessory eligibility.
//!
//! Rail-type slots carry a maximum supported span; offering a too-short rail
//! for a wide opening must be impossible by construction, so the filter runs
//! before any variant reaches a selection control. Quantity-type slots are
//! not physically width-constrained and always offer their full catalog.

use rust_decimal::Decimal;

use crate::models::{AccessorySlot, AccessoryVariant};

/// Outcome of filtering a slot's catalog for a given item width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// The variants that may be offered. May be empty when the catalog
    /// itself is empty.
    Eligible(Vec<AccessoryVariant>),
    /// The slot had variants, but every one of them tops out below the
    /// item's width. Distinct from an empty catalog so the caller can show
    /// an "insufficient maximum width" message instead of a bare empty list.
    InsufficientWidth,
}

impl Eligibility {
    pub fn variants(&self) -> &[AccessoryVariant] {
        match self {
            Self::Eligible(variants) => variants,
            Self::InsufficientWidth => &[],
        }
    }
}

/// Filters a slot's catalog down to the variants valid for `width_cm`.
///
/// A variant is eligible iff it has no `max_width` or `max_width >= width_cm`.
/// Only width-constrained slots are filtered; the other slots pass their
/// catalog through unchanged.
pub fn eligible_variants(
    slot: AccessorySlot,
    catalog: &[AccessoryVariant],
    width_cm: Decimal,
) -> Eligibility {
    if !slot.is_width_constrained() {
        return Eligibility::Eligible(catalog.to_vec());
    }

    let eligible: Vec<AccessoryVariant> = catalog
        .iter()
        .filter(|v| v.max_width.is_none_or(|max| max >= width_cm))
        .cloned()
        .collect();

    if eligible.is_empty() && !catalog.is_empty() {
        Eligibility::InsufficientWidth
    } else {
        Eligibility::Eligible(eligible)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn rail(id: &str, max_width: Option<Decimal>) -> AccessoryVariant {
        AccessoryVariant {
            id: id.to_string(),
            name: format!("Rail {id}"),
            price: dec!(75000),
            description: None,
            max_width,
        }
    }

    #[test]
    fn keeps_variants_at_or_above_item_width() {
        let catalog = vec![
            rail("short", Some(dec!(200))),
            rail("exact", Some(dec!(250))),
            rail("long", Some(dec!(400))),
        ];

        let result = eligible_variants(AccessorySlot::Rail, &catalog, dec!(250));

        let ids: Vec<&str> = result.variants().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["exact", "long"]);
    }

    #[test]
    fn unconstrained_variant_always_eligible() {
        let catalog = vec![rail("telescopic", None), rail("short", Some(dec!(100)))];

        let result = eligible_variants(AccessorySlot::SheerRail, &catalog, dec!(999));

        let ids: Vec<&str> = result.variants().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["telescopic"]);
    }

    #[test]
    fn all_too_narrow_is_a_distinct_state() {
        let catalog = vec![rail("short", Some(dec!(300)))];

        let result = eligible_variants(AccessorySlot::Rail, &catalog, dec!(350));

        assert_eq!(result, Eligibility::InsufficientWidth);
    }

    #[test]
    fn empty_catalog_stays_eligible_empty() {
        let result = eligible_variants(AccessorySlot::Rail, &[], dec!(350));

        assert_eq!(result, Eligibility::Eligible(vec![]));
    }

    #[test]
    fn quantity_slots_are_never_filtered() {
        let catalog = vec![rail("odd", Some(dec!(10)))];

        let result = eligible_variants(AccessorySlot::Hook, &catalog, dec!(500));

        assert_eq!(result.variants().len(), 1);
    }
}
