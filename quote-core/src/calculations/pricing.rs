//! Line-item pricing.
//!
//! Composes unit conversion, the method formula, derived quantities and the
//! item's accessory selection into one priced breakdown. Cost components:
//!
//! | Component    | Quantity basis (per unit)        | Unit price      |
//! |--------------|----------------------------------|-----------------|
//! | Fabric       | method consumption formula       | per meter       |
//! | Rail         | mounted width in meters          | per meter       |
//! | Tassel       | one set                          | per set         |
//! | Hook         | `ceil(width_m * 10)` pieces      | per piece       |
//! | Vitrase      | smokering consumption formula    | per meter       |
//! | Sheer rail   | mounted width in meters          | per meter       |
//!
//! Every cost is `quantity_basis * unit_price * item.quantity`. The pricer is
//! the single authority for the package-kind invariant: a fabric-only item
//! prices to fabric cost alone no matter what stale accessory selections it
//! still carries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::consumption::{ConsumptionError, required_fabric_meters};
use crate::calculations::quantities::{hook_count, rail_meters, sheer_fabric_meters};
use crate::calculations::rules::{round_meters, round_rupiah, to_meters};
use crate::models::{
    AccessorySlot, AccessoryVariant, CalculationMethod, FabricSelection, PackageKind, WindowItem,
};

/// Per-unit quantity basis of a priced accessory, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeQuantity {
    Meters(Decimal),
    Pieces(u32),
    Sets(u32),
}

/// One priced accessory component of a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryCharge {
    pub variant_id: String,
    /// Variant display name, carried so the order message does not need the
    /// catalog to render the line.
    pub name: String,
    /// Quantity basis for one unit; `cost` already covers all units.
    pub quantity: ChargeQuantity,
    pub cost: Decimal,
}

/// Full price breakdown for one window/door line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub item_id: u64,
    /// Fabric meters for one unit, settled to centimeter precision.
    pub fabric_meters: Decimal,
    pub fabric_cost: Decimal,
    pub rail: Option<AccessoryCharge>,
    pub tassel: Option<AccessoryCharge>,
    pub hook: Option<AccessoryCharge>,
    pub sheer_fabric: Option<AccessoryCharge>,
    pub sheer_rail: Option<AccessoryCharge>,
    /// Sum of the fabric cost and every present accessory cost.
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Present accessory charges in fixed slot order.
    pub fn accessory_charges(&self) -> impl Iterator<Item = (AccessorySlot, &AccessoryCharge)> {
        [
            (AccessorySlot::Rail, self.rail.as_ref()),
            (AccessorySlot::Tassel, self.tassel.as_ref()),
            (AccessorySlot::Hook, self.hook.as_ref()),
            (AccessorySlot::SheerFabric, self.sheer_fabric.as_ref()),
            (AccessorySlot::SheerRail, self.sheer_rail.as_ref()),
        ]
        .into_iter()
        .filter_map(|(slot, charge)| charge.map(|c| (slot, c)))
    }
}

/// Prices one item against the session fabric.
///
/// `method` is the session's calculation method; the session invariant
/// guarantees every item in it was entered under that method.
///
/// # Errors
///
/// Returns [`ConsumptionError`] if the consumption formula rejects the item
/// (zero panel count on a kupu-kupu line; input validation rejects that
/// earlier in normal flow).
pub fn price_item(
    method: CalculationMethod,
    item: &WindowItem,
    fabric: &FabricSelection,
) -> Result<PriceBreakdown, ConsumptionError> {
    let width_m = to_meters(item.width_cm);
    let height_m = to_meters(item.height_cm);
    let quantity = Decimal::from(item.quantity);

    let fabric_meters = round_meters(required_fabric_meters(
        method,
        width_m,
        height_m,
        item.panel_count,
    )?);
    let fabric_cost = round_rupiah(fabric_meters * fabric.price_per_meter * quantity);

    let mut breakdown = PriceBreakdown {
        item_id: item.id,
        fabric_meters,
        fabric_cost,
        rail: None,
        tassel: None,
        hook: None,
        sheer_fabric: None,
        sheer_rail: None,
        total: fabric_cost,
    };

    // Fabric-only lines ignore any stale accessory selection entirely.
    if item.package_kind == PackageKind::FabricOnly {
        return Ok(breakdown);
    }

    breakdown.rail = item
        .accessories
        .get(AccessorySlot::Rail)
        .map(|v| meter_charge(v, rail_meters(width_m), quantity));
    breakdown.tassel = item
        .accessories
        .get(AccessorySlot::Tassel)
        .map(|v| set_charge(v, quantity));
    breakdown.hook = item
        .accessories
        .get(AccessorySlot::Hook)
        .map(|v| piece_charge(v, hook_count(width_m), quantity));
    breakdown.sheer_fabric = item
        .accessories
        .get(AccessorySlot::SheerFabric)
        .map(|v| meter_charge(v, sheer_fabric_meters(width_m, height_m), quantity));
    breakdown.sheer_rail = item
        .accessories
        .get(AccessorySlot::SheerRail)
        .map(|v| meter_charge(v, rail_meters(width_m), quantity));

    breakdown.total = breakdown.fabric_cost
        + breakdown
            .accessory_charges()
            .map(|(_, charge)| charge.cost)
            .sum::<Decimal>();

    Ok(breakdown)
}

fn meter_charge(variant: &AccessoryVariant, meters: Decimal, quantity: Decimal) -> AccessoryCharge {
    let meters = round_meters(meters);
    AccessoryCharge {
        variant_id: variant.id.clone(),
        name: variant.name.clone(),
        quantity: ChargeQuantity::Meters(meters),
        cost: round_rupiah(meters * variant.price * quantity),
    }
}

fn piece_charge(variant: &AccessoryVariant, pieces: u32, quantity: Decimal) -> AccessoryCharge {
    AccessoryCharge {
        variant_id: variant.id.clone(),
        name: variant.name.clone(),
        quantity: ChargeQuantity::Pieces(pieces),
        cost: round_rupiah(Decimal::from(pieces) * variant.price * quantity),
    }
}

fn set_charge(variant: &AccessoryVariant, quantity: Decimal) -> AccessoryCharge {
    AccessoryCharge {
        variant_id: variant.id.clone(),
        name: variant.name.clone(),
        quantity: ChargeQuantity::Sets(1),
        cost: round_rupiah(variant.price * quantity),
    }
}
