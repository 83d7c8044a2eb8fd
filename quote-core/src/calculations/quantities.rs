//! Derived accessory quantities that are not 1:1 with item count.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculations::rules::{HOOKS_PER_METER, SMOKERING_FULLNESS};

/// Hooks required for one unit: ten per meter of mounted width, rounded up
/// so a fractional meter never under-provisions.
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::hook_count;
///
/// assert_eq!(hook_count(dec!(4.0)), 40);
/// assert_eq!(hook_count(dec!(2.05)), 21);
/// ```
pub fn hook_count(width_m: Decimal) -> u32 {
    // Widths beyond u32::MAX hooks are not physical; saturate rather than panic.
    (width_m * HOOKS_PER_METER).ceil().to_u32().unwrap_or(u32::MAX)
}

/// Vitrase sheer fabric meters for one unit.
///
/// Sheer curtains are conventionally gathered even when the primary curtain
/// is a blind or a kupu-kupu pleat, so this always uses the smokering
/// fullness ratio regardless of the session's method. Deliberate domain
/// rule, not an oversight.
pub fn sheer_fabric_meters(width_m: Decimal, height_m: Decimal) -> Decimal {
    width_m * SMOKERING_FULLNESS * height_m
}

/// Rail meters for one unit: rails are cut to the mounted width. Shared by
/// the primary rail and the sheer rail.
pub fn rail_meters(width_m: Decimal) -> Decimal {
    width_m
}
