//! Business constants and shared measurement helpers.
//!
//! The fullness ratios and the hooks-per-meter rule are fixed business
//! constants, not user-configurable settings. They are collected here so a
//! rate change is a one-line edit rather than a hunt for inlined literals.

use rust_decimal::Decimal;

/// Fullness ratio for a smokering (eyelet) header: flat fabric width must be
/// 2.5 times the mounted width.
pub const SMOKERING_FULLNESS: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// Per-panel fullness ratio for a kupu-kupu (butterfly pleat) header.
pub const BUTTERFLY_PANEL_FULLNESS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Nominal hooks required per meter of mounted width, rounded up.
pub const HOOKS_PER_METER: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Centimeters per meter. Named so the unit boundary is unmistakable.
pub const CM_PER_METER: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Converts user-entered centimeters to the meters every formula consumes.
///
/// This is a named step rather than an inlined division so a missing
/// conversion reads as an obvious bug instead of a silent 100x error.
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::rules::to_meters;
///
/// assert_eq!(to_meters(dec!(250)), dec!(2.5));
/// ```
pub fn to_meters(centimeters: Decimal) -> Decimal {
    centimeters / CM_PER_METER
}

/// Rounds a fabric length to two decimal places, half-up.
///
/// The kupu-kupu per-panel expansion can leave long repeating fractions
/// (e.g. a width split across three panels); consumption figures are settled
/// to centimeter precision before they are priced or displayed.
pub fn round_meters(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a cost to whole Rupiah, half-up. Rupiah has no subunit in trade.
pub fn round_rupiah(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
