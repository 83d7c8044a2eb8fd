//! Display formatting for Rupiah amounts and fabric lengths.

use rust_decimal::Decimal;

use crate::calculations::rules::round_rupiah;

/// Formats an amount as whole Rupiah with id-ID thousands grouping:
/// `Rp1.250.000`. Fractions are settled half-up before formatting.
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::currency::format_rupiah;
///
/// assert_eq!(format_rupiah(dec!(1250000)), "Rp1.250.000");
/// assert_eq!(format_rupiah(dec!(0)), "Rp0");
/// ```
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = round_rupiah(amount);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    if negative {
        grouped.push('-');
    }
    grouped.push_str("Rp");
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats a fabric length with trailing zeros trimmed: `12.5`, `3`.
pub fn format_meters(meters: Decimal) -> String {
    meters.normalize().to_string()
}
