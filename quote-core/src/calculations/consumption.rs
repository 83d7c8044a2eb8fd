//! Method-specific fabric consumption formulas.
//!
//! Given the mounted dimensions in meters, each method determines how much
//! flat fabric must be bought:
//!
//! | Method     | Formula                                        |
//! |------------|------------------------------------------------|
//! | Blind      | `width * height` (flat-mounted, no gathering)  |
//! | Smokering  | `width * 2.5 * height`                         |
//! | Kupu-kupu  | `((width / panels) * 2) * height * panels`     |
//!
//! The kupu-kupu expression is deliberately computed per panel and then
//! re-aggregated even though the panel count cancels algebraically. The
//! cancellation is a property of the current rounding-free arithmetic, not of
//! the business rule, so the per-panel shape is preserved.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::required_fabric_meters;
//! use quote_core::CalculationMethod;
//!
//! let meters =
//!     required_fabric_meters(CalculationMethod::Smokering, dec!(2.0), dec!(2.5), 1).unwrap();
//! assert_eq!(meters, dec!(12.5));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::rules::{BUTTERFLY_PANEL_FULLNESS, SMOKERING_FULLNESS};
use crate::models::CalculationMethod;

/// Errors that can occur while computing fabric consumption.
#[derive(Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumptionError {
    /// A zero panel count would divide by zero in the kupu-kupu formula.
    /// Input validation rejects it upstream; this guard is the backstop.
    #[error("panel count must be at least 1 for the kupu-kupu method")]
    ZeroPanelCount,
}

/// Returns the flat fabric meters required for one unit of an item.
///
/// `width_m` and `height_m` are the mounted dimensions in meters;
/// `panel_count` is only consulted for [`CalculationMethod::ButterflyPleat`].
///
/// # Errors
///
/// Returns [`ConsumptionError::ZeroPanelCount`] for a kupu-kupu item with
/// zero panels.
pub fn required_fabric_meters(
    method: CalculationMethod,
    width_m: Decimal,
    height_m: Decimal,
    panel_count: u32,
) -> Result<Decimal, ConsumptionError> {
    match method {
        CalculationMethod::Blind => Ok(width_m * height_m),
        CalculationMethod::Smokering => Ok(width_m * SMOKERING_FULLNESS * height_m),
        CalculationMethod::ButterflyPleat => {
            if panel_count == 0 {
                return Err(ConsumptionError::ZeroPanelCount);
            }
            let panels = Decimal::from(panel_count);
            let per_panel = (width_m / panels) * BUTTERFLY_PANEL_FULLNESS;
            Ok(per_panel * height_m * panels)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn blind_is_width_times_height() {
        let meters =
            required_fabric_meters(CalculationMethod::Blind, dec!(1.5), dec!(2.0), 1).unwrap();

        assert_eq!(meters, dec!(3.0));
    }

    #[test]
    fn smokering_applies_fullness_ratio() {
        let meters =
            required_fabric_meters(CalculationMethod::Smokering, dec!(2.0), dec!(2.5), 1).unwrap();

        assert_eq!(meters, dec!(12.5));
    }

    #[test]
    fn butterfly_doubles_width() {
        let meters =
            required_fabric_meters(CalculationMethod::ButterflyPleat, dec!(2.0), dec!(2.5), 2)
                .unwrap();

        assert_eq!(meters, dec!(10.0));
    }

    #[test]
    fn butterfly_is_panel_count_invariant_within_tolerance() {
        let reference =
            required_fabric_meters(CalculationMethod::ButterflyPleat, dec!(3.0), dec!(2.0), 1)
                .unwrap();

        for panels in 2..=8 {
            let meters = required_fabric_meters(
                CalculationMethod::ButterflyPleat,
                dec!(3.0),
                dec!(2.0),
                panels,
            )
            .unwrap();

            // Division by a non-power-of-ten panel count leaves a repeating
            // fraction, so compare with a tight tolerance.
            let difference = (meters - reference).abs();
            assert!(
                difference < dec!(0.000001),
                "panels={panels}: {meters} vs {reference}"
            );
        }
    }

    #[test]
    fn butterfly_rejects_zero_panels() {
        let result =
            required_fabric_meters(CalculationMethod::ButterflyPleat, dec!(2.0), dec!(2.5), 0);

        assert_eq!(result, Err(ConsumptionError::ZeroPanelCount));
    }

    #[test]
    fn blind_ignores_panel_count() {
        let one = required_fabric_meters(CalculationMethod::Blind, dec!(1.5), dec!(2.0), 1).unwrap();
        let five =
            required_fabric_meters(CalculationMethod::Blind, dec!(1.5), dec!(2.0), 5).unwrap();

        assert_eq!(one, five);
    }
}
