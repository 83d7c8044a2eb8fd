//! Quote calculation modules.
//!
//! Each module is a pure function layer over the domain models: unit rules
//! and business constants, method-specific fabric consumption, width-based
//! accessory eligibility, derived accessory quantities, per-line pricing and
//! whole-quote aggregation.

pub mod aggregate;
pub mod consumption;
pub mod eligibility;
pub mod pricing;
pub mod quantities;
pub mod rules;

pub use aggregate::{QuoteSummary, aggregate};
pub use consumption::{ConsumptionError, required_fabric_meters};
pub use eligibility::{Eligibility, eligible_variants};
pub use pricing::{AccessoryCharge, ChargeQuantity, PriceBreakdown, price_item};
pub use quantities::{hook_count, rail_meters, sheer_fabric_meters};
