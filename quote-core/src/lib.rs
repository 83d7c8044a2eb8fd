//! Cost estimation engine for custom window-covering quotes.
//!
//! Turns measured windows and doors, a fabric choice, a calculation method
//! and optional accessories into an itemized, priced quote, and renders the
//! quote as the order message handed to the messaging channel. Everything in
//! this crate is synchronous and pure; storage and catalog data arrive
//! through injected collaborators.

pub mod calculations;
pub mod currency;
pub mod gate;
pub mod message;
pub mod models;
pub mod session;

pub use calculations::{
    AccessoryCharge, ChargeQuantity, ConsumptionError, Eligibility, PriceBreakdown, QuoteSummary,
    aggregate, eligible_variants, hook_count, price_item, required_fabric_meters,
    sheer_fabric_meters,
};
pub use gate::{
    AccessGate, CONTACT_KEY, ContactStore, ContactValidationError, GateState, StoreError,
    validate_contact,
};
pub use message::{MessageError, format_order_message};
pub use models::*;
pub use session::{QuoteSession, SessionError};
