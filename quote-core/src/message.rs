//! Order message rendering.
//!
//! Serializes an aggregated quote into the fixed-structure text document the
//! messaging channel expects. The structure is a wire contract with the
//! downstream channel, covered byte-for-byte by integration tests:
//!
//! 1. Header: title, contact lines, method, fabric with unit price.
//! 2. One numbered block per item: kind and dimensions, panel count
//!    (kupu-kupu only), quantity, package kind, one line per priced
//!    component, item subtotal.
//! 3. Grand-total block: item and unit counts, total estimate.
//! 4. Remeasurement disclaimer.
//!
//! Opening the channel itself is the collaborator's job; this module only
//! produces the string.

use thiserror::Error;

use crate::calculations::consumption::ConsumptionError;
use crate::calculations::pricing::ChargeQuantity;
use crate::currency::{format_meters, format_rupiah};
use crate::models::{CalculationMethod, ContactRecord, WindowItem};
use crate::session::QuoteSession;

/// Errors raised when rendering the order message.
#[derive(Debug, Error, PartialEq)]
pub enum MessageError {
    /// A quote with zero items must not be submitted; callers disable the
    /// order action until at least one item exists.
    #[error("cannot format an order with no items")]
    EmptyQuote,

    #[error(transparent)]
    Consumption(#[from] ConsumptionError),
}

/// Renders the complete order message for a session and its captured
/// contact. Pure: no channel is opened here.
pub fn format_order_message(
    session: &QuoteSession,
    contact: &ContactRecord,
) -> Result<String, MessageError> {
    if session.is_empty() {
        return Err(MessageError::EmptyQuote);
    }
    let summary = session.summary()?;

    let mut out = String::new();
    out.push_str("*Pesanan Gorden - Estimasi Harga*\n\n");
    out.push_str(&format!("Nama: {}\n", contact.name));
    out.push_str(&format!("No. HP: {}\n", contact.phone));
    out.push_str(&format!("Metode: {}\n", session.method().display_name()));
    out.push_str(&format!(
        "Kain: {} ({}/m)\n",
        session.fabric().name,
        format_rupiah(session.fabric().price_per_meter)
    ));

    for (index, (item, breakdown)) in session.items().iter().zip(&summary.per_item).enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{}. {} {}cm x {}cm\n",
            index + 1,
            item_label(session.method(), item),
            item.width_cm.normalize(),
            item.height_cm.normalize(),
        ));
        if session.method().uses_panels() {
            out.push_str(&format!("   Panel: {}\n", item.panel_count));
        }
        out.push_str(&format!("   Jumlah: {} unit\n", item.quantity));
        out.push_str(&format!("   Paket: {}\n", item.package_kind.display_name()));
        out.push_str(&format!(
            "   - Kain: {} m = {}\n",
            format_meters(breakdown.fabric_meters),
            format_rupiah(breakdown.fabric_cost),
        ));
        for (slot, charge) in breakdown.accessory_charges() {
            out.push_str(&format!(
                "   - {}: {} = {}\n",
                slot.display_name(),
                describe_quantity(&charge.quantity),
                format_rupiah(charge.cost),
            ));
        }
        out.push_str(&format!("   Subtotal: {}\n", format_rupiah(breakdown.total)));
    }

    out.push('\n');
    out.push_str(&format!(
        "Total: {} item, {} unit\n",
        summary.total_items, summary.total_units
    ));
    out.push_str(&format!(
        "*Total Estimasi: {}*\n",
        format_rupiah(summary.grand_total)
    ));
    out.push('\n');
    out.push_str(
        "Harga di atas merupakan estimasi dan dapat berubah setelah pengukuran ulang di lokasi.\n",
    );

    Ok(out)
}

/// Item heading: window/door for gathered curtains, the method name for
/// blinds (where the window/door distinction is not collected).
fn item_label(method: CalculationMethod, item: &WindowItem) -> &'static str {
    if method.uses_item_kind() {
        item.item_kind.display_name()
    } else {
        "Blind"
    }
}

fn describe_quantity(quantity: &ChargeQuantity) -> String {
    match quantity {
        ChargeQuantity::Meters(m) => format!("{} m", format_meters(*m)),
        ChargeQuantity::Pieces(n) => format!("{n} pcs"),
        ChargeQuantity::Sets(n) => format!("{n} set"),
    }
}
