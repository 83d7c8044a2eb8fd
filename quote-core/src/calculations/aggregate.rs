//! Whole-quote aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::consumption::ConsumptionError;
use crate::calculations::pricing::{PriceBreakdown, price_item};
use crate::models::{CalculationMethod, FabricSelection, WindowItem};

/// Summary of a whole quote: per-line breakdowns in insertion order plus the
/// figures shown in the grand-total block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub per_item: Vec<PriceBreakdown>,
    /// Sum of every line's total, in whole Rupiah.
    pub grand_total: Decimal,
    /// Number of lines in the quote.
    pub total_items: usize,
    /// Sum of quantities across lines. Display figure only; pricing already
    /// multiplied quantities per line.
    pub total_units: u32,
}

/// Prices every item and sums the quote.
///
/// An empty item list is not an error: it yields a zero total and an empty
/// breakdown list. Callers block quote submission on an empty list.
pub fn aggregate(
    method: CalculationMethod,
    items: &[WindowItem],
    fabric: &FabricSelection,
) -> Result<QuoteSummary, ConsumptionError> {
    let per_item = items
        .iter()
        .map(|item| price_item(method, item, fabric))
        .collect::<Result<Vec<_>, _>>()?;

    let grand_total = per_item.iter().map(|b| b.total).sum();
    let total_units = items.iter().map(|i| i.quantity).sum();

    Ok(QuoteSummary {
        grand_total,
        total_items: items.len(),
        total_units,
        per_item,
    })
}
