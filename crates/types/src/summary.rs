use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Marker code of the grand-total row appended by the HSN aggregator.
/// Never a real HSN/SAC code, and never used as a group key.
pub const GRAND_TOTAL_CODE: &str = "Total";

/// One row of the HSN/SAC tax summary table: all lines sharing a
/// (code, rate) pair, summed. The final row of an aggregation is the
/// grand total and carries [`GRAND_TOTAL_CODE`] as its code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsnSummaryRow {
    pub code: String,
    pub rate: Decimal,
    pub taxable_value: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub total: Decimal,
}

impl HsnSummaryRow {
    pub fn is_grand_total(&self) -> bool {
        self.code == GRAND_TOTAL_CODE
    }
}

/// Document-level sums across all computed lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxTotals {
    pub taxable_value: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub total: Decimal,
}

impl TaxTotals {
    pub fn tax_amount(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }
}
