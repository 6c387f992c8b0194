use serde::{Deserialize, Serialize};

/// The transaction variants the engine documents. Receipts, payments and
/// journals carry line items too; only the header title and which footer
/// blocks a renderer shows differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Sales,
    Purchase,
    Proforma,
    Receipt,
    Payment,
    Journal,
}

impl TransactionKind {
    /// Conventional document title for the header block.
    pub fn title(&self) -> &'static str {
        match self {
            TransactionKind::Sales => "Tax Invoice",
            TransactionKind::Purchase => "Purchase Invoice",
            TransactionKind::Proforma => "Proforma Invoice",
            TransactionKind::Receipt => "Receipt Voucher",
            TransactionKind::Payment => "Payment Voucher",
            TransactionKind::Journal => "Journal Voucher",
        }
    }
}

/// Everything the classifier needs to pick a tax regime for one document.
///
/// States are raw names as stored on the records, not GST state codes;
/// comparison is trimmed and case-insensitive. `shipping_state`, when
/// present, overrides `party_state` as the place of supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxContext {
    pub company_state: Option<String>,
    pub party_state: Option<String>,
    pub shipping_state: Option<String>,
    pub kind: TransactionKind,
    /// Company-level GST registration flag. When false the whole document
    /// is untaxed regardless of line rates.
    pub gst_enabled: bool,
}

/// The single tax regime applied to every line of a document. Mixed
/// regimes within one invoice are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRegime {
    /// Interstate supply: full rate as IGST.
    Igst,
    /// Intrastate supply: half the rate as CGST, half as SGST.
    CgstSgst,
    /// GST does not apply to this document.
    None,
}
