use crate::context::TransactionKind;
use crate::line::LineItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The issuing business. `state` is the raw state name as registered;
/// `gst_enabled` gates tax computation for every document the company
/// issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub state: Option<String>,
    pub gstin: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gst_enabled: bool,
    /// Name printed under the signature box ("For <signatory>").
    pub signatory: String,
}

/// A customer or vendor record, also used for a shipping address when it
/// differs from the billing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub address: String,
    pub state: Option<String>,
    pub gstin: Option<String>,
    pub phone: Option<String>,
}

/// Bank details printed on the last page. Suppressing the block (for e.g.
/// proforma invoices) is the caller's choice: pass `None` to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank_name: String,
    pub account_number: String,
    pub ifsc: String,
    pub branch: Option<String>,
    pub holder: Option<String>,
}

/// One sale/purchase/voucher to document, with its ordered line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub number: String,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub po_number: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<LineItem>,
}
