//! Assembled page records: what a rendering backend consumes.
//!
//! A [`Page`] is an ordered list of [`PageSection`] values with all content
//! already resolved. Renderers walk the sections top to bottom and decide
//! styling only; no tax or pagination logic belongs downstream of here.

use crate::context::TaxRegime;
use crate::line::ComputedLine;
use crate::party::BankAccount;
use crate::summary::{HsnSummaryRow, TaxTotals};
use serde::{Deserialize, Serialize};

/// The resolved header block shared by every page: document title and
/// numbers plus display-ready company/party/shipping blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHeader {
    pub title: String,
    pub number: String,
    pub date: String,
    pub due_date: Option<String>,
    pub po_number: Option<String>,
    pub company: PartyBlock,
    pub party: PartyBlock,
    pub shipping: Option<PartyBlock>,
}

/// One address block of the header, strings already formatted (state names
/// carry their GST state code, phones are display-formatted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyBlock {
    pub name: String,
    pub address: String,
    pub state_line: Option<String>,
    pub gstin: Option<String>,
    pub phone: Option<String>,
}

/// A block-level element of an assembled page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageSection {
    /// Document header. Present on every page.
    Header(DocumentHeader),
    /// Item-table column header row. The regime tells the renderer which
    /// tax columns to draw (IGST-only, CGST+SGST, or none).
    TableHeader { regime: TaxRegime },
    /// The slice of computed lines this page carries. `start_index` is the
    /// 0-based position of the first row in the whole document, so running
    /// serial numbers continue across pages.
    ItemRows {
        start_index: usize,
        rows: Vec<ComputedLine>,
    },
    /// Document totals. Last page only.
    TotalsRow(TaxTotals),
    /// HSN/SAC tax summary table. Last page only; may have no group rows
    /// for an untaxed or empty document.
    TaxSummary(Vec<HsnSummaryRow>),
    /// Grand total in words. Last page only.
    WordsLine(String),
    /// Bank details (if supplied) and the signature box. Last page only.
    BankAndSignature {
        bank: Option<BankAccount>,
        signatory: String,
    },
    /// Free-form notes. Last page only, when present on the transaction.
    Notes(String),
    /// "Page i of N". Present on every page.
    PageNumber { index: usize, total: usize },
}

/// One assembled physical page. `number` is 1-based and matches the
/// `PageNumber` section's index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub number: usize,
    pub sections: Vec<PageSection>,
}

impl Page {
    /// The item rows on this page, if any section carries them.
    pub fn item_rows(&self) -> Option<(usize, &[ComputedLine])> {
        self.sections.iter().find_map(|s| match s {
            PageSection::ItemRows { start_index, rows } => Some((*start_index, rows.as_slice())),
            _ => None,
        })
    }

    /// Whether this page carries the last-page footer blocks.
    pub fn carries_totals(&self) -> bool {
        self.sections
            .iter()
            .any(|s| matches!(s, PageSection::TotalsRow(_)))
    }
}
