//! Document assembly: plan in, renderable pages out.
//!
//! [`assemble`] is a pure fold over a [`PagePlan`]: it resolves header
//! strings through the [`FormattingPort`] and slices computed lines into
//! page sections, but recomputes no tax amounts and no heights. Supplying
//! a plan without its aggregate bundle is a programming-contract
//! violation and fails loudly rather than rendering blanks.

use chalan_layout::PagePlan;
use chalan_tax::Classification;
use chalan_traits::FormattingPort;
use chalan_types::{
    BankAccount, Company, DocumentHeader, HsnSummaryRow, Page, PageSection, Party, PartyBlock,
    Transaction,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    #[error("Plan flags a last page but no aggregate totals were supplied")]
    MissingAggregates,
    #[error("Plan flags a last page but no tax summary was supplied")]
    MissingTaxSummary,
    #[error("Plan covers {planned} items but {actual} computed lines were supplied")]
    PlanMismatch { planned: usize, actual: usize },
    #[error("Plan does not end on a last page; the footer blocks have nowhere to go")]
    NoLastPage,
}

/// The input records a document is assembled from. Bank details are
/// optional; proforma invoices conventionally pass `None`.
#[derive(Debug, Clone, Copy)]
pub struct DocumentSource<'a> {
    pub transaction: &'a Transaction,
    pub company: &'a Company,
    pub party: &'a Party,
    pub shipping: Option<&'a Party>,
    pub bank: Option<&'a BankAccount>,
}

fn party_block(
    name: &str,
    address: &str,
    state: Option<&str>,
    gstin: Option<&str>,
    phone: Option<&str>,
    formatter: &dyn FormattingPort,
) -> PartyBlock {
    PartyBlock {
        name: name.to_string(),
        address: address.to_string(),
        state_line: state.map(|s| match formatter.state_code(s) {
            Some(code) => format!("{s} ({code})"),
            None => s.to_string(),
        }),
        gstin: gstin.map(String::from),
        phone: phone.map(|p| formatter.phone(p)),
    }
}

fn build_header(source: &DocumentSource<'_>, formatter: &dyn FormattingPort) -> DocumentHeader {
    let t = source.transaction;
    DocumentHeader {
        title: t.kind.title().to_string(),
        number: t.number.clone(),
        date: formatter.date(t.date),
        due_date: t.due_date.map(|d| formatter.date(d)),
        po_number: t.po_number.clone(),
        company: party_block(
            &source.company.name,
            &source.company.address,
            source.company.state.as_deref(),
            source.company.gstin.as_deref(),
            source.company.phone.as_deref(),
            formatter,
        ),
        party: party_block(
            &source.party.name,
            &source.party.address,
            source.party.state.as_deref(),
            source.party.gstin.as_deref(),
            source.party.phone.as_deref(),
            formatter,
        ),
        shipping: source.shipping.map(|s| {
            party_block(
                &s.name,
                &s.address,
                s.state.as_deref(),
                s.gstin.as_deref(),
                s.phone.as_deref(),
                formatter,
            )
        }),
    }
}

/// Walks the plan and emits one [`Page`] per planned page.
///
/// Every page carries `Header`, `TableHeader`, `ItemRows` and
/// `PageNumber`; exactly the last page additionally carries `TotalsRow`,
/// `TaxSummary`, `WordsLine`, `BankAndSignature` and, when the
/// transaction has notes, `Notes`. Serial numbering runs across pages
/// through each section's `start_index`.
pub fn assemble(
    plan: &PagePlan,
    source: &DocumentSource<'_>,
    classification: Option<&Classification>,
    summary: Option<&[HsnSummaryRow]>,
    formatter: &dyn FormattingPort,
) -> Result<Vec<Page>, AssembleError> {
    let classification = classification.ok_or(AssembleError::MissingAggregates)?;
    let summary = summary.ok_or(AssembleError::MissingTaxSummary)?;

    if !plan.pages.last().is_some_and(|p| p.is_last) {
        return Err(AssembleError::NoLastPage);
    }

    let lines = &classification.lines;
    let planned_items = plan.item_count();
    if planned_items != lines.len() {
        return Err(AssembleError::PlanMismatch {
            planned: planned_items,
            actual: lines.len(),
        });
    }

    let header = build_header(source, formatter);
    let total_pages = plan.page_count();
    let mut pages = Vec::with_capacity(total_pages);
    let mut offset = 0;

    for (pos, planned) in plan.pages.iter().enumerate() {
        if planned.first_item != offset {
            return Err(AssembleError::PlanMismatch {
                planned: planned.first_item,
                actual: offset,
            });
        }
        offset += planned.item_count;

        let mut sections = vec![
            PageSection::Header(header.clone()),
            PageSection::TableHeader {
                regime: classification.regime,
            },
            PageSection::ItemRows {
                start_index: planned.first_item,
                rows: lines[planned.range()].to_vec(),
            },
        ];

        if planned.is_last {
            sections.push(PageSection::TotalsRow(classification.totals.clone()));
            sections.push(PageSection::TaxSummary(summary.to_vec()));
            sections.push(PageSection::WordsLine(
                formatter.number_to_words(classification.totals.total),
            ));
            sections.push(PageSection::BankAndSignature {
                bank: source.bank.cloned(),
                signatory: source.company.signatory.clone(),
            });
            if let Some(notes) = source.transaction.notes.as_deref() {
                sections.push(PageSection::Notes(notes.to_string()));
            }
        }

        sections.push(PageSection::PageNumber {
            index: pos + 1,
            total: total_pages,
        });

        pages.push(Page {
            number: pos + 1,
            sections,
        });
    }

    log::debug!(
        "assembled {} pages for document {}",
        pages.len(),
        source.transaction.number
    );
    Ok(pages)
}
