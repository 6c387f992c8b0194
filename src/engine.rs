//! The document engine: one call from transaction to assembled pages.

use crate::error::EngineError;
use chalan_assemble::DocumentSource;
use chalan_layout::{HeightEstimator, LayoutBudgets};
use chalan_traits::{FormattingPort, PlainFormatter};
use chalan_types::{
    BankAccount, Company, HsnSummaryRow, Page, Party, TaxContext, TaxRegime, TaxTotals, Transaction,
};
use std::sync::Arc;

/// Non-fatal conditions encountered while generating a document.
/// Presentation layers decide whether to warn the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// A state needed for the interstate decision was missing; the regime
    /// defaulted to CGST+SGST.
    pub indeterminate_tax: bool,
    /// The layout budgets computed to a non-positive capacity; pagination
    /// fell back to fixed-size pages.
    pub degenerate_layout: bool,
}

/// Everything a rendering backend needs: the assembled pages plus the
/// aggregates presentation code uses to pick tax columns and totals
/// labels.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub pages: Vec<Page>,
    pub regime: TaxRegime,
    pub totals: TaxTotals,
    pub summary: Vec<HsnSummaryRow>,
    pub diagnostics: Diagnostics,
}

/// Builds [`DocumentEngine`] instances. The formatter defaults to
/// [`PlainFormatter`] and the budgets to [`LayoutBudgets::default`].
pub struct EngineBuilder {
    formatter: Option<Arc<dyn FormattingPort>>,
    budgets: LayoutBudgets,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            formatter: None,
            budgets: LayoutBudgets::default(),
        }
    }

    pub fn with_budgets(mut self, budgets: LayoutBudgets) -> Self {
        self.budgets = budgets;
        self
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn FormattingPort>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn build(self) -> DocumentEngine {
        DocumentEngine {
            formatter: self
                .formatter
                .unwrap_or_else(|| Arc::new(PlainFormatter::new())),
            budgets: self.budgets,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The deduplicated invoice document engine: classify → aggregate → plan
/// → assemble, one parameterized pipeline instead of one copy per visual
/// template. Engines are cheap to clone around and safe to share across
/// worker threads; every `generate` call is independent.
#[derive(Clone)]
pub struct DocumentEngine {
    formatter: Arc<dyn FormattingPort>,
    budgets: LayoutBudgets,
}

impl DocumentEngine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Generates the full page sequence for one transaction.
    ///
    /// `shipping` overrides the party's state as the place of supply;
    /// `bank` feeds the last page's bank block and is conventionally
    /// `None` for proforma invoices.
    pub fn generate(
        &self,
        transaction: &Transaction,
        company: &Company,
        party: &Party,
        shipping: Option<&Party>,
        bank: Option<&BankAccount>,
    ) -> Result<RenderedDocument, EngineError> {
        let ctx = TaxContext {
            company_state: company.state.clone(),
            party_state: party.state.clone(),
            shipping_state: shipping.and_then(|s| s.state.clone()),
            kind: transaction.kind,
            gst_enabled: company.gst_enabled,
        };

        let classification = chalan_tax::classify(&transaction.items, &ctx)?;
        let summary = chalan_tax::aggregate(&classification.lines);

        let budgets = self.effective_budgets(&summary, transaction.notes.as_deref());
        let page_plan = chalan_layout::plan(&classification.lines, &budgets);

        let source = DocumentSource {
            transaction,
            company,
            party,
            shipping,
            bank,
        };
        let pages = chalan_assemble::assemble(
            &page_plan,
            &source,
            Some(&classification),
            Some(&summary),
            self.formatter.as_ref(),
        )?;

        log::debug!(
            "document {}: {} lines over {} pages, regime {:?}",
            transaction.number,
            transaction.items.len(),
            pages.len(),
            classification.regime
        );

        Ok(RenderedDocument {
            pages,
            regime: classification.regime,
            totals: classification.totals,
            summary,
            diagnostics: Diagnostics {
                indeterminate_tax: classification.indeterminate,
                degenerate_layout: page_plan.degenerate,
            },
        })
    }

    /// The caller tunes `last_page_footer_reserve` for the fixed footer
    /// blocks; the variable ones (tax summary rows, notes) are estimated
    /// here and added on top before planning.
    fn effective_budgets(&self, summary: &[HsnSummaryRow], notes: Option<&str>) -> LayoutBudgets {
        let mut budgets = self.budgets;
        let estimator = HeightEstimator::new(&budgets);

        let summary_height =
            summary.len() as f32 * (budgets.line_height + budgets.vertical_padding);
        let notes_height = notes
            .map(|n| estimator.row_height(n, budgets.name_column_width, budgets.body_font_size))
            .unwrap_or(0.0);

        budgets.last_page_footer_reserve += summary_height + notes_height;
        budgets
    }
}
