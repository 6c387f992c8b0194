use chalan_types::{ComputedLine, LineItem, TaxContext, TaxRegime, TaxTotals};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxError {
    #[error("Line {line}: negative quantity")]
    NegativeQuantity { line: usize },
    #[error("Line {line}: negative unit price")]
    NegativeUnitPrice { line: usize },
    #[error("Line {line}: negative override amount")]
    NegativeOverride { line: usize },
}

/// The classifier's full output for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// One computed line per input line, in input order.
    pub lines: Vec<ComputedLine>,
    /// The single regime applied to every line.
    pub regime: TaxRegime,
    pub totals: TaxTotals,
    /// Set when a state needed for the interstate decision was missing and
    /// the regime defaulted to CGST+SGST. Never fatal; callers decide
    /// whether to surface it.
    pub indeterminate: bool,
}

fn normalized(state: Option<&str>) -> Option<String> {
    state
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

/// Picks the document regime from the context. Returns the regime and
/// whether the decision was indeterminate.
///
/// The place of supply is the shipping state when given, otherwise the
/// party's billing state. Comparison is against raw state names, trimmed
/// and case-insensitive; a spelling variant across records therefore
/// compares unequal and yields IGST.
fn select_regime(ctx: &TaxContext) -> (TaxRegime, bool) {
    if !ctx.gst_enabled {
        return (TaxRegime::None, false);
    }
    let company = normalized(ctx.company_state.as_deref());
    let supply = normalized(ctx.shipping_state.as_deref())
        .or_else(|| normalized(ctx.party_state.as_deref()));

    match (company, supply) {
        (Some(company), Some(supply)) if company == supply => (TaxRegime::CgstSgst, false),
        (Some(_), Some(_)) => (TaxRegime::Igst, false),
        _ => {
            log::warn!(
                "tax context missing state data (company: {:?}, party: {:?}, shipping: {:?}); \
                 defaulting to CGST+SGST",
                ctx.company_state,
                ctx.party_state,
                ctx.shipping_state
            );
            (TaxRegime::CgstSgst, true)
        }
    }
}

fn validate(lines: &[LineItem]) -> Result<(), TaxError> {
    for (index, item) in lines.iter().enumerate() {
        if item.quantity < Decimal::ZERO {
            return Err(TaxError::NegativeQuantity { line: index });
        }
        if item.unit_price < Decimal::ZERO {
            return Err(TaxError::NegativeUnitPrice { line: index });
        }
        if item.override_amount.is_some_and(|a| a < Decimal::ZERO) {
            return Err(TaxError::NegativeOverride { line: index });
        }
    }
    Ok(())
}

fn compute_line(item: &LineItem, regime: TaxRegime) -> ComputedLine {
    let taxable_value = item
        .override_amount
        .unwrap_or(item.quantity * item.unit_price);

    let (cgst, sgst, igst) = match regime {
        TaxRegime::Igst => {
            let igst = taxable_value * item.gst_rate / Decimal::ONE_HUNDRED;
            (Decimal::ZERO, Decimal::ZERO, igst)
        }
        TaxRegime::CgstSgst => {
            let half = taxable_value * (item.gst_rate / Decimal::TWO) / Decimal::ONE_HUNDRED;
            (half, half, Decimal::ZERO)
        }
        TaxRegime::None => (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
    };

    ComputedLine {
        item: item.clone(),
        taxable_value,
        cgst,
        sgst,
        igst,
        total: taxable_value + cgst + sgst + igst,
    }
}

/// Classifies a document's lines under a single tax regime.
///
/// Fails atomically: a malformed line rejects the whole call with its
/// 0-based index and no partial result. A missing state is not an error;
/// it degrades to CGST+SGST with `indeterminate` set on the result.
pub fn classify(lines: &[LineItem], ctx: &TaxContext) -> Result<Classification, TaxError> {
    validate(lines)?;
    let (regime, indeterminate) = select_regime(ctx);

    let computed: Vec<ComputedLine> = lines.iter().map(|l| compute_line(l, regime)).collect();

    let mut totals = TaxTotals::default();
    for line in &computed {
        totals.taxable_value += line.taxable_value;
        totals.cgst += line.cgst;
        totals.sgst += line.sgst;
        totals.igst += line.igst;
        totals.total += line.total;
    }

    log::debug!(
        "classified {} lines as {:?} (taxable {}, tax {})",
        computed.len(),
        regime,
        totals.taxable_value,
        totals.tax_amount()
    );

    Ok(Classification {
        lines: computed,
        regime,
        totals,
        indeterminate,
    })
}
