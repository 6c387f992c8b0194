use chalan_types::summary::GRAND_TOTAL_CODE;
use chalan_types::{ComputedLine, HsnSummaryRow};
use rust_decimal::Decimal;

/// Folds computed lines into HSN/SAC summary rows.
///
/// Lines group on `(code, rate)`, with a missing code rendered as `"-"`.
/// Row order follows first-seen order of the key, the way the summary
/// table is read top to bottom. A grand-total row (code
/// [`GRAND_TOTAL_CODE`]) is appended last; no rows at all are produced
/// for an empty input.
pub fn aggregate(lines: &[ComputedLine]) -> Vec<HsnSummaryRow> {
    let mut rows: Vec<HsnSummaryRow> = Vec::new();

    for line in lines {
        let code = line.item.code.as_deref().unwrap_or("-");
        let rate = line.item.gst_rate;

        match rows.iter_mut().find(|r| r.code == code && r.rate == rate) {
            Some(row) => {
                row.taxable_value += line.taxable_value;
                row.cgst += line.cgst;
                row.sgst += line.sgst;
                row.igst += line.igst;
                row.total += line.total;
            }
            None => rows.push(HsnSummaryRow {
                code: code.to_string(),
                rate,
                taxable_value: line.taxable_value,
                cgst: line.cgst,
                sgst: line.sgst,
                igst: line.igst,
                total: line.total,
            }),
        }
    }

    if rows.is_empty() {
        return rows;
    }

    let grand = HsnSummaryRow {
        code: GRAND_TOTAL_CODE.to_string(),
        rate: Decimal::ZERO,
        taxable_value: rows.iter().map(|r| r.taxable_value).sum(),
        cgst: rows.iter().map(|r| r.cgst).sum(),
        sgst: rows.iter().map(|r| r.sgst).sum(),
        igst: rows.iter().map(|r| r.igst).sum(),
        total: rows.iter().map(|r| r.total).sum(),
    };
    rows.push(grand);
    rows
}
