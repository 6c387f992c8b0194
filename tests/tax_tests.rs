mod common;

use common::TestResult;
use common::fixtures::*;
use chalan::{EngineError, PageSection, TaxError, TaxRegime, TransactionKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn intrastate_document_uses_cgst_sgst_everywhere() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let txn = sales(many_items(7));
    let doc = common::engine().generate(&txn, &company(), &party_in("Maharashtra"), None, None)?;

    assert_eq!(doc.regime, TaxRegime::CgstSgst);
    for page in &doc.pages {
        let (_, rows) = page.item_rows().unwrap();
        for row in rows {
            assert_eq!(row.igst, dec!(0));
            assert_eq!(row.cgst, row.sgst);
        }
    }
    assert!(!doc.diagnostics.indeterminate_tax);
    Ok(())
}

#[test]
fn interstate_document_uses_igst_everywhere() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let txn = sales(many_items(7));
    let doc = common::engine().generate(&txn, &company(), &party_in("Karnataka"), None, None)?;

    assert_eq!(doc.regime, TaxRegime::Igst);
    for page in &doc.pages {
        let (_, rows) = page.item_rows().unwrap();
        for row in rows {
            assert_eq!(row.cgst, dec!(0));
            assert_eq!(row.sgst, dec!(0));
        }
    }
    Ok(())
}

#[test]
fn gst_disabled_company_yields_untaxed_document() -> TestResult {
    let txn = sales(many_items(3));
    let mut company = company();
    company.gst_enabled = false;

    let doc = common::engine().generate(&txn, &company, &party_in("Karnataka"), None, None)?;
    assert_eq!(doc.regime, TaxRegime::None);
    assert_eq!(doc.totals.tax_amount(), dec!(0));
    assert_eq!(doc.totals.total, doc.totals.taxable_value);
    Ok(())
}

#[test]
fn shipping_party_overrides_billing_state() -> TestResult {
    let txn = sales(many_items(2));
    let shipping = party_in("Kerala");
    let doc = common::engine().generate(
        &txn,
        &company(),
        &party_in("Maharashtra"),
        Some(&shipping),
        None,
    )?;
    assert_eq!(doc.regime, TaxRegime::Igst);
    Ok(())
}

#[test]
fn missing_party_state_degrades_with_diagnostic() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let txn = sales(many_items(2));
    let mut party = party_in("Karnataka");
    party.state = None;

    let doc = common::engine().generate(&txn, &company(), &party, None, None)?;
    assert_eq!(doc.regime, TaxRegime::CgstSgst);
    assert!(doc.diagnostics.indeterminate_tax);
    Ok(())
}

#[test]
fn tax_is_conserved_across_totals() -> TestResult {
    let items = vec![
        product("Laptop", dec!(2), dec!(45999.50), dec!(18)),
        product("Mouse", dec!(10), dec!(349), dec!(18)),
        product("Freight", dec!(1), dec!(1200), dec!(5)),
    ];
    let doc = common::engine().generate(&sales(items), &company(), &party_in("Karnataka"), None, None)?;

    let lines: Vec<_> = doc
        .pages
        .iter()
        .flat_map(|p| p.item_rows().unwrap().1.to_vec())
        .collect();
    let sum_taxable: Decimal = lines.iter().map(|l| l.taxable_value).sum();
    let sum_tax: Decimal = lines.iter().map(|l| l.tax_amount()).sum();
    let sum_total: Decimal = lines.iter().map(|l| l.total).sum();

    assert_eq!(sum_total, sum_taxable + sum_tax);
    assert_eq!(doc.totals.taxable_value, sum_taxable);
    assert_eq!(doc.totals.total, sum_total);
    Ok(())
}

#[test]
fn hsn_summary_groups_and_grand_totals() -> TestResult {
    let items = vec![
        product("A1", dec!(1), dec!(100), dec!(18)).with_code("A"),
        product("A2", dec!(1), dec!(50), dec!(18)).with_code("A"),
        product("B1", dec!(1), dec!(200), dec!(12)).with_code("B"),
    ];
    let doc = common::engine().generate(&sales(items), &company(), &party_in("Maharashtra"), None, None)?;

    assert_eq!(doc.summary.len(), 3);
    assert_eq!(doc.summary[0].code, "A");
    assert_eq!(doc.summary[0].taxable_value, dec!(150));
    assert_eq!(doc.summary[1].code, "B");
    assert_eq!(doc.summary[1].taxable_value, dec!(200));
    assert!(doc.summary[2].is_grand_total());
    assert_eq!(doc.summary[2].taxable_value, dec!(350));

    // The same rows appear in the last page's summary section.
    let last = doc.pages.last().unwrap();
    let section_rows = last
        .sections
        .iter()
        .find_map(|s| match s {
            PageSection::TaxSummary(rows) => Some(rows),
            _ => None,
        })
        .unwrap();
    assert_eq!(section_rows, &doc.summary);
    Ok(())
}

#[test]
fn negative_price_aborts_the_whole_call() {
    let mut items = many_items(3);
    items[2].unit_price = dec!(-5);

    let err = common::engine()
        .generate(&sales(items), &company(), &party_in("Karnataka"), None, None)
        .unwrap_err();
    match err {
        EngineError::Tax(TaxError::NegativeUnitPrice { line }) => assert_eq!(line, 2),
        other => panic!("expected a tax validation error, got {other}"),
    }
}

#[test]
fn proforma_still_computes_tax() -> TestResult {
    // Hiding bank or tax blocks on a proforma is presentation; the math
    // is identical to a sales invoice.
    let items = many_items(2);
    let proforma = transaction(TransactionKind::Proforma, items.clone());
    let invoice = sales(items);

    let engine = common::engine();
    let a = engine.generate(&proforma, &company(), &party_in("Karnataka"), None, None)?;
    let b = engine.generate(&invoice, &company(), &party_in("Karnataka"), None, None)?;

    assert_eq!(a.totals, b.totals);
    assert_eq!(a.regime, b.regime);
    Ok(())
}
