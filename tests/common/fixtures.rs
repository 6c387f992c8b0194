//! Builders for the records every integration test needs.
#![allow(dead_code)]

use chalan::{
    BankAccount, Company, LayoutBudgets, LineItem, Party, Transaction, TransactionKind,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn company_in(state: &str) -> Company {
    Company {
        name: "Acme Traders".into(),
        address: "14 MG Road, Pune 411001".into(),
        state: Some(state.into()),
        gstin: Some("27AAAAA0000A1Z5".into()),
        phone: Some("9876543210".into()),
        email: Some("billing@acmetraders.example".into()),
        gst_enabled: true,
        signatory: "Acme Traders".into(),
    }
}

pub fn company() -> Company {
    company_in("Maharashtra")
}

pub fn party_in(state: &str) -> Party {
    Party {
        name: "Bharat Supplies".into(),
        address: "2 Brigade Road, Bengaluru 560001".into(),
        state: Some(state.into()),
        gstin: Some("29BBBBB0000B1Z4".into()),
        phone: Some("9123456780".into()),
    }
}

pub fn bank() -> BankAccount {
    BankAccount {
        bank_name: "State Bank of India".into(),
        account_number: "00000012345678".into(),
        ifsc: "SBIN0001234".into(),
        branch: Some("MG Road".into()),
        holder: Some("Acme Traders".into()),
    }
}

pub fn product(name: &str, quantity: Decimal, unit_price: Decimal, rate: Decimal) -> LineItem {
    LineItem::product(name, quantity, unit_price)
        .with_rate(rate)
        .with_code("8471")
}

/// `n` one-line items priced 10 at 18% GST.
pub fn many_items(n: usize) -> Vec<LineItem> {
    (0..n)
        .map(|i| product(&format!("Item {i}"), dec!(1), dec!(10), dec!(18)))
        .collect()
}

pub fn transaction(kind: TransactionKind, items: Vec<LineItem>) -> Transaction {
    Transaction {
        kind,
        number: "INV-2024-042".into(),
        date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2024, 7, 16),
        po_number: Some("PO-1881".into()),
        notes: Some("Payment due in 15 days".into()),
        items,
    }
}

pub fn sales(items: Vec<LineItem>) -> Transaction {
    transaction(TransactionKind::Sales, items)
}

/// Budgets where every single-line row costs 20.0, a regular page holds
/// exactly `regular` rows and the last page `last`.
pub fn row_budgets(regular: usize, last: usize) -> LayoutBudgets {
    let row = 20.0;
    let defaults = LayoutBudgets::default();
    LayoutBudgets {
        page_usable_height: regular as f32 * row
            + defaults.header_height
            + defaults.table_header_height,
        last_page_footer_reserve: (regular - last) as f32 * row,
        ..defaults
    }
}
