//! # chalan
//!
//! GST invoice document engine: given a transaction with line items and
//! the parties around it, chalan classifies and computes tax, aggregates
//! the HSN/SAC summary, plans pagination against fixed height budgets and
//! assembles renderable page records.
//!
//! - **chalan-types**: the immutable data model (line items, tax context,
//!   summary rows, page sections)
//! - **chalan-traits**: the `FormattingPort` boundary consumed at assembly
//! - **chalan-tax**: tax classification and HSN aggregation
//! - **chalan-layout**: height estimation and pagination planning
//! - **chalan-assemble**: plan-to-pages assembly
//!
//! ## Design principle
//!
//! The engine is a pure, synchronous computation over in-memory data: no
//! I/O, no shared state across calls, nothing to cancel. Rendering the
//! assembled [`Page`] records into a visual document is a backend's job
//! and out of scope here.
//!
//! ```
//! use chalan::{DocumentEngine, LineItem, TransactionKind};
//! # use chalan::{Company, Party, Transaction};
//! # use rust_decimal::Decimal;
//! # let company = Company {
//! #     name: "Acme".into(), address: "Pune".into(),
//! #     state: Some("Maharashtra".into()), gstin: None, phone: None,
//! #     email: None, gst_enabled: true, signatory: "Acme".into(),
//! # };
//! # let party = Party {
//! #     name: "Bharat".into(), address: "Bengaluru".into(),
//! #     state: Some("Karnataka".into()), gstin: None, phone: None,
//! # };
//! # let transaction = Transaction {
//! #     kind: TransactionKind::Sales, number: "INV-1".into(),
//! #     date: chrono::NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
//! #     due_date: None, po_number: None, notes: None,
//! #     items: vec![LineItem::product("Widget", Decimal::ONE, Decimal::TEN)],
//! # };
//! let engine = DocumentEngine::builder().build();
//! let document = engine.generate(&transaction, &company, &party, None, None)?;
//! assert!(!document.pages.is_empty());
//! # Ok::<(), chalan::EngineError>(())
//! ```

// Re-export foundation crates
pub use chalan_traits as traits;
pub use chalan_types as types;

pub mod engine;
pub mod error;

// Re-export commonly used types from foundation crates
pub use chalan_types::{
    BankAccount, Company, ComputedLine, DocumentHeader, HsnSummaryRow, ItemKind, LineItem, Page,
    PageSection, Party, PartyBlock, TaxContext, TaxRegime, TaxTotals, Transaction, TransactionKind,
};

pub use chalan_traits::{FormattingPort, PlainFormatter};

// Re-export the algorithm stages for callers that drive them separately
pub use chalan_assemble::{AssembleError, DocumentSource, assemble};
pub use chalan_layout::{HeightEstimator, LayoutBudgets, PagePlan, PlannedPage, plan};
pub use chalan_tax::{Classification, TaxError, aggregate, classify};

// Re-export from internal modules
pub use engine::{Diagnostics, DocumentEngine, EngineBuilder, RenderedDocument};
pub use error::EngineError;
