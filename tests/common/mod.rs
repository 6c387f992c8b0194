pub mod fixtures;

use chalan::DocumentEngine;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// An engine with default budgets and the plain formatter.
#[allow(dead_code)]
pub fn engine() -> DocumentEngine {
    DocumentEngine::builder().build()
}

/// An engine whose regular page holds exactly `regular` single-line rows
/// and whose last page holds `last`, given the default row height of 20.
#[allow(dead_code)]
pub fn engine_with_row_capacity(regular: usize, last: usize) -> DocumentEngine {
    DocumentEngine::builder()
        .with_budgets(fixtures::row_budgets(regular, last))
        .build()
}
