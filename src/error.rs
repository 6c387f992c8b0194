//! Unified error type for whole-document generation.

use chalan_assemble::AssembleError;
use chalan_tax::TaxError;
use thiserror::Error;

/// The main error enum for a [`crate::DocumentEngine::generate`] call.
///
/// Only fatal conditions surface here: malformed line items and
/// plan/aggregate contract violations. Indeterminate tax context and
/// degenerate layout budgets are not errors; they come back as
/// [`crate::Diagnostics`] flags on a best-effort result.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Tax classification error: {0}")]
    Tax(#[from] TaxError),
    #[error("Assembly error: {0}")]
    Assembly(#[from] AssembleError),
}
