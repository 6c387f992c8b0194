//! Tax classification and HSN/SAC aggregation.
//!
//! [`classifier::classify`] turns raw line items plus a [`chalan_types::TaxContext`]
//! into computed lines under a single document-wide tax regime;
//! [`hsn::aggregate`] folds computed lines into the per-(code, rate)
//! summary rows of the tax table. Both are pure functions over in-memory
//! data and hold no state across calls.

pub mod classifier;
pub mod hsn;

pub use classifier::{Classification, TaxError, classify};
pub use hsn::aggregate;
