//! Height estimation and pagination planning.
//!
//! [`estimate::HeightEstimator`] approximates wrapped-line counts without a
//! text-shaping pass; [`planner::plan`] partitions computed lines into
//! pages against the [`budgets::LayoutBudgets`] tunables, reserving room
//! for the last-page footer blocks and avoiding a near-empty trailing
//! page. Planning is a pure computation and always yields a full plan:
//! degenerate budgets fall back to fixed-size pages and are reported as a
//! flag, never as an error.

pub mod budgets;
pub mod estimate;
pub mod planner;

pub use budgets::LayoutBudgets;
pub use estimate::HeightEstimator;
pub use planner::{PagePlan, PlannedPage, plan};

/// Tolerance for floating point fit checks throughout the planner.
pub(crate) const FIT_EPSILON: f32 = 0.01;
