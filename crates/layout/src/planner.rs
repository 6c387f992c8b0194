//! Greedy pagination with one-step lookahead.
//!
//! The planner partitions computed lines into pages before anything is
//! assembled: page numbers need the full plan, so planning and assembly
//! are separate passes. Heights come from [`HeightEstimator`]; a page
//! closes when the next row would overflow its budget, and a lookahead
//! pull-back keeps the final page from ending up empty or holding a
//! single orphaned row.

use crate::FIT_EPSILON;
use crate::budgets::LayoutBudgets;
use crate::estimate::HeightEstimator;
use chalan_types::ComputedLine;
use std::ops::Range;

/// The final page never holds fewer rows than this when items exist
/// upstream to pull from.
const MIN_LAST_PAGE_ITEMS: usize = 2;

/// One planned page: a half-open item range plus the last-page flag that
/// tells the assembler to emit the footer blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedPage {
    pub first_item: usize,
    pub item_count: usize,
    pub is_last: bool,
}

impl PlannedPage {
    pub fn range(&self) -> Range<usize> {
        self.first_item..self.first_item + self.item_count
    }
}

/// A complete pagination plan. Page indices are positional (1-based in
/// the assembled output); exactly the final entry has `is_last` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    pub pages: Vec<PlannedPage>,
    /// Set when a budget could not hold even one minimal row and the
    /// plan fell back to fixed-size pages.
    pub degenerate: bool,
}

impl PagePlan {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total items across all pages.
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|p| p.item_count).sum()
    }
}

/// Plans pages for `lines` under `budgets`.
///
/// Never fails and never returns a partial plan: degenerate budgets fall
/// back to `fallback_items_per_page` chunks with the `degenerate` flag
/// set, and an empty input still yields a single last page so the footer
/// blocks of a zero-amount document render.
pub fn plan(lines: &[ComputedLine], budgets: &LayoutBudgets) -> PagePlan {
    let n = lines.len();
    if n == 0 {
        return PagePlan {
            pages: vec![PlannedPage {
                first_item: 0,
                item_count: 0,
                is_last: true,
            }],
            degenerate: false,
        };
    }

    let regular_budget = budgets.regular_budget();
    let last_budget = budgets.last_budget();
    // Degenerate means a budget that cannot hold even one minimal row.
    let min_row = budgets.line_height + budgets.vertical_padding;
    if regular_budget + FIT_EPSILON < min_row || last_budget + FIT_EPSILON < min_row {
        log::warn!(
            "layout budgets degenerate (regular {regular_budget:.1}, last {last_budget:.1}); \
             falling back to {} items per page",
            budgets.fallback_items_per_page
        );
        return fallback_plan(n, budgets.fallback_items_per_page);
    }

    let estimator = HeightEstimator::new(budgets);
    let heights: Vec<f32> = lines
        .iter()
        .map(|l| estimator.row_height(&l.item.name, budgets.name_column_width, budgets.body_font_size))
        .collect();

    let mut pages = Vec::new();
    let mut i = 0;
    while i < n {
        let remaining: f32 = heights[i..].iter().sum();
        if remaining <= last_budget + FIT_EPSILON {
            pages.push(PlannedPage {
                first_item: i,
                item_count: n - i,
                is_last: true,
            });
            break;
        }

        // Greedy fill to the regular budget; a row taller than the whole
        // budget still gets a page of its own.
        let mut j = i;
        let mut used = 0.0f32;
        while j < n && (j == i || used + heights[j] <= regular_budget + FIT_EPSILON) {
            used += heights[j];
            j += 1;
        }

        // Everything left fit a regular page but not the last-page
        // budget: give rows back until the remainder can close the
        // document.
        if j == n {
            while j > i + 1 {
                j -= 1;
                let rem: f32 = heights[j..].iter().sum();
                if rem <= last_budget + FIT_EPSILON {
                    break;
                }
            }
        }

        // Lookahead guard: if the remainder would be the final page with
        // a single orphaned row, pull rows off this page until it holds
        // at least MIN_LAST_PAGE_ITEMS (or stops fitting the last-page
        // budget, in which case it spills onto further pages anyway).
        while j > i + 1 {
            let rem_count = n - j;
            let rem_height: f32 = heights[j..].iter().sum();
            if rem_count >= MIN_LAST_PAGE_ITEMS || rem_height > last_budget + FIT_EPSILON {
                break;
            }
            j -= 1;
        }

        log::debug!(
            "page {} holds items {}..{} ({:.1} of {:.1})",
            pages.len() + 1,
            i,
            j,
            heights[i..j].iter().sum::<f32>(),
            regular_budget
        );
        pages.push(PlannedPage {
            first_item: i,
            item_count: j - i,
            is_last: false,
        });
        i = j;
    }

    // A trailing row taller than the last-page budget exhausts the loop
    // without ever taking the closing branch. The footer still needs a
    // home, so the final page carries it and the oversized row spills.
    if let Some(last) = pages.last_mut() {
        if !last.is_last {
            log::warn!(
                "final page overflows the last-page budget ({last_budget:.1}); \
                 closing the plan on it anyway"
            );
            last.is_last = true;
        }
    }

    PagePlan {
        pages,
        degenerate: false,
    }
}

/// Fixed-size chunking for degenerate budgets, with the same no-orphan
/// guard on the trailing chunk.
fn fallback_plan(n: usize, per_page: usize) -> PagePlan {
    let per_page = per_page.max(1);
    let mut pages = Vec::new();
    let mut i = 0;
    while i < n {
        let count = per_page.min(n - i);
        pages.push(PlannedPage {
            first_item: i,
            item_count: count,
            is_last: false,
        });
        i += count;
    }

    let count = pages.len();
    if count >= 2 && pages[count - 1].item_count == 1 && pages[count - 2].item_count > 1 {
        pages[count - 2].item_count -= 1;
        pages[count - 1].first_item -= 1;
        pages[count - 1].item_count = 2;
    }
    if let Some(last) = pages.last_mut() {
        last.is_last = true;
    }

    PagePlan {
        pages,
        degenerate: true,
    }
}
