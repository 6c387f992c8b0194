/// Fixed height budgets and estimator constants for pagination, in the
/// same unit as the renderer's page (points for PDF-style backends).
///
/// All fields have documented defaults sized for an A4 page at typical
/// invoice margins; callers override any subset via struct update syntax:
///
/// ```
/// use chalan_layout::LayoutBudgets;
///
/// let budgets = LayoutBudgets {
///     page_usable_height: 680.0,
///     ..LayoutBudgets::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBudgets {
    /// Vertical space available for content on one page, after the page
    /// margins. Defaults to `770.0`.
    pub page_usable_height: f32,
    /// Height of the document header block (title, numbers, address
    /// blocks), rendered on every page. Defaults to `150.0`.
    pub header_height: f32,
    /// Height of the item-table column header row, rendered on every
    /// page. Defaults to `24.0`.
    pub table_header_height: f32,
    /// Height of one wrapped text line inside an item row. Defaults to
    /// `12.0`.
    pub line_height: f32,
    /// Vertical padding added to every item row on top of its wrapped
    /// lines. Defaults to `8.0`.
    pub vertical_padding: f32,
    /// Average glyph width as a fraction of the font size, used by the
    /// wrap estimator. Defaults to `0.5`.
    pub char_width_factor: f32,
    /// Horizontal padding subtracted from a column width before wrap
    /// estimation. Defaults to `4.0`.
    pub cell_padding: f32,
    /// Space reserved at the bottom of the last page for the footer
    /// blocks: totals, tax summary, amount in words, bank and signature,
    /// page footer and a safety buffer. Regular pages reserve nothing.
    /// Defaults to `260.0`.
    pub last_page_footer_reserve: f32,
    /// Items per page when the budgets degenerate (a non-positive
    /// capacity), instead of looping or emitting empty pages. Defaults to
    /// `12`.
    pub fallback_items_per_page: usize,
    /// Width of the item-name column, the one wrap-estimated per row.
    /// Defaults to `180.0`.
    pub name_column_width: f32,
    /// Font size of item-row text, feeding the wrap estimator. Defaults
    /// to `9.0`.
    pub body_font_size: f32,
}

impl Default for LayoutBudgets {
    fn default() -> Self {
        Self {
            page_usable_height: 770.0,
            header_height: 150.0,
            table_header_height: 24.0,
            line_height: 12.0,
            vertical_padding: 8.0,
            char_width_factor: 0.5,
            cell_padding: 4.0,
            last_page_footer_reserve: 260.0,
            fallback_items_per_page: 12,
            name_column_width: 180.0,
            body_font_size: 9.0,
        }
    }
}

impl LayoutBudgets {
    /// Row capacity of a page that carries no footer blocks.
    pub fn regular_budget(&self) -> f32 {
        self.page_usable_height - self.header_height - self.table_header_height
    }

    /// Row capacity of the final page, after the footer reserve.
    pub fn last_budget(&self) -> f32 {
        self.regular_budget() - self.last_page_footer_reserve
    }
}
