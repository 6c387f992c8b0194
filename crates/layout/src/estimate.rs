use crate::FIT_EPSILON;
use crate::budgets::LayoutBudgets;

/// Estimates wrapped-line counts and row heights from an average
/// character width, without shaping any text.
///
/// This is a heuristic: every glyph is assumed `font_size *
/// char_width_factor` wide and wrapping is a greedy word fill, so the
/// result tracks a real layout pass closely for tabular content but is
/// not pixel-accurate. Consumers size budgets with a safety buffer rather
/// than relying on exact heights.
#[derive(Debug, Clone, Copy)]
pub struct HeightEstimator {
    line_height: f32,
    vertical_padding: f32,
    char_width_factor: f32,
    cell_padding: f32,
}

impl HeightEstimator {
    pub fn new(budgets: &LayoutBudgets) -> Self {
        Self {
            line_height: budgets.line_height,
            vertical_padding: budgets.vertical_padding,
            char_width_factor: budgets.char_width_factor,
            cell_padding: budgets.cell_padding,
        }
    }

    /// Number of wrapped lines `text` occupies in a column of
    /// `column_width`. Explicit line breaks split first; each segment is
    /// then greedily word-filled. Always at least 1.
    pub fn estimate_lines(&self, text: &str, column_width: f32, font_size: f32) -> usize {
        let char_width = (font_size * self.char_width_factor).max(0.1);
        let usable = (column_width - self.cell_padding).max(char_width);

        text.split('\n')
            .map(|segment| wrap_segment(segment, usable, char_width))
            .sum::<usize>()
            .max(1)
    }

    /// Estimated height of one item row holding `text` in its wrapping
    /// column.
    pub fn row_height(&self, text: &str, column_width: f32, font_size: f32) -> f32 {
        self.estimate_lines(text, column_width, font_size) as f32 * self.line_height
            + self.vertical_padding
    }
}

/// Greedy line fill over one break-free segment. A word wider than the
/// column still occupies a single estimated line; intra-word breaking is
/// below this heuristic's resolution.
fn wrap_segment(segment: &str, usable: f32, char_width: f32) -> usize {
    let mut lines = 1usize;
    let mut width = 0.0f32;

    for word in segment.split_whitespace() {
        let word_width = word.chars().count() as f32 * char_width;
        let candidate = if width > 0.0 {
            width + char_width + word_width
        } else {
            word_width
        };
        if candidate > usable + FIT_EPSILON && width > 0.0 {
            lines += 1;
            width = word_width;
        } else {
            width = candidate;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> HeightEstimator {
        HeightEstimator::new(&LayoutBudgets::default())
    }

    #[test]
    fn empty_text_occupies_one_line() {
        assert_eq!(estimator().estimate_lines("", 180.0, 9.0), 1);
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(estimator().estimate_lines("Widget", 180.0, 9.0), 1);
    }

    #[test]
    fn explicit_breaks_add_lines() {
        let e = estimator();
        assert_eq!(e.estimate_lines("a\nb\nc", 180.0, 9.0), 3);
    }

    #[test]
    fn long_text_wraps() {
        let e = estimator();
        let text = "a very long product description that cannot possibly fit on one line";
        assert!(e.estimate_lines(text, 60.0, 9.0) > 1);
    }

    #[test]
    fn monotone_in_text_length() {
        let e = estimator();
        let mut previous = 0;
        let mut text = String::new();
        for i in 0..40 {
            text.push_str(&format!("word{} ", i));
            let lines = e.estimate_lines(&text, 80.0, 9.0);
            assert!(lines >= previous, "lines dropped as text grew");
            previous = lines;
        }
    }

    #[test]
    fn monotone_in_column_width() {
        let e = estimator();
        let text = "several words that will wrap differently at different widths";
        let mut previous = usize::MAX;
        for width in [40.0, 60.0, 80.0, 120.0, 200.0, 400.0] {
            let lines = e.estimate_lines(text, width, 9.0);
            assert!(lines <= previous, "wider column produced more lines");
            previous = lines;
        }
    }

    #[test]
    fn row_height_scales_with_lines() {
        let e = estimator();
        let one = e.row_height("short", 180.0, 9.0);
        let many = e.row_height("short\nbut\ntall", 180.0, 9.0);
        assert!(many > one);
        let budgets = LayoutBudgets::default();
        assert_eq!(one, budgets.line_height + budgets.vertical_padding);
    }
}
