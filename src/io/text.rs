//! Text rendering of grids, one line per row

use std::fmt;

use crate::io::configuration::{DEFAULT_BALANCE_WIDTHS, DEFAULT_INDENT, DEFAULT_SEPARATOR};
use crate::spatial::grid::Grid;

/// Options controlling how a grid is laid out as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayout {
    /// Placed between neighboring elements of a row
    pub separator: String,
    /// Right-align every element to the width of the widest one
    pub balance_widths: bool,
    /// Spaces prefixed to each line
    pub indent: usize,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            balance_widths: DEFAULT_BALANCE_WIDTHS,
            indent: DEFAULT_INDENT,
        }
    }
}

impl<T: fmt::Display> Grid<T> {
    /// Render the grid as text, rows separated by newlines
    ///
    /// Widths are measured in characters, so multi-byte elements still line up.
    pub fn describe(&self, layout: &TextLayout) -> String {
        let elements: Vec<String> = self.iter().map(ToString::to_string).collect();
        let max_width = if layout.balance_widths {
            elements
                .iter()
                .map(|element| element.chars().count())
                .max()
                .unwrap_or(0)
        } else {
            0
        };
        let indent = " ".repeat(layout.indent);

        elements
            .chunks(self.width())
            .map(|row| {
                let line = row
                    .iter()
                    .map(|element| {
                        let padding = max_width.saturating_sub(element.chars().count());
                        format!("{}{element}", " ".repeat(padding))
                    })
                    .collect::<Vec<_>>()
                    .join(&layout.separator);
                format!("{indent}{line}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A grid of the same shape holding each element's text form
    pub fn stringified(&self) -> Grid<String> {
        self.transform(|_, value| value.to_string())
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(&TextLayout::default()))
    }
}
