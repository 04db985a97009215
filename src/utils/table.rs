//! Table rendering utilities for CLI outputs.
//!
//! Column widths are measured in terminal cells (`unicode-width`), so
//! Cyrillic locations and emoji do not break the alignment. Styles are applied
//! after padding so escape codes never count as width.

use ansi_term::Style;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Upper bound; cells are truncated with an ellipsis beyond it.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    styles: Vec<Vec<Option<Style>>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            styles: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.add_styled_row(row, Vec::new());
    }

    /// `styles[i]` paints cell `i`; missing entries stay plain.
    pub fn add_styled_row(&mut self, row: Vec<String>, styles: Vec<Option<Style>>) {
        self.rows.push(row);
        self.styles.push(styles);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let longest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.width())
                    .max()
                    .unwrap_or(0);
                longest.max(col.header.width()).min(col.max_width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_cell(&col.header, *w));
        }
        out.push('\n');
        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for (row, styles) in self.rows.iter().zip(&self.styles) {
            for (i, w) in widths.iter().enumerate() {
                let cell = truncate(row.get(i).map(String::as_str).unwrap_or(""), *w);
                match styles.get(i).copied().flatten() {
                    Some(style) => {
                        let fill = w.saturating_sub(cell.width());
                        out.push_str(&format!("{}{} ", style.paint(cell), " ".repeat(fill)));
                    }
                    None => out.push_str(&pad_cell(&cell, *w)),
                }
            }
            out.push('\n');
        }

        out
    }
}

fn pad_cell(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{} ", s, " ".repeat(fill))
}

/// Cut `s` to at most `width` terminal cells, ending with "…" when cut.
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
