//! Formatting utilities used for CLI and export outputs.

use textwrap::Options;

/// `Some("x")` → "x", `None` / blank → fallback.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}

/// Wrap a multi-line block to `width`, prefixing continuation lines.
pub fn wrap_block(text: &str, width: usize, indent: &str) -> String {
    let opts = Options::new(width).subsequent_indent(indent);
    text.lines()
        .map(|line| textwrap::fill(line, &opts))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_income(amount: Option<f64>) -> String {
    match amount {
        Some(a) => format!("{:.2}", a),
        None => "--".to_string(),
    }
}
