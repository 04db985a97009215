//! Severity colours for calendar cells and legends.

use crate::models::severity::Severity;
use ansi_term::{Colour, Style};

pub fn style_for(severity: Severity) -> Style {
    match severity {
        Severity::Overdue => Colour::White.on(Colour::Red).bold(),
        Severity::Upcoming => Colour::Black.on(Colour::Yellow),
        Severity::Planned => Colour::White.on(Colour::Green),
    }
}

/// Style for a severity label, `None` when colours are off.
pub fn severity_style(severity: Severity, color: bool) -> Option<Style> {
    color.then(|| style_for(severity))
}

/// Reference day marker when the day has no events.
pub fn reference_style() -> Style {
    Colour::Cyan.bold().underline()
}

pub fn paint_cell(text: &str, severity: Option<Severity>, is_reference: bool, color: bool) -> String {
    if !color {
        return match (severity, is_reference) {
            (Some(Severity::Overdue), _) => format!("{text}!"),
            (Some(Severity::Upcoming), _) => format!("{text}~"),
            (Some(Severity::Planned), _) => format!("{text}+"),
            (None, true) => format!("{text}*"),
            (None, false) => format!("{text} "),
        };
    }

    let style = match (severity, is_reference) {
        (Some(s), true) => style_for(s).underline(),
        (Some(s), false) => style_for(s),
        (None, true) => reference_style(),
        (None, false) => return format!("{text} "),
    };
    format!("{} ", style.paint(text))
}

pub fn legend(color: bool) -> String {
    let parts: Vec<String> = [Severity::Overdue, Severity::Upcoming, Severity::Planned]
        .into_iter()
        .map(|s| paint_cell(s.as_str(), Some(s), false, color).trim_end().to_string())
        .collect();
    format!("Legend: {}", parts.join("  "))
}
