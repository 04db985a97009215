//! User-facing terminal messages (stdout / stderr), kept apart from tracing
//! which only carries diagnostics.

use crate::errors::Diagnostics;
use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tag(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(Colour::Red, ICON_ERR), msg);
}

/// Section header, e.g. a month title.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", Colour::Blue.bold().paint(format!("=== {msg} ===")));
}

/// Prints the skipped / placeholder records of a render pass, if any.
pub fn report_diagnostics(diag: &Diagnostics) {
    if diag.is_empty() {
        return;
    }

    println!();
    warning(format!(
        "{} snapshot issue(s): {} malformed date(s), {} unknown machine reference(s)",
        diag.len(),
        diag.malformed_dates(),
        diag.unresolved_machines()
    ));
    for issue in &diag.issues {
        println!("   - {issue}");
    }
}
