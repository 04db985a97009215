use crate::models::event::CalendarEvent;

/// Text shown for a calendar day, `None` when the day has no events.
///
/// With a single machine selected only the first event is shown in a short
/// form; otherwise every event is listed.
pub fn tooltip_text(events: &[CalendarEvent], single_machine: bool) -> Option<String> {
    let first = events.first()?;

    if single_machine {
        return Some(format!("📅 {}\n{}", first.machine_name, first.describe()));
    }

    let mut text = String::from("📅 Maintenance events:\n");
    for event in events {
        text.push_str(&format!("• {}\n  {}\n", event.machine_name, event.describe()));
    }
    Some(text)
}
