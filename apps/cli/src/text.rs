//! Plain-text rendering of the two screens.

use client_core::{DetailState, ListState, Route, Screen};
use shared::domain::{format_long_date, EventDetail};

pub fn screen(screen: &Screen) -> String {
    match screen {
        Screen::List(view) => list(&view.state()),
        Screen::Detail(view) => detail(&view.state()),
    }
}

pub fn list(state: &ListState) -> String {
    let mut lines = vec!["Software Testing Meetups".to_string(), String::new()];
    match state {
        ListState::Loading => lines.push("Loading meetups...".to_string()),
        ListState::Empty => lines.push("No upcoming meetups".to_string()),
        ListState::Populated(_) => {
            for card in state.cards() {
                let summary = &card.summary;
                lines.push(format!(
                    "[{}] {} ({})",
                    card.index + 1,
                    summary.title,
                    card.category.css_class()
                ));
                lines.push(format!(
                    "    {} at {}",
                    format_long_date(summary.date),
                    summary.time
                ));
                lines.push(format!("    {}", summary.venue));
                lines.push(format!("    {}", summary.short_description));
                lines.push(format!("    -> {}", card.route()));
                lines.push(String::new());
            }
        }
    }
    finish(lines)
}

pub fn detail(state: &DetailState) -> String {
    let lines = match state {
        DetailState::Loading => vec!["Loading event...".to_string()],
        DetailState::Found(event) => event_lines(event),
        DetailState::NotFound => {
            let mut lines = vec![
                "Event Not Found".to_string(),
                "The requested meetup could not be found.".to_string(),
            ];
            if let Some(route) = state.recovery() {
                lines.push(String::new());
                lines.push(format!("View All Events: {route}"));
            }
            lines
        }
    };
    finish(lines)
}

fn event_lines(event: &EventDetail) -> Vec<String> {
    let mut lines = vec![
        event.title.clone(),
        "=".repeat(event.title.chars().count()),
        String::new(),
        "About This Event".to_string(),
        format!("    {}", event.full_description),
        String::new(),
        "Event Organizer".to_string(),
        format!("    {}", event.organizer_name),
        format!("    {}", event.mailto_href()),
    ];
    if let Some(tel) = event.tel_href() {
        lines.push(format!("    {tel}"));
    }
    lines.extend([
        String::new(),
        "Event Details".to_string(),
        format!("    {}", format_long_date(event.date)),
        format!("    {}", event.time),
        format!("    {}", event.venue),
        String::new(),
        "Location".to_string(),
        format!("    {}", event.map_placeholder),
        String::new(),
        format!("Back to Events: {}", Route::List),
    ]);
    lines
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
