//! HTML rendering for the list and detail screens.

use client_core::{Card, DetailState, ListState, Route};
use shared::domain::{format_long_date, EventDetail};

pub const DOCUMENT_TITLE: &str = "Testing Meetups App";
pub const LIST_HEADING: &str = "Software Testing Meetups";

const CALENDAR_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true"><path d="M8 7V3a2 2 0 012-2h4a2 2 0 012 2v4m-6 4h6m-9 9h12a2 2 0 002-2V9a2 2 0 00-2-2H6a2 2 0 00-2 2v9a2 2 0 002 2z"/></svg>"#;
const CLOCK_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true"><path d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"#;
const LOCATION_ICON: &str = r#"<svg class="icon" data-testid="location-icon" viewBox="0 0 24 24" aria-hidden="true"><path d="M17.657 16.657L13.414 20.9a2 2 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"/></svg>"#;
const EMAIL_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true"><path d="M3 8l7.89 4.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"/></svg>"#;
const PHONE_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true"><path d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"/></svg>"#;
const ORGANIZER_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true"><path d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"/></svg>"#;

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn document(main: &str, refresh: bool) -> String {
    let refresh = if refresh {
        r#"<meta http-equiv="refresh" content="1">"#
    } else {
        ""
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{refresh}<title>{DOCUMENT_TITLE}</title>
</head>
<body>
<main role="main">
{main}
</main>
</body>
</html>
"#
    )
}

fn spinner(label: &str) -> String {
    format!(
        r#"<div class="loading" role="status" aria-live="polite"><div class="animate-spin"></div><p>{}</p></div>"#,
        escape(label)
    )
}

pub fn list_page(state: &ListState) -> String {
    let body = match state {
        ListState::Loading => spinner("Loading meetups..."),
        ListState::Empty => r#"<div class="glass-effect empty-state"><p>No upcoming meetups</p></div>"#
            .to_string(),
        ListState::Populated(_) => {
            let cards: Vec<String> = state.cards().iter().map(card).collect();
            format!(r#"<div class="card-grid">{}</div>"#, cards.join("\n"))
        }
    };
    let main = format!(
        r#"<header class="hero"><h1>{LIST_HEADING}</h1><p>Discover upcoming software testing events</p></header>
{body}"#
    );
    document(&main, matches!(state, ListState::Loading))
}

fn card(card: &Card) -> String {
    let summary = &card.summary;
    let title = escape(&summary.title);
    format!(
        r#"<a href="{href}" data-testid="meetup-card" role="link" tabindex="0" class="meetup-card card-hover transition {category}" aria-label="View details for {title}">
<h2>{title}</h2>
<p class="event-date">{CALENDAR_ICON}{date}</p>
<p class="event-time">{CLOCK_ICON}{time}</p>
<p class="event-venue">{LOCATION_ICON}{venue}</p>
<p class="event-summary">{short}</p>
</a>"#,
        href = escape(&card.route().path()),
        category = card.category.css_class(),
        date = escape(&format_long_date(summary.date)),
        time = escape(&summary.time),
        venue = escape(&summary.venue),
        short = escape(&summary.short_description),
    )
}

pub fn detail_page(state: &DetailState) -> String {
    let (main, refresh) = match state {
        DetailState::Loading => (spinner("Loading event..."), true),
        DetailState::Found(event) => (event_detail(event), false),
        DetailState::NotFound => (not_found(state), false),
    };
    document(&main, refresh)
}

fn back_link(route: &Route, label: &str) -> String {
    format!(
        r#"<a href="{}" role="button" class="back-button glass-effect transition">{}</a>"#,
        escape(&route.path()),
        escape(label)
    )
}

fn event_detail(event: &EventDetail) -> String {
    let phone = event
        .tel_href()
        .zip(event.organizer_phone.as_deref())
        .map(|(href, phone)| {
            format!(
                r#"<p class="organizer-phone">{PHONE_ICON}<a href="{}">{}</a></p>"#,
                escape(&href),
                escape(phone)
            )
        })
        .unwrap_or_default();

    format!(
        r#"{back}
<article class="event-detail">
<header class="glass-effect"><h1>{title}</h1></header>
<section class="about"><h2>About This Event</h2><p>{full}</p></section>
<section class="organizer"><h2>Event Organizer</h2>
<p class="organizer-name">{ORGANIZER_ICON}{organizer}</p>
<p class="organizer-email">{EMAIL_ICON}<a href="{mailto}">{email}</a></p>
{phone}</section>
<section class="details"><h2>Event Details</h2>
<p class="event-date">{CALENDAR_ICON}{date}</p>
<p class="event-time">{CLOCK_ICON}{time}</p>
<p class="event-venue">{LOCATION_ICON}{venue}</p>
</section>
<section class="location"><h2>Location</h2><div class="map-placeholder bg-white/20">{map}</div></section>
</article>"#,
        back = back_link(&Route::List, "Back to Events"),
        title = escape(&event.title),
        full = escape(&event.full_description),
        organizer = escape(&event.organizer_name),
        mailto = escape(&event.mailto_href()),
        email = escape(&event.organizer_email),
        date = escape(&format_long_date(event.date)),
        time = escape(&event.time),
        venue = escape(&event.venue),
        map = escape(&event.map_placeholder),
    )
}

fn not_found(state: &DetailState) -> String {
    let recovery = state
        .recovery()
        .map(|route| back_link(&route, "View All Events"))
        .unwrap_or_default();
    format!(
        r#"<div class="glass-effect not-found">
<h1>Event Not Found</h1>
<p>The requested meetup could not be found.</p>
{recovery}
</div>"#
    )
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
