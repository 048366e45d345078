//! Inline expiration picker component
//!
//! Renders the candidate cursor with the focused segment highlighted, plus
//! the committed value line. Classification is re-evaluated on every draw,
//! so a candidate that slipped into the past since the last frame shows up
//! as unavailable without any user interaction.

use chrono::{Datelike, Timelike};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::super::app::{App, FocusedField};
use super::common::create_field_block;
use crate::constants::{EXPIRATION_FIELD_ID, LABEL_EXPIRATION, STATUS_CANDIDATE_UNAVAILABLE};
use crate::picker::{Classification, PickerState, Segment};

/// Inline expiration picker component
pub struct PickerField;

impl PickerField {
    /// Render the expiration field
    pub fn render(f: &mut Frame, app: &App, rect: Rect) {
        let focused = app.focused == FocusedField::Expiration;
        let block = create_field_block(LABEL_EXPIRATION, focused);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let Some(picker) = app.picker() else {
            // Unbound field falls back to its raw value
            let raw = app
                .form
                .field(EXPIRATION_FIELD_ID)
                .map(|field| field.value.clone())
                .unwrap_or_default();
            f.render_widget(Paragraph::new(raw), inner);
            return;
        };

        let committed_line = match picker.formatted() {
            Some(text) => Line::from(vec![
                Span::styled("Selected: ", Style::default().fg(Color::Gray)),
                Span::styled(text, Style::default().fg(Color::Green)),
            ]),
            None => Line::from(Span::styled(
                "No value selected yet",
                Style::default().fg(Color::DarkGray),
            )),
        };

        let lines = if picker.config().inline {
            vec![cursor_line(picker, focused), committed_line]
        } else {
            // Popup pickers only surface their committed value in the flow
            vec![committed_line]
        };

        f.render_widget(Paragraph::new(lines), inner);
    }
}

/// Build the candidate cursor line with per-segment styling
fn cursor_line(picker: &PickerState, focused: bool) -> Line<'static> {
    let cursor = picker.cursor();
    let config = picker.config();

    let mut parts: Vec<(Option<Segment>, String)> = vec![
        (Some(Segment::Day), format!("{:02}", cursor.day())),
        (None, "-".to_string()),
        (Some(Segment::Month), format!("{:02}", cursor.month())),
        (None, "-".to_string()),
        (Some(Segment::Year), format!("{:04}", cursor.year())),
    ];

    if config.enable_time {
        let (hour_text, meridiem) = if config.time_24hr {
            (format!("{:02}", cursor.hour()), None)
        } else {
            let (pm, hour) = cursor.hour12();
            (format!("{:02}", hour), Some(if pm { " PM" } else { " AM" }))
        };

        parts.push((None, ", ".to_string()));
        parts.push((Some(Segment::Hour), hour_text));
        parts.push((None, ":".to_string()));
        parts.push((Some(Segment::Minute), format!("{:02}", cursor.minute())));

        if config.enable_seconds {
            parts.push((None, ":".to_string()));
            parts.push((Some(Segment::Second), format!("{:02}", cursor.second())));
        }

        if let Some(meridiem) = meridiem {
            parts.push((None, meridiem.to_string()));
        }
    }

    let disabled = picker.classify(cursor) == Classification::Disabled;
    let base = if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans: Vec<Span> = parts
        .into_iter()
        .map(|(segment, text)| {
            let mut style = base;
            if focused && segment == Some(picker.segment()) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            Span::styled(text, style)
        })
        .collect();

    if disabled {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            STATUS_CANDIDATE_UNAVAILABLE,
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}
