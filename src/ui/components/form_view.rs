//! Note-composition form component

use ratatui::{layout::Rect, Frame};

use super::super::app::{App, FocusedField};
use super::super::layout::LayoutManager;
use super::common::create_input_paragraph;
use super::picker_field::PickerField;
use crate::constants::{CONTENT_FIELD_ID, SECRET_FIELD_ID};

/// Note-composition form component
pub struct FormView;

impl FormView {
    /// Render the form fields
    pub fn render(f: &mut Frame, app: &App, area: Rect) {
        let rects = LayoutManager::form_layout(area);

        Self::render_text_field(f, app, rects[0], SECRET_FIELD_ID, app.focused == FocusedField::Secret);
        Self::render_text_field(f, app, rects[1], CONTENT_FIELD_ID, app.focused == FocusedField::Content);
        PickerField::render(f, app, rects[2]);
    }

    fn render_text_field(f: &mut Frame, app: &App, rect: Rect, field_id: &str, focused: bool) {
        let Some(field) = app.form.field(field_id) else {
            return;
        };

        // Secrets are masked, everything else renders verbatim
        let display = match field.kind {
            crate::form::FieldKind::Secret => "●".repeat(field.value.chars().count()),
            _ => field.value.clone(),
        };

        let paragraph = create_input_paragraph(&display, &field.label, focused);
        f.render_widget(paragraph, rect);
    }
}
