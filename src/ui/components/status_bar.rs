//! Status bar component

use ratatui::{layout::Rect, Frame};

use super::super::app::{App, FocusedField};
use super::common::{create_instructions_paragraph, shortcuts};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let instructions = match app.focused {
            FocusedField::Expiration => vec![
                shortcuts::ARROWS_SEGMENT,
                shortcuts::SEPARATOR,
                shortcuts::ARROWS_ADJUST,
                shortcuts::SEPARATOR,
                shortcuts::ENTER_PICK,
                shortcuts::SEPARATOR,
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                shortcuts::ESC_QUIT,
            ],
            _ => vec![
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                shortcuts::ENTER_SUBMIT,
                shortcuts::SEPARATOR,
                shortcuts::ESC_QUIT,
            ],
        };

        let status_bar = create_instructions_paragraph(&instructions);
        f.render_widget(status_bar, area);
    }
}
