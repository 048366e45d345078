//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (form body on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let screen_width = area.width;
        let screen_height = area.height;

        // Top area: form body (all height except 1 line for status)
        let body_height = screen_height.saturating_sub(1);
        let body_area = Rect::new(area.x, area.y, screen_width, body_height);

        // Bottom area: status bar (1 line height, full width)
        let status_area = Rect::new(area.x, area.y + body_height, screen_width, 1);

        vec![body_area, status_area]
    }

    /// Stack the three form fields inside the body area
    ///
    /// Secret and content are single-line inputs with borders; the
    /// expiration picker gets enough rows for its cursor line and the
    /// committed-value line.
    #[must_use]
    pub fn form_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // secret
                Constraint::Length(3), // content
                Constraint::Length(5), // expiration picker
                Constraint::Min(0),
            ])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle using percentage of available space
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
