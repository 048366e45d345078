use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates an input field block with a visual cursor
pub fn create_input_paragraph<'a>(input_buffer: &str, field_title: &str, focused: bool) -> Paragraph<'a> {
    let cursor_char = if focused { "█" } else { "" };
    let input_display = format!("{}{}", input_buffer, cursor_char);

    let border_color = if focused { Color::Yellow } else { Color::Gray };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Creates a bordered block for a composite field (content rendered separately)
pub fn create_field_block<'a>(field_title: &str, focused: bool) -> Block<'a> {
    let border_color = if focused { Color::Yellow } else { Color::Gray };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across the form
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_QUIT: InstructionShortcut = ("Esc", Color::Red, " Quit");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const ENTER_PICK: InstructionShortcut = ("Enter", Color::Green, " Pick");
    pub const ARROWS_SEGMENT: InstructionShortcut = ("←→", Color::Cyan, " Segment");
    pub const ARROWS_ADJUST: InstructionShortcut = ("↑↓", Color::Cyan, " Adjust");
}
