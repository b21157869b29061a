use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Rounded panel with a centered title in the theme color
pub fn create_panel_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Rounded field frame titled with the field label
fn field_block<'a>(field_title: &str, border_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color))
}

/// Text field showing `display`; the border is highlighted when focused
pub fn create_input_paragraph<'a>(display: String, field_title: &str, focused: bool) -> Paragraph<'a> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    Paragraph::new(display)
        .block(field_block(field_title, border_color))
        .style(Style::default().fg(Color::White))
}

/// Dimmed placeholder for an empty, unfocused field
pub fn create_placeholder_paragraph<'a>(placeholder: &'a str, field_title: &str) -> Paragraph<'a> {
    Paragraph::new(placeholder)
        .block(field_block(field_title, Color::Gray))
        .style(Style::default().fg(Color::DarkGray))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// One centered line of color-coded key hints
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let spans: Vec<Span> = instructions
        .iter()
        .flat_map(|&(key, color, desc)| {
            [
                Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(desc, Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Key hints shared by the sign-in form and the item manager
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const TAB_FOCUS: InstructionShortcut = ("Tab", Color::Cyan, " Switch field");
    pub const ENTER_ADD: InstructionShortcut = ("Enter", Color::Green, " Add");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const EDIT: InstructionShortcut = ("e", Color::Yellow, " Edit");
    pub const DELETE: InstructionShortcut = ("d", Color::Red, " Delete");
    pub const NAVIGATE: InstructionShortcut = ("j/k", Color::Cyan, " Move");
    pub const LOGS: InstructionShortcut = ("Ctrl+L", Color::Magenta, " Logs");
    pub const QUIT: InstructionShortcut = ("Esc", Color::Red, " Quit");
}
