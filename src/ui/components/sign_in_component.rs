//! Credential form shown while the session is unauthenticated.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{create_input_paragraph, create_instructions_paragraph, create_panel_block, shortcuts};
use super::text_input::TextInput;
use crate::constants::{HINT_REQUIRED_FIELD, LABEL_EMAIL, LABEL_PASSWORD};
use crate::gate::{CredentialDraft, GateEvent};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialField {
    #[default]
    Email,
    Password,
}

impl CredentialField {
    fn other(self) -> Self {
        match self {
            CredentialField::Email => CredentialField::Password,
            CredentialField::Password => CredentialField::Email,
        }
    }
}

pub struct SignInComponent {
    pub email: TextInput,
    pub password: TextInput,
    pub focus: CredentialField,
    pub draft: CredentialDraft,
    /// Local required-field message; never sent to the provider
    pub validation_hint: Option<&'static str>,
    mask: char,
}

impl SignInComponent {
    pub fn new(mask: char) -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::new(),
            focus: CredentialField::Email,
            draft: CredentialDraft::default(),
            validation_hint: None,
            mask,
        }
    }

    pub fn update_data(&mut self, draft: &CredentialDraft) {
        self.email.sync(&draft.email);
        self.password.sync(&draft.password);
        self.draft = draft.clone();
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            CredentialField::Email => &mut self.email,
            CredentialField::Password => &mut self.password,
        }
    }

    fn submit(&mut self) -> Action {
        let missing = if self.email.is_empty() {
            Some(CredentialField::Email)
        } else if self.password.is_empty() {
            Some(CredentialField::Password)
        } else {
            None
        };

        match missing {
            Some(field) => {
                self.focus = field;
                self.validation_hint = Some(HINT_REQUIRED_FIELD);
                Action::None
            }
            None => {
                self.validation_hint = None;
                log::info!("Sign-in form submitted for {}", self.email.value());
                Action::SubmitCredentials
            }
        }
    }
}

impl Component for SignInComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::Gate(GateEvent::ToggleMode)
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => {
                let field = self.focus;
                let input = self.focused_input();
                if !input.handle_key(key) {
                    return Action::None;
                }
                let value = input.value().to_string();
                self.validation_hint = None;
                match field {
                    CredentialField::Email => Action::Gate(GateEvent::EmailChanged(value)),
                    CredentialField::Password => Action::Gate(GateEvent::PasswordChanged(value)),
                }
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_fixed(56, 16, rect);
        let mode = self.draft.mode;
        let block = create_panel_block(mode.title(), Color::Blue);
        let inner = block.inner(area);

        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(2), // error
            Constraint::Length(1), // submit
            Constraint::Length(1), // spacer
            Constraint::Length(1), // mode toggle
            Constraint::Min(0),
            Constraint::Length(1), // shortcuts
        ])
        .horizontal_margin(1)
        .split(inner);

        let email_focused = self.focus == CredentialField::Email;
        f.render_widget(
            create_input_paragraph(self.email.display(None, email_focused), LABEL_EMAIL, email_focused),
            chunks[0],
        );
        f.render_widget(
            create_input_paragraph(
                self.password.display(Some(self.mask), !email_focused),
                LABEL_PASSWORD,
                !email_focused,
            ),
            chunks[1],
        );

        if let Some(message) = self.validation_hint.or(self.draft.error.as_deref()) {
            let error = Paragraph::new(message.to_string())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(error, chunks[2]);
        }

        let submit = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" [ {} ]", mode.title()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(submit, chunks[3]);

        let toggle = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", mode.toggle_prompt()), Style::default().fg(Color::Gray)),
            Span::styled("Ctrl+T ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(mode.toggle_label(), Style::default().fg(Color::Blue)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(toggle, chunks[5]);

        f.render_widget(
            create_instructions_paragraph(&[
                shortcuts::TAB_FOCUS,
                shortcuts::SEPARATOR,
                shortcuts::LOGS,
                shortcuts::SEPARATOR,
                shortcuts::QUIT,
            ]),
            chunks[7],
        );
    }
}
