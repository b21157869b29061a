//! Item manager shown once the session is authenticated.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::common::{
    create_input_paragraph, create_instructions_paragraph, create_placeholder_paragraph, shortcuts,
    InstructionShortcut,
};
use super::text_input::TextInput;
use crate::auth::UserIdentity;
use crate::constants::{EMPTY_ITEMS, PLACEHOLDER_NEW_ITEM, TITLE_ADD_ITEM, TITLE_YOUR_ITEMS};
use crate::items::{EditorEvent, ItemEditor};
use crate::ui::core::{Action, Component};

/// Which part of the item manager receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemFocus {
    #[default]
    Input,
    List,
}

pub struct ItemListComponent {
    pub input: TextInput,
    pub scratch: TextInput,
    pub editor: ItemEditor,
    pub user_email: String,
    pub focus: ItemFocus,
    pub selected_index: usize,
    pub list_state: ListState,
    show_numbers: bool,
}

impl ItemListComponent {
    pub fn new(show_numbers: bool) -> Self {
        Self {
            input: TextInput::new(),
            scratch: TextInput::new(),
            editor: ItemEditor::default(),
            user_email: String::new(),
            focus: ItemFocus::Input,
            selected_index: 0,
            list_state: ListState::default(),
            show_numbers,
        }
    }

    pub fn update_data(&mut self, editor: &ItemEditor, user: Option<&UserIdentity>) {
        self.input.sync(editor.draft());
        match editor.edit() {
            Some(edit) => self.scratch.sync(&edit.scratch),
            None => self.scratch.clear(),
        }
        self.editor = editor.clone();
        if let Some(user) = user {
            self.user_email = user.email.clone();
        }
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.editor.is_empty() {
            self.selected_index = 0;
            self.focus = ItemFocus::Input;
            self.list_state.select(None);
            return;
        }

        if let Some(edit) = self.editor.edit() {
            self.selected_index = edit.index;
        }
        if self.selected_index >= self.editor.len() {
            self.selected_index = self.editor.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    fn editing_selected(&self) -> bool {
        self.focus == ItemFocus::List && self.editor.is_editing(self.selected_index)
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Editor(EditorEvent::AddItem),
            KeyCode::Tab | KeyCode::Down => {
                if !self.editor.is_empty() {
                    self.focus = ItemFocus::List;
                }
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ => {
                if self.input.handle_key(key) {
                    Action::Editor(EditorEvent::DraftChanged(self.input.value().to_string()))
                } else {
                    Action::None
                }
            }
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        let index = self.selected_index;
        match key.code {
            KeyCode::Enter => {
                log::debug!("Saving edit of item {}", index);
                Action::Editor(EditorEvent::SaveEdit(index))
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = ItemFocus::Input;
                Action::None
            }
            // Moving the edit to a neighbour discards the unsaved scratch
            KeyCode::Up if index > 0 => Action::Editor(EditorEvent::BeginEdit(index - 1)),
            KeyCode::Down if index + 1 < self.editor.len() => Action::Editor(EditorEvent::BeginEdit(index + 1)),
            // No cancel: leaving edit mode requires saving or editing another item
            KeyCode::Esc => Action::None,
            _ => {
                if self.scratch.handle_key(key) {
                    Action::Editor(EditorEvent::ScratchChanged(self.scratch.value().to_string()))
                } else {
                    Action::None
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.list_state.select(Some(self.selected_index));
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_index + 1 < self.editor.len() {
                    self.selected_index += 1;
                }
                self.list_state.select(Some(self.selected_index));
                Action::None
            }
            KeyCode::Char('e') | KeyCode::Enter => Action::Editor(EditorEvent::BeginEdit(self.selected_index)),
            KeyCode::Char('d') | KeyCode::Delete => Action::Editor(EditorEvent::DeleteItem(self.selected_index)),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('a') => {
                self.focus = ItemFocus::Input;
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn create_list_items(&self) -> Vec<ListItem<'_>> {
        self.editor
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let prefix = if self.show_numbers {
                    format!("{:>3}. ", index + 1)
                } else {
                    "  • ".to_string()
                };

                if self.editor.is_editing(index) {
                    let focused = self.focus == ItemFocus::List;
                    ListItem::new(Line::from(vec![
                        Span::styled(prefix, Style::default().fg(Color::Yellow)),
                        Span::styled("✎ ", Style::default().fg(Color::Yellow)),
                        Span::styled(
                            self.scratch.display(None, focused),
                            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED),
                        ),
                    ]))
                } else {
                    ListItem::new(Line::from(vec![
                        Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                        Span::raw(item.clone()),
                    ]))
                }
            })
            .collect()
    }

    fn instructions(&self) -> Vec<InstructionShortcut> {
        let mut instructions = match self.focus {
            ItemFocus::Input => vec![shortcuts::ENTER_ADD, shortcuts::SEPARATOR, shortcuts::TAB_FOCUS],
            ItemFocus::List if self.editing_selected() => {
                vec![shortcuts::ENTER_SAVE, shortcuts::SEPARATOR, shortcuts::TAB_FOCUS]
            }
            ItemFocus::List => vec![
                shortcuts::NAVIGATE,
                shortcuts::SEPARATOR,
                shortcuts::EDIT,
                shortcuts::SEPARATOR,
                shortcuts::DELETE,
                shortcuts::SEPARATOR,
                shortcuts::TAB_FOCUS,
            ],
        };
        instructions.extend([shortcuts::SEPARATOR, shortcuts::LOGS]);
        instructions
    }
}

impl Component for ItemListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.focus {
            ItemFocus::Input => self.handle_input_key(key),
            ItemFocus::List if self.editing_selected() => self.handle_edit_key(key),
            ItemFocus::List => self.handle_list_key(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        // Starting an edit moves typing into the list
        if let Action::Editor(EditorEvent::BeginEdit(index)) = &action {
            if *index < self.editor.len() {
                self.selected_index = *index;
                self.focus = ItemFocus::List;
            }
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let width = rect.width.min(72);
        let area = Rect::new(rect.x + (rect.width - width) / 2, rect.y, width, rect.height);

        let chunks = Layout::vertical([
            Constraint::Length(2), // welcome
            Constraint::Length(3), // new item input
            Constraint::Min(3),    // items
            Constraint::Length(1), // shortcuts
        ])
        .split(area);

        let welcome = Paragraph::new(format!("Welcome, {}!", self.user_email))
            .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(welcome, chunks[0]);

        let input_focused = self.focus == ItemFocus::Input;
        if self.input.is_empty() && !input_focused {
            f.render_widget(create_placeholder_paragraph(PLACEHOLDER_NEW_ITEM, TITLE_ADD_ITEM), chunks[1]);
        } else {
            f.render_widget(
                create_input_paragraph(self.input.display(None, input_focused), TITLE_ADD_ITEM, input_focused),
                chunks[1],
            );
        }

        let border_color = if self.focus == ItemFocus::List { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ({}) ", TITLE_YOUR_ITEMS, self.editor.len()))
            .style(Style::default().fg(border_color));

        if self.editor.is_empty() {
            let empty = Paragraph::new(EMPTY_ITEMS)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, chunks[2]);
        } else {
            let mut list_state = self.list_state.clone();
            let highlight = if self.focus == ItemFocus::List {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let list = List::new(self.create_list_items())
                .block(block)
                .style(Style::default().fg(Color::White))
                .highlight_style(highlight);

            f.render_stateful_widget(list, chunks[2], &mut list_state);
            self.list_state = list_state;
        }

        f.render_widget(create_instructions_paragraph(&self.instructions()), chunks[3]);
    }
}
