//! Overlay listing the in-memory log, newest first.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Clear, List, ListItem},
    Frame,
};

use super::common::create_panel_block;
use crate::constants::TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

pub struct LogsComponent {
    pub visible: bool,
    pub scroll_offset: usize,
    logger: Logger,
}

impl LogsComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            visible: false,
            scroll_offset: 0,
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Component for LogsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::ShowLogs(false),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ShowLogs(false),
            KeyCode::Up | KeyCode::Char('k') => Action::LogsScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::LogsScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowLogs(visible) => {
                self.visible = visible;
                self.scroll_offset = 0;
                Action::None
            }
            Action::LogsScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            Action::LogsScrollDown => {
                let total = self.logger.get_logs().len();
                if self.scroll_offset + 1 < total {
                    self.scroll_offset += 1;
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.visible {
            return;
        }

        let area = LayoutManager::centered_rect(85, 80, rect);
        let items: Vec<ListItem> = self
            .logger
            .get_logs()
            .into_iter()
            .skip(self.scroll_offset)
            .map(|entry| ListItem::new(entry).style(Style::default().fg(Color::White)))
            .collect();

        let list = List::new(items).block(create_panel_block(TITLE_LOGS, Color::Magenta));

        f.render_widget(Clear, area);
        f.render_widget(list, area);
    }
}
