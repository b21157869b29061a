use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A view that turns key presses into actions and draws itself.
///
/// Components never touch application state directly: they return an
/// [`Action`] and receive fresh data from the app after it has been applied.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// React to an action on its way to the app; return it to pass it on
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
