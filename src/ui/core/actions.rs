use crate::gate::GateEvent;
use crate::items::EditorEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Session gate
    Gate(GateEvent),
    SubmitCredentials,

    // Item list
    Editor(EditorEvent),

    // Log overlay
    ShowLogs(bool),
    LogsScrollUp,
    LogsScrollDown,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
