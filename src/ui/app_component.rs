use crate::auth::{AuthProvider, Session};
use crate::config::Config;
use crate::gate::{self, GateEvent, GateState};
use crate::items::{self, EditorEvent, ItemEditor};
use crate::logger::Logger;
use crate::ui::components::{ItemListComponent, LogsComponent, SignInComponent};
use crate::ui::core::{
    actions::Action,
    event_handler::EventType,
    task_manager::{TaskId, TaskManager},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub gate: GateState,
    pub editor: ItemEditor,
}

impl AppState {
    pub fn session(&self) -> &Session {
        &self.gate.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.session.is_authenticated()
    }
}

pub struct AppComponent {
    // Component composition
    sign_in: SignInComponent,
    item_list: ItemListComponent,
    logs: LogsComponent,

    // Application state
    state: AppState,

    // Services
    provider: Arc<dyn AuthProvider>,
    task_manager: TaskManager,
    outcome_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Simple UI state
    should_quit: bool,
    session_check_task: Option<TaskId>,
}

impl AppComponent {
    pub fn new(provider: Arc<dyn AuthProvider>, config: &Config, logger: Logger) -> Self {
        let (task_manager, outcome_rx) = TaskManager::new();

        Self {
            sign_in: SignInComponent::new(config.ui.mask()),
            item_list: ItemListComponent::new(config.ui.show_item_numbers),
            logs: LogsComponent::new(logger.clone()),
            state: AppState::default(),
            provider,
            task_manager,
            outcome_rx,
            logger,
            should_quit: false,
            session_check_task: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Provider calls still in flight
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    pub fn is_logs_visible(&self) -> bool {
        self.logs.is_visible()
    }

    /// Ask the provider for the current session; runs once per view
    pub fn trigger_session_check(&mut self) {
        if self.session_check_task.is_some() || !self.state.gate.session.is_pending() {
            return;
        }
        self.logger.log(format!(
            "AppComponent: Checking session with '{}' provider",
            self.provider.provider_type()
        ));
        let task_id = self.task_manager.spawn_session_check(self.provider.clone());
        self.session_check_task = Some(task_id);
    }

    /// Push the reduced state back into the views
    fn sync_component_data(&mut self) {
        self.sign_in.update_data(&self.state.gate.draft);
        self.item_list
            .update_data(&self.state.editor, self.state.gate.user());
    }

    /// Keys that work in every view: Ctrl+C quits, Ctrl+L toggles the log overlay
    fn handle_global_key(&self, key: KeyEvent) -> Action {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::None;
        }
        match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('l') => Action::ShowLogs(!self.logs.is_visible()),
            _ => Action::None,
        }
    }

    /// Route a key to whichever view the gate currently shows
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.logs.is_visible() {
            let action = self.logs.handle_key_events(key);
            if !action.is_none() {
                return action;
            }
            return self.handle_global_key(key);
        }

        let global_action = self.handle_global_key(key);
        if !global_action.is_none() {
            return global_action;
        }

        match self.state.gate.session {
            Session::Pending => match key.code {
                KeyCode::Esc => Action::Quit,
                _ => Action::None,
            },
            Session::Unauthenticated => self.sign_in.handle_key_events(key),
            Session::Authenticated(_) => self.item_list.handle_key_events(key),
        }
    }

    fn apply_gate_event(&mut self, event: GateEvent) {
        match &event {
            GateEvent::SessionResolved(session) => {
                self.session_check_task = None;
                self.logger.log(format!("Session: resolved as {:?}", session));
            }
            GateEvent::SessionCheckFailed(error) => {
                self.session_check_task = None;
                self.logger.log(format!("Session: check failed: {}", error));
            }
            GateEvent::AuthSucceeded(user) => {
                self.logger.log(format!("Auth: signed in as {}", user.email));
            }
            GateEvent::AuthFailed(error) => {
                self.logger.log(format!("Auth: sign-in rejected: {}", error));
            }
            GateEvent::ToggleMode => {
                self.logger.log(format!(
                    "Auth: switched form to {}",
                    self.state.gate.draft.mode.toggled().title()
                ));
            }
            _ => {}
        }

        let was_authenticated = self.state.is_authenticated();
        let gate = std::mem::take(&mut self.state.gate);
        self.state.gate = gate::reduce(gate, event);

        if !was_authenticated && self.state.is_authenticated() {
            // Every authenticated view starts from an empty list
            self.state.editor = ItemEditor::default();
            self.logger.log("Session: item manager unlocked".to_string());
        }
    }

    /// Apply an action to the gate or the editor; unhandled actions are returned
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.logger.log("App: quit requested".to_string());
                self.should_quit = true;
                Action::None
            }
            Action::Gate(event) => {
                self.apply_gate_event(event);
                Action::None
            }
            Action::SubmitCredentials => {
                if !self.state.gate.is_form_visible() {
                    self.logger.log("Auth: submission ignored, form not active".to_string());
                    return Action::None;
                }
                self.apply_gate_event(GateEvent::SubmitStarted);
                let credentials = self.state.gate.draft.credentials();
                self.logger.log(format!(
                    "Auth: submitting credentials for {} ({} mode)",
                    credentials.email,
                    self.state.gate.draft.mode.title()
                ));
                self.task_manager.spawn_sign_in(self.provider.clone(), credentials);
                Action::None
            }
            Action::Editor(event) => {
                if !self.state.is_authenticated() {
                    return Action::None;
                }
                // Keystrokes in the draft or scratch are not worth an entry
                if !matches!(event, EditorEvent::DraftChanged(_) | EditorEvent::ScratchChanged(_)) {
                    self.logger.log(format!("Items: {:?}", event));
                }
                let editor = std::mem::take(&mut self.state.editor);
                self.state.editor = items::reduce(editor, event);
                Action::None
            }
            other => other,
        }
    }

    /// Collect outcomes reported by finished provider calls
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let outcomes: Vec<Action> = std::iter::from_fn(|| self.outcome_rx.try_recv().ok()).collect();

        for call in self.task_manager.cleanup_finished_tasks() {
            self.logger.log(format!(
                "Provider: '{}' finished in {}ms",
                call.label,
                call.elapsed.as_millis()
            ));
        }

        outcomes
    }

    /// Run an action through the component hierarchy and the app handler
    pub fn dispatch(&mut self, action: Action) -> Action {
        let action = self.update(action);
        let remaining = self.handle_app_action(action);
        self.sync_component_data();
        remaining
    }

    /// Route one terminal event; ticks deliver finished provider calls
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Tick => {
                for action in self.process_background_actions() {
                    self.dispatch(action);
                }
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }

    /// Render the loading indicator shown while the session is pending
    fn render_loading(&self, f: &mut Frame, rect: Rect) {
        use crate::constants::TITLE_LOADING;
        use crate::ui::layout::LayoutManager;
        use ratatui::{
            layout::Alignment,
            style::{Color, Style},
            widgets::{Block, Borders, Clear, Paragraph},
        };

        let popup_area = LayoutManager::centered_fixed(30, 3, rect);
        let content = Paragraph::new(format!("⟳ {}", TITLE_LOADING))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).style(Style::default().fg(Color::Yellow)));

        f.render_widget(Clear, popup_area);
        f.render_widget(content, popup_area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.logs.update(action);
        let action = self.sign_in.update(action);
        self.item_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.state.gate.session {
            Session::Pending => self.render_loading(f, rect),
            Session::Unauthenticated => self.sign_in.render(f, rect),
            Session::Authenticated(_) => self.item_list.render(f, rect),
        }

        // Render log overlay on top if visible
        if self.logs.is_visible() {
            self.logs.render(f, rect);
        }
    }
}
