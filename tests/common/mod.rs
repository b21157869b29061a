#![allow(dead_code)]

use async_trait::async_trait;
use authlist::auth::{AuthError, AuthProvider, Credentials, Session, SignInOptions, UserIdentity};
use authlist::ui::core::EventType;
use authlist::ui::AppComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "hunter2";
pub const REJECTION: &str = "Invalid email or password";

/// In-test authentication provider with a single account
pub struct FakeAuthProvider {
    initial_session: Session,
    session_error: Option<String>,
    verify_calls: AtomicUsize,
    last_options: Mutex<Option<SignInOptions>>,
}

impl FakeAuthProvider {
    pub fn new() -> Self {
        Self {
            initial_session: Session::Unauthenticated,
            session_error: None,
            verify_calls: AtomicUsize::new(0),
            last_options: Mutex::new(None),
        }
    }

    pub fn signed_in(email: &str) -> Self {
        Self {
            initial_session: Session::Authenticated(UserIdentity::new(email)),
            ..Self::new()
        }
    }

    pub fn failing_session(message: &str) -> Self {
        Self {
            session_error: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn verify_count(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }

    pub fn last_options(&self) -> Option<SignInOptions> {
        *self.last_options.lock().unwrap()
    }
}

#[async_trait]
impl AuthProvider for FakeAuthProvider {
    fn provider_type(&self) -> &str {
        "fake"
    }

    async fn get_session(&self) -> Result<Session, AuthError> {
        match &self.session_error {
            Some(message) => Err(AuthError::Network(message.clone())),
            None => Ok(self.initial_session.clone()),
        }
    }

    async fn verify_credentials(
        &self,
        credentials: Credentials,
        options: SignInOptions,
    ) -> Result<UserIdentity, AuthError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_options.lock().unwrap() = Some(options);

        if credentials.email == EMAIL && credentials.password == PASSWORD {
            Ok(UserIdentity::new(credentials.email))
        } else {
            Err(AuthError::Credentials(REJECTION.to_string()))
        }
    }
}

pub fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).unwrap();
    }
}

/// Tick the app until every background call has reported back
pub async fn settle(app: &mut AppComponent) {
    for _ in 0..100 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        app.handle_event(EventType::Tick).unwrap();
        if app.active_task_count() == 0 {
            // Drain anything sent just before the last cleanup
            app.handle_event(EventType::Tick).unwrap();
            return;
        }
    }
    panic!("background tasks did not finish");
}
