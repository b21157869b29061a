//! Session gate state machine.
//!
//! The gate decides which view is visible: a loading screen while the initial
//! session check is pending, the credential form while unauthenticated, and
//! the item manager once authenticated. All transitions go through
//! [`reduce`], a plain `(state, event) -> state` function, so the gate can be
//! exercised without a terminal or a live provider.
//!
//! ```text
//! Pending ──SessionResolved──▶ Unauthenticated ──AuthSucceeded──▶ Authenticated
//!    │                                                               ▲
//!    └──────────────────────SessionResolved(user)────────────────────┘
//! ```
//!
//! `Authenticated` is terminal: events arriving afterwards, such as a late
//! failure from an earlier submission, leave the state untouched.

use std::fmt;

use crate::auth::{Credentials, Session, UserIdentity};
use crate::constants::{PROMPT_HAVE_ACCOUNT, PROMPT_NO_ACCOUNT, TITLE_SIGN_IN, TITLE_SIGN_UP};

/// Presentation mode of the credential form.
///
/// Sign-up only changes the labels; submission always verifies credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    /// Form title and submit label
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => TITLE_SIGN_IN,
            AuthMode::SignUp => TITLE_SIGN_UP,
        }
    }

    /// Question shown next to the mode toggle
    pub fn toggle_prompt(self) -> &'static str {
        match self {
            AuthMode::SignIn => PROMPT_NO_ACCOUNT,
            AuthMode::SignUp => PROMPT_HAVE_ACCOUNT,
        }
    }

    /// Label of the mode the toggle switches to
    pub fn toggle_label(self) -> &'static str {
        self.toggled().title()
    }
}

/// Transient contents of the credential form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
    pub error: Option<String>,
}

impl CredentialDraft {
    /// Both required fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

impl fmt::Debug for CredentialDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialDraft")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("mode", &self.mode)
            .field("error", &self.error)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateState {
    pub session: Session,
    pub draft: CredentialDraft,
}

impl GateState {
    pub fn user(&self) -> Option<&UserIdentity> {
        self.session.user()
    }

    pub fn is_form_visible(&self) -> bool {
        matches!(self.session, Session::Unauthenticated)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEvent {
    /// The provider answered the initial session check
    SessionResolved(Session),
    /// The initial session check failed; the message is shown on the form
    SessionCheckFailed(String),
    EmailChanged(String),
    PasswordChanged(String),
    ToggleMode,
    /// A submission is about to be sent; clears the previous error
    SubmitStarted,
    AuthSucceeded(UserIdentity),
    /// The provider rejected a submission with this message
    AuthFailed(String),
}

/// Apply one event to the gate state.
pub fn reduce(mut state: GateState, event: GateEvent) -> GateState {
    if state.session.is_authenticated() {
        return state;
    }

    match event {
        GateEvent::SessionResolved(session) => {
            if state.session.is_pending() {
                state.session = match session {
                    Session::Pending => Session::Unauthenticated,
                    resolved => resolved,
                };
            }
        }
        GateEvent::SessionCheckFailed(message) => {
            if state.session.is_pending() {
                state.session = Session::Unauthenticated;
                state.draft.error = Some(message);
            }
        }
        GateEvent::EmailChanged(email) => state.draft.email = email,
        GateEvent::PasswordChanged(password) => state.draft.password = password,
        GateEvent::ToggleMode => state.draft.mode = state.draft.mode.toggled(),
        GateEvent::SubmitStarted => state.draft.error = None,
        GateEvent::AuthSucceeded(user) => {
            if matches!(state.session, Session::Unauthenticated) {
                state.session = Session::Authenticated(user);
            }
        }
        GateEvent::AuthFailed(message) => {
            if matches!(state.session, Session::Unauthenticated) {
                state.draft.error = Some(message);
            }
        }
    }

    state
}
