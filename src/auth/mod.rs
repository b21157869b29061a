//! Authentication provider abstraction.
//!
//! This module defines the interface the session gate uses to talk to an
//! external authentication service, along with the session and identity types
//! that flow through it. Credential verification and session issuance are
//! entirely the provider's responsibility; the gate only reads the outcome.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod factory;
pub mod local;
pub mod nextauth;

pub use factory::create_provider;
pub use local::{hash_password, LocalAuthProvider};
pub use nextauth::NextAuthProvider;

/// Error types for authentication operations.
///
/// `Credentials` carries the provider's rejection text verbatim so it can be
/// shown to the user unchanged.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Credentials(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Identity of a signed-in user as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl UserIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }
}

/// Tri-state session status.
///
/// `Pending` only exists on the view side until the first provider answer
/// arrives; providers themselves answer with one of the other two.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Pending,
    Unauthenticated,
    Authenticated(UserIdentity),
}

impl Session {
    pub fn is_pending(&self) -> bool {
        matches!(self, Session::Pending)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Email and password pair submitted from the sign-in form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Options accompanying a credential verification request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignInOptions {
    /// Whether the provider may navigate away after signing in.
    pub redirect: bool,
}

impl SignInOptions {
    /// Stay on the current view whatever the outcome.
    pub fn no_redirect() -> Self {
        Self { redirect: false }
    }
}

/// Interface every authentication provider implements.
///
/// Providers are injected into the UI at construction, which keeps the view
/// testable without a live authentication service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns the provider type identifier (e.g., "local", "nextauth").
    fn provider_type(&self) -> &str;

    /// Report the current session. Called once per view load.
    async fn get_session(&self) -> Result<Session, AuthError>;

    /// Verify credentials and, on success, return the signed-in identity.
    async fn verify_credentials(
        &self,
        credentials: Credentials,
        options: SignInOptions,
    ) -> Result<UserIdentity, AuthError>;
}
