//! HTTP provider for NextAuth-style credential endpoints.
//!
//! The flow mirrors what a browser client does with `redirect: false`:
//! fetch a CSRF token, post the credentials form, then read the session back.
//! A rejected sign-in is reported by the server as an `error` query parameter
//! on the returned url, which is surfaced verbatim.

use async_trait::async_trait;
use reqwest::{redirect::Policy, Client, Url};
use serde::Deserialize;
use std::time::Duration;

use super::{AuthError, AuthProvider, Credentials, Session, SignInOptions, UserIdentity};
use crate::constants::ERROR_CREDENTIALS_SIGNIN;

const SESSION_PATH: &str = "api/auth/session";
const CSRF_PATH: &str = "api/auth/csrf";
const CREDENTIALS_CALLBACK_PATH: &str = "api/auth/callback/credentials";

#[derive(Debug, Deserialize)]
struct CsrfResponse {
    #[serde(rename = "csrfToken")]
    csrf_token: String,
}

#[derive(Debug, Default, Deserialize)]
struct SessionResponse {
    #[serde(default)]
    user: Option<SessionUser>,
}

#[derive(Debug, Deserialize)]
struct SessionUser {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallbackResponse {
    #[serde(default)]
    url: Option<String>,
}

/// Provider talking to a NextAuth-compatible server.
pub struct NextAuthProvider {
    http: Client,
    base_url: Url,
}

impl NextAuthProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthError> {
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url =
            Url::parse(&base).map_err(|e| AuthError::Config(format!("invalid base_url '{}': {}", base_url, e)))?;

        let http = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .map_err(|e| AuthError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        self.base_url
            .join(path)
            .map_err(|e| AuthError::Config(format!("invalid endpoint '{}': {}", path, e)))
    }

    async fn fetch_csrf_token(&self) -> Result<String, AuthError> {
        let response = self
            .http
            .get(self.endpoint(CSRF_PATH)?)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::InvalidResponse(format!("csrf endpoint returned {}", status)));
        }

        let body: CsrfResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(format!("malformed csrf response: {}", e)))?;
        Ok(body.csrf_token)
    }

    async fn fetch_session(&self) -> Result<Option<UserIdentity>, AuthError> {
        let response = self
            .http
            .get(self.endpoint(SESSION_PATH)?)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::InvalidResponse(format!("session endpoint returned {}", status)));
        }

        let body = response.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        parse_session(&body)
    }
}

/// Parse a session endpoint body into the signed-in identity, if any.
///
/// The endpoint answers `{}` (or `null`) when nobody is signed in.
pub fn parse_session(body: &str) -> Result<Option<UserIdentity>, AuthError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let session: Option<SessionResponse> = serde_json::from_str(trimmed)
        .map_err(|e| AuthError::InvalidResponse(format!("malformed session response: {}", e)))?;

    Ok(session
        .and_then(|s| s.user)
        .and_then(|user| user.email.map(|email| UserIdentity { email, name: user.name })))
}

/// Extract the `error` query parameter from a sign-in callback url.
pub fn sign_in_error(callback_url: &str) -> Option<String> {
    let base = Url::parse("http://localhost/").ok()?;
    let url = base.join(callback_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "error")
        .map(|(_, value)| value.into_owned())
}

fn callback_error(body: &str) -> Option<String> {
    let response: CallbackResponse = serde_json::from_str(body).ok()?;
    response.url.as_deref().and_then(sign_in_error)
}

#[async_trait]
impl AuthProvider for NextAuthProvider {
    fn provider_type(&self) -> &str {
        "nextauth"
    }

    async fn get_session(&self) -> Result<Session, AuthError> {
        Ok(match self.fetch_session().await? {
            Some(user) => Session::Authenticated(user),
            None => Session::Unauthenticated,
        })
    }

    async fn verify_credentials(
        &self,
        credentials: Credentials,
        options: SignInOptions,
    ) -> Result<UserIdentity, AuthError> {
        let csrf_token = self.fetch_csrf_token().await?;
        let redirect = if options.redirect { "true" } else { "false" };

        let response = self
            .http
            .post(self.endpoint(CREDENTIALS_CALLBACK_PATH)?)
            .header("Accept", "application/json")
            .form(&[
                ("email", credentials.email.as_str()),
                ("password", credentials.password.as_str()),
                ("csrfToken", csrf_token.as_str()),
                ("redirect", redirect),
                ("json", "true"),
            ])
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AuthError::Network(e.to_string()))?;

        if let Some(error) = callback_error(&body) {
            return Err(AuthError::Credentials(error));
        }
        if !status.is_success() && !status.is_redirection() {
            return Err(AuthError::InvalidResponse(format!("sign-in endpoint returned {}", status)));
        }

        match self.fetch_session().await? {
            Some(user) => Ok(user),
            None => Err(AuthError::Credentials(ERROR_CREDENTIALS_SIGNIN.to_string())),
        }
    }
}
