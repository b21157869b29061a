//! Local authentication provider backed by configured accounts.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Mutex;

use super::{AuthError, AuthProvider, Credentials, Session, SignInOptions, UserIdentity};
use crate::constants::ERROR_CREDENTIALS_SIGNIN;

/// Hash a password the way account entries in the config file are stored.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Provider that checks credentials against a fixed set of accounts.
///
/// Accounts map an email to the SHA-256 hex digest of its password. The
/// provider remembers the last successful sign-in so `get_session` reports it.
pub struct LocalAuthProvider {
    accounts: HashMap<String, String>,
    current_user: Mutex<Option<UserIdentity>>,
}

impl LocalAuthProvider {
    /// Create a provider from `email -> password hash` pairs.
    pub fn new<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            accounts: accounts
                .into_iter()
                .map(|(email, hash)| (email, hash.to_ascii_lowercase()))
                .collect(),
            current_user: Mutex::new(None),
        }
    }

    /// Create a provider from `email -> plain password` pairs.
    pub fn with_passwords<I, E, P>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (E, P)>,
        E: Into<String>,
        P: AsRef<str>,
    {
        Self::new(
            accounts
                .into_iter()
                .map(|(email, password)| (email.into(), hash_password(password.as_ref()))),
        )
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn get_session(&self) -> Result<Session, AuthError> {
        let current = match self.current_user.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => None,
        };

        Ok(match current {
            Some(user) => Session::Authenticated(user),
            None => Session::Unauthenticated,
        })
    }

    async fn verify_credentials(
        &self,
        credentials: Credentials,
        _options: SignInOptions,
    ) -> Result<UserIdentity, AuthError> {
        let matches = self
            .accounts
            .get(&credentials.email)
            .is_some_and(|stored| *stored == hash_password(&credentials.password));

        if !matches {
            return Err(AuthError::Credentials(ERROR_CREDENTIALS_SIGNIN.to_string()));
        }

        let user = UserIdentity::new(credentials.email);
        if let Ok(mut current) = self.current_user.lock() {
            *current = Some(user.clone());
        }
        Ok(user)
    }
}
