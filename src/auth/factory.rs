//! Provider factory for creating authentication providers from configuration.

use anyhow::{anyhow, Result};
use std::sync::Arc;
use std::time::Duration;

use super::{local::LocalAuthProvider, nextauth::NextAuthProvider, AuthProvider};
use crate::config::AuthConfig;

/// Create the provider selected by `config.provider`.
///
/// # Errors
/// Returns error if:
/// - The provider type is unknown
/// - The provider cannot be built from its settings (e.g. a bad `base_url`)
pub fn create_provider(config: &AuthConfig) -> Result<Arc<dyn AuthProvider>> {
    match config.provider.as_str() {
        "local" => {
            let provider = LocalAuthProvider::new(config.accounts.clone());
            if provider.account_count() == 0 {
                log::warn!("Local auth provider has no accounts configured; nobody can sign in");
            }
            Ok(Arc::new(provider))
        }
        "nextauth" => {
            let timeout = Duration::from_secs(config.request_timeout_secs);
            Ok(Arc::new(NextAuthProvider::new(&config.base_url, timeout)?))
        }
        other => Err(anyhow!("Unknown auth provider: {}", other)),
    }
}
