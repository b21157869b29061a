//! Constants used throughout the application
//!
//! This module centralizes UI text, messages and other constant values
//! to improve maintainability and consistency.

// Screen titles
pub const TITLE_SIGN_IN: &str = "Sign In";
pub const TITLE_SIGN_UP: &str = "Sign Up";
pub const TITLE_ADD_ITEM: &str = "Add New Item";
pub const TITLE_YOUR_ITEMS: &str = "Your Items";
pub const TITLE_LOADING: &str = "Loading...";
pub const TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'Ctrl+L' to close";

// Sign-in form
pub const LABEL_EMAIL: &str = "Email";
pub const LABEL_PASSWORD: &str = "Password";
pub const PROMPT_NO_ACCOUNT: &str = "Don't have an account?";
pub const PROMPT_HAVE_ACCOUNT: &str = "Already have an account?";
pub const HINT_REQUIRED_FIELD: &str = "Please fill out this field.";

// Item manager
pub const PLACEHOLDER_NEW_ITEM: &str = "Enter new item";
pub const EMPTY_ITEMS: &str = "No items yet";

// Error Messages
/// Text reported when a credentials sign-in is rejected.
pub const ERROR_CREDENTIALS_SIGNIN: &str = "CredentialsSignin";
pub const ERROR_SESSION_CHECK_FAILED: &str = "❌ Failed to check session";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

/// Character drawn at the text cursor position in input fields
pub const INPUT_CURSOR: char = '█';

/// Default character used to mask the password field
pub const DEFAULT_MASK_CHAR: &str = "•";

/// Maximum number of in-memory log entries kept for the log overlay
pub const MAX_LOG_ENTRIES: usize = 1000;
