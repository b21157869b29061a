//! Reusable UI components

pub mod common;
pub mod text_input;

// Component architecture
pub mod item_list_component;
pub mod logs_component;
pub mod sign_in_component;

// Component exports
pub use item_list_component::{ItemFocus, ItemListComponent};
pub use logs_component::LogsComponent;
pub use sign_in_component::{CredentialField, SignInComponent};
pub use text_input::TextInput;
