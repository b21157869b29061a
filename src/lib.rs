//! authlist - A terminal sign-in gate in front of a personal item list
//!
//! A user signs in through an external authentication provider, then adds,
//! edits and deletes text items in a list that only lives for the current
//! session. Nothing about the list is persisted.
//!
//! # Modules
//!
//! * [`auth`] - Authentication provider trait and implementations
//! * [`config`] - Application configuration management
//! * [`gate`] - Session gate state machine
//! * [`items`] - Transient item list editor
//! * [`logger`] - In-memory and file logging
//! * [`ui`] - Terminal user interface components

/// Authentication provider abstraction and implementations
pub mod auth;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and UI text
pub mod constants;

/// Session gate state machine
pub mod gate;

/// Item list editor
pub mod items;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;
