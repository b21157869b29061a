//! Core UI functionality for authlist.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, actions, the component abstraction, and background
//! task management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions flowing between components and the app
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal input polling and tick generation
//! - [`task_manager`] - Background authentication calls
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. Key presses become **Actions**
//! 3. The app feeds actions to the gate and item reducers
//! 4. Provider calls run through the [`TaskManager`] and come back as actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{FinishedCall, TaskId, TaskManager};
