//! Core UI functionality for the slider application.
//!
//! This module contains the building blocks every component relies on:
//! the component trait, the actions components hand back to the app, the
//! named-event registry used for change notifications and the terminal
//! event source that drives the main loop.
//!
//! # Module Components
//!
//! - [`actions`] - Messages flowing from components to the application
//! - [`component`] - Base component trait and rendering abstraction
//! - [`event_handler`] - Terminal input polling and tick generation
//! - [`events`] - Named-event subscription registry ([`EventBus`])

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod events;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use events::{EventBus, Handler};
