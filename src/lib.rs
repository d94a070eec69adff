//! value-slider - a value slider widget for terminal user interfaces
//!
//! This library provides a horizontal slider that can be clicked, dragged
//! and stepped from the keyboard. The slider keeps its value inside
//! `[min, max]`, quantizes pointer input to `step` and notifies
//! subscribers whenever the thumb moves.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`slider`] - Framework-independent state, attributes and value mapping
//! * [`ui`] - Terminal components, including [`ui::components::ValueSlider`]
//! * [`config`] - Application configuration management
//! * [`logger`] - In-memory and file logging

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types for slider operations
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Slider state, attribute parsing and pointer-to-value mapping
pub mod slider;

/// Terminal user interface components and rendering
pub mod ui;

pub use error::{SliderError, SliderResult};
pub use ui::components::ValueSlider;
