//! Reusable UI components

pub mod log_panel;
pub mod status_bar;
pub mod value_slider;

// Component exports
pub use log_panel::LogPanel;
pub use status_bar::StatusBar;
pub use value_slider::{RenderPosition, SliderLayout, ValueSlider};
