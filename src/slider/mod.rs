//! Framework-independent slider model
//!
//! Everything here is plain data and arithmetic. The terminal widget in
//! [`crate::ui::components::value_slider`] layers input handling, change
//! notification and drawing on top.

pub mod attributes;
pub mod quantize;
pub mod state;

pub use attributes::{Attribute, SliderAttributes};
pub use quantize::map_offset;
pub use state::SliderState;
