//! Constants used throughout the application
//!
//! This module centralizes default values, event names, geometry and UI text
//! so the widget, the config layer and the demo app agree on them.

// Slider defaults (used when an attribute is missing or unparsable)
pub const DEFAULT_VALUE: f64 = 0.0;
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 0.01;

// Attribute names
pub const ATTR_VALUE: &str = "value";
pub const ATTR_MIN: &str = "min";
pub const ATTR_MAX: &str = "max";
pub const ATTR_STEP: &str = "step";

// Event names
pub const EVENT_CHANGED: &str = "changed";

/// Step counts closer than this to a whole number are treated as whole
/// before quantizing up.
pub const QUANTIZE_EPSILON: f64 = 1e-9;

// Geometry (terminal cells)
pub const CAP_WIDTH: u16 = 1;
pub const SLIDER_DEFAULT_WIDTH: u16 = 40;
pub const SLIDER_MIN_WIDTH: u16 = 4;
pub const SLIDER_MAX_WIDTH: u16 = 400;

// Slider glyphs
pub const GLYPH_CAP_START: &str = "├";
pub const GLYPH_CAP_END: &str = "┤";
pub const GLYPH_FILLED: &str = "━";
pub const GLYPH_EMPTY: &str = "─";
pub const GLYPH_THUMB: &str = "●";

// UI text
pub const TITLE_SLIDER: &str = " Slider ";
pub const TITLE_LOGS: &str = " Log ";
pub const HINT_KEYS: &str = "←/→ step · Home/End · Tab focus · mouse drag · q quit";

// Config / logging
pub const APP_DIR_NAME: &str = "value-slider";
pub const CONFIG_FILE_NAME: &str = "value-slider.toml";
pub const LOG_FILE_NAME: &str = "value-slider.log";
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";

// Log panel
pub const LOG_PANEL_CAPACITY: usize = 200;
