//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the bordered slider box: one row plus top and bottom borders.
pub const SLIDER_BOX_HEIGHT: u16 = 3;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into slider box, log panel and a one-line status bar.
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SLIDER_BOX_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    }

    /// Horizontally center a box of `width` columns (borders included) in `area`.
    #[must_use]
    pub fn centered_width(area: Rect, width: u16) -> Rect {
        let width = width.min(area.width);
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, area.height)
    }
}
