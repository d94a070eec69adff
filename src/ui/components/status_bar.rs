//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::HINT_KEYS;
use crate::ui::components::ValueSlider;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown on the left of the status bar.
    #[must_use]
    pub fn readout(slider: &ValueSlider) -> String {
        format!(
            "value {} · range [{}, {}] · step {}",
            slider.value(),
            slider.min(),
            slider.max(),
            slider.step()
        )
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, slider: &ValueSlider, error: Option<&str>) {
        let (status_text, status_color) = match error {
            Some(message) => (format!("❌ {message}"), Color::Red),
            None => (Self::readout(slider), if slider.is_focused() { Color::Cyan } else { Color::Gray }),
        };

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(status_color)),
            Span::raw("  "),
            Span::styled(HINT_KEYS, Style::default().fg(Color::DarkGray)),
        ]);

        let status_bar = Paragraph::new(line).block(Block::default()).alignment(Alignment::Center);

        f.render_widget(status_bar, area);
    }
}
