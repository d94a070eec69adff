//! Panel listing the most recent log lines, newest first.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::constants::TITLE_LOGS;
use crate::logger::Logger;

pub struct LogPanel;

impl LogPanel {
    pub fn render(f: &mut Frame, area: Rect, logger: &Logger) {
        let visible = area.height.saturating_sub(2) as usize; // Exclude borders
        let items: Vec<ListItem> = logger
            .get_logs()
            .into_iter()
            .take(visible)
            .map(|line| {
                let color = if line.contains("❌") { Color::Red } else { Color::Gray };
                ListItem::new(line).style(Style::default().fg(color))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(TITLE_LOGS)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(list, area);
    }
}
