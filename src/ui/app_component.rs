use crate::config::Config;
use crate::constants::{EVENT_CHANGED, TITLE_SLIDER};
use crate::logger::Logger;
use crate::ui::components::{LogPanel, StatusBar, ValueSlider};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use tokio::sync::mpsc;

pub struct AppComponent {
    slider: ValueSlider,
    slider_width: u16,
    logger: Logger,
    slider_action_rx: mpsc::UnboundedReceiver<Action>,
    last_error: Option<String>,
    should_quit: bool,
}

impl AppComponent {
    /// Build the app around a slider configured from `config`.
    ///
    /// The slider's `"changed"` notifications are forwarded over a channel
    /// and picked up by [`AppComponent::drain_slider_actions`].
    pub fn new(config: &Config, logger: Logger) -> anyhow::Result<Self> {
        let (tx, slider_action_rx) = mpsc::unbounded_channel();

        let mut slider = ValueSlider::from_attributes(&config.slider);
        slider.set_mouse_enabled(config.ui.mouse_enabled);
        slider.on(EVENT_CHANGED, move |value| {
            tx.send(Action::ValueChanged(*value))?;
            Ok(())
        });
        if config.ui.focus_on_start {
            slider.on_focus();
        }

        logger.log(format!(
            "Slider ready: {} in [{}, {}] step {}",
            slider.value(),
            slider.min(),
            slider.max(),
            slider.step()
        ));

        // First render records the starting position and announces it.
        slider.update_thumb()?;

        let mut app = Self {
            slider,
            slider_width: config.ui.width,
            logger,
            slider_action_rx,
            last_error: None,
            should_quit: false,
        };
        app.drain_slider_actions();
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn slider(&self) -> &ValueSlider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut ValueSlider {
        &mut self.slider
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply every action queued by slider subscribers. Returns how many were handled.
    pub fn drain_slider_actions(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(action) = self.slider_action_rx.try_recv() {
            self.update(action);
            handled += 1;
        }
        handled
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.logger.log("Global key: quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,
            KeyCode::Char('L') => Action::ClearLogs,
            _ => Action::None,
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let action = self.handle_global_key(key);
        if !action.is_none() {
            return action;
        }
        self.slider.handle_key_events(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        // Pressing anywhere on the slider focuses it, as clicking a focusable control does.
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let hit = self
                .slider
                .layout()
                .and_then(|layout| layout.hit_test(mouse.column, mouse.row))
                .is_some();
            if hit && !self.slider.is_focused() {
                self.slider.on_focus();
            }
        }
        self.slider.handle_mouse_events(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ValueChanged(value) => {
                self.last_error = None;
                self.logger.log(format!("changed → {value}"));
            }
            Action::ToggleFocus => {
                if self.slider.is_focused() {
                    self.slider.on_blur();
                } else {
                    self.slider.on_focus();
                }
            }
            Action::ClearLogs => self.logger.clear(),
            Action::Error(message) => {
                self.logger.error(message.clone());
                self.last_error = Some(message);
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        // Slider box: configured width plus two border columns
        let slider_box = LayoutManager::centered_width(chunks[0], self.slider_width.saturating_add(2));
        let border_color = if self.slider.is_focused() { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(TITLE_SLIDER)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(slider_box);
        f.render_widget(block, slider_box);
        self.slider.render(f, inner);

        LogPanel::render(f, chunks[1], &self.logger);
        StatusBar::render(f, chunks[2], &self.slider, self.last_error.as_deref());
    }
}
