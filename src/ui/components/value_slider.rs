//! Horizontal value slider component.
//!
//! The slider occupies a single row: a one-cell cap at each end and the
//! track in between. Pressing a cap jumps to `min`/`max`; pressing or
//! dragging on the track maps the column to a quantized value. While
//! focused, arrow keys step the value and Home/End jump to the bounds.
//!
//! Every state write is followed by [`ValueSlider::update_thumb`], which
//! fires the `"changed"` event when the thumb position moved.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::{
    CAP_WIDTH, EVENT_CHANGED, GLYPH_CAP_END, GLYPH_CAP_START, GLYPH_EMPTY, GLYPH_FILLED, GLYPH_THUMB,
};
use crate::error::SliderResult;
use crate::slider::attributes::{format_number, parse_attribute, Attribute, SliderAttributes};
use crate::slider::quantize::{map_offset, round_to, step_decimals};
use crate::slider::SliderState;
use crate::ui::core::{Action, Component, EventBus};

/// Precision cap when stepping; enough to keep any intended decimals.
const STEP_MAX_DECIMALS: usize = 12;

/// Result of recomputing the thumb position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPosition {
    /// Thumb offset along the track, in `[0, 1]`.
    pub fraction: f64,
    /// Whether the offset differed from the previous render (and `"changed"` fired).
    pub changed: bool,
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    TrackStart,
    /// `offset` is measured from the first track cell; `width` is the
    /// mappable span (`cells - 1`).
    Track { offset: f64, width: f64 },
    TrackEnd,
}

/// Cell geometry of a slider drawn into `area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderLayout {
    pub start_cap: Rect,
    pub track: Rect,
    pub end_cap: Rect,
}

impl SliderLayout {
    pub fn new(area: Rect) -> Self {
        let height = area.height.min(1);
        let start_width = CAP_WIDTH.min(area.width);
        let end_width = CAP_WIDTH.min(area.width - start_width);
        let track_width = area.width - start_width - end_width;

        Self {
            start_cap: Rect::new(area.x, area.y, start_width, height),
            track: Rect::new(area.x + start_width, area.y, track_width, height),
            end_cap: Rect::new(area.x + start_width + track_width, area.y, end_width, height),
        }
    }

    /// Distance between the first and the last track cell.
    pub fn track_span(&self) -> f64 {
        f64::from(self.track.width.saturating_sub(1))
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<Region> {
        if contains(self.start_cap, column, row) {
            Some(Region::TrackStart)
        } else if contains(self.end_cap, column, row) {
            Some(Region::TrackEnd)
        } else if contains(self.track, column, row) {
            Some(Region::Track {
                offset: f64::from(column - self.track.x),
                width: self.track_span(),
            })
        } else {
            None
        }
    }

    /// Column of the thumb for a fractional position.
    pub fn thumb_column(&self, fraction: f64) -> u16 {
        let cells = (fraction * self.track_span()).round() as u16;
        self.track.x + cells.min(self.track.width.saturating_sub(1))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[derive(Debug)]
pub struct ValueSlider {
    state: SliderState,
    last_position: Option<f64>,
    events: EventBus<f64>,
    focused: bool,
    mouse_enabled: bool,
    layout: Option<SliderLayout>,
}

impl Default for ValueSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueSlider {
    /// A slider with `min = 0`, `max = 100`, `step = 0.01`, `value = 0`.
    pub fn new() -> Self {
        Self::from_state(SliderState::default())
    }

    pub fn from_state(state: SliderState) -> Self {
        Self {
            state,
            last_position: None,
            events: EventBus::new(),
            focused: false,
            mouse_enabled: true,
            layout: None,
        }
    }

    pub fn from_attributes(attributes: &SliderAttributes) -> Self {
        Self::from_state(attributes.to_state())
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn value(&self) -> f64 {
        self.state.value()
    }

    pub fn min(&self) -> f64 {
        self.state.min()
    }

    pub fn max(&self) -> f64 {
        self.state.max()
    }

    pub fn step(&self) -> f64 {
        self.state.step()
    }

    /// Clamp and store `value`, then re-render the thumb.
    pub fn set_value(&mut self, value: f64) -> SliderResult<()> {
        self.state.set_value(value);
        self.update_thumb().map(|_| ())
    }

    /// Does not re-clamp the current value.
    pub fn set_min(&mut self, min: f64) -> SliderResult<()> {
        self.state.set_min(min);
        self.update_thumb().map(|_| ())
    }

    /// Does not re-clamp the current value.
    pub fn set_max(&mut self, max: f64) -> SliderResult<()> {
        self.state.set_max(max);
        self.update_thumb().map(|_| ())
    }

    pub fn set_step(&mut self, step: f64) -> SliderResult<()> {
        self.state.set_step(step);
        self.update_thumb().map(|_| ())
    }

    /// Current value of a named attribute, formatted as text.
    pub fn attribute(&self, name: &str) -> SliderResult<String> {
        let value = match parse_attribute(name)? {
            Attribute::Value => self.value(),
            Attribute::Min => self.min(),
            Attribute::Max => self.max(),
            Attribute::Step => self.step(),
        };
        Ok(format_number(value))
    }

    /// Write a named attribute from text. Unparsable text becomes the
    /// attribute's default.
    pub fn set_attribute(&mut self, name: &str, raw: &str) -> SliderResult<()> {
        let attr = parse_attribute(name)?;
        let value = attr.coerce(Some(raw));
        match attr {
            Attribute::Value => self.set_value(value),
            Attribute::Min => self.set_min(value),
            Attribute::Max => self.set_max(value),
            Attribute::Step => self.set_step(value),
        }
    }

    /// Map a pointer offset on a track `track_width` units wide to a value.
    pub fn map_pointer_offset_to_value(&self, offset: f64, track_width: f64) -> SliderResult<f64> {
        map_offset(&self.state, offset, track_width)
    }

    /// Recompute the thumb position and fire `"changed"` if it moved.
    ///
    /// The position is recorded before handlers run, so a failing handler
    /// does not cause the same position to be reported again.
    pub fn update_thumb(&mut self) -> SliderResult<RenderPosition> {
        let fraction = self.state.position();
        let changed = self.last_position != Some(fraction);
        self.last_position = Some(fraction);

        if changed {
            log::debug!("slider moved to {} ({:.4})", self.value(), fraction);
            self.trigger(EVENT_CHANGED, self.value())?;
        }

        Ok(RenderPosition { fraction, changed })
    }

    pub fn on<F>(&mut self, event: &str, handler: F)
    where
        F: FnMut(&f64) -> anyhow::Result<()> + 'static,
    {
        self.events.on(event, handler);
    }

    pub fn off(&mut self, event: &str) -> usize {
        self.events.off(event)
    }

    pub fn trigger(&mut self, event: &str, payload: f64) -> SliderResult<()> {
        self.events.trigger(event, &payload)
    }

    pub fn handler_count(&self, event: &str) -> usize {
        self.events.handler_count(event)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_mouse_enabled(&mut self, enabled: bool) {
        self.mouse_enabled = enabled;
    }

    /// Geometry from the most recent draw, if any.
    pub fn layout(&self) -> Option<SliderLayout> {
        self.layout
    }

    /// Move the value by `steps` increments of `step`.
    ///
    /// Off-grid values stay off-grid: the sum is rounded to the finer of
    /// the value's and the step's precision, capped at 12 decimals, which
    /// only strips binary noise.
    pub fn step_by(&mut self, steps: f64) -> SliderResult<()> {
        let step = self.step();
        let value = self.value();
        let decimals = step_decimals(step).max(step_decimals(value)).min(STEP_MAX_DECIMALS);
        self.set_value(round_to(value + steps * step, decimals))
    }

    /// Apply a pointer press or drag at terminal cell (`column`, `row`).
    ///
    /// Returns `Ok(false)` when the slider has not been drawn yet or the
    /// pointer is outside it.
    pub fn pointer_at(&mut self, column: u16, row: u16, dragging: bool) -> SliderResult<bool> {
        let Some(region) = self.layout.and_then(|layout| layout.hit_test(column, row)) else {
            return Ok(false);
        };

        match region {
            Region::TrackStart if !dragging => self.set_value(self.min())?,
            Region::TrackEnd if !dragging => self.set_value(self.max())?,
            Region::Track { offset, width } => {
                // A single-cell track has nothing to map against.
                if width <= 0.0 {
                    return Ok(false);
                }
                let value = self.map_pointer_offset_to_value(offset, width)?;
                if value != self.value() {
                    self.set_value(value)?;
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn result_to_action(result: SliderResult<()>) -> Action {
        match result {
            Ok(()) => Action::None,
            Err(e) => {
                log::error!("{e}");
                Action::Error(e.to_string())
            }
        }
    }
}

impl Component for ValueSlider {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        let result = match key.code {
            KeyCode::Left | KeyCode::Char('-') => self.step_by(-1.0),
            KeyCode::Right | KeyCode::Char('+') => self.step_by(1.0),
            KeyCode::Home => self.set_value(self.min()),
            KeyCode::End => self.set_value(self.max()),
            _ => return Action::None,
        };
        Self::result_to_action(result)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled {
            return Action::None;
        }

        let dragging = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => false,
            MouseEventKind::Drag(MouseButton::Left) => true,
            _ => return Action::None,
        };
        Self::result_to_action(self.pointer_at(mouse.column, mouse.row, dragging).map(|_| ()))
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = SliderLayout::new(rect);
        self.layout = Some(layout);

        if layout.track.width == 0 || layout.track.height == 0 {
            return;
        }

        let thumb = layout.thumb_column(self.state.position()) - layout.track.x;
        let filled = usize::from(thumb);
        let empty = usize::from(layout.track.width - thumb - 1);

        let accent = if self.focused { Color::Cyan } else { Color::Blue };
        let thumb_style = if self.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let line = Line::from(vec![
            Span::styled(GLYPH_CAP_START, Style::default().fg(Color::DarkGray)),
            Span::styled(GLYPH_FILLED.repeat(filled), Style::default().fg(accent)),
            Span::styled(GLYPH_THUMB, thumb_style),
            Span::styled(GLYPH_EMPTY.repeat(empty), Style::default().fg(Color::DarkGray)),
            Span::styled(GLYPH_CAP_END, Style::default().fg(Color::DarkGray)),
        ]);

        let row = Rect::new(rect.x, rect.y, rect.width, 1);
        f.render_widget(Paragraph::new(line), row);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
