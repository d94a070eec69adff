use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{interval, Duration, Interval, MissedTickBehavior};

/// Terminal event source for the main loop.
///
/// Pending terminal input is drained first; when none is waiting the
/// handler sleeps until the next tick.
pub struct EventHandler {
    tick_interval: Interval,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(100)) // 10 Hz for application ticks
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        let mut tick_interval = interval(tick_rate);
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { tick_interval }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(Self::classify(crossterm::event::read()?));
        }

        self.tick_interval.tick().await;
        Ok(EventType::Tick)
    }

    /// Map a raw crossterm event onto the loop's event type.
    pub fn classify(event: Event) -> EventType {
        match event {
            // Key release/repeat reports would double-step the slider.
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Mouse(mouse) => EventType::Mouse(mouse),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
