//! Named-event subscription registry.

use std::collections::HashMap;
use std::fmt;

use crate::error::{SliderError, SliderResult};

/// A subscriber callback. Returning an error stops delivery of the event.
pub type Handler<P> = Box<dyn FnMut(&P) -> anyhow::Result<()>>;

/// Maps event names to the handlers registered for them, in registration
/// order. The same closure logic may be registered more than once; each
/// registration is invoked.
pub struct EventBus<P> {
    listeners: HashMap<String, Vec<Handler<P>>>,
}

impl<P> Default for EventBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for EventBus<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(name, handlers)| (name.as_str(), handlers.len()))
            .collect();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}

impl<P> EventBus<P> {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    /// Register `handler` for `event`. Handlers accumulate.
    pub fn on<F>(&mut self, event: &str, handler: F)
    where
        F: FnMut(&P) -> anyhow::Result<()> + 'static,
    {
        self.listeners.entry(event.to_string()).or_default().push(Box::new(handler));
    }

    /// Remove every handler registered for `event`, returning how many there were.
    pub fn off(&mut self, event: &str) -> usize {
        self.listeners.remove(event).map(|handlers| handlers.len()).unwrap_or(0)
    }

    /// Invoke the handlers for `event` in registration order.
    ///
    /// The first failing handler aborts delivery; later handlers are not run.
    pub fn trigger(&mut self, event: &str, payload: &P) -> SliderResult<()> {
        if let Some(handlers) = self.listeners.get_mut(event) {
            for handler in handlers.iter_mut() {
                handler(payload).map_err(|source| SliderError::Handler {
                    event: event.to_string(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    pub fn handler_count(&self, event: &str) -> usize {
        self.listeners.get(event).map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.values().all(Vec::is_empty)
    }
}
