//! Scoped viewer-event subscriptions.
//!
//! Observers tied to a screen's lifetime register a listener and hold the
//! returned [`Subscription`] guard; dropping the guard deregisters the
//! listener, so a registration cannot outlive its screen.

use crate::state::ReportViewMode;
use crate::tab::Tab;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, Weak};

/// A state change announced by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The load phase changed (loading finished, or the record was not found)
    PhaseChanged,

    /// A tab was selected
    TabSelected(Tab),

    /// The map's selected location changed
    LocationSelected(Option<usize>),

    /// The reports view's selected report changed
    ReportSelected(Option<usize>),

    /// The reports view switched between list and preview
    ViewModeChanged(ReportViewMode),
}

type Listener = Box<dyn Fn(&ViewerEvent) + Send>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<u64, Listener>,
}

/// Listener registry for viewer events.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<Registry>>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The listener stays registered until the
    /// returned guard is dropped.
    pub fn subscribe(&self, listener: impl Fn(&ViewerEvent) + Send + 'static) -> Subscription {
        let mut registry = self.inner.lock().expect("event registry poisoned");
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Box::new(listener));

        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().expect("event registry poisoned").listeners.len()
    }

    pub(crate) fn emit(&self, event: &ViewerEvent) {
        let registry = self.inner.lock().expect("event registry poisoned");
        for listener in registry.listeners.values() {
            listener(event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// RAII guard for a registered listener. Deregisters on drop.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.lock() {
                registry.listeners.remove(&self.id);
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
