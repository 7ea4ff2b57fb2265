use std::sync::{Arc, Mutex, Weak};

use crate::state::{FilterStateUpdate, GlobalFilterState};

type Listener = Arc<dyn Fn(&GlobalFilterState) + Send + Sync>;

struct Registry {
    state: GlobalFilterState,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Holder of the global filter state with synchronous subscriber fan-out
///
/// One instance is created by the application's composition root and shared
/// (`Arc`) with everything that reads or mutates filter state; there is no
/// static accessor. Listener registrations are keyed by handle, not by
/// callback identity: subscribing the same closure twice yields two
/// independent registrations.
pub struct FilterStateBroadcaster {
    registry: Arc<Mutex<Registry>>,
}

impl FilterStateBroadcaster {
    /// Create a broadcaster holding empty default state
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                state: GlobalFilterState::default(),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Owned snapshot of the current state
    pub fn state(&self) -> GlobalFilterState {
        self.registry.lock().unwrap().state.clone()
    }

    /// Merge a partial update into the state and notify every subscriber
    ///
    /// Each `Some` field of the update replaces the stored field; `None`
    /// fields are left untouched. Subscribers run synchronously, in
    /// subscription order, against a listener snapshot taken before the
    /// first invocation: subscribe/unsubscribe from inside a listener never
    /// skips or duplicates a delivery in the ongoing fan-out. A panicking
    /// listener aborts delivery to the listeners after it.
    pub fn set_state(&self, update: FilterStateUpdate) {
        let (state, listeners) = {
            let mut registry = self.registry.lock().unwrap();

            if let Some(filters) = update.global_filters {
                registry.state.global_filters = filters;
            }
            if let Some(dashboards) = update.selected_dashboards {
                registry.state.selected_dashboards = dashboards;
            }

            let snapshot: Vec<Listener> = registry
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (registry.state.clone(), snapshot)
        };

        tracing::debug!(
            filters = state.global_filters.len(),
            dashboards = state.selected_dashboards.len(),
            listeners = listeners.len(),
            "filter state changed"
        );

        // The lock is released before fan-out so listeners may re-enter
        // state()/subscribe()/unsubscribe() without deadlocking.
        for listener in listeners {
            listener(&state);
        }
    }

    /// Register a listener invoked on every future `set_state`
    ///
    /// Dropping the returned handle does not deregister; call
    /// [`Subscription::unsubscribe`] to stop receiving notifications.
    pub fn subscribe(
        &self,
        listener: impl Fn(&GlobalFilterState) + Send + Sync + 'static,
    ) -> Subscription {
        let mut registry = self.registry.lock().unwrap();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }
}

impl Default for FilterStateBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for one listener registration
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Deregister the listener behind this handle
    ///
    /// A no-op if the broadcaster is already gone.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap();
            registry.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
