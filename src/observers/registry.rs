//! Observer registry.
//!
//! Stores change observers under stable ids and invokes them in
//! registration order. The engine calls `notify` exactly once after each
//! successful mutation.

use rustc_hash::FxHashMap;

use crate::core::GameState;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Create a new subscription ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Something that wants to hear about state changes.
///
/// The notification itself carries nothing but the settled state; observers
/// read whatever they need from it.
pub trait Observer {
    fn state_changed(&mut self, state: &GameState);
}

impl<F> Observer for F
where
    F: FnMut(&GameState),
{
    fn state_changed(&mut self, state: &GameState) {
        self(state)
    }
}

/// Registered observers.
#[derive(Default)]
pub struct ObserverRegistry {
    /// Observers by ID.
    observers: FxHashMap<SubscriptionId, Box<dyn Observer>>,

    /// Registration order.
    order: Vec<SubscriptionId>,

    next_id: u32,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, observer);
        self.order.push(id);
        id
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.observers.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|&other| other != id);
        true
    }

    /// Invoke every observer, oldest subscription first.
    pub fn notify(&mut self, state: &GameState) {
        for id in &self.order {
            if let Some(observer) = self.observers.get_mut(id) {
                observer.state_changed(state);
            }
        }
    }

    /// Number of observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("order", &self.order)
            .field("next_id", &self.next_id)
            .finish()
    }
}
