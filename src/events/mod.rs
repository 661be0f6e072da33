//! Typed in-process publish/subscribe.
//!
//! One `EventBus<E>` per event type. Delivery is synchronous, in registration
//! order, to the handlers registered at the moment of publishing. Nothing is
//! retained: an event published with no subscribers is simply dropped.

use std::sync::{Arc, Mutex, Weak};

type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Profile data changed on the backend; cached copies should re-fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileChanged;

struct Registry<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
}

pub struct EventBus<E> {
    registry: Arc<Mutex<Registry<E>>>,
}

impl<E: 'static> EventBus<E> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Register a handler. It stays registered until the returned
    /// `Subscription` is dropped or `unsubscribe`d.
    pub fn subscribe<F>(&self, handler: F) -> Subscription<E>
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let mut registry = match self.registry.lock() {
            Ok(registry) => registry,
            Err(poisoned) => poisoned.into_inner(),
        };

        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to current subscribers; returns how many were called
    pub fn publish(&self, event: &E) -> usize {
        // Snapshot so handlers may subscribe or unsubscribe while running
        let handlers: Vec<Handler<E>> = {
            let registry = match self.registry.lock() {
                Ok(registry) => registry,
                Err(poisoned) => poisoned.into_inner(),
            };
            registry.handlers.iter().map(|(_, h)| h.clone()).collect()
        };

        for handler in &handlers {
            handler(event);
        }

        tracing::trace!("Published {} to {} subscriber(s)", std::any::type_name::<E>(), handlers.len());
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        match self.registry.lock() {
            Ok(registry) => registry.handlers.len(),
            Err(poisoned) => poisoned.into_inner().handlers.len(),
        }
    }
}

impl<E: 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

/// Live registration on an `EventBus`; dropping it unsubscribes
pub struct Subscription<E> {
    id: u64,
    registry: Weak<Mutex<Registry<E>>>,
}

impl<E> Subscription<E> {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = match registry.lock() {
                Ok(registry) => registry,
                Err(poisoned) => poisoned.into_inner(),
            };
            registry.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}
