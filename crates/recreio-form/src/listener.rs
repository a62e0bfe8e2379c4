//! Listener registry with explicit disposers
//!
//! Handlers are scoped to one control and receive it mutably when an event
//! they subscribe to fires. Registration hands back a [`Disposer`]; one-shot
//! handlers are removed after their first invocation.

use crate::field::{Field, FieldEvent};
use std::fmt;

/// Handler invoked with the control that emitted the event
pub type Handler = Box<dyn FnMut(&mut Field) + Send>;

/// Token that removes a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a listener cannot be removed without its disposer"]
pub struct Disposer(u64);

struct Registration {
    id: u64,
    field: usize,
    events: Vec<FieldEvent>,
    once: bool,
    handler: Handler,
}

/// Listeners registered on the controls of one form
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    registrations: Vec<Registration>,
}

impl Listeners {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `events` on the control at `field`
    ///
    /// A `once` listener fires at most one time, whichever of its events comes first.
    pub fn register(
        &mut self,
        field: usize,
        events: &[FieldEvent],
        once: bool,
        handler: Handler,
    ) -> Disposer {
        self.next_id += 1;
        self.registrations.push(Registration {
            id: self.next_id,
            field,
            events: events.to_vec(),
            once,
            handler,
        });
        Disposer(self.next_id)
    }

    /// Remove a listener; `false` if it already fired or was disposed
    pub fn dispose(&mut self, disposer: Disposer) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.id != disposer.0);
        self.registrations.len() != before
    }

    /// Whether the listener behind `disposer` is still registered
    #[must_use]
    pub fn is_active(&self, disposer: Disposer) -> bool {
        self.registrations.iter().any(|r| r.id == disposer.0)
    }

    /// Number of listeners attached to the control at `field`
    #[must_use]
    pub fn count_for(&self, field: usize) -> usize {
        self.registrations.iter().filter(|r| r.field == field).count()
    }

    /// Total registered listeners
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no listener is registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Deliver `event` from the control at `index`, returning how many handlers ran
    pub fn fire(&mut self, index: usize, event: FieldEvent, field: &mut Field) -> usize {
        let mut fired = 0;
        let mut i = 0;
        while i < self.registrations.len() {
            let registration = &mut self.registrations[i];
            if registration.field == index && registration.events.contains(&event) {
                (registration.handler)(field);
                fired += 1;
                if registration.once {
                    self.registrations.remove(i);
                    continue;
                }
            }
            i += 1;
        }
        fired
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("registered", &self.registrations.len())
            .finish()
    }
}
