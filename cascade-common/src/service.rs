// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! Main-loop services and the event bus they share.

use crate::sequencer::Status;
use core::cell::RefCell;
use heapless::Vec;

const EVENT_CAPACITY: usize = 8;

/// Events that can be sent between services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// The sequencer snapshot differs from the previous loop iteration
    StatusChanged(Status),
    /// A running sequence could not arm its stage timer
    RearmFailed,
}

/// Event bus for inter-service communication
pub struct EventBus {
    events: RefCell<Vec<Event, EVENT_CAPACITY>>,
}

impl EventBus {
    pub const fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Publish an event to the bus; dropped when the bus is full
    pub fn publish(&self, event: Event) {
        if self.events.borrow_mut().push(event).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Event bus full, dropping event: {:?}", event);
        }
    }

    /// Consume events matching a filter
    pub fn consume<F>(&self, mut filter: F)
    where
        F: FnMut(&Event) -> bool,
    {
        self.events.borrow_mut().retain(|e| !filter(e));
    }

    /// Check if an event exists without consuming it
    pub fn has_event<F>(&self, filter: F) -> bool
    where
        F: FnMut(&Event) -> bool,
    {
        self.events.borrow().iter().any(filter)
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared context passed to all services
pub struct ServiceContext<'a, P> {
    pub peripherals: &'a mut P,
    pub events: &'a EventBus,
}

/// Trait for services that run in the main loop
pub trait Service<P> {
    /// Process this service's logic
    /// Uses interior mutability (Cell/RefCell) for state changes
    fn process(&self, ctx: &mut ServiceContext<P>);
}
