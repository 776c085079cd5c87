// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! Sequencer supervision: re-arms a stalled sequence and publishes changes.

use crate::{peripherals::Peripherals, shared};
use cascade_common::{
    service::{Event, Service, ServiceContext},
    Status,
};
use core::cell::Cell;

pub struct SequenceWatchService {
    last: Cell<Option<Status>>,
}

impl SequenceWatchService {
    pub fn new() -> Self {
        Self {
            last: Cell::new(None),
        }
    }
}

impl Service<Peripherals> for SequenceWatchService {
    fn process(&self, ctx: &mut ServiceContext<Peripherals>) {
        let Some(polled) = shared::with_shared(|shared| {
            shared
                .sequencer
                .poll()
                .map_err(|_| shared.sequencer.status())
        }) else {
            defmt::warn!("Watch: shared state not installed");
            return;
        };

        let status = match polled {
            Ok(status) => status,
            Err(status) => {
                ctx.events.publish(Event::RearmFailed);
                status
            }
        };

        if self.last.get() != Some(status) {
            self.last.set(Some(status));
            ctx.events.publish(Event::StatusChanged(status));
        }
    }
}
