// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! Diagnostic output for sequencer status changes.

use crate::peripherals::Peripherals;
use cascade_common::service::{Event, Service, ServiceContext};
use core::cell::Cell;

/// Logs status changes, with the time since the sequence started.
pub struct StatusReportService {
    started_us: Cell<Option<u64>>,
}

impl StatusReportService {
    pub fn new() -> Self {
        Self {
            started_us: Cell::new(None),
        }
    }
}

impl Service<Peripherals> for StatusReportService {
    fn process(&self, ctx: &mut ServiceContext<Peripherals>) {
        let now = ctx.peripherals.now_us();

        ctx.events.consume(|event| match *event {
            Event::StatusChanged(status) => {
                if status.busy {
                    let since = self.started_us.get().unwrap_or(now);
                    self.started_us.set(Some(since));
                    defmt::info!(
                        "Sequence: {:?}, lit {}, +{} ms",
                        status.stage,
                        status.lit,
                        (now - since) / 1000
                    );
                } else {
                    if let Some(since) = self.started_us.take() {
                        defmt::info!("Sequence: complete after {} ms", (now - since) / 1000);
                    }
                    defmt::info!("Idle");
                }
                true
            }
            Event::RearmFailed => {
                defmt::warn!("Sequence: stage timer re-arm failed, retrying");
                true
            }
        });
    }
}
