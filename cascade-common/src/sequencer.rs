// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! Button-triggered staged shutdown state machine.
//!
//! The sequencer owns the three LED pins and the single stage timer. It is
//! driven from three places:
//! - the GPIO interrupt (`on_edge`) starts a sequence,
//! - the timer interrupt (`on_timer`) switches off one LED per firing,
//! - the main loop (`poll`) re-arms a running sequence whose timer is not
//!   pending.
//!
//! The timer is armed on the idle-to-running transition and re-armed only by
//! `on_timer` after a non-final stage, so at most one deadline is ever pending.

use crate::config::{BUTTON_GPIO, STAGE_DELAY_MS};
use crate::edge::EdgeEvents;
use crate::sequence::{Led, Stage};
use embedded_hal::digital::OutputPin;

/// One-shot deferred callback source used for the stage delays.
pub trait StageTimer {
    type Error;

    /// Schedule one firing `delay_ms` from now, replacing any pending one.
    fn arm(&mut self, delay_ms: u32) -> Result<(), Self::Error>;

    /// Clear the pending interrupt after a firing.
    fn acknowledge(&mut self);
}

/// What a GPIO edge did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Idle to running; all outputs lit.
    Started,
    /// A sequence is already running; the press is discarded.
    Dropped,
    /// Not a falling edge on the button pin.
    Ignored,
}

/// What a timer firing did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FireOutcome {
    /// One LED off; the next stage is armed.
    Advanced { extinguished: Led, stage: Stage },
    /// Last LED off; the sequencer is idle again.
    Completed { extinguished: Led },
    /// Fired with no sequence running.
    Spurious,
}

/// Copyable view of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    pub busy: bool,
    pub stage: Stage,
    /// A stage deadline is pending.
    pub armed: bool,
    /// Output levels, indexed by `Led::index`.
    pub lit: [bool; 3],
}

impl Status {
    pub fn is_lit(&self, led: Led) -> bool {
        self.lit[led.index()]
    }
}

pub struct Sequencer<P, T> {
    leds: [P; 3],
    timer: T,
    busy: bool,
    stage: Stage,
    armed: bool,
}

impl<P, T> Sequencer<P, T>
where
    P: OutputPin,
    T: StageTimer,
{
    /// Take ownership of the outputs (blue, red, green) and the timer.
    /// All outputs are driven low.
    pub fn new(leds: [P; 3], timer: T) -> Self {
        let mut sequencer = Self {
            leds,
            timer,
            busy: false,
            stage: Stage::AllOn,
            armed: false,
        };
        for led in Led::ALL {
            sequencer.set(led, false);
        }
        sequencer
    }

    /// Handle a GPIO interrupt for `gpio` with the given event bits.
    pub fn on_edge(&mut self, gpio: u8, events: EdgeEvents) -> Result<EdgeOutcome, T::Error> {
        if gpio != BUTTON_GPIO || !events.contains(EdgeEvents::EDGE_FALL) {
            return Ok(EdgeOutcome::Ignored);
        }
        self.on_press()
    }

    /// Start a sequence unless one is already running.
    ///
    /// If arming fails the sequence stays busy with no pending deadline, and
    /// the next `poll` retries.
    pub fn on_press(&mut self) -> Result<EdgeOutcome, T::Error> {
        if self.busy {
            #[cfg(feature = "defmt")]
            defmt::debug!("Sequencer: press dropped in {:?}", self.stage);
            return Ok(EdgeOutcome::Dropped);
        }

        self.stage = Stage::AllOn;
        self.busy = true;
        for led in Led::ALL {
            self.set(led, true);
        }
        self.arm()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Sequencer: started");
        Ok(EdgeOutcome::Started)
    }

    /// Handle a stage timer firing.
    pub fn on_timer(&mut self) -> Result<FireOutcome, T::Error> {
        self.timer.acknowledge();
        self.armed = false;

        if !self.busy {
            return Ok(FireOutcome::Spurious);
        }

        let step = self.stage.step();
        self.set(step.extinguish, false);
        self.stage = step.next;

        if step.completes {
            self.busy = false;
            #[cfg(feature = "defmt")]
            defmt::debug!("Sequencer: complete");
            return Ok(FireOutcome::Completed {
                extinguished: step.extinguish,
            });
        }

        self.arm()?;
        Ok(FireOutcome::Advanced {
            extinguished: step.extinguish,
            stage: step.next,
        })
    }

    /// Main-loop supervision: re-arm a running sequence with no pending
    /// deadline. Does nothing while idle.
    pub fn poll(&mut self) -> Result<Status, T::Error> {
        if self.busy && !self.armed {
            #[cfg(feature = "defmt")]
            defmt::warn!("Sequencer: re-arming stage {:?}", self.stage);
            self.arm()?;
        }
        Ok(self.status())
    }

    pub fn status(&self) -> Status {
        Status {
            busy: self.busy,
            stage: self.stage,
            armed: self.armed,
            lit: if self.busy {
                self.stage.lit()
            } else {
                [false; 3]
            },
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Give back the pins and timer.
    pub fn release(self) -> ([P; 3], T) {
        (self.leds, self.timer)
    }

    fn arm(&mut self) -> Result<(), T::Error> {
        self.timer.arm(STAGE_DELAY_MS)?;
        self.armed = true;
        Ok(())
    }

    fn set(&mut self, led: Led, on: bool) {
        let pin = &mut self.leds[led.index()];
        if on {
            pin.set_high().ok();
        } else {
            pin.set_low().ok();
        }
    }
}
