// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! Host doubles for the LED pins and the stage timer, plus a simulated clock.

#![allow(dead_code)]

use cascade_common::{EdgeEvents, EdgeOutcome, FireOutcome, Sequencer, StageTimer, Status};
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Output pin whose level stays observable after the sequencer takes it.
#[derive(Clone, Default)]
pub struct MockLed {
    level: Rc<Cell<bool>>,
    writes: Rc<Cell<u32>>,
}

impl MockLed {
    pub fn is_high(&self) -> bool {
        self.level.get()
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl ErrorType for MockLed {
    type Error = Infallible;
}

impl OutputPin for MockLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmRejected;

#[derive(Default)]
pub struct TimerLog {
    /// Delay of every successful arm, in order.
    pub arms: Vec<u32>,
    /// Delay of the last arm not yet picked up by the harness.
    pub fresh: Option<u32>,
    pub acks: u32,
    /// Number of upcoming arm calls to reject.
    pub reject_next: u32,
}

#[derive(Clone, Default)]
pub struct MockTimer {
    pub log: Rc<RefCell<TimerLog>>,
}

impl StageTimer for MockTimer {
    type Error = ArmRejected;

    fn arm(&mut self, delay_ms: u32) -> Result<(), Self::Error> {
        let mut log = self.log.borrow_mut();
        if log.reject_next > 0 {
            log.reject_next -= 1;
            return Err(ArmRejected);
        }
        log.arms.push(delay_ms);
        log.fresh = Some(delay_ms);
        Ok(())
    }

    fn acknowledge(&mut self) {
        self.log.borrow_mut().acks += 1;
    }
}

/// Sequencer wired to mocks and driven by a millisecond clock.
///
/// A single pending deadline is tracked, matching the one hardware alarm.
pub struct Harness {
    pub sequencer: Sequencer<MockLed, MockTimer>,
    pub leds: [MockLed; 3],
    pub timer: MockTimer,
    pub now_ms: u64,
    pub deadline_ms: Option<u64>,
    pub firings: Vec<(u64, FireOutcome)>,
}

impl Harness {
    pub fn new() -> Self {
        let leds: [MockLed; 3] = Default::default();
        let timer = MockTimer::default();
        let sequencer = Sequencer::new(leds.clone(), timer.clone());
        Self {
            sequencer,
            leds,
            timer,
            now_ms: 0,
            deadline_ms: None,
            firings: Vec::new(),
        }
    }

    pub fn levels(&self) -> [bool; 3] {
        [
            self.leds[0].is_high(),
            self.leds[1].is_high(),
            self.leds[2].is_high(),
        ]
    }

    pub fn status(&self) -> Status {
        self.sequencer.status()
    }

    pub fn arm_count(&self) -> usize {
        self.timer.log.borrow().arms.len()
    }

    pub fn reject_next_arms(&self, count: u32) {
        self.timer.log.borrow_mut().reject_next = count;
    }

    pub fn press(&mut self) -> Result<EdgeOutcome, ArmRejected> {
        self.edge(cascade_common::config::BUTTON_GPIO, EdgeEvents::EDGE_FALL)
    }

    pub fn edge(&mut self, gpio: u8, events: EdgeEvents) -> Result<EdgeOutcome, ArmRejected> {
        let outcome = self.sequencer.on_edge(gpio, events);
        self.pick_up_arm();
        outcome
    }

    pub fn poll(&mut self) -> Result<Status, ArmRejected> {
        let status = self.sequencer.poll();
        self.pick_up_arm();
        status
    }

    /// Fire the timer directly, regardless of any deadline.
    pub fn fire(&mut self) -> Result<FireOutcome, ArmRejected> {
        self.deadline_ms = None;
        let outcome = self.sequencer.on_timer();
        self.pick_up_arm();
        outcome
    }

    /// Move the clock to `t_ms`, firing every deadline that falls on or before it.
    pub fn advance_to(&mut self, t_ms: u64) {
        while let Some(deadline) = self.deadline_ms.filter(|&d| d <= t_ms) {
            self.now_ms = deadline;
            self.deadline_ms = None;
            if let Ok(outcome) = self.sequencer.on_timer() {
                self.firings.push((deadline, outcome));
            }
            self.pick_up_arm();
        }
        self.now_ms = t_ms;
    }

    /// Main loop: poll, then wait `interval_ms`, `iterations` times.
    pub fn run_main_loop(&mut self, iterations: u32, interval_ms: u64) {
        for _ in 0..iterations {
            self.poll().ok();
            let next = self.now_ms + interval_ms;
            self.advance_to(next);
        }
    }

    fn pick_up_arm(&mut self) {
        if let Some(delay) = self.timer.log.borrow_mut().fresh.take() {
            self.deadline_ms = Some(self.now_ms + u64::from(delay));
        }
    }
}
