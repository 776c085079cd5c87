// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! Shared logic and board support for the Cascade LED controller.
//!
//! This crate supports both `no_std` (embedded) and `std` (host) environments:
//! - Default: `no_std` mode for embedded targets
//! - `std` feature: Enables `std` support for host tools and tests
//! - `embedded` feature: Enables RP2040 board bring-up (rp2040-hal)
//! - `defmt` feature: Enables `defmt` logging and `defmt::Format` derives

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod config;
pub mod edge;
pub mod sequence;
pub mod sequencer;
pub mod service;

#[cfg(feature = "embedded")]
pub mod board;

// Re-export commonly used types
pub use edge::EdgeEvents;
pub use sequence::{Led, Stage, StageStep};
pub use sequencer::{EdgeOutcome, FireOutcome, Sequencer, StageTimer, Status};

#[cfg(feature = "embedded")]
pub use board::{init_board, Alarm0Sequencer, Board, BoardError, ButtonPin, LedPin};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Flash a group of LEDs together a specified number of times, ending low.
pub fn blink<P: OutputPin>(leds: &mut [P], timer: &mut impl DelayNs, count: u32, period_ms: u32) {
    for _ in 0..count {
        for led in leds.iter_mut() {
            led.set_high().ok();
        }
        timer.delay_ms(period_ms);
        for led in leds.iter_mut() {
            led.set_low().ok();
        }
        timer.delay_ms(period_ms);
    }
}
