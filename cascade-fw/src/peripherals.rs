// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! Peripherals owned by the main loop.

use rp2040_hal::Timer;

pub struct Peripherals {
    pub timer: Timer,
}

impl Peripherals {
    pub fn now_us(&self) -> u64 {
        self.timer.get_counter().ticks()
    }
}
