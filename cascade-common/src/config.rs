// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! Fixed pin assignments and timing constants.

/// LED A, first to switch off.
pub const BLUE_LED_GPIO: u8 = 11;
/// LED B.
pub const RED_LED_GPIO: u8 = 12;
/// LED C, last to switch off.
pub const GREEN_LED_GPIO: u8 = 13;
/// Push button, active-low with internal pull-up.
pub const BUTTON_GPIO: u8 = 5;

/// Delay between a press and the first stage, and between consecutive stages.
pub const STAGE_DELAY_MS: u32 = 3000;
/// Main loop idle-wait cadence.
pub const POLL_INTERVAL_MS: u32 = 500;

/// Crystal on the Pico board.
pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Lamp test at boot: number of flashes and half-period.
pub const LAMP_TEST_FLASHES: u32 = 2;
pub const LAMP_TEST_PERIOD_MS: u32 = 150;
