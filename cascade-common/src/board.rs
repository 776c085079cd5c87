// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! RP2040 bring-up: clocks, LED outputs, button input and the stage alarm.

use crate::config::XTAL_FREQ_HZ;
use crate::sequencer::{Sequencer, StageTimer};
use embedded_hal::digital::PinState;
use rp2040_hal::{
    clocks::init_clocks_and_plls,
    fugit::MicrosDurationU32,
    gpio::{
        bank0::Gpio5, DynPinId, FunctionSioInput, FunctionSioOutput, Interrupt, Pin, Pins,
        PullDown, PullUp,
    },
    pac,
    timer::{Alarm, Alarm0, ScheduleAlarmError},
    Sio, Timer, Watchdog,
};

/// LED output with its GPIO number erased, so all three share one type.
pub type LedPin = Pin<DynPinId, FunctionSioOutput, PullDown>;
pub type ButtonPin = Pin<Gpio5, FunctionSioInput, PullUp>;
pub type Alarm0Sequencer = Sequencer<LedPin, Alarm0>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// `pac::Peripherals::take` already called.
    PeripheralsTaken,
    /// Crystal or PLL failed to lock.
    Clocks,
    /// Alarm 0 already handed out.
    AlarmUnavailable,
}

pub struct Board {
    pub timer: Timer,
    /// Stage timer; its interrupt is `TIMER_IRQ_0`.
    pub alarm: Alarm0,
    /// Blue, red, green; all low.
    pub leds: [LedPin; 3],
    /// Falling-edge interrupt enabled; its interrupt is `IO_IRQ_BANK0`.
    pub button: ButtonPin,
}

/// Bring up clocks and configure every pin this firmware uses.
///
/// Interrupts are enabled at the peripheral but left masked in the NVIC.
pub fn init_board() -> Result<Board, BoardError> {
    let mut pac = pac::Peripherals::take().ok_or(BoardError::PeripheralsTaken)?;
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .map_err(|_| BoardError::Clocks)?;

    let sio = Sio::new(pac.SIO);
    let pins = Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let leds = [
        pins.gpio11
            .into_push_pull_output_in_state(PinState::Low)
            .into_dyn_pin(),
        pins.gpio12
            .into_push_pull_output_in_state(PinState::Low)
            .into_dyn_pin(),
        pins.gpio13
            .into_push_pull_output_in_state(PinState::Low)
            .into_dyn_pin(),
    ];

    let mut button = pins.gpio5.into_pull_up_input();
    button.clear_interrupt(Interrupt::EdgeLow);
    button.set_interrupt_enabled(Interrupt::EdgeLow, true);

    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let alarm = timer.alarm_0().ok_or(BoardError::AlarmUnavailable)?;

    Ok(Board {
        timer,
        alarm,
        leds,
        button,
    })
}

impl StageTimer for Alarm0 {
    type Error = ScheduleAlarmError;

    fn arm(&mut self, delay_ms: u32) -> Result<(), Self::Error> {
        self.clear_interrupt();
        self.schedule(MicrosDurationU32::millis(delay_ms))?;
        self.enable_interrupt();
        Ok(())
    }

    fn acknowledge(&mut self) {
        self.clear_interrupt();
    }
}
