// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

#![no_std]
#![no_main]

mod peripherals;
mod services;
mod shared;

use cascade_common::{
    config::{BUTTON_GPIO, LAMP_TEST_FLASHES, LAMP_TEST_PERIOD_MS, POLL_INTERVAL_MS},
    service::{EventBus, Service, ServiceContext},
    Board, EdgeEvents, EdgeOutcome, FireOutcome, Sequencer,
};
use defmt_rtt as _;
use embedded_hal::delay::DelayNs;
use panic_probe as _;
use peripherals::Peripherals;
use rp2040_hal::{
    gpio::Interrupt::EdgeLow,
    pac::{self, interrupt},
};
use services::{SequenceWatchService, StatusReportService};

defmt::timestamp!("{=u64:us}", { shared::now_us() });

use cortex_m_rt::entry;

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

#[entry]
fn main() -> ! {
    defmt::println!("Cascade {} starting", env!("CASCADE_VERSION"));

    let board = match cascade_common::init_board() {
        Ok(board) => board,
        Err(e) => {
            defmt::error!("Board init failed: {:?}", e);
            loop {
                cortex_m::asm::nop();
            }
        }
    };
    shared::mark_timer_running();
    let Board {
        mut timer,
        alarm,
        mut leds,
        button,
    } = board;

    cascade_common::blink(&mut leds[..], &mut timer, LAMP_TEST_FLASHES, LAMP_TEST_PERIOD_MS);

    shared::install(shared::Shared {
        sequencer: Sequencer::new(leds, alarm),
        button,
    });

    // SAFETY: shared state is installed, so both handlers find it
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
    }
    defmt::println!("Ready: press GPIO{} to start", BUTTON_GPIO);

    let events = EventBus::new();
    let mut hw = Peripherals { timer };
    let watch = SequenceWatchService::new();
    let report = StatusReportService::new();
    let services: [&dyn Service<Peripherals>; 2] = [&watch, &report];

    loop {
        let mut ctx = ServiceContext {
            peripherals: &mut hw,
            events: &events,
        };
        for service in services {
            service.process(&mut ctx);
        }
        timer.delay_ms(POLL_INTERVAL_MS);
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    shared::with_shared(|shared| {
        let mut events = EdgeEvents::empty();
        if shared.button.interrupt_status(EdgeLow) {
            events |= EdgeEvents::EDGE_FALL;
        }

        match shared.sequencer.on_edge(BUTTON_GPIO, events) {
            Ok(EdgeOutcome::Started) => defmt::debug!("Button: sequence started"),
            Ok(EdgeOutcome::Dropped) => defmt::debug!("Button: busy, press dropped"),
            Ok(EdgeOutcome::Ignored) => {}
            Err(_) => defmt::warn!("Button: stage timer arm failed"),
        }

        // Always acknowledge, or the edge interrupt keeps firing
        shared.button.clear_interrupt(EdgeLow);
    });
}

#[interrupt]
fn TIMER_IRQ_0() {
    shared::with_shared(|shared| match shared.sequencer.on_timer() {
        Ok(FireOutcome::Advanced {
            extinguished,
            stage,
        }) => defmt::debug!("Timer: {:?} off, now {:?}", extinguished, stage),
        Ok(FireOutcome::Completed { extinguished }) => {
            defmt::debug!("Timer: {:?} off, sequence complete", extinguished)
        }
        Ok(FireOutcome::Spurious) => defmt::trace!("Timer: spurious firing"),
        Err(_) => defmt::warn!("Timer: re-arm failed"),
    });
}
