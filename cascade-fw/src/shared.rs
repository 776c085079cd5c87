// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! State shared between the main loop and the interrupt handlers.

use cascade_common::{Alarm0Sequencer, ButtonPin};
use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};
use critical_section::Mutex;

/// Everything the GPIO and timer interrupts touch.
pub struct Shared {
    pub sequencer: Alarm0Sequencer,
    pub button: ButtonPin,
}

static SHARED: Mutex<RefCell<Option<Shared>>> = Mutex::new(RefCell::new(None));
static TIMER_RUNNING: AtomicBool = AtomicBool::new(false);

/// Publish the shared state (call once, before unmasking interrupts)
pub fn install(shared: Shared) {
    critical_section::with(|cs| {
        SHARED.borrow_ref_mut(cs).replace(shared);
    });
}

/// Run `f` with interrupts disabled. Returns `None` before `install`.
pub fn with_shared<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Shared) -> R,
{
    critical_section::with(|cs| SHARED.borrow_ref_mut(cs).as_mut().map(f))
}

/// The TIMER block is out of reset and counting.
pub fn mark_timer_running() {
    TIMER_RUNNING.store(true, Ordering::Release);
}

/// Microseconds since boot, from the free-running timer; 0 until it runs.
pub fn now_us() -> u64 {
    if !TIMER_RUNNING.load(Ordering::Acquire) {
        return 0;
    }
    // SAFETY: read-only access to TIMERAWH/TIMERAWL, which have no side effects
    let timer = unsafe { &*rp2040_hal::pac::TIMER::ptr() };
    loop {
        let hi = timer.timerawh().read().bits();
        let lo = timer.timerawl().read().bits();
        if timer.timerawh().read().bits() == hi {
            return (u64::from(hi) << 32) | u64::from(lo);
        }
    }
}
