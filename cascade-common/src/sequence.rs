// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! LED identities and the three-stage shutdown table.

use crate::config::{BLUE_LED_GPIO, GREEN_LED_GPIO, RED_LED_GPIO};

/// One of the three sequenced outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// Output A
    Blue,
    /// Output B
    Red,
    /// Output C
    Green,
}

impl Led {
    /// All outputs, in shutdown order.
    pub const ALL: [Led; 3] = [Led::Blue, Led::Red, Led::Green];

    /// Position in the sequencer's pin array.
    pub const fn index(self) -> usize {
        match self {
            Led::Blue => 0,
            Led::Red => 1,
            Led::Green => 2,
        }
    }

    pub const fn gpio(self) -> u8 {
        match self {
            Led::Blue => BLUE_LED_GPIO,
            Led::Red => RED_LED_GPIO,
            Led::Green => GREEN_LED_GPIO,
        }
    }
}

/// Which outputs are still lit during a running sequence.
///
/// There is no separate idle value: once the sequence completes the stage is
/// back at `AllOn` and the sequencer's busy flag is what marks it idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    #[default]
    AllOn,
    TwoRemaining,
    OneRemaining,
}

/// Result of one scheduler firing from a given stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageStep {
    /// Output to drive low.
    pub extinguish: Led,
    pub next: Stage,
    /// The firing ends the sequence; no further stage is armed.
    pub completes: bool,
}

impl Stage {
    pub const fn step(self) -> StageStep {
        match self {
            Stage::AllOn => StageStep {
                extinguish: Led::Blue,
                next: Stage::TwoRemaining,
                completes: false,
            },
            Stage::TwoRemaining => StageStep {
                extinguish: Led::Red,
                next: Stage::OneRemaining,
                completes: false,
            },
            Stage::OneRemaining => StageStep {
                extinguish: Led::Green,
                next: Stage::AllOn,
                completes: true,
            },
        }
    }

    /// Outputs lit while a sequence sits in this stage.
    pub const fn lit(self) -> [bool; 3] {
        match self {
            Stage::AllOn => [true, true, true],
            Stage::TwoRemaining => [false, true, true],
            Stage::OneRemaining => [false, false, true],
        }
    }

    /// Number of outputs still lit.
    pub const fn remaining(self) -> u8 {
        match self {
            Stage::AllOn => 3,
            Stage::TwoRemaining => 2,
            Stage::OneRemaining => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_walk_leds_in_order() {
        let mut stage = Stage::AllOn;
        let mut order = [Led::Green; 3];
        for slot in order.iter_mut() {
            let step = stage.step();
            *slot = step.extinguish;
            stage = step.next;
        }
        assert_eq!(order, Led::ALL);
        assert_eq!(stage, Stage::AllOn);
    }

    #[test]
    fn test_only_last_stage_completes() {
        assert!(!Stage::AllOn.step().completes);
        assert!(!Stage::TwoRemaining.step().completes);
        assert!(Stage::OneRemaining.step().completes);
    }

    #[test]
    fn test_lit_drops_the_extinguished_led() {
        for stage in [Stage::AllOn, Stage::TwoRemaining] {
            let step = stage.step();
            let mut expected = stage.lit();
            expected[step.extinguish.index()] = false;
            assert_eq!(step.next.lit(), expected);
            assert_eq!(step.next.remaining(), stage.remaining() - 1);
        }
    }

    #[test]
    fn test_led_gpio_assignment() {
        assert_eq!(Led::Blue.gpio(), 11);
        assert_eq!(Led::Red.gpio(), 12);
        assert_eq!(Led::Green.gpio(), 13);
    }
}
