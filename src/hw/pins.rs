// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the car on an STM32F767ZI devboard.
//!
//! | Signal            | Pin  | Function         |
//! | ----------------- | ---- | ---------------- |
//! | BT module TX → MCU | PD6 | USART2_RX (AF7)  |
//! | MCU → BT module RX | PD5 | USART2_TX (AF7)  |
//! | Left PWM          | PD12 | TIM4_CH1 (AF2)   |
//! | Right PWM         | PD13 | TIM4_CH2 (AF2)   |
//! | Left direction    | PD14 | GPIO output      |
//! | Right direction   | PD15 | GPIO output      |
//! | Status LED        | PB7  | LD2 (blue)       |

use stm32f7xx_hal::{
    gpio::{gpiob, gpiod, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOB, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub led: gpiob::PB7<Output<PushPull>>,
    pub usart2: Usart2Pins,
    pub motors: MotorPins,
}

/// Bluetooth module serial link
pub struct Usart2Pins {
    pub tx: gpiod::PD5<Alternate<7>>,
    pub rx: gpiod::PD6<Alternate<7>>,
}

/// Motor driver inputs: one PWM and one direction line per side
pub struct MotorPins {
    pub left_pwm: gpiod::PD12<Alternate<2>>,  // TIM4_CH1
    pub right_pwm: gpiod::PD13<Alternate<2>>, // TIM4_CH2
    pub left_dir: gpiod::PD14<Output<PushPull>>,
    pub right_dir: gpiod::PD15<Output<PushPull>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpiob: pac::GPIOB, gpiod: pac::GPIOD) -> Self {
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();

        Self {
            led: gpiob.pb7.into_push_pull_output(),

            usart2: Usart2Pins {
                tx: gpiod.pd5.into_alternate::<7>(),
                rx: gpiod.pd6.into_alternate::<7>(),
            },

            motors: MotorPins {
                left_pwm: gpiod.pd12.into_alternate::<2>(),
                right_pwm: gpiod.pd13.into_alternate::<2>(),
                left_dir: gpiod.pd14.into_push_pull_output(),
                right_dir: gpiod.pd15.into_push_pull_output(),
            },
        }
    }
}
