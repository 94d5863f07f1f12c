// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SysTick busy-wait delay exposed through `embedded_hal::delay::DelayNs`.

use cortex_m::{delay::Delay, peripheral::SYST};
use embedded_hal::delay::DelayNs;
use stm32f7xx_hal::rcc::Clocks;

pub struct SysDelay {
    delay: Delay,
}

impl SysDelay {
    /// SysTick delay from cortex-m, clocked from the core clock.
    pub fn new(syst: SYST, clocks: &Clocks) -> Self {
        Self {
            delay: Delay::new(syst, clocks.sysclk().raw()),
        }
    }
}

impl DelayNs for SysDelay {
    /// SysTick resolution is 1 µs; shorter waits round up.
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_us(ns.div_ceil(1_000));
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
