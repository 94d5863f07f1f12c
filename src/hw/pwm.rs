// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! TIM4 PWM outputs for the two motor channels, using direct PAC register access.
//!
//! CH1 (PD12) drives the left motor, CH2 (PD13) the right. Both run edge-aligned PWM mode 1 at a
//! common frequency; each channel implements `embedded_hal::pwm::SetDutyCycle`.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use stm32f7xx_hal::{
    gpio::{gpiod, Alternate},
    pac,
    rcc::Clocks,
};

/// Output-compare mode: PWM mode 1 (active while CNT < CCR).
const OCM_PWM1: u8 = 0b110;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Channel {
    Ch1,
    Ch2,
}

/// One TIM4 compare channel.
pub struct Tim4Channel {
    ch: Channel,
    max_duty: u16,
}

/// Configure TIM4 CH1/CH2 for PWM at `freq_hz` and hand back the two channels, both at 0% duty.
///
/// The pins are taken to prove they are muxed to AF2.
pub fn tim4(
    tim4: pac::TIM4,
    _pins: (gpiod::PD12<Alternate<2>>, gpiod::PD13<Alternate<2>>),
    clocks: &Clocks,
    freq_hz: u32,
) -> (Tim4Channel, Tim4Channel) {
    let rcc = unsafe { &*pac::RCC::ptr() };
    rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

    let tim = tim4;

    // Disable counter while configuring
    tim.cr1.modify(|_, w| w.cen().clear_bit());

    // Split the period into prescaler and auto-reload so ARR + 1 fits in 16 bits.
    let ticks = clocks.timclk1().raw() / freq_hz.max(1);
    let psc = ticks / 0xFFFF;
    let arr = (ticks / (psc + 1)).saturating_sub(1);
    tim.psc.write(|w| unsafe { w.bits(psc) });
    tim.arr.write(|w| unsafe { w.bits(arr) });

    // PWM mode 1 with preload on CH1/CH2
    tim.ccmr1_output().modify(|_, w| {
        w.oc1m()
            .bits(OCM_PWM1)
            .oc1pe()
            .set_bit()
            .oc2m()
            .bits(OCM_PWM1)
            .oc2pe()
            .set_bit()
    });

    // Start at 0% duty
    tim.ccr1.write(|w| unsafe { w.bits(0) });
    tim.ccr2.write(|w| unsafe { w.bits(0) });

    // Active-high outputs enabled
    tim.ccer.modify(|_, w| {
        w.cc1p()
            .clear_bit()
            .cc2p()
            .clear_bit()
            .cc1e()
            .set_bit()
            .cc2e()
            .set_bit()
    });

    // Latch PSC/ARR, then run with auto-reload preload
    tim.egr.write(|w| w.ug().set_bit());
    tim.cr1.modify(|_, w| w.arpe().set_bit().cen().set_bit());

    // CCR == ARR + 1 is 100% duty in mode 1.
    let max_duty = (arr + 1) as u16;
    (
        Tim4Channel {
            ch: Channel::Ch1,
            max_duty,
        },
        Tim4Channel {
            ch: Channel::Ch2,
            max_duty,
        },
    )
}

impl ErrorType for Tim4Channel {
    type Error = Infallible;
}

impl SetDutyCycle for Tim4Channel {
    #[inline]
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        // Each channel only touches its own CCR register.
        let tim = unsafe { &*pac::TIM4::ptr() };
        let duty = duty.min(self.max_duty) as u32;
        match self.ch {
            Channel::Ch1 => tim.ccr1.write(|w| unsafe { w.bits(duty) }),
            Channel::Ch2 => tim.ccr2.write(|w| unsafe { w.bits(duty) }),
        }
        Ok(())
    }
}
