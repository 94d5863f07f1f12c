// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{self, Serial},
};
use stm32f7xx_hal as hal;

use bluecar::{
    drive::{Actuator, MotorChannel, Side},
    hw::{self, ActiveLevel, BoardPins, OutputLine, StatusLed, SysDelay, Usart},
    Config, Controller,
};

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    let config = Config::DEFAULT;

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOB, dp.GPIOD);
    let mut led = StatusLed::new(OutputLine::new(pins.led), ActiveLevel::High);

    // USART2 (Bluetooth module)
    let usart_cfg = serial::Config {
        baud_rate: config.baud_rate.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART2,
        (pins.usart2.tx, pins.usart2.rx),
        &clocks,
        usart_cfg,
    );
    let (mut console, mut rx) = Usart::new(serial);

    // TIM4 PWM and direction lines
    let motors = pins.motors;
    let (left_pwm, right_pwm) = hw::pwm::tim4(
        dp.TIM4,
        (motors.left_pwm, motors.right_pwm),
        &clocks,
        config.pwm_frequency_hz,
    );
    let left = MotorChannel::new(Side::Left, OutputLine::new(motors.left_dir), left_pwm);
    let right = MotorChannel::new(Side::Right, OutputLine::new(motors.right_dir), right_pwm);

    let actuator = match Actuator::new(left, right) {
        Ok(actuator) => actuator,
        Err(e) => {
            defmt::error!("motor init failed: {}", e);
            loop {
                cortex_m::asm::wfi();
            }
        }
    };

    let mut delay = SysDelay::new(cp.SYST, &clocks);
    let mut controller = Controller::new(config, actuator);

    defmt::info!(
        "bluecar ready: {} bps, default speed {}",
        config.baud_rate,
        config.default_speed
    );
    if !config.pacing_covers_byte() {
        defmt::warn!(
            "pacing {} us is shorter than one byte at {} bps, frames may split",
            config.pacing_us,
            config.baud_rate
        );
    }
    console.println("bluecar ready");

    loop {
        let Some(dispatch) = controller.poll(&mut rx, &mut delay, &mut console) else {
            continue;
        };
        led.show(&dispatch);

        match (&dispatch.command, &dispatch.fault) {
            (_, Some(fault)) => {
                defmt::error!("{}", fault);
                if let Some(e) = dispatch.stop_fault {
                    defmt::error!("fallback stop failed: {}, outputs {}", e, dispatch.drive);
                }
            }
            (Err(e), None) => defmt::warn!("frame dropped ({}), stopped", e),
            (Ok(cmd), None) => defmt::debug!(
                "{} -> speed {} duty {}",
                cmd.action,
                dispatch.target_speed,
                dispatch.duty
            ),
        }
    }
}
