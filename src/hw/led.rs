// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! State indicator LEDs and motor enable lines.
//!
//! Both are single push-pull GPIO outputs; they only differ in naming at the call site.

use stm32f7xx_hal::gpio::{self, Output, PushPull};

/// State indicator LED, wired active-high.
pub struct Led<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> Led<P, N> {
    /// Take the pin and switch the LED off.
    pub fn new<MODE>(pin: gpio::Pin<P, N, MODE>) -> Self {
        let mut pin = pin.into_push_pull_output();
        pin.set_low();
        Self { pin }
    }

    /// Drive the LED ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}

/// On/off drive line for one motor (high = running).
pub struct MotorSwitch<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> MotorSwitch<P, N> {
    /// Take the pin and stop the motor.
    pub fn new<MODE>(pin: gpio::Pin<P, N, MODE>) -> Self {
        let mut pin = pin.into_push_pull_output();
        pin.set_low();
        Self { pin }
    }

    #[inline]
    pub fn set(&mut self, on: bool) {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}
