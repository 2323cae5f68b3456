// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! [`HardwarePort`] implementation for the MiniMech STM32F767ZI board.

use cortex_m::delay::Delay;
use stm32f7xx_hal::{
    pac::{USART2, USART6},
    serial,
};

use crate::hw::led::{Led, MotorSwitch};
use crate::hw::pins::{LedPins, MotorPins};
use crate::hw::Usart;
use crate::port::{Channel, HardwarePort, LedColor, MotorSide, MAX_DELAY_MS};

/// Module links, state LEDs, motors and the SysTick delay, bundled behind one port.
pub struct Board {
    bt: Usart<USART2>,
    t2s: Usart<USART6>,

    green: Led<'B', 0>,
    blue: Led<'B', 7>,
    red: Led<'B', 14>,
    orange: Led<'E', 2>,

    left: MotorSwitch<'E', 9>,
    right: MotorSwitch<'E', 11>,

    delay: Delay,
}

impl Board {
    /// Wrap already configured peripherals. LEDs start off and motors stopped.
    pub fn new(
        bt: Usart<USART2>,
        t2s: Usart<USART6>,
        leds: LedPins,
        motors: MotorPins,
        delay: Delay,
    ) -> Self {
        Self {
            bt,
            t2s,
            green: Led::new(leds.green),
            blue: Led::new(leds.blue),
            red: Led::new(leds.red),
            orange: Led::new(leds.orange),
            left: MotorSwitch::new(motors.left),
            right: MotorSwitch::new(motors.right),
            delay,
        }
    }
}

impl HardwarePort for Board {
    type Error = serial::Error;

    fn init(&mut self) -> Result<(), serial::Error> {
        // Clocks and pins are configured before the board is built; start from a known state.
        for color in [
            LedColor::Green,
            LedColor::Blue,
            LedColor::Orange,
            LedColor::Red,
        ] {
            self.set_led(color, false);
        }
        self.set_motor(MotorSide::Left, false);
        self.set_motor(MotorSide::Right, false);
        Ok(())
    }

    fn send_byte(&mut self, channel: Channel, byte: u8) -> Result<(), serial::Error> {
        match channel {
            Channel::Bt => self.bt.write_byte(byte),
            Channel::T2s => self.t2s.write_byte(byte),
        }
        Ok(())
    }

    fn recv_byte(&mut self, channel: Channel) -> Result<u8, serial::Error> {
        match channel {
            Channel::Bt => self.bt.read_byte(),
            Channel::T2s => self.t2s.read_byte(),
        }
    }

    fn set_led(&mut self, color: LedColor, on: bool) {
        match color {
            LedColor::Green => self.green.set(on),
            LedColor::Blue => self.blue.set(on),
            LedColor::Orange => self.orange.set(on),
            LedColor::Red => self.red.set(on),
        }
    }

    fn set_motor(&mut self, side: MotorSide, on: bool) {
        match side {
            MotorSide::Left => self.left.set(on),
            MotorSide::Right => self.right.set(on),
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms.min(MAX_DELAY_MS));
    }
}
