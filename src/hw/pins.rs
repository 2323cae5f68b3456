// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the MiniMech STM32F767ZI board.
//!
//! | Function | Pins |
//! | -------- | ---- |
//! | Bluetooth (USART2) | PD5 TX, PD6 RX |
//! | Text-to-speech (USART6) | PC6 TX, PC7 RX |
//! | Debug terminal (USART3, ST-LINK) | PD8 TX, PD9 RX |
//! | LEDs | green PB0, blue PB7, red PB14, orange PE2 |
//! | Motors | left PE9, right PE11 |

use stm32f7xx_hal::{
    gpio::{gpiob, gpioc, gpiod, gpioe, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOB, dp.GPIOC, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub motors: MotorPins,
    pub bt: BtPins,
    pub t2s: T2sPins,
    pub console: ConsolePins,
}

pub struct LedPins {
    pub green: gpiob::PB0<Output<PushPull>>,  // LD1
    pub blue: gpiob::PB7<Output<PushPull>>,   // LD2
    pub red: gpiob::PB14<Output<PushPull>>,   // LD3
    pub orange: gpioe::PE2<Output<PushPull>>, // external
}

pub struct MotorPins {
    pub left: gpioe::PE9<Output<PushPull>>,
    pub right: gpioe::PE11<Output<PushPull>>,
}

pub struct BtPins {
    pub tx: gpiod::PD5<Alternate<7>>,
    pub rx: gpiod::PD6<Alternate<7>>,
}

pub struct T2sPins {
    pub tx: gpioc::PC6<Alternate<8>>,
    pub rx: gpioc::PC7<Alternate<8>>,
}

pub struct ConsolePins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpiob: pac::GPIOB, gpioc: pac::GPIOC, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            leds: LedPins {
                green: gpiob.pb0.into_push_pull_output(),
                blue: gpiob.pb7.into_push_pull_output(),
                red: gpiob.pb14.into_push_pull_output(),
                orange: gpioe.pe2.into_push_pull_output(),
            },

            motors: MotorPins {
                left: gpioe.pe9.into_push_pull_output(),
                right: gpioe.pe11.into_push_pull_output(),
            },

            bt: BtPins {
                tx: gpiod.pd5.into_alternate::<7>(),
                rx: gpiod.pd6.into_alternate::<7>(),
            },

            t2s: T2sPins {
                tx: gpioc.pc6.into_alternate::<8>(),
                rx: gpioc.pc7.into_alternate::<8>(),
            },

            console: ConsolePins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },
        }
    }
}
