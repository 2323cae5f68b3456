// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # STM32F767 Board Support
//!
//! MCU-level wrappers used by the firmware binary. Only built for bare-metal targets.
//!
//! - [`board`] – [`crate::HardwarePort`] implementation over the wrappers below.
//! - [`led`] – LED and motor GPIO outputs.
//! - [`logger`] – `log` backend on the debug terminal.
//! - [`pins`] – Board pin map.
//! - [`usart`] – Blocking USART byte and string I/O.

pub mod board;
pub mod led;
pub mod logger;
pub mod pins;
pub mod usart;

pub use board::Board;
pub use led::{Led, MotorSwitch};
pub use pins::BoardPins;
pub use usart::Usart;
