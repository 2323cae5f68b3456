// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # MiniMech Firmware
//!
//! This crate contains the control firmware for the MiniMech robot: a two-motor robot steered
//! over a serial Bluetooth link that speaks phrases through an XFS5152 text-to-speech module.
//! The core is hardware independent; the STM32F767 board support lives in [`hw`] and is only
//! built for bare-metal targets.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`port`] | Hardware access trait (byte I/O per channel, LEDs, motors, delay) |
//! | [`protocol`] | Bluetooth (HC-06) and text-to-speech (XFS5152) protocol clients |
//! | [`control`] | Robot state machine and its shared context |
//! | [`config`] | Tunables and retry policy |
//! | [`error`] | Error type shared by the protocol clients and the controller |
//! | `hw` | STM32F767 board wrappers (bare-metal targets only) |
//! | `mock` | Scripted [`HardwarePort`] for tests (`test` or `mock` feature) |
//!
//! ## Getting Started
//!
//! Run the host unit tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(any(test, feature = "mock")), no_std)]

pub mod config;
pub mod control;
pub mod error;
pub mod port;
pub mod protocol;

#[cfg(target_os = "none")]
pub mod hw;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::{Config, RetryPolicy};
pub use control::{ControlSignal, Controller, ControllerContext, ControllerState, PhraseStore};
pub use error::{Error, Operation, Result};
pub use port::{Channel, HardwarePort, LedColor, MotorSide};
