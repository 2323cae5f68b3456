// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Robot Control
//!
//! ## Modules
//!
//! - [`context`] - Shared controller state: control signal, phrase store, speak flag.
//! - [`robot_controller`] - The MiniMech state machine and its outer polling loop.

pub mod context;
pub mod robot_controller;

pub use context::{
    ControlSignal, ControllerContext, Phrase, PhraseStore, MAX_PHRASES, MAX_PHRASE_LEN,
};
pub use robot_controller::{Controller, ControllerState};
