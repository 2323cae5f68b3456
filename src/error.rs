// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error types for the protocol clients and the controller.
//!
//! Module replies that are merely "not ready yet" are never errors; they are retried. Only a
//! broken transport or an exhausted bounded retry policy surfaces here.

use core::fmt;

/// Result type for core operations over a port with error type `E`.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Polling loops that may be bounded by [`crate::RetryPolicy`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    /// `AT` / `OK` handshake with the Bluetooth module.
    BtConnect,
    /// Waiting for the speech module to report idle after power-up.
    T2sInit,
    /// Waiting for the speech module to confirm a stop command.
    T2sStop,
}

/// Core error, generic over the hardware port's error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error<E> {
    /// The hardware port failed to send or receive.
    Port(E),
    /// A bounded retry policy ran out before the module answered as expected.
    RetriesExhausted(Operation),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Port(e)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::BtConnect => write!(f, "bluetooth handshake"),
            Operation::T2sInit => write!(f, "speech module init"),
            Operation::T2sStop => write!(f, "speech module stop"),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Port(e) => write!(f, "hardware port error: {:?}", e),
            Error::RetriesExhausted(op) => write!(f, "retries exhausted during {}", op),
        }
    }
}
