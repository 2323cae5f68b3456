// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hardware access port.
//!
//! Everything the core needs from the MCU goes through [`HardwarePort`]: blocking byte I/O on the
//! two module UARTs, the four state LEDs, the two drive motors and a busy-wait delay. The board
//! implementation lives in `hw::Board`; tests use `mock::MockPort`.

/// Both module links run 9600 baud, 8 data bits, no parity, 1 stop bit.
pub const BAUD_RATE: u32 = 9_600;

/// Longest delay a single [`HardwarePort::delay_ms`] call is expected to honour.
pub const MAX_DELAY_MS: u32 = 1_000;

/// Serial link a byte is sent on or received from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Channel {
    /// HC-06 Bluetooth module.
    Bt,
    /// XFS5152 text-to-speech module.
    T2s,
}

/// State indicator LEDs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LedColor {
    Green,
    Blue,
    Orange,
    Red,
}

/// Drive motors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MotorSide {
    Left,
    Right,
}

/// Narrow hardware interface used by the protocol clients and the controller.
///
/// Channel I/O blocks until the byte is sent or has arrived. An `Err` means the transport itself
/// broke, which the core treats as fatal.
pub trait HardwarePort {
    type Error;

    /// One-shot bring-up, called from the startup state before any module traffic.
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Block until the transmit register is free, then send `byte`.
    fn send_byte(&mut self, channel: Channel, byte: u8) -> Result<(), Self::Error>;

    /// Block until a byte has arrived on `channel` and return it.
    fn recv_byte(&mut self, channel: Channel) -> Result<u8, Self::Error>;

    fn set_led(&mut self, color: LedColor, on: bool);

    fn set_motor(&mut self, side: MotorSide, on: bool);

    /// Busy-wait for `ms` milliseconds (at most [`MAX_DELAY_MS`]).
    fn delay_ms(&mut self, ms: u32);

    /// Send a run of bytes on `channel`, in order.
    fn send_all(&mut self, channel: Channel, bytes: &[u8]) -> Result<(), Self::Error> {
        for &b in bytes {
            self.send_byte(channel, b)?;
        }
        Ok(())
    }
}
