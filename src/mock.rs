// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Scripted hardware port for host-side testing.
//!
//! Received bytes are queued per channel up front; everything the core does to the hardware is
//! recorded as an [`Event`] in call order. Reading from a channel whose script has run dry returns
//! [`MockError::RxExhausted`], so a test that under-feeds a blocking loop fails instead of hanging.
//!
//! ```ignore
//! use minimech::mock::MockPort;
//! use minimech::{Channel, HardwarePort};
//!
//! let mut port = MockPort::new();
//! port.inject(Channel::Bt, b"OK");
//! port.send_byte(Channel::Bt, b'A').unwrap();
//! assert_eq!(port.recv_byte(Channel::Bt).unwrap(), b'O');
//! assert_eq!(port.sent(Channel::Bt), b"A");
//! ```

use std::collections::VecDeque;

use crate::port::{Channel, HardwarePort, LedColor, MotorSide};

/// Something the core asked the hardware to do.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Init,
    Sent(Channel, u8),
    Received(Channel, u8),
    Led(LedColor, bool),
    Motor(MotorSide, bool),
    Delay(u32),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MockError {
    /// The test did not script enough bytes for this channel.
    RxExhausted(Channel),
}

#[derive(Debug, Default)]
pub struct MockPort {
    bt_rx: VecDeque<u8>,
    t2s_rx: VecDeque<u8>,
    events: Vec<Event>,
    leds: [bool; 4],
    motors: [bool; 2],
}

impl MockPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes that the port will hand out on `channel`.
    pub fn inject(&mut self, channel: Channel, bytes: &[u8]) {
        self.rx_mut(channel).extend(bytes.iter().copied());
    }

    /// Bytes not yet consumed on `channel`.
    pub fn pending(&self, channel: Channel) -> usize {
        match channel {
            Channel::Bt => self.bt_rx.len(),
            Channel::T2s => self.t2s_rx.len(),
        }
    }

    /// All bytes sent on `channel`, in order.
    pub fn sent(&self, channel: Channel) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                Event::Sent(c, b) if c == channel => Some(b),
                _ => None,
            })
            .collect()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Last level written to an LED.
    pub fn led(&self, color: LedColor) -> bool {
        self.leds[color as usize]
    }

    /// Last level written to a motor.
    pub fn motor(&self, side: MotorSide) -> bool {
        self.motors[side as usize]
    }

    pub fn init_count(&self) -> usize {
        self.events.iter().filter(|e| **e == Event::Init).count()
    }

    fn rx_mut(&mut self, channel: Channel) -> &mut VecDeque<u8> {
        match channel {
            Channel::Bt => &mut self.bt_rx,
            Channel::T2s => &mut self.t2s_rx,
        }
    }
}

impl HardwarePort for MockPort {
    type Error = MockError;

    fn init(&mut self) -> Result<(), MockError> {
        self.events.push(Event::Init);
        Ok(())
    }

    fn send_byte(&mut self, channel: Channel, byte: u8) -> Result<(), MockError> {
        self.events.push(Event::Sent(channel, byte));
        Ok(())
    }

    fn recv_byte(&mut self, channel: Channel) -> Result<u8, MockError> {
        let byte = self
            .rx_mut(channel)
            .pop_front()
            .ok_or(MockError::RxExhausted(channel))?;
        self.events.push(Event::Received(channel, byte));
        Ok(byte)
    }

    fn set_led(&mut self, color: LedColor, on: bool) {
        self.leds[color as usize] = on;
        self.events.push(Event::Led(color, on));
    }

    fn set_motor(&mut self, side: MotorSide, on: bool) {
        self.motors[side as usize] = on;
        self.events.push(Event::Motor(side, on));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.push(Event::Delay(ms));
    }
}
