// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! HC-06 Bluetooth link used by the MiniMech phone app.
//!
//! The link carries three kinds of traffic, in this order over a session:
//!
//! 1. `AT` / `OK` handshake until the module answers.
//! 2. Phrase upload: NUL-terminated byte strings, ended by an empty phrase (a lone NUL).
//! 3. Motion stream: one byte per loop iteration, `00000XYZ`.
//!
//! Motion byte bits:
//! - X (bit 2): 1 = left, 0 = right
//! - Y (bit 1): 1 = forward, 0 = steer
//! - Z (bit 0): phone jerked downwards, toggles speak mode

use log::{debug, info};

use crate::config::RetryPolicy;
use crate::control::{ControlSignal, Phrase, PhraseStore};
use crate::error::{Operation, Result};
use crate::port::{Channel, HardwarePort};

/// Handshake request.
pub const CMD_AT: &[u8; 2] = b"AT";
/// Handshake reply.
pub const REPLY_OK: &[u8; 2] = b"OK";
/// Ends a phrase; as the first byte of a phrase it ends the upload.
pub const TERMINATOR: u8 = 0x00;

pub const BIT_X: u8 = 1 << 2;
pub const BIT_Y: u8 = 1 << 1;
pub const BIT_Z: u8 = 1 << 0;

/// Decode a motion byte. Z wins over Y, Y over X; with none set the robot steers right.
pub fn decode_motion(byte: u8) -> ControlSignal {
    if byte & BIT_Z != 0 {
        ControlSignal::ModeSwitch
    } else if byte & BIT_Y != 0 {
        ControlSignal::Forward
    } else if byte & BIT_X != 0 {
        ControlSignal::Left
    } else {
        ControlSignal::Right
    }
}

/// Bluetooth protocol client.
#[derive(Copy, Clone, Debug)]
pub struct Bluetooth {
    retry: RetryPolicy,
}

impl Bluetooth {
    pub fn new(retry: RetryPolicy) -> Self {
        Self { retry }
    }

    /// Send `AT` until the module answers `OK`.
    pub fn connect<P: HardwarePort>(&self, port: &mut P) -> Result<(), P::Error> {
        super::poll_until(self.retry, Operation::BtConnect, || {
            port.send_all(Channel::Bt, CMD_AT)?;
            let reply = [port.recv_byte(Channel::Bt)?, port.recv_byte(Channel::Bt)?];
            Ok(&reply == REPLY_OK)
        })?;

        info!("bluetooth connected");
        Ok(())
    }

    /// Read one phrase from the link into `store`.
    ///
    /// Returns `false` without storing anything when the first byte is the terminator (end of
    /// upload) or when `store` is already full. A phrase that reaches
    /// [`crate::control::MAX_PHRASE_LEN`] bytes is cut there; the byte after it is consumed and
    /// dropped.
    pub fn acquire_next_phrase<P: HardwarePort>(
        &self,
        port: &mut P,
        store: &mut PhraseStore,
    ) -> Result<bool, P::Error> {
        if store.is_full() {
            return Ok(false);
        }

        let mut byte = port.recv_byte(Channel::Bt)?;
        if byte == TERMINATOR {
            debug!("end of phrase upload");
            return Ok(false);
        }

        let mut phrase = Phrase::new();
        while byte != TERMINATOR && phrase.push(byte).is_ok() {
            byte = port.recv_byte(Channel::Bt)?;
        }

        debug!("phrase {} received, {} bytes", store.len(), phrase.len());
        Ok(store.push(phrase).is_ok())
    }

    /// Read one motion byte and overwrite `control` with its decoding.
    pub fn decode_motion_byte<P: HardwarePort>(
        &self,
        port: &mut P,
        control: &mut ControlSignal,
    ) -> Result<(), P::Error> {
        let byte = port.recv_byte(Channel::Bt)?;
        *control = decode_motion(byte);
        Ok(())
    }
}

impl Default for Bluetooth {
    fn default() -> Self {
        Self::new(RetryPolicy::Forever)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{MAX_PHRASES, MAX_PHRASE_LEN};
    use crate::error::Error;
    use crate::mock::{MockError, MockPort};

    fn bt() -> Bluetooth {
        Bluetooth::default()
    }

    #[test]
    fn motion_priority_is_z_then_y_then_x() {
        assert_eq!(decode_motion(0b001), ControlSignal::ModeSwitch);
        assert_eq!(decode_motion(0b111), ControlSignal::ModeSwitch);
        assert_eq!(decode_motion(0b110), ControlSignal::Forward);
        assert_eq!(decode_motion(0b010), ControlSignal::Forward);
        assert_eq!(decode_motion(0b100), ControlSignal::Left);
        assert_eq!(decode_motion(0b000), ControlSignal::Right);
    }

    #[test]
    fn upper_bits_are_ignored() {
        // A nonzero byte with no XYZ bit set is still "right".
        assert_eq!(decode_motion(0xF8), ControlSignal::Right);
        assert_eq!(decode_motion(0x80 | BIT_X), ControlSignal::Left);
    }

    #[test]
    fn decode_overwrites_previous_signal() {
        let mut port = MockPort::new();
        port.inject(Channel::Bt, &[BIT_Y, BIT_X]);
        let mut control = ControlSignal::ModeSwitch;

        bt().decode_motion_byte(&mut port, &mut control).unwrap();
        assert_eq!(control, ControlSignal::Forward);
        bt().decode_motion_byte(&mut port, &mut control).unwrap();
        assert_eq!(control, ControlSignal::Left);
    }

    #[test]
    fn connect_retries_until_ok() {
        let mut port = MockPort::new();
        port.inject(Channel::Bt, b"ERxxOK");

        bt().connect(&mut port).unwrap();
        assert_eq!(port.sent(Channel::Bt), b"ATATAT");
        assert_eq!(port.pending(Channel::Bt), 0);
    }

    #[test]
    fn connect_reports_exhausted_retries() {
        let mut port = MockPort::new();
        port.inject(Channel::Bt, b"NONO");

        let res = Bluetooth::new(RetryPolicy::Attempts(2)).connect(&mut port);
        assert_eq!(res, Err(Error::RetriesExhausted(Operation::BtConnect)));
    }

    #[test]
    fn connect_surfaces_transport_failure() {
        let mut port = MockPort::new();
        port.inject(Channel::Bt, b"O");

        let res = bt().connect(&mut port);
        assert_eq!(res, Err(Error::Port(MockError::RxExhausted(Channel::Bt))));
    }

    #[test]
    fn acquires_terminated_phrase() {
        let mut port = MockPort::new();
        port.inject(Channel::Bt, b"HI\0");
        let mut store = PhraseStore::new();

        assert!(bt().acquire_next_phrase(&mut port, &mut store).unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0), Some(&b"HI"[..]));
    }

    #[test]
    fn leading_terminator_ends_upload() {
        let mut port = MockPort::new();
        port.inject(Channel::Bt, b"\0HI\0");
        let mut store = PhraseStore::new();

        assert!(!bt().acquire_next_phrase(&mut port, &mut store).unwrap());
        assert!(store.is_empty());
        assert_eq!(port.pending(Channel::Bt), 3);
    }

    #[test]
    fn long_phrase_is_capped() {
        let mut port = MockPort::new();
        let long = [b'a'; MAX_PHRASE_LEN + 1];
        port.inject(Channel::Bt, &long);
        port.inject(Channel::Bt, b"B\0");
        let mut store = PhraseStore::new();

        assert!(bt().acquire_next_phrase(&mut port, &mut store).unwrap());
        assert_eq!(store.get(0).map(|p| p.len()), Some(MAX_PHRASE_LEN));
        // The 250th byte was swallowed, the next phrase starts right after it.
        assert!(bt().acquire_next_phrase(&mut port, &mut store).unwrap());
        assert_eq!(store.get(1), Some(&b"B"[..]));
    }

    #[test]
    fn maximal_phrase_consumes_its_terminator() {
        let mut port = MockPort::new();
        port.inject(Channel::Bt, &[b'z'; MAX_PHRASE_LEN]);
        port.inject(Channel::Bt, b"\0\0");
        let mut store = PhraseStore::new();

        assert!(bt().acquire_next_phrase(&mut port, &mut store).unwrap());
        assert!(!bt().acquire_next_phrase(&mut port, &mut store).unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(port.pending(Channel::Bt), 0);
    }

    #[test]
    fn full_store_reads_nothing() {
        let mut port = MockPort::new();
        let mut store = PhraseStore::new();
        for _ in 0..MAX_PHRASES {
            assert!(store.push(Phrase::from_slice(b"x").unwrap()).is_ok());
        }
        port.inject(Channel::Bt, b"HI\0");

        assert!(!bt().acquire_next_phrase(&mut port, &mut store).unwrap());
        assert_eq!(port.pending(Channel::Bt), 3);
    }
}
