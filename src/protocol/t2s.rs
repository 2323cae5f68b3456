// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! XFS5152 text-to-speech module.
//!
//! Command frame (send order):
//!
//! | Bytes | Meaning |
//! | ----- | ------- |
//! | `0xFD` | frame start |
//! | 2 | length of everything after the length field, big-endian |
//! | 1 | command (`0x01` speak, `0x02` stop, `0x21` status) |
//! | n | payload |
//!
//! A speak payload is the text encoding byte followed by the text. The text is prefixed with
//! `[g2]`, which makes the module read latin words as English, so the length of a speak frame is
//! `phrase + 6` (command, encoding, `[g2]`). Every command is answered with a single status byte:
//! `0x4F` idle, anything else busy.

use log::{debug, info, warn};

use crate::config::RetryPolicy;
use crate::control::{PhraseStore, MAX_PHRASE_LEN};
use crate::error::{Operation, Result};
use crate::port::{Channel, HardwarePort};

/// Frame start byte.
pub const FRAME_START: u8 = 0xFD;

// Commands
pub const CMD_SPEAK: u8 = 0x01;
pub const CMD_STOP: u8 = 0x02;
pub const CMD_STATUS: u8 = 0x21;

// Status replies
pub const STATUS_IDLE: u8 = 0x4F;
pub const STATUS_BUSY: u8 = 0x4E;

/// GB2312 text encoding; plain ASCII passes through unchanged.
pub const ENCODING_GB2312: u8 = 0x00;

/// English reading hint sent ahead of every phrase.
pub const ENGLISH_HINT: &[u8; 4] = b"[g2]";

/// Bytes in a speak frame's length besides the phrase itself.
pub const SPEAK_OVERHEAD: usize = 2 + ENGLISH_HINT.len();

/// Length field of a speak frame carrying `phrase_len` bytes of text.
///
/// Text longer than one stored phrase is cut, so the result never exceeds 255.
#[inline]
pub fn speak_frame_len(phrase_len: usize) -> u16 {
    (phrase_len.min(MAX_PHRASE_LEN) + SPEAK_OVERHEAD) as u16
}

/// Text-to-speech protocol client.
#[derive(Copy, Clone, Debug)]
pub struct TextToSpeech {
    retry: RetryPolicy,
}

impl TextToSpeech {
    pub fn new(retry: RetryPolicy) -> Self {
        Self { retry }
    }

    /// Write frame start, length and command byte.
    fn write_header<P: HardwarePort>(
        port: &mut P,
        len: u16,
        command: u8,
    ) -> core::result::Result<(), P::Error> {
        port.send_byte(Channel::T2s, FRAME_START)?;
        port.send_byte(Channel::T2s, (len >> 8) as u8)?;
        port.send_byte(Channel::T2s, len as u8)?;
        port.send_byte(Channel::T2s, command)
    }

    /// Send a payload-less command and return the module's reply byte.
    fn command<P: HardwarePort>(port: &mut P, command: u8) -> core::result::Result<u8, P::Error> {
        Self::write_header(port, 1, command)?;
        port.recv_byte(Channel::T2s)
    }

    /// Poll status until the module reports idle.
    pub fn initialize<P: HardwarePort>(&self, port: &mut P) -> Result<(), P::Error> {
        super::poll_until(self.retry, Operation::T2sInit, || {
            Ok(Self::command(port, CMD_STATUS)? == STATUS_IDLE)
        })?;

        info!("speech module ready");
        Ok(())
    }

    /// Ask the module whether it is still talking. Anything but the idle byte counts as busy.
    pub fn query_status<P: HardwarePort>(&self, port: &mut P) -> Result<bool, P::Error> {
        let reply = Self::command(port, CMD_STATUS)?;
        Ok(reply != STATUS_IDLE)
    }

    /// Send `phrase` as a speak command. Text beyond [`MAX_PHRASE_LEN`] bytes is dropped.
    ///
    /// Does not wait for the module; poll [`Self::query_status`] to find out when it is done.
    pub fn speak<P: HardwarePort>(&self, port: &mut P, phrase: &[u8]) -> Result<(), P::Error> {
        let text = &phrase[..phrase.len().min(MAX_PHRASE_LEN)];
        let len = speak_frame_len(text.len());

        Self::write_header(port, len, CMD_SPEAK)?;
        port.send_byte(Channel::T2s, ENCODING_GB2312)?;
        port.send_all(Channel::T2s, ENGLISH_HINT)?;
        port.send_all(Channel::T2s, text)?;

        debug!("speak frame sent, length {}", len);
        Ok(())
    }

    /// Speak the store's current phrase. Nothing is sent when the store is empty.
    pub fn speak_current_phrase<P: HardwarePort>(
        &self,
        port: &mut P,
        store: &PhraseStore,
    ) -> Result<(), P::Error> {
        match store.current() {
            Some(phrase) => self.speak(port, phrase),
            None => {
                warn!("no phrase to speak");
                Ok(())
            }
        }
    }

    /// Send stop commands until the module confirms it is idle.
    pub fn stop_speaking<P: HardwarePort>(&self, port: &mut P) -> Result<(), P::Error> {
        super::poll_until(self.retry, Operation::T2sStop, || {
            Ok(Self::command(port, CMD_STOP)? == STATUS_IDLE)
        })?;

        debug!("speech stopped");
        Ok(())
    }
}

impl Default for TextToSpeech {
    fn default() -> Self {
        Self::new(RetryPolicy::Forever)
    }
}
