// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Shared state of the MiniMech controller.
//!
//! Everything the state machine and the protocol clients exchange lives in one
//! [`ControllerContext`] owned by the controller and lent out by reference.

use heapless::Vec;

/// Phrases the phone app may upload.
pub const MAX_PHRASES: usize = 10;

/// Longest phrase in bytes, terminator excluded.
pub const MAX_PHRASE_LEN: usize = 249;

/// One phrase as raw module-encoded bytes. Never contains the NUL terminator.
pub type Phrase = Vec<u8, MAX_PHRASE_LEN>;

/// Most recent decoded command from the phone.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ControlSignal {
    /// Nothing decoded since startup.
    #[default]
    Idle,
    Forward,
    Left,
    Right,
    /// Toggle in or out of speak mode.
    ModeSwitch,
}

/// Fixed-capacity phrase list with a cursor on the phrase to speak next.
#[derive(Clone, Debug, Default)]
pub struct PhraseStore {
    phrases: Vec<Phrase, MAX_PHRASES>,
    current: usize,
}

impl PhraseStore {
    pub fn new() -> Self {
        Self {
            phrases: Vec::new(),
            current: 0,
        }
    }

    /// Drop every phrase and reset the cursor.
    pub fn clear(&mut self) {
        self.phrases.clear();
        self.current = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.phrases.is_full()
    }

    /// Append a phrase. Hands it back if the store already holds [`MAX_PHRASES`].
    pub fn push(&mut self, phrase: Phrase) -> Result<(), Phrase> {
        self.phrases.push(phrase)
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.phrases.get(index).map(|p| p.as_slice())
    }

    /// Move the cursor. Returns `false` and leaves it alone if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.phrases.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Phrase under the cursor, `None` while the store is empty.
    pub fn current(&self) -> Option<&[u8]> {
        self.get(self.current)
    }
}

/// State shared between the controller and the protocol clients.
#[derive(Clone, Debug, Default)]
pub struct ControllerContext {
    /// Written by the Bluetooth client, read by every state.
    pub control: ControlSignal,
    pub phrases: PhraseStore,
    /// Set once the current visit to the speak state has sent its phrase.
    pub speak_flag: bool,
}

impl ControllerContext {
    pub fn new() -> Self {
        Self::default()
    }
}
