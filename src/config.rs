// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Controller tunables.
//!
//! Defaults reproduce the stock robot: every module wait blocks forever and the speak state
//! pauses 500 ms between polls so one jerk of the phone does not toggle the mode twice.

use crate::port::MAX_DELAY_MS;

/// Pause in the speak state, before the mode-switch check and again before polling.
pub const DEFAULT_SPEAK_SETTLE_MS: u32 = 500;

/// Seed for the phrase picker when none is configured.
pub const DEFAULT_RNG_SEED: u64 = 0x4D4D_5F52_4E47;

/// How many times a polling loop may ask a module before giving up.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RetryPolicy {
    /// Block until the module answers as expected.
    Forever,
    /// Give up after this many attempts and report `Error::RetriesExhausted`.
    Attempts(u32),
}

impl RetryPolicy {
    /// Whether another attempt is allowed after `done` attempts have already been made.
    #[inline]
    pub fn allows(&self, done: u32) -> bool {
        match *self {
            RetryPolicy::Forever => true,
            RetryPolicy::Attempts(max) => done < max,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::Forever
    }
}

/// Controller configuration.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    retry: RetryPolicy,
    speak_settle_ms: u32,
    rng_seed: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            retry: RetryPolicy::Forever,
            speak_settle_ms: DEFAULT_SPEAK_SETTLE_MS,
            rng_seed: DEFAULT_RNG_SEED,
        }
    }

    /// Set the retry policy used by every module polling loop.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the speak-state pause, clamped to the longest single port delay.
    pub fn with_speak_settle_ms(mut self, ms: u32) -> Self {
        self.speak_settle_ms = ms.min(MAX_DELAY_MS);
        self
    }

    /// Seed for the pseudo-random phrase picker.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    #[inline]
    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    #[inline]
    pub fn speak_settle_ms(&self) -> u32 {
        self.speak_settle_ms
    }

    #[inline]
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_block_forever() {
        let cfg = Config::default();
        assert_eq!(cfg.retry(), RetryPolicy::Forever);
        assert_eq!(cfg.speak_settle_ms(), 500);
        assert!(cfg.retry().allows(u32::MAX));
    }

    #[test]
    fn settle_delay_is_clamped() {
        let cfg = Config::new().with_speak_settle_ms(5_000);
        assert_eq!(cfg.speak_settle_ms(), MAX_DELAY_MS);
    }

    #[test]
    fn bounded_policy_counts_attempts() {
        let policy = RetryPolicy::Attempts(2);
        assert!(policy.allows(0));
        assert!(policy.allows(1));
        assert!(!policy.allows(2));
    }
}
