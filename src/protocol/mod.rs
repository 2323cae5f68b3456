// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial protocol clients for the two MiniMech modules.
//!
//! - [`bt`] – HC-06 Bluetooth link: handshake, phrase upload, motion bytes.
//! - [`t2s`] – XFS5152 text-to-speech module: framed commands and status polling.
//!
//! Clients hold no link state of their own. The port is passed in as `&mut` to each method so
//! both clients can share the single hardware port owned by the controller.

pub mod bt;
pub mod t2s;

pub use bt::Bluetooth;
pub use t2s::TextToSpeech;

use log::warn;

use crate::config::RetryPolicy;
use crate::error::{Error, Operation};

/// Run `attempt` until it reports success or `policy` runs out.
///
/// `attempt` returns `Ok(true)` once the module answered as expected, `Ok(false)` to go again.
/// Port errors abort immediately.
pub(crate) fn poll_until<E, F>(
    policy: RetryPolicy,
    op: Operation,
    mut attempt: F,
) -> Result<(), Error<E>>
where
    F: FnMut() -> Result<bool, E>,
{
    let mut tries: u32 = 0;
    while policy.allows(tries) {
        if attempt()? {
            return Ok(());
        }
        tries = tries.saturating_add(1);
    }

    warn!("{} gave up after {} attempts", op, tries);
    Err(Error::RetriesExhausted(op))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_on_first_success() {
        let mut calls = 0;
        let res: Result<(), Error<()>> = poll_until(RetryPolicy::Forever, Operation::T2sInit, || {
            calls += 1;
            Ok(calls == 3)
        });
        assert_eq!(res, Ok(()));
        assert_eq!(calls, 3);
    }

    #[test]
    fn bounded_policy_gives_up() {
        let mut calls = 0;
        let res: Result<(), Error<()>> =
            poll_until(RetryPolicy::Attempts(4), Operation::BtConnect, || {
                calls += 1;
                Ok(false)
            });
        assert_eq!(res, Err(Error::RetriesExhausted(Operation::BtConnect)));
        assert_eq!(calls, 4);
    }

    #[test]
    fn port_error_aborts_the_loop() {
        let mut calls = 0;
        let res: Result<(), Error<u8>> = poll_until(RetryPolicy::Forever, Operation::T2sStop, || {
            calls += 1;
            Err(9)
        });
        assert_eq!(res, Err(Error::Port(9)));
        assert_eq!(calls, 1);
    }
}
