// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MiniMech finite-state controller.
//!
//! The controller owns the hardware port and the shared [`ControllerContext`], and drives the
//! Bluetooth and text-to-speech clients from a single polling loop:
//!
//! ```ignore
//! let mut controller = Controller::new(board, Config::default());
//!
//! loop {
//!     controller.tick()?; // one state step, then one motion byte
//! }
//! ```
//!
//! State LEDs: red while starting up, red + orange while phrases upload, orange while steering,
//! green while driving forward, blue while in the speak state.

use core::convert::Infallible;

use log::{debug, info, warn};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::config::Config;
use crate::control::context::{ControlSignal, ControllerContext};
use crate::error::Result;
use crate::port::{HardwarePort, LedColor, MotorSide};
use crate::protocol::{Bluetooth, TextToSpeech};

/// Controller states.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ControllerState {
    /// Bring up hardware and both modules.
    Startup,
    /// Receive phrases from the phone.
    PhraseAcquisition,
    /// Turn on the spot per Left/Right.
    Steer,
    /// Drive forward.
    Move,
    /// Speak a random phrase and wait for the module to finish.
    Speak,
}

/// Robot controller over a hardware port `P`.
pub struct Controller<P: HardwarePort> {
    port: P,
    bt: Bluetooth,
    t2s: TextToSpeech,
    ctx: ControllerContext,
    state: ControllerState,
    rng: SmallRng,
    config: Config,
}

impl<P: HardwarePort> Controller<P> {
    /// Create a controller in [`ControllerState::Startup`]. No hardware is touched until the
    /// first [`Self::step`].
    pub fn new(port: P, config: Config) -> Self {
        Self {
            port,
            bt: Bluetooth::new(config.retry()),
            t2s: TextToSpeech::new(config.retry()),
            ctx: ControllerContext::new(),
            state: ControllerState::Startup,
            rng: SmallRng::seed_from_u64(config.rng_seed()),
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[inline]
    pub fn context(&self) -> &ControllerContext {
        &self.ctx
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut ControllerContext {
        &mut self.ctx
    }

    #[inline]
    pub fn port(&self) -> &P {
        &self.port
    }

    #[inline]
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Run one outer-loop iteration: a state step, then one motion byte from the phone.
    pub fn tick(&mut self) -> Result<(), P::Error> {
        self.step()?;
        self.bt
            .decode_motion_byte(&mut self.port, &mut self.ctx.control)
    }

    /// Run forever. Only returns on a fatal port error or an exhausted retry policy.
    pub fn run(&mut self) -> Result<Infallible, P::Error> {
        loop {
            self.tick()?;
        }
    }

    /// Run one state-machine step against the current control signal.
    pub fn step(&mut self) -> Result<(), P::Error> {
        let next = match self.state {
            ControllerState::Startup => self.startup()?,
            ControllerState::PhraseAcquisition => self.acquire_phrases()?,
            ControllerState::Steer => self.steer(),
            ControllerState::Move => self.drive(),
            ControllerState::Speak => self.speak()?,
        };

        if next != self.state {
            info!("{:?} -> {:?} ({:?})", self.state, next, self.ctx.control);
            self.state = next;
        }
        Ok(())
    }

    fn startup(&mut self) -> Result<ControllerState, P::Error> {
        self.ctx.control = ControlSignal::Idle;
        self.port.init()?;
        self.port.set_led(LedColor::Red, true);

        self.bt.connect(&mut self.port)?;
        self.t2s.initialize(&mut self.port)?;

        self.port.set_led(LedColor::Red, false);
        Ok(ControllerState::PhraseAcquisition)
    }

    fn acquire_phrases(&mut self) -> Result<ControllerState, P::Error> {
        self.port.set_led(LedColor::Red, true);
        self.port.set_led(LedColor::Orange, true);

        let store = &mut self.ctx.phrases;
        store.clear();
        while !store.is_full() && self.bt.acquire_next_phrase(&mut self.port, store)? {}
        info!("{} phrases stored", store.len());

        self.port.set_led(LedColor::Red, false);
        self.port.set_led(LedColor::Orange, false);
        Ok(ControllerState::Steer)
    }

    fn steer(&mut self) -> ControllerState {
        match self.ctx.control {
            ControlSignal::ModeSwitch => {
                self.port.set_led(LedColor::Orange, false);
                return ControllerState::Speak;
            }
            ControlSignal::Forward => {
                self.port.set_led(LedColor::Orange, false);
                return ControllerState::Move;
            }
            _ => {}
        }

        self.port.set_led(LedColor::Orange, true);
        match self.ctx.control {
            ControlSignal::Left => self.set_motors(false, true),
            ControlSignal::Right => self.set_motors(true, false),
            _ => {}
        }
        ControllerState::Steer
    }

    fn drive(&mut self) -> ControllerState {
        match self.ctx.control {
            ControlSignal::ModeSwitch => {
                self.port.set_led(LedColor::Green, false);
                ControllerState::Speak
            }
            ControlSignal::Left | ControlSignal::Right => {
                self.port.set_led(LedColor::Green, false);
                ControllerState::Steer
            }
            _ => {
                self.port.set_led(LedColor::Green, true);
                self.set_motors(true, true);
                ControllerState::Move
            }
        }
    }

    fn speak(&mut self) -> Result<ControllerState, P::Error> {
        let settle_ms = self.config.speak_settle_ms();

        // Same jerk of the phone must not switch straight back out.
        self.port.delay_ms(settle_ms);
        if self.ctx.control == ControlSignal::ModeSwitch {
            self.t2s.stop_speaking(&mut self.port)?;
            self.ctx.speak_flag = false;
            self.port.set_led(LedColor::Blue, false);
            return Ok(ControllerState::Steer);
        }

        self.port.set_led(LedColor::Blue, true);
        self.port.delay_ms(settle_ms);

        if !self.ctx.speak_flag {
            self.say_random_phrase()?;
            self.ctx.speak_flag = true;
        }

        let next = if self.t2s.query_status(&mut self.port)? {
            ControllerState::Speak
        } else {
            self.ctx.speak_flag = false;
            ControllerState::Steer
        };

        self.port.set_led(LedColor::Blue, false);
        Ok(next)
    }

    /// Point the store at a pseudo-random phrase and send it.
    fn say_random_phrase(&mut self) -> Result<(), P::Error> {
        let count = self.ctx.phrases.len();
        if count == 0 {
            warn!("speak requested with no phrases stored");
            return Ok(());
        }

        let index = self.rng.gen_range(0..count);
        self.ctx.phrases.select(index);
        debug!("speaking phrase {}", index);
        self.t2s
            .speak_current_phrase(&mut self.port, &self.ctx.phrases)
    }

    #[inline]
    fn set_motors(&mut self, left: bool, right: bool) {
        self.port.set_motor(MotorSide::Left, left);
        self.port.set_motor(MotorSide::Right, right);
    }
}
