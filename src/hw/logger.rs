// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `log` backend that prints records to the debug terminal.
//!
//! Call [`init`] once at startup; after that the `log` macros anywhere in the crate end up on the
//! ST-LINK virtual COM port as `[LEVEL] message` lines.

use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::interrupt::{self, Mutex};
use log::{LevelFilter, Log, Metadata, Record};
use stm32f7xx_hal::pac::USART3;

use crate::hw::Usart;

static CONSOLE: Mutex<RefCell<Option<Usart<USART3>>>> = Mutex::new(RefCell::new(None));
static LOGGER: UsartLogger = UsartLogger;

struct UsartLogger;

impl Log for UsartLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        interrupt::free(|cs| {
            if let Some(console) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
                let _ = write!(console, "[{}] {}\r\n", record.level(), record.args());
            }
        });
    }

    fn flush(&self) {
        interrupt::free(|cs| {
            if let Some(console) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
                console.flush();
            }
        });
    }
}

/// Hand the debug USART to the logger and install it. A second call only swaps the USART.
pub fn init(console: Usart<USART3>, level: LevelFilter) {
    interrupt::free(|cs| {
        CONSOLE.borrow(cs).replace(Some(console));
    });

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
