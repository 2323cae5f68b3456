// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MiniMech firmware entry point.
//!
//! Brings up clocks, pins and the three USARTs, installs the debug-terminal logger and hands the
//! board to the controller, which then runs forever.

#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
mod firmware {
    use cortex_m::delay::Delay;
    use cortex_m_rt::entry;
    use panic_halt as _;

    use hal::{
        pac,
        prelude::*,
        serial::{Config, Serial},
    };
    use stm32f7xx_hal as hal;

    use minimech::hw::{logger, Board, BoardPins, Usart};
    use minimech::port::BAUD_RATE;
    use minimech::Controller;

    fn link_config() -> Config {
        Config {
            baud_rate: BAUD_RATE.bps(),
            ..Default::default()
        }
    }

    #[entry]
    fn main() -> ! {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();
        let cp = cortex_m::Peripherals::take().unwrap();

        // Clocks
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();

        // GPIO
        let pins = BoardPins::new(dp.GPIOB, dp.GPIOC, dp.GPIOD, dp.GPIOE);

        // USART3 (DBG)
        let console_cfg = Config {
            baud_rate: 115_200.bps(),
            ..Default::default()
        };
        let console = Serial::new(
            dp.USART3,
            (pins.console.tx, pins.console.rx),
            &clocks,
            console_cfg,
        );
        logger::init(Usart::new(console), log::LevelFilter::Info);

        // USART2 (BT), USART6 (T2S)
        let bt = Serial::new(dp.USART2, (pins.bt.tx, pins.bt.rx), &clocks, link_config());
        let t2s = Serial::new(
            dp.USART6,
            (pins.t2s.tx, pins.t2s.rx),
            &clocks,
            link_config(),
        );

        // SysTick delay from cortex-m, needs core clock in Hz (u32)
        let delay = Delay::new(cp.SYST, clocks.sysclk().raw());

        let board = Board::new(
            Usart::new(bt),
            Usart::new(t2s),
            pins.leds,
            pins.motors,
            delay,
        );

        log::info!("MiniMech firmware starting");
        let mut controller = Controller::new(board, minimech::Config::default());
        match controller.run() {
            Ok(never) => match never {},
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    // The firmware only runs on the board; host builds exist for `cargo test` on the library.
}
