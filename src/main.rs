// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Demo firmware: sweep an MCP41HV51 wiper on SPI4 and report positions over USART1.
//!
//! | STM32F777 | MCP41HVX1 |
//! | --------- | --------- |
//! | PE12 (SCK) | SCK |
//! | PE13 (MISO) | SDO |
//! | PE14 (MOSI) | SDI |
//! | PE4 | CS |
//! | PE5 | SHDN |
//! | PE6 | WLAT |

#![no_main]
#![no_std]

use core::fmt::Write;

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
    spi::{Mode, Phase, Polarity, Spi},
};
use stm32f7xx_hal as hal;

use mcp41hvx1::hw::Usart;
use mcp41hvx1::{Mcp41hvx1, Part};

const STEP_DELAY_CYCLES: u32 = 2_000_000;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb2 = rcc.apb2;

    // GPIO
    let gpioa = dp.GPIOA.split();
    let gpioe = dp.GPIOE.split();

    // USART1 (DBG)
    let tx = gpioa.pa9.into_alternate::<7>();
    let rx = gpioa.pa10.into_alternate::<7>();
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART1, (tx, rx), &clocks, usart_cfg);
    let mut usart = Usart::new(serial);

    // SPI4, mode 0,0
    let sck = gpioe.pe12.into_alternate::<5>();
    let miso = gpioe.pe13.into_alternate::<5>();
    let mosi = gpioe.pe14.into_alternate::<5>();
    let spi_mode = Mode {
        polarity: Polarity::IdleLow,
        phase: Phase::CaptureOnFirstTransition,
    };
    let spi4_raw = Spi::new(dp.SPI4, (sck, miso, mosi));
    let spi4_enabled = spi4_raw.enable::<u8>(spi_mode, 100.kHz(), &clocks, &mut apb2);

    let cs = gpioe.pe4.into_push_pull_output();
    let shdn = gpioe.pe5.into_push_pull_output();
    let wlat = gpioe.pe6.into_push_pull_output();

    let part = Part::MCP41HV51_104E_ST;
    let mut pot = match Mcp41hvx1::with_control_pins(spi4_enabled, cs, Some(shdn), Some(wlat)) {
        Ok(pot) => pot,
        Err(e) => {
            let _ = writeln!(usart, "MCP41HVX1 init failed: {:?}\r", e);
            loop {
                cortex_m::asm::nop();
            }
        }
    };

    usart.println(part.number());
    usart.print_state("SHDN", pot.resistor_network_state());
    usart.print_state("WLAT", pot.write_latch_state());

    // Park the wiper at half scale.
    let target = part.position_for_resistance(part.resistance_ohms() / 2);
    match pot.wiper_set_position(target) {
        Ok(pos) => usart.print_position("set", pos),
        Err(e) => {
            let _ = writeln!(usart, "set failed: {:?}\r", e);
        }
    }

    let mut rising = true;
    loop {
        let step = if rising {
            pot.wiper_increment()
        } else {
            pot.wiper_decrement()
        };

        match step {
            Ok(pos) => {
                usart.print_position("wiper", pos);
                if pos == part.max_position() {
                    rising = false;
                } else if pos == 0 {
                    rising = true;
                }
            }
            Err(e) => {
                let _ = writeln!(usart, "step failed: {:?}\r", e);
            }
        }

        cortex_m::asm::delay(STEP_DELAY_CYCLES);
    }
}
