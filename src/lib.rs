// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # MCP41HVX1 Driver
//!
//! This crate drives the Microchip MCP41HVX1 family of high-voltage SPI digital potentiometers
//! (MCP41HV31 7-bit and MCP41HV51 8-bit parts). It is `no_std` and generic over the
//! `embedded-hal` 0.2 SPI and GPIO traits, so any HAL (e.g. `stm32f7xx-hal`) can supply the bus and
//! pins.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Bus and pin wrappers: SPI transfers, chip-select framing, SHDN/WLAT control lines |
//! | [`protocol`] | Command byte encoding and response decoding |
//! | [`drivers`] | The [`Mcp41hvx1`] controller and the supported part catalog |
//!
//! ## Wiring
//!
//! Full wiring puts both auxiliary lines under software control:
//!
//! | MCU | MCP41HVX1 |
//! | --- | --------- |
//! | SCK | 2 (SCK) |
//! | any GPIO | 3 (CS) |
//! | MOSI | 4 (SDI) |
//! | MISO | 5 (SDO) |
//! | any GPIO | 6 (WLAT) |
//! | any GPIO | 7 (SHDN) |
//!
//! The alternate wiring ties WLAT high and SHDN low on the board and only routes CS. Use
//! [`Mcp41hvx1::new`] in that case.
//!
//! V+ and V- come from an external supply (up to 36 V) sharing ground with the MCU.
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the demo firmware:
//!
//! ```bash
//! cargo run --release --features stm32f7 --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod drivers;
pub mod hw;
pub mod protocol;

pub use drivers::mcp41hvx1::{Error, Mcp41hvx1};
pub use drivers::part::Part;
pub use hw::{NoPin, State};
