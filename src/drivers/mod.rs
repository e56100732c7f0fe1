// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains the device driver that sits above the raw `hw/` layer and below the
//! application logic.
//!
//! ## Existing drivers
//!
//! - [`mcp41hvx1`] – Microchip MCP41HVX1 SPI digital potentiometer with SHDN and WLAT lines
//! - [`part`] – MCP41HV31/MCP41HV51 part numbers with tap resolution and resistance ratings

pub mod mcp41hvx1;
pub mod part;

pub use mcp41hvx1::Mcp41hvx1;
pub use part::Part;
