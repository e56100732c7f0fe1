// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SPI command protocol for the MCP41HVX1.
//!
//! Every transaction starts with a command byte:
//!
//! ```text
//!  7   6   5   4   3   2   1   0
//! [ address (4) ][cmd (2)][rsv (2)]
//! ```
//!
//! Write and read carry a second byte holding the wiper value. Increment and decrement are a single
//! byte.

pub mod command;

pub use command::{Command, Frame};
