// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Auxiliary control lines (SHDN, WLAT).
//!
//! Either line may be hard-wired on the board instead of routed to the MCU. A `ControlLine` with no
//! pin never touches hardware, and its recorded state stays whatever it was built with.

use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;

use embedded_hal::digital::v2::OutputPin;

/// Logical state of an auxiliary line. `Enabled` is driven high.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Enabled,
    Disabled,
}

impl State {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self == State::Enabled
    }
}

impl From<bool> for State {
    fn from(enabled: bool) -> Self {
        if enabled {
            State::Enabled
        } else {
            State::Disabled
        }
    }
}

impl From<State> for bool {
    fn from(state: State) -> Self {
        state.is_enabled()
    }
}

/// Output line with a recorded state, optionally backed by a pin.
pub struct ControlLine<PIN> {
    pin: Option<PIN>,
    state: State,
}

impl<PIN: OutputPin> ControlLine<PIN> {
    /// Wrap `pin` without driving it. `state` is the initial recorded state.
    pub fn new(pin: Option<PIN>, state: State) -> Self {
        Self { pin, state }
    }

    #[inline]
    pub fn is_configured(&self) -> bool {
        self.pin.is_some()
    }

    /// Last state recorded for this line.
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Drive the pin to `state` and record it. No-op when the line is hard-wired.
    pub fn set(&mut self, state: State) -> Result<(), PIN::Error> {
        if self.is_configured() {
            self.drive(state)?;
            self.state = state;
        }
        Ok(())
    }

    /// Drive the pin level only, leaving the recorded state alone.
    pub fn drive(&mut self, state: State) -> Result<(), PIN::Error> {
        match (self.pin.as_mut(), state) {
            (Some(pin), State::Enabled) => pin.set_high(),
            (Some(pin), State::Disabled) => pin.set_low(),
            (None, _) => Ok(()),
        }
    }

    /// Record `state` without touching the pin. No-op when the line is hard-wired.
    pub fn record(&mut self, state: State) {
        if self.is_configured() {
            self.state = state;
        }
    }

    pub fn free(self) -> Option<PIN> {
        self.pin
    }
}

/// Placeholder for a line that is tied off on the board.
///
/// `E` matches the error type of the real pins so every line of a driver shares one error type.
/// Setting its level does nothing.
pub struct NoPin<E = Infallible> {
    _error: PhantomData<E>,
}

impl<E> NoPin<E> {
    pub const fn new() -> Self {
        Self {
            _error: PhantomData,
        }
    }
}

impl<E> Default for NoPin<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for NoPin<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoPin")
    }
}

impl<E> OutputPin for NoPin<E> {
    type Error = E;

    fn set_low(&mut self) -> Result<(), E> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), E> {
        Ok(())
    }
}
