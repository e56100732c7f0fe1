// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial Peripheral Interface (SPI) abstraction layer.
//!
//! - `SpiBus` wraps any blocking `embedded-hal` SPI with 8-bit words.
//! - `ChipSelect` is an active-low GPIO output wrapper for manual CS control.

use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;

/// Wrapper around an initialized SPI peripheral (8-bit words, MSB first).
///
/// The HAL brings the bus up when the peripheral is built, so handing it to `new` is the last
/// step of bus initialization.
pub struct SpiBus<SPI> {
    spi: SPI,
}

impl<SPI, E> SpiBus<SPI>
where
    SPI: Transfer<u8, Error = E>,
{
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Perform a blocking, full-duplex transfer of one byte.
    pub fn transfer_byte(&mut self, byte: u8) -> Result<u8, E> {
        let mut tmp = [byte];
        self.spi.transfer(&mut tmp)?;
        Ok(tmp[0])
    }

    /// Send a byte, ignoring the response.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        let _ = self.transfer_byte(byte)?;
        Ok(())
    }

    /// Exchange one 16-bit word, high byte first, as a single two-byte transfer.
    pub fn transfer_word(&mut self, word: u16) -> Result<u16, E> {
        let mut buf = word.to_be_bytes();
        self.spi.transfer(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    pub fn free(self) -> SPI {
        self.spi
    }
}

/// Manual chip-select line, active-low, generic over any output pin.
pub struct ChipSelect<PIN> {
    pin: PIN,
}

impl<PIN: OutputPin> ChipSelect<PIN> {
    /// Create an active-low chip select and set to the inactive state (i.e., high).
    pub fn active_low(mut pin: PIN) -> Result<Self, PIN::Error> {
        pin.set_high()?;
        Ok(Self { pin })
    }

    /// Assert the chip select.
    #[inline]
    pub fn select(&mut self) -> Result<(), PIN::Error> {
        self.pin.set_low()
    }

    /// Deassert the chip select.
    #[inline]
    pub fn deselect(&mut self) -> Result<(), PIN::Error> {
        self.pin.set_high()
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}
