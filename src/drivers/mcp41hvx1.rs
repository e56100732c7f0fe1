//! MCP41HVX1 SPI digital potentiometer driver.
//!
//! This module handles chip-select framing and the volatile wiper commands, plus the SHDN (resistor
//! network) and WLAT (write latch) lines. It does not range-check wiper values and does not verify
//! that a device answered: a read returns whatever bits came back on the bus.

use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;

use crate::hw::{ChipSelect, ControlLine, NoPin, SpiBus, State};
use crate::protocol::command::{wiper_from_response, Frame};

/// Error type for `Mcp41hvx1` operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error<SpiE, PinE> {
    /// SPI transfer failure.
    Spi(SpiE),
    /// Failure driving CS, SHDN or WLAT.
    Pin(PinE),
}

/// MCP41HVX1 driver owning its SPI bus, chip-select pin and optional SHDN/WLAT pins.
///
/// `SHDN` and `WLAT` are [`NoPin`] when the line is tied off on the board.
pub struct Mcp41hvx1<SPI, CS, SHDN, WLAT> {
    spi: SpiBus<SPI>,
    cs: ChipSelect<CS>,
    shdn: ControlLine<SHDN>,
    wlat: ControlLine<WLAT>,
}

impl<SPI, CS, SpiE, PinE> Mcp41hvx1<SPI, CS, NoPin<PinE>, NoPin<PinE>>
where
    SPI: Transfer<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
{
    /// Construct a driver with only CS routed.
    ///
    /// Assumes WLAT is tied high and SHDN is tied so the resistor network is always enabled. Both
    /// recorded states read `Enabled`.
    pub fn new(spi: SPI, cs: CS) -> Result<Self, Error<SpiE, PinE>> {
        Self::with_control_pins(spi, cs, None, None)
    }
}

impl<SPI, CS, SHDN, WLAT, SpiE, PinE> Mcp41hvx1<SPI, CS, SHDN, WLAT>
where
    SPI: Transfer<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
    SHDN: OutputPin<Error = PinE>,
    WLAT: OutputPin<Error = PinE>,
{
    /// Construct a driver with SHDN and WLAT under software control, both starting enabled.
    ///
    /// Pass `None` for a line that is tied off on the board.
    pub fn with_control_pins(
        spi: SPI,
        cs: CS,
        shdn: Option<SHDN>,
        wlat: Option<WLAT>,
    ) -> Result<Self, Error<SpiE, PinE>> {
        Self::with_initial_states(spi, cs, shdn, State::Enabled, wlat, State::Enabled)
    }

    /// Construct a driver choosing the starting state of SHDN and WLAT.
    ///
    /// Configured lines are driven to their initial state, SHDN first. An unconfigured line is
    /// never driven and simply reports the state given here.
    pub fn with_initial_states(
        spi: SPI,
        cs: CS,
        shdn: Option<SHDN>,
        shdn_state: State,
        wlat: Option<WLAT>,
        wlat_state: State,
    ) -> Result<Self, Error<SpiE, PinE>> {
        let spi = SpiBus::new(spi);
        let cs = ChipSelect::active_low(cs).map_err(Error::Pin)?;

        let mut pot = Self {
            spi,
            cs,
            shdn: ControlLine::new(shdn, shdn_state),
            wlat: ControlLine::new(wlat, wlat_state),
        };

        match shdn_state {
            State::Enabled => pot.resistor_network_enable()?,
            State::Disabled => pot.resistor_network_disable()?,
        }

        match wlat_state {
            State::Enabled => pot.write_latch_enable()?,
            State::Disabled => pot.write_latch_disable()?,
        }

        Ok(pot)
    }

    /// Release the bus and pins.
    pub fn free(self) -> (SPI, CS, Option<SHDN>, Option<WLAT>) {
        (
            self.spi.free(),
            self.cs.free(),
            self.shdn.free(),
            self.wlat.free(),
        )
    }

    /// Connect the resistor network (SHDN high).
    pub fn resistor_network_enable(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.shdn.set(State::Enabled).map_err(Error::Pin)
    }

    /// Disconnect the resistor network (SHDN low).
    pub fn resistor_network_disable(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.shdn.set(State::Disabled).map_err(Error::Pin)
    }

    #[inline]
    pub fn resistor_network_state(&self) -> State {
        self.shdn.state()
    }

    /// Enable the write latch.
    ///
    /// Only acts when WLAT is configured. The level is driven on the SHDN line, not on WLAT; the
    /// WLAT pin itself is held but never driven. Whether the two lines are meant to be shared is
    /// unconfirmed against the datasheet, so this keeps the established behavior.
    pub fn write_latch_enable(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.write_latch_set(State::Enabled)
    }

    /// Disable the write latch. Drives SHDN low, see [`Self::write_latch_enable`].
    pub fn write_latch_disable(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.write_latch_set(State::Disabled)
    }

    #[inline]
    pub fn write_latch_state(&self) -> State {
        self.wlat.state()
    }

    fn write_latch_set(&mut self, state: State) -> Result<(), Error<SpiE, PinE>> {
        if self.wlat.is_configured() {
            self.shdn.drive(state).map_err(Error::Pin)?;
            self.wlat.record(state);
        }
        Ok(())
    }

    /// Write `value` to the wiper and return the position read back.
    ///
    /// 7-bit parts only use the low 7 bits. The value is sent as-is.
    pub fn wiper_set_position(&mut self, value: u8) -> Result<u8, Error<SpiE, PinE>> {
        self.transact(Frame::set_wiper(value))?;
        self.wiper_get_position()
    }

    /// Step the wiper up one tap and return the new position.
    pub fn wiper_increment(&mut self) -> Result<u8, Error<SpiE, PinE>> {
        self.transact(Frame::increment())?;
        self.wiper_get_position()
    }

    /// Step the wiper down one tap and return the new position.
    pub fn wiper_decrement(&mut self) -> Result<u8, Error<SpiE, PinE>> {
        self.transact(Frame::decrement())?;
        self.wiper_get_position()
    }

    /// Read the wiper position.
    pub fn wiper_get_position(&mut self) -> Result<u8, Error<SpiE, PinE>> {
        let word = self.transact(Frame::read_wiper())?;
        Ok(wiper_from_response(word))
    }

    /// Run one transaction with CS held low around every byte of it.
    ///
    /// CS is released even if the transfer fails.
    fn transact(&mut self, frame: Frame) -> Result<u16, Error<SpiE, PinE>> {
        self.cs.select().map_err(Error::Pin)?;

        let result = match frame {
            Frame::Header(header) => self.spi.transfer_byte(header).map(u16::from),
            Frame::WithData { header, data } => self
                .spi
                .write_byte(header)
                .and_then(|()| self.spi.transfer_byte(data))
                .map(u16::from),
            Frame::Exchange(word) => self.spi.transfer_word(word),
        };

        self.cs.deselect().map_err(Error::Pin)?;

        result.map_err(Error::Spi)
    }
}
