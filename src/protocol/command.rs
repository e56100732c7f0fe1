//! Command byte encoding for the volatile wiper register.

/// Memory address of the volatile wiper (the only register the MCP41HVX1 exposes over SPI).
pub const VOLATILE_WIPER: u8 = 0x0;

/// Filler byte clocked out after the read command so the device can shift the wiper value back.
pub const READ_FILLER: u8 = 0x00;

/// 2-bit command field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Command {
    /// Write the data byte directly into the wiper.
    Write = 0b00,
    /// Step the wiper up by one tap.
    Increment = 0b01,
    /// Step the wiper down by one tap.
    Decrement = 0b10,
    /// Read back the wiper.
    Read = 0b11,
}

impl Command {
    /// Build the command byte for `addr`.
    ///
    /// B7..B4 = address, B3..B2 = command, B1..B0 = reserved (always sent as 0).
    #[inline]
    pub const fn header(self, addr: u8) -> u8 {
        ((addr & 0x0F) << 4) | ((self as u8) << 2)
    }
}

/// One chip-select framed SPI transaction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Frame {
    /// Command byte alone.
    Header(u8),
    /// Command byte followed by a data byte, each clocked as its own byte transfer.
    WithData { header: u8, data: u8 },
    /// One 16-bit exchange, command byte in the high half. The response is returned to the caller.
    Exchange(u16),
}

impl Frame {
    /// Write `value` into the volatile wiper. The value is sent unmodified.
    pub const fn set_wiper(value: u8) -> Self {
        Frame::WithData {
            header: Command::Write.header(VOLATILE_WIPER),
            data: value,
        }
    }

    pub const fn increment() -> Self {
        Frame::Header(Command::Increment.header(VOLATILE_WIPER))
    }

    pub const fn decrement() -> Self {
        Frame::Header(Command::Decrement.header(VOLATILE_WIPER))
    }

    /// Read the volatile wiper (`0x0C00`).
    pub const fn read_wiper() -> Self {
        let header = Command::Read.header(VOLATILE_WIPER);
        Frame::Exchange(((header as u16) << 8) | READ_FILLER as u16)
    }
}

/// Extract the wiper position from a read response.
///
/// The wiper sits in the low byte. The high byte echoes the command and error bits and is dropped.
#[inline]
pub const fn wiper_from_response(word: u16) -> u8 {
    (word & 0xFF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_bytes_match_device_table() {
        assert_eq!(Command::Write.header(VOLATILE_WIPER), 0x00);
        assert_eq!(Command::Increment.header(VOLATILE_WIPER), 0x04);
        assert_eq!(Command::Decrement.header(VOLATILE_WIPER), 0x08);
        assert_eq!(Command::Read.header(VOLATILE_WIPER), 0x0C);
    }

    #[test]
    fn address_lands_in_upper_nibble() {
        assert_eq!(Command::Read.header(0x1), 0x1C);
        assert_eq!(Command::Write.header(0xF), 0xF0);
        // Only four address bits exist.
        assert_eq!(Command::Write.header(0x1F), 0xF0);
    }

    #[test]
    fn frames() {
        assert_eq!(
            Frame::set_wiper(0xA5),
            Frame::WithData {
                header: 0x00,
                data: 0xA5
            }
        );
        assert_eq!(Frame::increment(), Frame::Header(0x04));
        assert_eq!(Frame::decrement(), Frame::Header(0x08));
        assert_eq!(Frame::read_wiper(), Frame::Exchange(0x0C00));
    }

    #[test]
    fn response_keeps_low_byte_only() {
        assert_eq!(wiper_from_response(0xFF42), 0x42);
        assert_eq!(wiper_from_response(0x0000), 0x00);
        assert_eq!(wiper_from_response(0x00FF), 0xFF);
    }
}
