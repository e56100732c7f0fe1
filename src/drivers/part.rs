//! Supported MCP41HVX1 part numbers.
//!
//! MCP41HV31 parts have 7-bit wipers (positions 0 to 127), MCP41HV51 parts have 8-bit wipers
//! (0 to 255). The driver itself never range-checks; these helpers are for picking a position from a
//! target resistance and back.

/// Typical wiper resistance in ohms.
pub const WIPER_RESISTANCE_OHMS: u32 = 75;

/// Wiper tap resolution.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// 7-bit, 128 taps.
    Bits7,
    /// 8-bit, 256 taps.
    Bits8,
}

impl Resolution {
    /// Highest valid wiper position.
    #[inline]
    pub const fn max_position(self) -> u8 {
        match self {
            Resolution::Bits7 => 0x7F,
            Resolution::Bits8 => 0xFF,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Package {
    Tssop14,
    /// TSSOP-14 on cut tape.
    Tssop14CutTape,
    Qfn,
}

/// One orderable MCP41HVX1 part.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Part {
    number: &'static str,
    resolution: Resolution,
    resistance_ohms: u32,
    package: Package,
}

impl Part {
    pub const MCP41HV31_104E_ST: Part = Part::new(
        "MCP41HV31-104E/ST",
        Resolution::Bits7,
        100_000,
        Package::Tssop14,
    );
    pub const MCP41HV31_503E_ST: Part = Part::new(
        "MCP41HV31-503E/ST",
        Resolution::Bits7,
        50_000,
        Package::Tssop14,
    );
    pub const MCP41HV31_103E_ST: Part = Part::new(
        "MCP41HV31-103E/ST",
        Resolution::Bits7,
        10_000,
        Package::Tssop14,
    );
    pub const MCP41HV31_502E_ST: Part = Part::new(
        "MCP41HV31-502E/ST",
        Resolution::Bits7,
        5_000,
        Package::Tssop14,
    );
    pub const MCP41HV31_103E_MQ: Part = Part::new(
        "MCP41HV31-103E/MQ",
        Resolution::Bits7,
        10_000,
        Package::Qfn,
    );
    pub const MCP41HV51_104E_ST: Part = Part::new(
        "MCP41HV51-104E/ST",
        Resolution::Bits8,
        100_000,
        Package::Tssop14,
    );
    pub const MCP41HV51_503E_ST: Part = Part::new(
        "MCP41HV51-503E/ST",
        Resolution::Bits8,
        50_000,
        Package::Tssop14,
    );
    pub const MCP41HV51T_503E_ST: Part = Part::new(
        "MCP41HV51T-503E/ST",
        Resolution::Bits8,
        50_000,
        Package::Tssop14CutTape,
    );
    pub const MCP41HV51_103E_ST: Part = Part::new(
        "MCP41HV51-103E/ST",
        Resolution::Bits8,
        10_000,
        Package::Tssop14,
    );
    pub const MCP41HV51_502E_ST: Part = Part::new(
        "MCP41HV51-502E/ST",
        Resolution::Bits8,
        5_000,
        Package::Tssop14,
    );

    /// Every supported part.
    pub const ALL: [Part; 10] = [
        Part::MCP41HV31_104E_ST,
        Part::MCP41HV31_503E_ST,
        Part::MCP41HV31_103E_ST,
        Part::MCP41HV31_502E_ST,
        Part::MCP41HV31_103E_MQ,
        Part::MCP41HV51_104E_ST,
        Part::MCP41HV51_503E_ST,
        Part::MCP41HV51T_503E_ST,
        Part::MCP41HV51_103E_ST,
        Part::MCP41HV51_502E_ST,
    ];

    const fn new(
        number: &'static str,
        resolution: Resolution,
        resistance_ohms: u32,
        package: Package,
    ) -> Self {
        Self {
            number,
            resolution,
            resistance_ohms,
            package,
        }
    }

    /// Look up a part by its full order number, e.g. `"MCP41HV51-104E/ST"`.
    pub fn from_number(number: &str) -> Option<Part> {
        Part::ALL.iter().copied().find(|p| p.number == number)
    }

    #[inline]
    pub fn number(&self) -> &'static str {
        self.number
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[inline]
    pub fn max_position(&self) -> u8 {
        self.resolution.max_position()
    }

    /// End-to-end (A to B) resistance in ohms.
    #[inline]
    pub fn resistance_ohms(&self) -> u32 {
        self.resistance_ohms
    }

    #[inline]
    pub fn package(&self) -> Package {
        self.package
    }

    /// Wiper position giving the closest B-to-W resistance to `ohms`.
    ///
    /// Requests outside what the part can reach are clamped to position 0 or the top tap.
    pub fn position_for_resistance(&self, ohms: u32) -> u8 {
        let ohms = enforce_bounds(
            WIPER_RESISTANCE_OHMS,
            ohms,
            WIPER_RESISTANCE_OHMS + self.resistance_ohms,
        );
        let max = self.max_position() as u32;
        let position = ((ohms - WIPER_RESISTANCE_OHMS) * max + self.resistance_ohms / 2)
            / self.resistance_ohms;
        position as u8
    }

    /// Nominal B-to-W resistance at `position`. Positions above the top tap read as the top tap.
    pub fn resistance_for_position(&self, position: u8) -> u32 {
        let max = self.max_position();
        let position = position.min(max) as u32;
        WIPER_RESISTANCE_OHMS + position * self.resistance_ohms / max as u32
    }
}

#[inline]
fn enforce_bounds(lower: u32, value: u32, upper: u32) -> u32 {
    value.clamp(lower, upper)
}
