use std::fmt;
use std::str::FromStr;

/// A length unit, expressed as a factor to metres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    #[default]
    Metre,
    Decimetre,
    Centimetre,
    Millimetre,
    Inch,
    /// SVG user unit at 90 dpi.
    SvgPixel,
}

impl LengthUnit {
    /// Metres per unit.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Metre => 1.0,
            Self::Decimetre => 0.1,
            Self::Centimetre => 0.01,
            Self::Millimetre => 0.001,
            Self::Inch => 0.0254,
            Self::SvgPixel => 0.0254 / 90.0,
        }
    }

    /// Short name as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Metre => "m",
            Self::Decimetre => "dm",
            Self::Centimetre => "cm",
            Self::Millimetre => "mm",
            Self::Inch => "in",
            Self::SvgPixel => "svg",
        }
    }
}

/// Error returned when a length unit name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported length unit {0:?}")]
pub struct UnknownLengthUnit(pub String);

impl FromStr for LengthUnit {
    type Err = UnknownLengthUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Self::Metre),
            "dm" => Ok(Self::Decimetre),
            "cm" => Ok(Self::Centimetre),
            "mm" => Ok(Self::Millimetre),
            "in" => Ok(Self::Inch),
            "svg" => Ok(Self::SvgPixel),
            other => Err(UnknownLengthUnit(other.to_owned())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
