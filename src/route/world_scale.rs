use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;
use crate::math::Vector3;

/// Per-axis multipliers converting grid units to scene units.
///
/// Written in route documents as three whitespace-separated numbers,
/// e.g. `"0.5 0.5 2"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldScale {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldScale {
    /// Creates a scale from its three factors.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The identity scale `(1, 1, 1)`.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Returns the factors as a vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Default for WorldScale {
    fn default() -> Self {
        Self::identity()
    }
}

impl FromStr for WorldScale {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| RouteError::MalformedScale {
            input: s.to_owned(),
            reason,
        };

        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(malformed(format!(
                "expected 3 factors, found {}",
                tokens.len()
            )));
        }

        let mut values = [0.0; 3];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            let value: f64 = token
                .parse()
                .map_err(|_| malformed(format!("{token:?} is not a number")))?;
            // `f64::from_str` accepts "inf" and "NaN".
            if !value.is_finite() {
                return Err(malformed(format!("{token:?} is not finite")));
            }
            *slot = value;
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl fmt::Display for WorldScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}
