use std::io::Write;

use crate::error::Result;
use crate::route::{CheapestRoute, LengthUnit};

/// Metres per inch.
const METRES_PER_INCH: f64 = 0.0254;

/// SVG user units per inch.
const SVG_DPI: f64 = 90.0;

/// Writes a route's grid path as an SVG polyline.
///
/// Coordinates are in grid units converted to SVG user units through
/// `unit`; the world scale is applied as a group transform.
pub struct EncodeSvg {
    unit: LengthUnit,
}

impl EncodeSvg {
    /// Creates a new `EncodeSvg` operation.
    #[must_use]
    pub fn new(unit: LengthUnit) -> Self {
        Self { unit }
    }

    /// SVG user units per grid unit.
    #[must_use]
    pub fn unit_factor(&self) -> f64 {
        SVG_DPI * self.unit.factor() / METRES_PER_INCH
    }

    /// Executes the encoding into `out`.
    ///
    /// # Errors
    ///
    /// Returns a route error if the path is empty or its coordinate lengths
    /// differ, or a write error if `out` fails.
    pub fn execute<W: Write>(&self, route: &CheapestRoute, mut out: W) -> Result<()> {
        route.path.point_count()?;

        let factor = self.unit_factor();
        let scale = route.world_scale;
        let width = pixel_extent(factor * scale.x * route.domain_size.width);
        let height = pixel_extent(factor * scale.y * route.domain_size.height);

        writeln!(
            out,
            r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
        )?;
        writeln!(
            out,
            r#"<g transform="scale({} {})">"#,
            c_exp(scale.x),
            c_exp(scale.y)
        )?;
        write!(out, r#"<polyline points=""#)?;
        for (i, (x, y)) in route.path.x.iter().zip(&route.path.y).enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{},{}", c_exp(factor * x), c_exp(factor * y))?;
        }
        writeln!(out, r#"" fill="none" stroke="black"/>"#)?;
        writeln!(out, "</g>")?;
        writeln!(out, "</svg>")?;

        tracing::debug!(
            unit = %self.unit,
            points = route.path.x.len(),
            width,
            height,
            "encoded route as svg"
        );
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn pixel_extent(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Formats like C's `%.8e`: eight fraction digits, signed exponent of at
/// least two digits.
fn c_exp(value: f64) -> String {
    let s = format!("{value:.8e}");
    let Some((mantissa, exp)) = s.split_once('e') else {
        return s;
    };
    match exp.parse::<i32>() {
        Ok(e) => {
            let sign = if e < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", e.abs())
        }
        Err(_) => s,
    }
}
