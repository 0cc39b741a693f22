mod tessellate_curve;

pub use tessellate_curve::TessellateCurve;

use crate::math::Point3;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Segments per knot span.
    pub resolution: usize,
    /// Maximum number of segments for one spline.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            resolution: 12,
            max_segments: 4096,
        }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Returns the summed length of the polyline segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}
