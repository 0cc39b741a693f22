use crate::math::{Point3, Point4};

slotmap::new_key_type! {
    /// Unique identifier for curve data in the scene.
    pub struct CurveId;
}

/// Interpolation used by a spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineType {
    /// Straight segments between control points.
    Poly,
    /// Rational B-spline through weighted control points.
    Nurbs,
}

/// A single spline inside curve data.
#[derive(Debug, Clone)]
pub struct Spline {
    /// Interpolation type.
    pub kind: SplineType,
    /// Control points in homogeneous form; `w` is the weight.
    pub points: Vec<Point4>,
    /// B-spline order (degree + 1). Never exceeds the point count.
    pub order: usize,
    /// Whether the knot vector is clamped so the curve touches its end points.
    pub use_endpoint: bool,
}

impl Spline {
    /// Creates a NURBS spline with unit weights.
    ///
    /// `order` is clamped to `1..=points.len()`.
    #[must_use]
    pub fn nurbs(points: &[Point3], order: usize, use_endpoint: bool) -> Self {
        Self {
            kind: SplineType::Nurbs,
            points: points
                .iter()
                .map(|p| Point4::new(p.x, p.y, p.z, 1.0))
                .collect(),
            order: order.clamp(1, points.len().max(1)),
            use_endpoint,
        }
    }

    /// Creates a poly spline with unit weights.
    #[must_use]
    pub fn poly(points: &[Point3]) -> Self {
        Self {
            kind: SplineType::Poly,
            ..Self::nurbs(points, 2, true)
        }
    }

    /// Returns the control points without their weights.
    pub fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points.iter().map(|p| Point3::new(p.x, p.y, p.z))
    }

    /// Returns the control point weights.
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.w)
    }
}

/// Curve data: a named set of splines that objects can instance.
#[derive(Debug, Clone)]
pub struct CurveData {
    pub name: String,
    pub splines: Vec<Spline>,
}

impl CurveData {
    /// Creates empty curve data.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            splines: Vec::new(),
        }
    }

    /// Creates curve data holding a single spline.
    #[must_use]
    pub fn with_spline(name: impl Into<String>, spline: Spline) -> Self {
        Self {
            name: name.into(),
            splines: vec![spline],
        }
    }
}
