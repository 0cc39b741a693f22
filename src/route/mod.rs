//! Route records and the grid-to-scene coordinate transform.

mod decode;
mod length_unit;
mod transform;
mod world_scale;

pub use decode::{decode_file, decode_reader, decode_slice};
pub use length_unit::{LengthUnit, UnknownLengthUnit};
pub use transform::transform_path;
pub use world_scale::WorldScale;

use crate::error::RouteError;
use crate::math::Point3;

/// A route polyline stored as three parallel coordinate sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePath {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl RoutePath {
    /// Creates a path from its coordinate sequences.
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Self { x, y, z }
    }

    /// Returns the number of points after checking that the three
    /// sequences agree and are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::LengthMismatch`] if the sequences differ in
    /// length, or [`RouteError::EmptyPath`] if they are all empty.
    pub fn point_count(&self) -> Result<usize, RouteError> {
        let (x, y, z) = (self.x.len(), self.y.len(), self.z.len());
        if x != y || x != z {
            return Err(RouteError::LengthMismatch { x, y, z });
        }
        if x == 0 {
            return Err(RouteError::EmptyPath);
        }
        Ok(x)
    }

    /// Iterates over the raw grid-space points.
    ///
    /// Stops at the shortest sequence; call [`point_count`](Self::point_count)
    /// first when the lengths have not been checked.
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| Point3::new(x, y, z))
    }
}

/// Extent of the grid the route was computed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainSize {
    pub width: f64,
    pub height: f64,
}

impl DomainSize {
    /// Creates a new domain size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns whether either extent is zero or negative.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A validated `cheapest_route` record.
#[derive(Debug, Clone, PartialEq)]
pub struct CheapestRoute {
    pub path: RoutePath,
    pub world_scale: WorldScale,
    pub domain_size: DomainSize,
}

impl CheapestRoute {
    /// Transforms the route into scene space.
    ///
    /// # Errors
    ///
    /// See [`transform_path`].
    pub fn scene_points(&self) -> Result<Vec<Point3>, RouteError> {
        transform_path(&self.path, self.world_scale, self.domain_size)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn point_count_of_matching_sequences() {
        let path = RoutePath::new(vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]);
        assert_eq!(path.point_count().unwrap(), 2);
    }

    #[test]
    fn point_count_reports_mismatch() {
        let path = RoutePath::new(vec![0.0; 3], vec![0.0; 3], vec![0.0; 2]);
        assert_eq!(
            path.point_count(),
            Err(RouteError::LengthMismatch { x: 3, y: 3, z: 2 })
        );
    }

    #[test]
    fn mismatch_wins_over_empty() {
        let path = RoutePath::new(vec![], vec![1.0], vec![]);
        assert!(matches!(
            path.point_count(),
            Err(RouteError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn point_count_reports_empty() {
        assert_eq!(RoutePath::default().point_count(), Err(RouteError::EmptyPath));
    }

    #[test]
    fn points_zip_coordinates() {
        let path = RoutePath::new(vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]);
        let pts: Vec<_> = path.points().collect();
        assert_eq!(pts, vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)]);
    }

    #[test]
    fn degenerate_domains() {
        assert!(!DomainSize::new(10.0, 10.0).is_degenerate());
        assert!(DomainSize::new(0.0, 10.0).is_degenerate());
        assert!(DomainSize::new(10.0, -1.0).is_degenerate());
    }
}
