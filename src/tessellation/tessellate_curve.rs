use crate::error::Result;
use crate::geometry::{Curve, Nurbs};
use crate::scene::{ObjectId, Scene};

use super::{Polyline, TessellationParams};

/// Tessellates a curve object into one polyline per spline.
pub struct TessellateCurve {
    object: ObjectId,
    params: TessellationParams,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(object: ObjectId, params: TessellationParams) -> Self {
        Self { object, params }
    }

    /// Executes the tessellation.
    ///
    /// Each spline is sampled at `spans * resolution` evenly spaced
    /// parameters (at least one, at most `max_segments`). A spline with a
    /// single control point yields that point alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is missing or is not a curve, or if a
    /// spline cannot be evaluated.
    pub fn execute(&self, scene: &Scene) -> Result<Vec<Polyline>> {
        let curve = scene.object_curve(self.object)?;
        curve
            .splines
            .iter()
            .map(|spline| -> Result<Polyline> {
                let nurbs = Nurbs::from_spline(spline)?;
                if nurbs.control_points().len() == 1 {
                    return Ok(Polyline {
                        points: nurbs.control_points().to_vec(),
                    });
                }

                let segments = (nurbs.span_count() * self.params.resolution)
                    .clamp(1, self.params.max_segments.max(1));
                let domain = nurbs.domain();
                #[allow(clippy::cast_precision_loss)]
                let points = (0..=segments)
                    .map(|i| nurbs.evaluate(domain.lerp(i as f64 / segments as f64)))
                    .collect::<Result<Vec<_>>>()?;
                tracing::trace!(
                    segments,
                    degree = nurbs.degree(),
                    "tessellated spline"
                );
                Ok(Polyline { points })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::scene::{CurveData, ObjectData, Spline};
    use approx::assert_relative_eq;

    fn object_with(scene: &mut Scene, spline: Spline) -> ObjectId {
        let curve = scene.add_curve(CurveData::with_spline("curve", spline));
        scene.add_object(ObjectData::curve("obj", curve)).unwrap()
    }

    #[test]
    fn clamped_spline_hits_both_ends() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(3.0, 2.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(5.0, 1.0, 0.0),
        ];
        let mut scene = Scene::new();
        let obj = object_with(&mut scene, Spline::nurbs(&pts, 4, true));

        let lines = TessellateCurve::new(obj, TessellationParams::default())
            .execute(&scene)
            .unwrap();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        // Two spans at 12 segments each.
        assert_eq!(line.points.len(), 25);
        assert_relative_eq!(line.points[0], pts[0], epsilon = 1e-12);
        assert_relative_eq!(line.points[24], pts[4], epsilon = 1e-12);
    }

    #[test]
    fn poly_spline_length() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(3.0, 4.0, 0.0),
        ];
        let mut scene = Scene::new();
        let obj = object_with(&mut scene, Spline::poly(&pts));
        let lines = TessellateCurve::new(obj, TessellationParams::default())
            .execute(&scene)
            .unwrap();
        assert_relative_eq!(lines[0].length(), 7.0, epsilon = 1e-9);
    }

    #[test]
    fn segment_cap_applies() {
        let pts: Vec<Point3> = (0..20).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        let mut scene = Scene::new();
        let obj = object_with(&mut scene, Spline::nurbs(&pts, 4, false));
        let params = TessellationParams {
            resolution: 12,
            max_segments: 10,
        };
        let lines = TessellateCurve::new(obj, params).execute(&scene).unwrap();
        assert_eq!(lines[0].points.len(), 11);
    }

    #[test]
    fn single_point_spline() {
        let mut scene = Scene::new();
        let obj = object_with(&mut scene, Spline::nurbs(&[Point3::new(1.0, 2.0, 3.0)], 4, false));
        let lines = TessellateCurve::new(obj, TessellationParams::default())
            .execute(&scene)
            .unwrap();
        assert_eq!(lines[0].points, vec![Point3::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn missing_object_fails() {
        let mut other = Scene::new();
        let foreign = object_with(&mut other, Spline::poly(&[Point3::origin()]));
        let scene = Scene::new();
        assert!(TessellateCurve::new(foreign, TessellationParams::default())
            .execute(&scene)
            .is_err());
    }
}
