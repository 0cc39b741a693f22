use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::math::Point3;
use crate::scene::{CollectionId, CurveData, ObjectData, ObjectId, Scene, Spline};

/// Settings for the curve object built from an imported route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Name given to the new object.
    pub object_name: String,
    /// Name given to the new curve data.
    pub curve_name: String,
    /// Requested NURBS order; clamped to the point count.
    pub order: usize,
    /// Clamp the knot vector so the curve reaches the first and last points.
    pub use_endpoint: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            object_name: "cheapest_route".into(),
            curve_name: "curve".into(),
            order: 4,
            use_endpoint: false,
        }
    }
}

/// Creates a NURBS curve object from scene-space points and links it into
/// a collection.
pub struct MakeRouteCurve {
    points: Vec<Point3>,
    options: ImportOptions,
}

impl MakeRouteCurve {
    /// Creates a new `MakeRouteCurve` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, options: ImportOptions) -> Self {
        Self { points, options }
    }

    /// Executes the operation, returning the new object.
    ///
    /// Each point becomes one control point with weight 1.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::EmptyPath`] if there are no points, or a scene
    /// error if the collection does not exist.
    pub fn execute(&self, scene: &mut Scene, collection: CollectionId) -> Result<ObjectId> {
        if self.points.is_empty() {
            return Err(RouteError::EmptyPath.into());
        }
        // Fail before allocating anything.
        scene.collection(collection)?;

        let spline = Spline::nurbs(&self.points, self.options.order, self.options.use_endpoint);
        tracing::debug!(
            points = spline.points.len(),
            order = spline.order,
            use_endpoint = spline.use_endpoint,
            "built route spline"
        );

        let curve = scene.add_curve(CurveData::with_spline(self.options.curve_name.clone(), spline));
        let object = scene.add_object(ObjectData::curve(self.options.object_name.clone(), curve))?;
        scene.link_object(collection, object)?;

        tracing::info!(
            object = %self.options.object_name,
            collection = %scene.collection(collection)?.name,
            "created route curve object"
        );
        Ok(object)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RouteImportError;
    use crate::math::Point4;
    use crate::scene::{CollectionData, SplineType};

    fn points() -> Vec<Point3> {
        vec![
            Point3::new(-5.0, 5.0, 0.0),
            Point3::new(0.0, 2.0, 1.0),
            Point3::new(5.0, 5.0, 0.0),
        ]
    }

    #[test]
    fn creates_linked_nurbs_object() {
        let mut scene = Scene::new();
        let root = scene.root_collection();
        let obj = MakeRouteCurve::new(points(), ImportOptions::default())
            .execute(&mut scene, root)
            .unwrap();

        assert_eq!(scene.objects_in(root).unwrap(), &[obj]);
        assert_eq!(scene.object(obj).unwrap().name, "cheapest_route");

        let curve = scene.object_curve(obj).unwrap();
        assert_eq!(curve.name, "curve");
        assert_eq!(curve.splines.len(), 1);
        let spline = &curve.splines[0];
        assert_eq!(spline.kind, SplineType::Nurbs);
        assert_eq!(spline.order, 3);
        assert!(!spline.use_endpoint);
        assert_eq!(
            spline.points,
            vec![
                Point4::new(-5.0, 5.0, 0.0, 1.0),
                Point4::new(0.0, 2.0, 1.0, 1.0),
                Point4::new(5.0, 5.0, 0.0, 1.0),
            ]
        );
    }

    #[test]
    fn honours_options() {
        let mut scene = Scene::new();
        let routes = scene.add_collection(CollectionData::new("routes"));
        let options = ImportOptions {
            object_name: "ridge".into(),
            curve_name: "ridge_curve".into(),
            order: 2,
            use_endpoint: true,
        };
        let obj = MakeRouteCurve::new(points(), options)
            .execute(&mut scene, routes)
            .unwrap();
        assert!(scene.objects_in(scene.root_collection()).unwrap().is_empty());
        assert_eq!(scene.objects_in(routes).unwrap(), &[obj]);
        let spline = &scene.object_curve(obj).unwrap().splines[0];
        assert_eq!(spline.order, 2);
        assert!(spline.use_endpoint);
        assert_eq!(scene.object_curve(obj).unwrap().name, "ridge_curve");
    }

    #[test]
    fn empty_points_fail_without_side_effects() {
        let mut scene = Scene::new();
        let root = scene.root_collection();
        let err = MakeRouteCurve::new(Vec::new(), ImportOptions::default())
            .execute(&mut scene, root)
            .unwrap_err();
        assert!(matches!(err, RouteImportError::Route(RouteError::EmptyPath)));
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn missing_collection_fails_without_side_effects() {
        let mut scene = Scene::new();
        let missing = Scene::new().add_collection(CollectionData::new("elsewhere"));
        assert!(MakeRouteCurve::new(points(), ImportOptions::default())
            .execute(&mut scene, missing)
            .is_err());
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ImportOptions = serde_json::from_str(r#"{"order": 3}"#).unwrap();
        assert_eq!(options.order, 3);
        assert_eq!(options.object_name, "cheapest_route");
        assert!(!options.use_endpoint);
    }
}
