use std::path::PathBuf;

use crate::error::Result;
use crate::operations::creation::{ImportOptions, MakeRouteCurve};
use crate::route::decode_file;
use crate::scene::{CollectionId, ObjectId, Scene};

/// Imports a route document from disk as a curve object.
///
/// Reads and decodes the file, maps the path into scene space, and builds
/// the curve object in the given collection. Nothing is added to the scene
/// unless every step succeeds.
pub struct ImportRoute {
    path: PathBuf,
    options: ImportOptions,
}

impl ImportRoute {
    /// Creates a new `ImportRoute` operation.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, options: ImportOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    /// Executes the import, returning the new object.
    ///
    /// # Errors
    ///
    /// Returns decode errors for unreadable or malformed files, route errors
    /// for missing fields, bad scales, mismatched or empty paths, and scene
    /// errors if the collection does not exist.
    pub fn execute(&self, scene: &mut Scene, collection: CollectionId) -> Result<ObjectId> {
        let _span = tracing::info_span!("import_route", path = %self.path.display()).entered();
        let route = decode_file(&self.path)?;
        let points = route.scene_points()?;
        MakeRouteCurve::new(points, self.options.clone()).execute(scene, collection)
    }
}
