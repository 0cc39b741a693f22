//! A minimal scene graph: collections of objects instancing curve data.

pub mod collection;
pub mod curve;
pub mod object;

pub use collection::{CollectionData, CollectionId};
pub use curve::{CurveData, CurveId, Spline, SplineType};
pub use object::{ObjectData, ObjectId, ObjectKind};

use crate::error::SceneError;
use slotmap::SlotMap;

/// Name of the collection every scene starts with.
pub const ROOT_COLLECTION_NAME: &str = "Scene Collection";

/// Central arena that owns all scene entities.
///
/// Entities reference each other via typed IDs (generational indices).
/// Callers pass the scene and target collection explicitly to every
/// operation that creates objects.
#[derive(Debug)]
pub struct Scene {
    curves: SlotMap<CurveId, CurveData>,
    objects: SlotMap<ObjectId, ObjectData>,
    collections: SlotMap<CollectionId, CollectionData>,
    root: CollectionId,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates a scene holding only its root collection.
    #[must_use]
    pub fn new() -> Self {
        let mut collections = SlotMap::with_key();
        let root = collections.insert(CollectionData::new(ROOT_COLLECTION_NAME));
        Self {
            curves: SlotMap::with_key(),
            objects: SlotMap::with_key(),
            collections,
            root,
        }
    }

    /// Returns the root collection.
    #[must_use]
    pub fn root_collection(&self) -> CollectionId {
        self.root
    }

    // --- Curve data ---

    /// Inserts curve data and returns its ID.
    pub fn add_curve(&mut self, data: CurveData) -> CurveId {
        self.curves.insert(data)
    }

    /// Returns a reference to the curve data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the scene.
    pub fn curve(&self, id: CurveId) -> Result<&CurveData, SceneError> {
        self.curves
            .get(id)
            .ok_or(SceneError::EntityNotFound("curve"))
    }

    /// Returns a mutable reference to the curve data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the scene.
    pub fn curve_mut(&mut self, id: CurveId) -> Result<&mut CurveData, SceneError> {
        self.curves
            .get_mut(id)
            .ok_or(SceneError::EntityNotFound("curve"))
    }

    // --- Objects ---

    /// Inserts an object and returns its ID. The object is not linked
    /// into any collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the object instances curve data that is not in
    /// the scene.
    pub fn add_object(&mut self, data: ObjectData) -> Result<ObjectId, SceneError> {
        match data.kind {
            ObjectKind::Curve(curve) => {
                self.curve(curve)?;
            }
        }
        Ok(self.objects.insert(data))
    }

    /// Returns a reference to the object data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the scene.
    pub fn object(&self, id: ObjectId) -> Result<&ObjectData, SceneError> {
        self.objects
            .get(id)
            .ok_or(SceneError::EntityNotFound("object"))
    }

    /// Returns the curve data instanced by an object.
    ///
    /// # Errors
    ///
    /// Returns an error if the object or its curve is missing, or if the
    /// object does not instance a curve.
    pub fn object_curve(&self, id: ObjectId) -> Result<&CurveData, SceneError> {
        let curve = self.object(id)?.curve_id().ok_or(SceneError::NotACurve)?;
        self.curve(curve)
    }

    // --- Collections ---

    /// Inserts a collection and returns its ID.
    pub fn add_collection(&mut self, data: CollectionData) -> CollectionId {
        self.collections.insert(data)
    }

    /// Returns a reference to the collection, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the scene.
    pub fn collection(&self, id: CollectionId) -> Result<&CollectionData, SceneError> {
        self.collections
            .get(id)
            .ok_or(SceneError::EntityNotFound("collection"))
    }

    /// Links an object into a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if either entity is missing or the object is
    /// already linked into the collection.
    pub fn link_object(
        &mut self,
        collection: CollectionId,
        object: ObjectId,
    ) -> Result<(), SceneError> {
        self.object(object)?;
        let data = self
            .collections
            .get_mut(collection)
            .ok_or(SceneError::EntityNotFound("collection"))?;
        if data.objects.contains(&object) {
            return Err(SceneError::AlreadyLinked);
        }
        data.objects.push(object);
        Ok(())
    }

    /// Removes an object from a collection. Returns whether it was linked.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is missing.
    pub fn unlink_object(
        &mut self,
        collection: CollectionId,
        object: ObjectId,
    ) -> Result<bool, SceneError> {
        let data = self
            .collections
            .get_mut(collection)
            .ok_or(SceneError::EntityNotFound("collection"))?;
        let before = data.objects.len();
        data.objects.retain(|&o| o != object);
        Ok(data.objects.len() != before)
    }

    /// Returns the objects linked into a collection, in link order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is missing.
    pub fn objects_in(&self, collection: CollectionId) -> Result<&[ObjectId], SceneError> {
        Ok(&self.collection(collection)?.objects)
    }

    /// Returns the number of objects in the scene, linked or not.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}
