use super::object::ObjectId;

slotmap::new_key_type! {
    /// Unique identifier for a collection in the scene.
    pub struct CollectionId;
}

/// A named group of linked objects.
///
/// An object may be linked into several collections; a collection lists
/// each object at most once.
#[derive(Debug, Clone)]
pub struct CollectionData {
    pub name: String,
    pub objects: Vec<ObjectId>,
}

impl CollectionData {
    /// Creates an empty collection.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }
}
