use super::curve::CurveId;

slotmap::new_key_type! {
    /// Unique identifier for an object in the scene.
    pub struct ObjectId;
}

/// What an object instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Curve(CurveId),
}

/// Data associated with a scene object.
#[derive(Debug, Clone)]
pub struct ObjectData {
    pub name: String,
    pub kind: ObjectKind,
}

impl ObjectData {
    /// Creates an object instancing curve data.
    #[must_use]
    pub fn curve(name: impl Into<String>, curve: CurveId) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Curve(curve),
        }
    }

    /// Returns the curve data this object instances, if any.
    #[must_use]
    pub fn curve_id(&self) -> Option<CurveId> {
        match self.kind {
            ObjectKind::Curve(id) => Some(id),
        }
    }
}
