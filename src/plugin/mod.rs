//! Host-facing import menu.
//!
//! A host exposes file importers through an [`ImportMenu`]. Each entry is a
//! [`FileImporter`] described by an [`OperatorInfo`]; the menu dispatches a
//! chosen file to the importer registered for its extension.

use std::path::Path;

use crate::error::{PluginError, Result};
use crate::operations::creation::ImportOptions;
use crate::operations::import::ImportRoute;
use crate::scene::{CollectionId, ObjectId, Scene};

/// Identifier of the cheapest-route import operator.
pub const CHEAPEST_ROUTE_OPERATOR_ID: &str = "cheapest_route_import.path";

/// Static description of an import operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorInfo {
    /// Unique operator id, e.g. `cheapest_route_import.path`.
    pub id: &'static str,
    /// Menu label and tooltip title.
    pub label: &'static str,
    /// File extension including the leading dot.
    pub filename_ext: &'static str,
    /// File-picker filter.
    pub filter_glob: &'static str,
}

impl OperatorInfo {
    /// Returns whether `path` has this operator's extension, ignoring case.
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        let wanted = self.filename_ext.trim_start_matches('.');
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(wanted))
    }
}

/// An importer that can be listed in an [`ImportMenu`].
pub trait FileImporter {
    /// Describes the operator.
    fn info(&self) -> &OperatorInfo;

    /// Imports `path` into `collection`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be imported.
    fn import(&self, path: &Path, scene: &mut Scene, collection: CollectionId)
        -> Result<ObjectId>;
}

/// Imports cheapest-route JSON documents as NURBS curve objects.
#[derive(Debug, Clone, Default)]
pub struct CheapestRouteImporter {
    pub options: ImportOptions,
}

const CHEAPEST_ROUTE_INFO: OperatorInfo = OperatorInfo {
    id: CHEAPEST_ROUTE_OPERATOR_ID,
    label: "Import cheapest route path",
    filename_ext: ".json",
    filter_glob: "*.json",
};

impl FileImporter for CheapestRouteImporter {
    fn info(&self) -> &OperatorInfo {
        &CHEAPEST_ROUTE_INFO
    }

    fn import(
        &self,
        path: &Path,
        scene: &mut Scene,
        collection: CollectionId,
    ) -> Result<ObjectId> {
        ImportRoute::new(path, self.options.clone()).execute(scene, collection)
    }
}

/// The host's file-import menu.
#[derive(Default)]
pub struct ImportMenu {
    entries: Vec<Box<dyn FileImporter>>,
}

impl ImportMenu {
    /// Creates an empty menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an importer to the menu.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::AlreadyRegistered`] if an importer with the
    /// same id is present.
    pub fn register(&mut self, importer: Box<dyn FileImporter>) -> Result<()> {
        let id = importer.info().id;
        if self.entries.iter().any(|e| e.info().id == id) {
            return Err(PluginError::AlreadyRegistered(id.to_owned()).into());
        }
        tracing::debug!(id, "registered importer");
        self.entries.push(importer);
        Ok(())
    }

    /// Removes an importer by id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::NotRegistered`] if no importer has that id.
    pub fn unregister(&mut self, id: &str) -> Result<Box<dyn FileImporter>> {
        let index = self
            .entries
            .iter()
            .position(|e| e.info().id == id)
            .ok_or_else(|| PluginError::NotRegistered(id.to_owned()))?;
        tracing::debug!(id, "unregistered importer");
        Ok(self.entries.remove(index))
    }

    /// Lists the registered operators in menu order.
    pub fn entries(&self) -> impl Iterator<Item = &OperatorInfo> + '_ {
        self.entries.iter().map(|e| e.info())
    }

    /// Imports `path` with the first importer that accepts its extension.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::UnsupportedFormat`] if no importer accepts the
    /// file, otherwise whatever the importer returns.
    pub fn dispatch(
        &self,
        path: &Path,
        scene: &mut Scene,
        collection: CollectionId,
    ) -> Result<ObjectId> {
        let importer = self
            .entries
            .iter()
            .find(|e| e.info().accepts(path))
            .ok_or_else(|| PluginError::UnsupportedFormat {
                extension: path
                    .extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            })?;
        importer.import(path, scene, collection)
    }
}

/// Adds the cheapest-route importer to `menu`.
///
/// # Errors
///
/// Returns an error if it is already registered.
pub fn register(menu: &mut ImportMenu) -> Result<()> {
    menu.register(Box::new(CheapestRouteImporter::default()))
}

/// Removes the cheapest-route importer from `menu`.
///
/// # Errors
///
/// Returns an error if it is not registered.
pub fn unregister(menu: &mut ImportMenu) -> Result<()> {
    menu.unregister(CHEAPEST_ROUTE_OPERATOR_ID).map(drop)
}
