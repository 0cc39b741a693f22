pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod plugin;
pub mod route;
pub mod scene;
pub mod tessellation;

pub use error::{Result, RouteImportError};
