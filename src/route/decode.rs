use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DecodeError, Result, RouteError};

use super::{CheapestRoute, DomainSize, RoutePath, WorldScale};

// Every field is optional at the serde level so absent keys surface as
// `RouteError::MissingField` with a dotted path instead of a generic
// decode error.

#[derive(Deserialize)]
struct RawDocument {
    cheapest_route: Option<RawRoute>,
}

#[derive(Deserialize)]
struct RawRoute {
    path: Option<RawPath>,
    world_scale: Option<String>,
    domain_size: Option<RawDomain>,
}

#[derive(Deserialize)]
struct RawPath {
    x: Option<Vec<f64>>,
    y: Option<Vec<f64>>,
    z: Option<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawDomain {
    width: Option<f64>,
    height: Option<f64>,
}

fn require<T>(value: Option<T>, field: &'static str) -> std::result::Result<T, RouteError> {
    value.ok_or(RouteError::MissingField(field))
}

impl RawDocument {
    fn validate(self) -> std::result::Result<CheapestRoute, RouteError> {
        let route = require(self.cheapest_route, "cheapest_route")?;

        let path = require(route.path, "cheapest_route.path")?;
        let path = RoutePath::new(
            require(path.x, "cheapest_route.path.x")?,
            require(path.y, "cheapest_route.path.y")?,
            require(path.z, "cheapest_route.path.z")?,
        );

        let world_scale: WorldScale =
            require(route.world_scale, "cheapest_route.world_scale")?.parse()?;

        let domain = require(route.domain_size, "cheapest_route.domain_size")?;
        let domain_size = DomainSize::new(
            require(domain.width, "cheapest_route.domain_size.width")?,
            require(domain.height, "cheapest_route.domain_size.height")?,
        );

        Ok(CheapestRoute {
            path,
            world_scale,
            domain_size,
        })
    }
}

/// Decodes a route document from JSON bytes.
///
/// Path lengths are not checked here; that happens when the route is
/// transformed.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] for malformed JSON or wrongly typed values,
/// [`RouteError::MissingField`] for absent or `null` keys, and
/// [`RouteError::MalformedScale`] for a bad `world_scale` string.
pub fn decode_slice(data: &[u8]) -> Result<CheapestRoute> {
    let raw: RawDocument = serde_json::from_slice(data).map_err(DecodeError::from)?;
    let route = raw.validate()?;
    tracing::debug!(
        points = route.path.x.len(),
        scale = %route.world_scale,
        width = route.domain_size.width,
        height = route.domain_size.height,
        "decoded route"
    );
    Ok(route)
}

/// Decodes a route document from a reader.
///
/// # Errors
///
/// As [`decode_slice`], plus [`DecodeError::Io`] if reading fails.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<CheapestRoute> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(DecodeError::from)?;
    decode_slice(&data)
}

/// Reads and decodes a route document from disk.
///
/// # Errors
///
/// As [`decode_slice`], plus [`DecodeError::Io`] if the file cannot be read.
pub fn decode_file(path: &Path) -> Result<CheapestRoute> {
    tracing::debug!(path = %path.display(), "reading route document");
    let data = std::fs::read(path).map_err(DecodeError::from)?;
    decode_slice(&data)
}
