use std::sync::Arc;

use anyhow::{bail, Context, Result};
use geo::MultiPolygon;
use serde_json::Value;

use crate::types::UNKNOWN;

/// One geometry feature as delivered by the host's topology loader.
///
/// Topology sources disagree about where name and FIPS live, so the
/// accessors resolve each field through a fixed fallback order:
/// `properties.name` then `properties.NAME` for the display name, and
/// `properties.fips`, `properties.state`, then the feature id for codes.
#[derive(Debug, Clone, Default)]
pub struct Feature {
    pub id: Option<Arc<str>>,
    pub name: Option<Arc<str>>,
    pub alt_name: Option<Arc<str>>,
    pub state_prop: Option<Arc<str>>,
    pub fips_prop: Option<Arc<str>>,
    /// Polygon geometry, when the host's loader provides it. Only the
    /// label resolver consumes it; selection logic never does.
    pub geometry: Option<MultiPolygon<f64>>,
}

impl Feature {
    /// Feature keyed by id with no extra properties, as us-atlas emits them.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: Some(Arc::from(id)),
            name: Some(Arc::from(name)),
            ..Self::default()
        }
    }

    pub fn with_geometry(mut self, geometry: MultiPolygon<f64>) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Display name, degrading to "Unknown" when the source has none.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.alt_name.as_deref())
            .unwrap_or(UNKNOWN)
    }

    /// Identifier of a state feature: `properties.state`, else the id.
    pub fn state_id(&self) -> Option<&str> {
        self.state_prop.as_deref().or(self.id.as_deref())
    }

    /// FIPS text of a state feature.
    pub fn state_fips(&self) -> Option<&str> {
        self.fips_prop
            .as_deref()
            .or(self.state_prop.as_deref())
            .or(self.id.as_deref())
    }

    /// FIPS text of a county feature.
    pub fn county_fips(&self) -> Option<&str> {
        self.fips_prop.as_deref().or(self.id.as_deref())
    }
}

/// Reads a topology payload into features.
///
/// Accepts either a bare array of features or a GeoJSON-style collection
/// with a `features` array. A feature missing name or FIPS fields is still
/// returned and degrades at the accessors; only a payload with the wrong
/// overall shape is an error.
pub fn features_from_json(payload: &Value) -> Result<Vec<Feature>> {
    let items: &[Value] = match payload {
        Value::Array(items) => items.as_slice(),
        Value::Object(obj) => obj
            .get("features")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .context("topology object has no `features` array")?,
        _ => bail!("topology payload must be an array or a feature collection"),
    };
    Ok(items.iter().map(feature_from_value).collect())
}

fn feature_from_value(value: &Value) -> Feature {
    let props = value.get("properties");
    Feature {
        id: text(value.get("id")),
        name: text(props.and_then(|p| p.get("name"))),
        alt_name: text(props.and_then(|p| p.get("NAME"))),
        state_prop: text(props.and_then(|p| p.get("state"))),
        fips_prop: text(props.and_then(|p| p.get("fips"))),
        geometry: None,
    }
}

// Topology sources encode FIPS codes either as strings or bare numbers.
fn text(value: Option<&Value>) -> Option<Arc<str>> {
    match value? {
        Value::String(s) => Some(Arc::from(s.as_str())),
        Value::Number(n) => Some(Arc::from(n.to_string().as_str())),
        _ => None,
    }
}
