use geo::{Centroid, ChamberlainDuquetteArea, MultiPolygon, Point};

use crate::types::abbreviation_for;

const EARTH_RADIUS_M: f64 = 6_378_137.0;

// Solid-angle band the 48 contiguous states fall into, mapped onto the
// font-size band below.
const MIN_AREA_SR: f64 = 0.0001;
const MAX_AREA_SR: f64 = 0.1;
const MIN_FONT_PX: f64 = 8.0;
const MAX_FONT_PX: f64 = 20.0;
const DEFAULT_FONT_PX: f64 = 12.0;

/// Placement and sizing for a state's map label.
#[derive(Debug, Clone, PartialEq)]
pub struct StateLabel {
    /// USPS abbreviation when known, full name otherwise.
    pub text: String,
    pub font_size: f64,
    /// Centroid of the polygon, when geometry is available.
    pub position: Option<Point<f64>>,
}

/// Label for a state polygon. Font size scales linearly with the polygon's
/// spherical area so large states carry larger labels, clamped to the
/// 8-20 px band; geometry-less features get the 12 px default.
pub fn state_label(name: &str, geometry: Option<&MultiPolygon<f64>>) -> StateLabel {
    StateLabel {
        text: abbreviation_for(name).unwrap_or(name).to_string(),
        font_size: geometry.map(label_font_size).unwrap_or(DEFAULT_FONT_PX),
        position: geometry.and_then(|geometry| geometry.centroid()),
    }
}

fn label_font_size(geometry: &MultiPolygon<f64>) -> f64 {
    let steradians =
        geometry.chamberlain_duquette_unsigned_area() / (EARTH_RADIUS_M * EARTH_RADIUS_M);
    if steradians <= 0.0 {
        return DEFAULT_FONT_PX;
    }
    let normalized = ((steradians - MIN_AREA_SR) / (MAX_AREA_SR - MIN_AREA_SR)).clamp(0.0, 1.0);
    MIN_FONT_PX + normalized * (MAX_FONT_PX - MIN_FONT_PX)
}
