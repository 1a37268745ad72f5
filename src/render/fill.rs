use crate::engine::SelectionEngine;
use crate::report::CoachAssignment;
use crate::types::{name_eq, CountyFips};

/// Stroke colors for selected states, assigned by selection order and
/// cycled when more states are selected than there are colors.
pub const STATE_STROKE_PALETTE: [&str; 12] = [
    "#0958d9", // blue
    "#cf1322", // red
    "#389e0d", // green
    "#d48806", // orange
    "#722ed1", // purple
    "#eb2f96", // pink
    "#13c2c2", // cyan
    "#fa8c16", // orange-red
    "#2f54eb", // indigo
    "#52c41a", // light green
    "#faad14", // gold
    "#f5222d", // bright red
];

const STATE_STROKE_DEFAULT: &str = "#ffffff";
const STATE_STROKE_COUNTIES: &str = "#389e0d";

const STATE_FILL_ACTIVE: &str = "rgba(144, 238, 144, 0.7)";
const STATE_FILL_ACTIVE_HOVERED: &str = "rgba(144, 238, 144, 0.9)";
const STATE_FILL_HOVERED: &str = "rgba(144, 238, 144, 0.6)";
const STATE_FILL_DEFAULT: &str = "rgba(176, 176, 191, 0.5)";

const COUNTY_FILL_SELECTED: &str = "#52c41a";
const COUNTY_FILL_SELECTED_HOVERED: &str = "#73d13d";
const COUNTY_FILL_DIMMED: &str = "rgba(176, 176, 191, 0.2)";
const COUNTY_FILL_DIMMED_HOVERED: &str = "rgba(183, 235, 143, 0.3)";
const COUNTY_FILL_DEFAULT: &str = "#b0b0bf";
const COUNTY_FILL_DEFAULT_HOVERED: &str = "#b7eb8f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFillCategory {
    /// The state has at least one selected county.
    CountiesSelected,
    /// The state itself is directly selected.
    Selected,
    /// Neither, but currently hovered.
    Hovered,
    Default,
}

/// Visual treatment of one state polygon.
///
/// `CountiesSelected` and `Selected` share the same fill; the category only
/// decides the stroke (a darker green for counties-only, a palette color
/// for directly selected states).
#[derive(Debug, Clone, PartialEq)]
pub struct StateFill {
    pub category: StateFillCategory,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountyFillCategory {
    /// Assigned to a coach; the coach's color wins over selection styling.
    Assigned,
    Selected,
    /// Unselected, but the owning state has at least one selected county;
    /// nearly transparent so the state fill shows through.
    Dimmed,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountyFill {
    pub category: CountyFillCategory,
    pub fill: String,
}

/// Fill and stroke for a state polygon, under the current selection and
/// the given hover flag.
pub fn state_fill(
    engine: &SelectionEngine,
    state_id: &str,
    state_name: &str,
    hovered: bool,
) -> StateFill {
    let counties_selected = engine.has_selected_counties_in_state(state_name);
    let selected = engine.is_state_selected(state_id);

    let (category, fill) = if counties_selected {
        (
            StateFillCategory::CountiesSelected,
            if hovered { STATE_FILL_ACTIVE_HOVERED } else { STATE_FILL_ACTIVE },
        )
    } else if selected {
        (
            StateFillCategory::Selected,
            if hovered { STATE_FILL_ACTIVE_HOVERED } else { STATE_FILL_ACTIVE },
        )
    } else if hovered {
        (StateFillCategory::Hovered, STATE_FILL_HOVERED)
    } else {
        (StateFillCategory::Default, STATE_FILL_DEFAULT)
    };

    let (stroke, stroke_width) = if selected {
        (state_stroke_color(engine, state_id).to_string(), 4)
    } else if counties_selected {
        (STATE_STROKE_COUNTIES.to_string(), 3)
    } else {
        (STATE_STROKE_DEFAULT.to_string(), 2)
    };

    StateFill { category, fill: fill.to_string(), stroke, stroke_width }
}

/// Stroke color for a state: its palette color when selected (by position
/// in the selection order), white otherwise.
pub fn state_stroke_color(engine: &SelectionEngine, state_id: &str) -> &'static str {
    match engine.selection_position(state_id) {
        Some(position) => STATE_STROKE_PALETTE[position % STATE_STROKE_PALETTE.len()],
        None => STATE_STROKE_DEFAULT,
    }
}

/// Fill for a county polygon. A coach assignment's color wins over
/// selection styling: full color when selected, alpha-dimmed otherwise.
pub fn county_fill(
    engine: &SelectionEngine,
    county_id: &str,
    hovered: bool,
    assignment: Option<&CoachAssignment>,
) -> CountyFill {
    let selected = engine.is_county_selected(county_id);

    if let Some(assignment) = assignment {
        let hex = color_hex(&assignment.color);
        let fill = if selected {
            hex.to_string()
        } else {
            hex_to_rgba(hex, if hovered { 0.7 } else { 0.5 })
        };
        return CountyFill { category: CountyFillCategory::Assigned, fill };
    }

    if selected {
        let fill = if hovered { COUNTY_FILL_SELECTED_HOVERED } else { COUNTY_FILL_SELECTED };
        return CountyFill { category: CountyFillCategory::Selected, fill: fill.to_string() };
    }

    let owner = engine
        .county_record(county_id)
        .map(|county| county.state.clone())
        .or_else(|| engine.index().county_by_id(county_id).map(|c| c.state.clone()));
    if let Some(owner) = owner {
        if engine.has_selected_counties_in_state(&owner) {
            let fill = if hovered { COUNTY_FILL_DIMMED_HOVERED } else { COUNTY_FILL_DIMMED };
            return CountyFill { category: CountyFillCategory::Dimmed, fill: fill.to_string() };
        }
    }

    let fill = if hovered { COUNTY_FILL_DEFAULT_HOVERED } else { COUNTY_FILL_DEFAULT };
    CountyFill { category: CountyFillCategory::Default, fill: fill.to_string() }
}

/// Whether a county polygon renders at all: only when the county layer is
/// on, at least one state is selected, and the county's owning state is
/// among the selected states (FIPS match first, display name as fallback).
/// Counties of non-selected states never render, selection history or not.
pub fn county_visible(engine: &SelectionEngine, county_id: &str, county_fips: &CountyFips) -> bool {
    if !engine.options().show_counties {
        return false;
    }
    if engine.selected_state_ids().is_empty() {
        return false;
    }

    let prefix = county_fips.state_prefix();
    if engine.state_records().any(|state| state.fips == prefix) {
        return true;
    }

    let owner = engine
        .county_record(county_id)
        .map(|county| county.state.clone())
        .or_else(|| engine.index().state_for_fips(&prefix).map(|s| s.name.clone()));
    match owner {
        Some(owner) => engine.state_records().any(|state| name_eq(&state.name, &owner)),
        None => false,
    }
}

fn color_hex(color_name: &str) -> &'static str {
    match color_name {
        "Red" => "#FF0000",
        "Blue" => "#1890ff",
        "Green" => "#52c41a",
        "Yellow" => "#FFD000",
        _ => "#b0b0bf",
    }
}

/// "#rrggbb" → "rgba(r, g, b, alpha)". Malformed components degrade to 0
/// rather than failing.
fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let channel = |range: std::ops::Range<usize>| -> u8 {
        hex.get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    let (r, g, b) = (channel(1..3), channel(3..5), channel(5..7));
    format!("rgba({r}, {g}, {b}, {alpha})")
}
