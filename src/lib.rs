#![doc = "Mapselect public API"]
mod engine;
mod index;
mod render;
mod report;
mod topo;
mod types;

#[doc(inline)]
pub use engine::{EngineOptions, SelectionEngine, SelectionHooks};

#[doc(inline)]
pub use index::{GeoIndex, StateEntry};

#[doc(inline)]
pub use render::{
    county_fill, county_visible, state_fill, state_label, state_stroke_color, CountyFill,
    CountyFillCategory, StateFill, StateFillCategory, StateLabel, STATE_STROKE_PALETTE,
};

#[doc(inline)]
pub use report::{
    build_report, AssignmentMap, CoachAssignment, CoachCoverage, CoverageReport, PartialState,
    SharedState,
};

#[doc(inline)]
pub use topo::{features_from_json, Feature};

#[doc(inline)]
pub use types::{
    abbreviation_for, name_eq, name_key, state_abbreviation, CountyFips, CountyRecord, StateFips,
    StateRecord, UNKNOWN,
};
