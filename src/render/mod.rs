mod fill;
mod label;

pub use fill::{
    county_fill, county_visible, state_fill, state_stroke_color, CountyFill, CountyFillCategory,
    StateFill, StateFillCategory, STATE_STROKE_PALETTE,
};
pub use label::{state_label, StateLabel};
