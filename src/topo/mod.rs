mod feature;

pub use feature::{features_from_json, Feature};
