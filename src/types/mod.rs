mod abbrev;
mod fips;
mod name;
mod record;

pub use abbrev::{abbreviation_for, state_abbreviation};
pub use fips::{CountyFips, StateFips};
pub use name::{name_eq, name_key, UNKNOWN};
pub use record::{CountyRecord, StateRecord};
