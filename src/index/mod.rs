use std::sync::Arc;

use ahash::AHashMap;

use crate::topo::Feature;
use crate::types::{name_eq, CountyFips, CountyRecord, StateFips};

/// Name and FIPS of an indexed state.
#[derive(Debug, Clone)]
pub struct StateEntry {
    pub name: Arc<str>,
    pub fips: StateFips,
}

/// Lookup structures derived from the topology, built once per payload:
/// 2-digit FIPS → state, and state display name → every county in it
/// (whether or not selected), in source order.
#[derive(Debug, Default)]
pub struct GeoIndex {
    state_by_fips: AHashMap<StateFips, StateEntry>,
    counties_by_state: AHashMap<Arc<str>, Vec<CountyRecord>>,
}

impl GeoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once any states have been indexed.
    pub fn has_states(&self) -> bool {
        !self.state_by_fips.is_empty()
    }

    /// Indexes state features. A feature with no usable FIPS is skipped;
    /// this is non-fatal and never blocks the rest of the payload.
    pub fn index_states(&mut self, features: &[Feature]) {
        for feature in features {
            let Some(raw) = feature.state_fips() else { continue };
            let fips = StateFips::new(raw);
            let name: Arc<str> = Arc::from(feature.display_name());
            self.state_by_fips.insert(fips.clone(), StateEntry { name, fips });
        }
    }

    /// Indexes county features, grouping them under the owning state's
    /// display name (resolved by FIPS prefix). A county whose state is not
    /// yet indexed is skipped; the grouping is rebuilt from scratch on each
    /// call, so skipped counties are retried once their states are present.
    pub fn index_counties(&mut self, features: &[Feature]) {
        self.counties_by_state.clear();
        for feature in features {
            let Some(raw) = feature.county_fips() else { continue };
            let fips = CountyFips::new(raw);
            let Some(state) = self.state_by_fips.get(&fips.state_prefix()) else {
                continue;
            };
            let record = CountyRecord {
                name: Arc::from(feature.display_name()),
                id: feature
                    .id
                    .clone()
                    .unwrap_or_else(|| Arc::from(fips.as_str())),
                state: state.name.clone(),
                fips,
            };
            self.counties_by_state
                .entry(state.name.clone())
                .or_default()
                .push(record);
        }
    }

    pub fn state_for_fips(&self, fips: &StateFips) -> Option<&StateEntry> {
        self.state_by_fips.get(fips)
    }

    /// Counties of a state, by exact (trimmed) display name.
    pub fn counties_in(&self, state_name: &str) -> &[CountyRecord] {
        self.counties_by_state
            .get(state_name.trim())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Counties of a state, tolerating case and whitespace differences.
    pub fn counties_in_normalized(&self, state_name: &str) -> &[CountyRecord] {
        let exact = self.counties_in(state_name);
        if !exact.is_empty() {
            return exact;
        }
        self.counties_by_state
            .iter()
            .find(|(key, _)| name_eq(key, state_name))
            .map(|(_, counties)| counties.as_slice())
            .unwrap_or(&[])
    }

    /// Total county count for a state, selected or not.
    pub fn county_count(&self, state_name: &str) -> usize {
        self.counties_in_normalized(state_name).len()
    }

    /// Linear scan of every indexed county for one with this id.
    pub fn county_by_id(&self, county_id: &str) -> Option<&CountyRecord> {
        self.counties_by_state
            .values()
            .flatten()
            .find(|county| county.id.as_ref() == county_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::topo::Feature;
    use crate::types::StateFips;

    use super::GeoIndex;

    fn states() -> Vec<Feature> {
        vec![Feature::new("04", "Arizona"), Feature::new("49", "Utah")]
    }

    fn counties() -> Vec<Feature> {
        vec![
            Feature::new("04013", "Maricopa"),
            Feature::new("04005", "Coconino"),
            Feature::new("49011", "Davis"),
        ]
    }

    #[test]
    fn groups_counties_under_owning_state() {
        let mut index = GeoIndex::new();
        index.index_states(&states());
        index.index_counties(&counties());

        let arizona = index.counties_in("Arizona");
        assert_eq!(arizona.len(), 2);
        assert_eq!(arizona[0].name.as_ref(), "Maricopa");
        assert_eq!(arizona[0].state.as_ref(), "Arizona");
        assert_eq!(index.county_count("utah"), 1);
    }

    #[test]
    fn counties_without_indexed_state_are_skipped_then_retried() {
        let mut index = GeoIndex::new();
        index.index_counties(&counties());
        assert_eq!(index.county_count("Arizona"), 0);

        index.index_states(&states());
        index.index_counties(&counties());
        assert_eq!(index.county_count("Arizona"), 2);
    }

    #[test]
    fn rebuilding_with_same_inputs_is_idempotent() {
        let mut index = GeoIndex::new();
        index.index_states(&states());
        index.index_counties(&counties());
        index.index_counties(&counties());
        assert_eq!(index.county_count("Arizona"), 2);
        assert_eq!(index.county_count("Utah"), 1);
    }

    #[test]
    fn state_lookup_uses_padded_fips() {
        let mut index = GeoIndex::new();
        index.index_states(&[Feature::new("4", "Arizona")]);
        let entry = index.state_for_fips(&StateFips::new("04")).unwrap();
        assert_eq!(entry.name.as_ref(), "Arizona");
    }

    #[test]
    fn county_by_id_scans_all_states() {
        let mut index = GeoIndex::new();
        index.index_states(&states());
        index.index_counties(&counties());
        assert_eq!(index.county_by_id("49011").unwrap().state.as_ref(), "Utah");
        assert!(index.county_by_id("99999").is_none());
    }
}
