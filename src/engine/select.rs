use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use tracing::{debug, info};

use crate::index::GeoIndex;
use crate::topo::Feature;
use crate::types::{name_eq, CountyFips, CountyRecord, StateFips, StateRecord, UNKNOWN};

use super::{EngineOptions, SelectionHooks};

/// Single source of truth for what is currently selected.
///
/// Selection ids live in hash sets for membership checks and in parallel
/// insertion-order vectors, so snapshots handed to callbacks and stroke
/// palette assignment stay deterministic. Metadata maps are kept in
/// lock-step with the id sets through every operation: every selected id
/// has a record, and every record belongs to a selected id.
///
/// Single-threaded by design; all operations complete synchronously inside
/// the interaction callback that triggered them.
pub struct SelectionEngine {
    options: EngineOptions,
    index: GeoIndex,
    initialized: bool,

    selected_states: AHashSet<Arc<str>>,
    state_order: Vec<Arc<str>>,
    states_data: AHashMap<Arc<str>, StateRecord>,

    selected_counties: AHashSet<Arc<str>>,
    county_order: Vec<Arc<str>>,
    counties_data: AHashMap<Arc<str>, CountyRecord>,

    hovered_state: Option<Arc<str>>,
    hovered_county: Option<Arc<str>>,
    render_key: u64,

    hooks: SelectionHooks,
}

impl SelectionEngine {
    pub fn new(options: EngineOptions) -> Self {
        let mut engine = Self {
            options,
            index: GeoIndex::new(),
            initialized: false,
            selected_states: AHashSet::new(),
            state_order: Vec::new(),
            states_data: AHashMap::new(),
            selected_counties: AHashSet::new(),
            county_order: Vec::new(),
            counties_data: AHashMap::new(),
            hovered_state: None,
            hovered_county: None,
            render_key: 0,
            hooks: SelectionHooks::default(),
        };
        if let Some(id) = engine.options.initial_selected_state.clone() {
            // Seeded before the index exists; the name is back-filled by
            // `initialize`, keeping the id set and metadata map in lock-step.
            let record = StateRecord {
                name: Arc::from(UNKNOWN),
                id: id.clone(),
                fips: StateFips::new(&id),
            };
            engine.insert_state(record);
        }
        engine
    }

    /// Builds the geography index from the loaded topology. Guarded by a
    /// one-shot flag: later calls are no-ops, so redundant render passes
    /// observing a not-yet-built index cannot duplicate work.
    pub fn initialize(&mut self, states: &[Feature], counties: &[Feature]) {
        if self.initialized {
            return;
        }
        self.index.index_states(states);
        self.index.index_counties(counties);
        self.initialized = true;
        self.backfill_unknown_owners();
        debug!(
            states = states.len(),
            counties = counties.len(),
            "geography index built"
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn index(&self) -> &GeoIndex {
        &self.index
    }

    /// Monotonically increasing key, bumped whenever county membership
    /// changes; hosts use it to force recomputation of cached fills.
    pub fn render_key(&self) -> u64 {
        self.render_key
    }

    pub fn set_on_state_select<F>(&mut self, hook: F)
    where
        F: FnMut(&[StateRecord], &[CountyRecord]) + 'static,
    {
        self.hooks.on_state_select = Some(Box::new(hook));
    }

    pub fn set_on_county_select<F>(&mut self, hook: F)
    where
        F: FnMut(&[CountyRecord]) + 'static,
    {
        self.hooks.on_county_select = Some(Box::new(hook));
    }

    // ---- queries ----------------------------------------------------------

    pub fn is_state_selected(&self, state_id: &str) -> bool {
        self.selected_states.contains(state_id)
    }

    pub fn is_county_selected(&self, county_id: &str) -> bool {
        self.selected_counties.contains(county_id)
    }

    pub fn state_record(&self, state_id: &str) -> Option<&StateRecord> {
        self.states_data.get(state_id)
    }

    pub fn county_record(&self, county_id: &str) -> Option<&CountyRecord> {
        self.counties_data.get(county_id)
    }

    /// Selected state ids in selection order.
    pub fn selected_state_ids(&self) -> &[Arc<str>] {
        &self.state_order
    }

    /// Selected county ids in selection order.
    pub fn selected_county_ids(&self) -> &[Arc<str>] {
        &self.county_order
    }

    /// Position of a state in the selection order, for stroke palette
    /// assignment. `None` when not selected.
    pub fn selection_position(&self, state_id: &str) -> Option<usize> {
        self.state_order.iter().position(|id| id.as_ref() == state_id)
    }

    /// Selected states in selection order.
    pub fn state_records(&self) -> impl Iterator<Item = &StateRecord> {
        self.state_order.iter().filter_map(|id| self.states_data.get(id))
    }

    /// Cloned snapshot of all selected states, in selection order.
    pub fn state_snapshot(&self) -> Vec<StateRecord> {
        self.state_records().cloned().collect()
    }

    /// Cloned snapshot of all selected counties, in selection order.
    pub fn county_snapshot(&self) -> Vec<CountyRecord> {
        self.county_order
            .iter()
            .filter_map(|id| self.counties_data.get(id))
            .cloned()
            .collect()
    }

    /// Selected counties belonging to currently selected states only.
    pub fn counties_of_selected_states(&self) -> Vec<CountyRecord> {
        self.county_order
            .iter()
            .filter_map(|id| self.counties_data.get(id))
            .filter(|county| {
                self.state_records()
                    .any(|state| name_eq(&state.name, &county.state))
            })
            .cloned()
            .collect()
    }

    /// Shared predicate for the fill resolvers: true iff any selected
    /// county's resolved owner matches `state_name`. Checks live per-county
    /// metadata first, then falls back to the index's per-state list.
    pub fn has_selected_counties_in_state(&self, state_name: &str) -> bool {
        if state_name.trim().is_empty() || state_name == UNKNOWN {
            return false;
        }
        for id in &self.county_order {
            if let Some(county) = self.counties_data.get(id) {
                if name_eq(&county.state, state_name) {
                    return true;
                }
            }
        }
        self.index
            .counties_in_normalized(state_name)
            .iter()
            .any(|county| self.selected_counties.contains(county.id.as_ref()))
    }

    // ---- hover ------------------------------------------------------------

    pub fn set_hovered_state(&mut self, state_id: Option<&str>) {
        self.hovered_state = state_id.map(Arc::from);
    }

    pub fn set_hovered_county(&mut self, county_id: Option<&str>) {
        self.hovered_county = county_id.map(Arc::from);
    }

    pub fn hovered_state(&self) -> Option<&str> {
        self.hovered_state.as_deref()
    }

    pub fn hovered_county(&self) -> Option<&str> {
        self.hovered_county.as_deref()
    }

    // ---- operations -------------------------------------------------------

    /// Toggles a state. Deselecting cascades to its counties; selecting in
    /// single-select mode first clears the previous selection (and its
    /// cascaded counties).
    pub fn toggle_state(&mut self, state_id: &str, state_name: &str, state_fips: &str) {
        let mut counties_changed = false;

        if self.selected_states.contains(state_id) {
            self.drop_state(state_id);
            counties_changed = self.cascade_counties_of(state_name) > 0;
            info!(state = state_name, "deselected state");
        } else {
            if !self.options.multi_select && !self.state_order.is_empty() {
                counties_changed = self.clear_state_selection() || counties_changed;
            }
            let record = StateRecord {
                name: Arc::from(state_name),
                id: Arc::from(state_id),
                fips: StateFips::new(state_fips),
            };
            self.insert_state(record);
            info!(state = state_name, "selected state");
        }

        if counties_changed {
            self.render_key += 1;
        }
        self.emit_state_selection();
        if counties_changed {
            self.emit_county_selection();
        }
    }

    /// Toggles a county. The owning state is resolved through the fixed
    /// fallback chain (see `resolve_owner`); selecting in single-select
    /// mode first clears the previous county selection.
    pub fn toggle_county(&mut self, county_id: &str, county_name: &str, county_fips: &str) {
        let fips = CountyFips::new(county_fips);

        if self.selected_counties.contains(county_id) {
            if let Some(county) = self.drop_county(county_id) {
                info!(county = county_name, state = county.state.as_ref(), "deselected county");
            }
        } else {
            if !self.options.multi_select && !self.county_order.is_empty() {
                self.selected_counties.clear();
                self.county_order.clear();
                self.counties_data.clear();
            }
            let state = self.resolve_owner(county_id, &fips);
            info!(county = county_name, state = state.as_ref(), "selected county");
            let record = CountyRecord {
                name: Arc::from(county_name),
                id: Arc::from(county_id),
                state,
                fips,
            };
            self.insert_county(record);
        }

        self.render_key += 1;
        self.emit_county_selection();
    }

    /// Selects every county of a state, or deselects them all if every one
    /// is already selected. Union semantics: counties of other states are
    /// untouched. A state with no indexed counties is a no-op.
    pub fn select_all_counties_for_state(&mut self, state_name: &str, _state_id: &str) {
        let counties: Vec<CountyRecord> = self.index.counties_in(state_name).to_vec();
        if counties.is_empty() {
            debug!(state = state_name, "no indexed counties, select-all skipped");
            return;
        }

        let all_selected = counties
            .iter()
            .all(|county| self.selected_counties.contains(county.id.as_ref()));

        if all_selected {
            for county in &counties {
                self.drop_county(&county.id);
            }
            info!(state = state_name, "deselected all counties");
        } else {
            for county in counties {
                if !self.selected_counties.contains(county.id.as_ref()) {
                    self.insert_county(county);
                }
            }
            info!(state = state_name, "selected all counties");
        }

        self.render_key += 1;
        self.emit_county_selection();
    }

    /// Unconditionally removes one county from the selection. No-op if the
    /// county is not selected.
    pub fn deselect_county(&mut self, county_id: &str) {
        let Some(county) = self.drop_county(county_id) else { return };
        info!(county = county.name.as_ref(), state = county.state.as_ref(), "removed county");
        self.render_key += 1;
        self.emit_county_selection();
    }

    /// Alias of `deselect_county`, exposed for "remove chip" host actions.
    pub fn remove_county(&mut self, county_id: &str) {
        self.deselect_county(county_id);
    }

    /// Unconditionally removes one state plus its counties. No-op if the
    /// state is not selected.
    pub fn remove_state(&mut self, state_id: &str) {
        let Some(state) = self.drop_state(state_id) else { return };
        let cascaded = self.cascade_counties_of(&state.name);
        info!(state = state.name.as_ref(), cascaded, "removed state");
        if cascaded > 0 {
            self.render_key += 1;
        }
        self.emit_state_selection();
        if cascaded > 0 {
            self.emit_county_selection();
        }
    }

    /// Clears the entire selection. Both callbacks fire with empty
    /// snapshots.
    pub fn reset(&mut self) {
        self.selected_states.clear();
        self.state_order.clear();
        self.states_data.clear();
        self.selected_counties.clear();
        self.county_order.clear();
        self.counties_data.clear();
        self.render_key += 1;
        info!("cleared all selections");
        self.emit_state_selection();
        self.emit_county_selection();
    }

    // ---- internals --------------------------------------------------------

    /// Owner resolution for a clicked county, in fixed priority order:
    /// 1. the state index, by FIPS prefix;
    /// 2. previously indexed counties with the same id (an id match, not a
    ///    FIPS match -- it only fires when this county was already resolved
    ///    under another code path);
    /// 3. currently selected states, by FIPS;
    /// 4. "Unknown".
    fn resolve_owner(&self, county_id: &str, fips: &CountyFips) -> Arc<str> {
        let prefix = fips.state_prefix();
        if let Some(state) = self.index.state_for_fips(&prefix) {
            return state.name.clone();
        }
        if let Some(county) = self.index.county_by_id(county_id) {
            return county.state.clone();
        }
        for record in self.state_records() {
            if record.fips == prefix {
                return record.name.clone();
            }
        }
        Arc::from(UNKNOWN)
    }

    /// Re-resolves counties recorded with an "Unknown" owner once the index
    /// can answer for their FIPS prefix.
    fn backfill_unknown_owners(&mut self) {
        let state_ids: Vec<Arc<str>> = self
            .state_order
            .iter()
            .filter(|id| {
                self.states_data
                    .get(id.as_ref())
                    .is_some_and(|s| s.name.as_ref() == UNKNOWN)
            })
            .cloned()
            .collect();
        for id in state_ids {
            let Some(record) = self.states_data.get(&id) else { continue };
            if let Some(entry) = self.index.state_for_fips(&record.fips) {
                let name = entry.name.clone();
                debug!(state = name.as_ref(), "back-filled seeded state");
                if let Some(record) = self.states_data.get_mut(&id) {
                    record.name = name;
                }
            }
        }

        let county_ids: Vec<Arc<str>> = self
            .county_order
            .iter()
            .filter(|id| {
                self.counties_data
                    .get(id.as_ref())
                    .is_some_and(|c| c.state.as_ref() == UNKNOWN)
            })
            .cloned()
            .collect();
        for id in county_ids {
            let Some(record) = self.counties_data.get(&id) else { continue };
            if let Some(entry) = self.index.state_for_fips(&record.fips.state_prefix()) {
                let name = entry.name.clone();
                debug!(county = record.name.as_ref(), state = name.as_ref(), "back-filled county owner");
                if let Some(record) = self.counties_data.get_mut(&id) {
                    record.state = name;
                }
            }
        }
    }

    fn insert_state(&mut self, record: StateRecord) {
        if self.selected_states.insert(record.id.clone()) {
            self.state_order.push(record.id.clone());
        }
        self.states_data.insert(record.id.clone(), record);
    }

    fn drop_state(&mut self, state_id: &str) -> Option<StateRecord> {
        if !self.selected_states.remove(state_id) {
            return None;
        }
        self.state_order.retain(|id| id.as_ref() != state_id);
        self.states_data.remove(state_id)
    }

    fn insert_county(&mut self, record: CountyRecord) {
        if self.selected_counties.insert(record.id.clone()) {
            self.county_order.push(record.id.clone());
        }
        self.counties_data.insert(record.id.clone(), record);
    }

    fn drop_county(&mut self, county_id: &str) -> Option<CountyRecord> {
        if !self.selected_counties.remove(county_id) {
            return None;
        }
        self.county_order.retain(|id| id.as_ref() != county_id);
        self.counties_data.remove(county_id)
    }

    /// Removes every selected county whose owner matches `state_name`.
    /// Counties of still-selected states are never touched.
    fn cascade_counties_of(&mut self, state_name: &str) -> usize {
        let doomed: Vec<Arc<str>> = self
            .county_order
            .iter()
            .filter(|id| {
                self.counties_data
                    .get(id.as_ref())
                    .is_some_and(|c| name_eq(&c.state, state_name))
            })
            .cloned()
            .collect();
        for id in &doomed {
            self.drop_county(id);
        }
        doomed.len()
    }

    /// Single-select replacement: drops every selected state and cascades
    /// each one's counties. Returns true if any county was removed.
    fn clear_state_selection(&mut self) -> bool {
        let mut counties_changed = false;
        let previous: Vec<Arc<str>> = self.state_order.clone();
        for id in previous {
            if let Some(state) = self.drop_state(&id) {
                counties_changed |= self.cascade_counties_of(&state.name) > 0;
            }
        }
        counties_changed
    }

    fn emit_state_selection(&mut self) {
        let states = self.state_snapshot();
        let counties = self.counties_of_selected_states();
        self.hooks.emit_states(&states, &counties);
    }

    fn emit_county_selection(&mut self) {
        let counties = self.county_snapshot();
        self.hooks.emit_counties(&counties);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::topo::Feature;
    use crate::types::CountyRecord;

    use super::{EngineOptions, SelectionEngine};

    fn state_features() -> Vec<Feature> {
        vec![
            Feature::new("04", "Arizona"),
            Feature::new("08", "Colorado"),
            Feature::new("49", "Utah"),
        ]
    }

    fn county_features() -> Vec<Feature> {
        vec![
            Feature::new("04001", "Apache"),
            Feature::new("04005", "Coconino"),
            Feature::new("04013", "Maricopa"),
            Feature::new("08001", "Adams"),
            Feature::new("08005", "Arapahoe"),
            Feature::new("49011", "Davis"),
        ]
    }

    fn engine() -> SelectionEngine {
        let mut engine = SelectionEngine::new(EngineOptions::default());
        engine.initialize(&state_features(), &county_features());
        engine
    }

    fn lock_step_holds(engine: &SelectionEngine) -> bool {
        engine.state_snapshot().len() == engine.selected_state_ids().len()
            && engine.county_snapshot().len() == engine.selected_county_ids().len()
    }

    #[test]
    fn toggle_state_twice_cancels() {
        let mut engine = engine();
        engine.toggle_state("04", "Arizona", "04");
        assert!(engine.is_state_selected("04"));
        engine.toggle_state("04", "Arizona", "04");
        assert!(!engine.is_state_selected("04"));
        assert!(engine.state_snapshot().is_empty());
        assert!(lock_step_holds(&engine));
    }

    #[test]
    fn deselecting_state_cascades_only_its_counties() {
        let mut engine = engine();
        engine.toggle_state("04", "Arizona", "04");
        engine.toggle_state("49", "Utah", "49");
        engine.toggle_county("04013", "Maricopa", "04013");
        engine.toggle_county("49011", "Davis", "49011");

        engine.toggle_state("04", "Arizona", "04");

        assert!(!engine.is_county_selected("04013"));
        assert!(engine.is_county_selected("49011"));
        assert!(lock_step_holds(&engine));
    }

    #[test]
    fn single_select_replaces_state_and_its_counties() {
        let mut engine = SelectionEngine::new(EngineOptions::single_select());
        engine.initialize(&state_features(), &county_features());

        engine.toggle_state("04", "Arizona", "04");
        engine.toggle_county("04013", "Maricopa", "04013");
        engine.toggle_state("49", "Utah", "49");

        assert!(!engine.is_state_selected("04"));
        assert!(engine.is_state_selected("49"));
        assert!(!engine.is_county_selected("04013"));
        assert!(lock_step_holds(&engine));
    }

    #[test]
    fn single_select_county_replaces_previous() {
        let mut engine = SelectionEngine::new(EngineOptions::single_select());
        engine.initialize(&state_features(), &county_features());

        engine.toggle_county("04013", "Maricopa", "04013");
        engine.toggle_county("04005", "Coconino", "04005");

        assert!(!engine.is_county_selected("04013"));
        assert!(engine.is_county_selected("04005"));
        assert_eq!(engine.county_snapshot().len(), 1);
    }

    #[test]
    fn county_owner_resolves_from_index() {
        let mut engine = engine();
        engine.toggle_county("04005", "Coconino", "04005");
        assert_eq!(engine.county_record("04005").unwrap().state.as_ref(), "Arizona");
    }

    #[test]
    fn county_owner_falls_back_to_selected_state_fips() {
        // No topology, so neither the state index nor the county scan can
        // answer; the selected state's FIPS is the last resort.
        let mut engine = SelectionEngine::new(EngineOptions::default());
        engine.toggle_state("04", "Arizona", "04");
        engine.toggle_county("04013", "Maricopa", "04013");
        assert_eq!(engine.county_record("04013").unwrap().state.as_ref(), "Arizona");
    }

    #[test]
    fn unresolvable_county_owner_degrades_to_unknown() {
        let mut engine = SelectionEngine::new(EngineOptions::default());
        engine.toggle_county("04013", "Maricopa", "04013");
        assert_eq!(engine.county_record("04013").unwrap().state.as_ref(), "Unknown");
    }

    #[test]
    fn unknown_owners_are_backfilled_on_initialize() {
        let mut engine = SelectionEngine::new(EngineOptions::default());
        engine.toggle_county("04013", "Maricopa", "04013");
        engine.initialize(&state_features(), &county_features());
        assert_eq!(engine.county_record("04013").unwrap().state.as_ref(), "Arizona");
    }

    #[test]
    fn initial_state_is_seeded_and_backfilled() {
        let options = EngineOptions::default().with_initial_state("04");
        let mut engine = SelectionEngine::new(options);
        assert!(engine.is_state_selected("04"));
        engine.initialize(&state_features(), &county_features());
        assert_eq!(engine.state_record("04").unwrap().name.as_ref(), "Arizona");
    }

    #[test]
    fn initialize_is_one_shot() {
        let mut engine = SelectionEngine::new(EngineOptions::default());
        engine.initialize(&state_features(), &county_features());
        // A second call with different data must not rebuild the index.
        engine.initialize(&[Feature::new("99", "Atlantis")], &[]);
        assert_eq!(engine.index().county_count("Arizona"), 3);
        assert!(engine.index().county_by_id("99999").is_none());
    }

    #[test]
    fn select_all_counties_toggles_symmetrically() {
        let mut engine = engine();
        engine.toggle_state("04", "Arizona", "04");
        engine.toggle_county("49011", "Davis", "49011");

        engine.select_all_counties_for_state("Arizona", "04");
        assert!(engine.is_county_selected("04001"));
        assert!(engine.is_county_selected("04005"));
        assert!(engine.is_county_selected("04013"));
        assert!(engine.is_county_selected("49011"));

        engine.select_all_counties_for_state("Arizona", "04");
        assert!(!engine.is_county_selected("04001"));
        assert!(!engine.is_county_selected("04013"));
        // Union semantics: other states' counties are untouched.
        assert!(engine.is_county_selected("49011"));
    }

    #[test]
    fn select_all_completes_a_partial_selection() {
        let mut engine = engine();
        engine.toggle_county("04013", "Maricopa", "04013");
        engine.select_all_counties_for_state("Arizona", "04");
        assert_eq!(engine.county_snapshot().len(), 3);
    }

    #[test]
    fn select_all_for_unindexed_state_is_a_noop() {
        let mut engine = engine();
        let before = engine.render_key();
        engine.select_all_counties_for_state("Atlantis", "99");
        assert!(engine.county_snapshot().is_empty());
        assert_eq!(engine.render_key(), before);
    }

    #[test]
    fn remove_state_is_noop_when_not_selected() {
        let mut engine = engine();
        engine.remove_state("04");
        assert!(engine.state_snapshot().is_empty());
    }

    #[test]
    fn deselect_county_is_noop_when_not_selected() {
        let mut engine = engine();
        let fired = Rc::new(RefCell::new(0));
        let counter = fired.clone();
        engine.set_on_county_select(move |_| *counter.borrow_mut() += 1);
        engine.deselect_county("04013");
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn reset_clears_everything_and_fires_both_hooks() {
        let mut engine = engine();
        engine.toggle_state("04", "Arizona", "04");
        engine.toggle_county("04013", "Maricopa", "04013");

        let states_seen: Rc<RefCell<Option<usize>>> = Rc::new(RefCell::new(None));
        let counties_seen: Rc<RefCell<Option<usize>>> = Rc::new(RefCell::new(None));
        let states_cell = states_seen.clone();
        let counties_cell = counties_seen.clone();
        engine.set_on_state_select(move |states, _| *states_cell.borrow_mut() = Some(states.len()));
        engine.set_on_county_select(move |counties| *counties_cell.borrow_mut() = Some(counties.len()));

        engine.reset();

        assert_eq!(*states_seen.borrow(), Some(0));
        assert_eq!(*counties_seen.borrow(), Some(0));
        assert!(engine.state_snapshot().is_empty());
        assert!(engine.county_snapshot().is_empty());
    }

    #[test]
    fn state_hook_receives_only_counties_of_selected_states() {
        let mut engine = engine();
        engine.toggle_county("49011", "Davis", "49011");

        let seen: Rc<RefCell<Vec<CountyRecord>>> = Rc::new(RefCell::new(Vec::new()));
        let cell = seen.clone();
        engine.set_on_state_select(move |_, counties| *cell.borrow_mut() = counties.to_vec());

        engine.toggle_state("04", "Arizona", "04");
        // Davis belongs to Utah, which is not selected.
        assert!(seen.borrow().is_empty());

        engine.toggle_state("49", "Utah", "49");
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].name.as_ref(), "Davis");
    }

    #[test]
    fn render_key_bumps_on_county_membership_changes() {
        let mut engine = engine();
        let k0 = engine.render_key();
        engine.toggle_county("04013", "Maricopa", "04013");
        let k1 = engine.render_key();
        assert!(k1 > k0);
        engine.toggle_state("04", "Arizona", "04");
        engine.toggle_state("04", "Arizona", "04"); // deselect cascades Maricopa
        assert!(engine.render_key() > k1);
    }

    #[test]
    fn snapshots_are_detached_from_engine_state() {
        let mut engine = engine();
        engine.toggle_state("04", "Arizona", "04");
        let mut snapshot = engine.state_snapshot();
        snapshot.clear();
        assert!(engine.is_state_selected("04"));
    }
}
