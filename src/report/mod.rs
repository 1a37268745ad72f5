use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::index::GeoIndex;
use crate::types::{state_abbreviation, CountyRecord};

/// One county's coach assignment, supplied read-only by the host on each
/// report request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachAssignment {
    pub coach: String,
    /// Display color name ("Red", "Blue", ...) used by the county fill.
    pub color: String,
}

/// County id → assignment.
pub type AssignmentMap = AHashMap<Arc<str>, CoachAssignment>;

/// A state a coach covers only partially, with the counties they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialState {
    pub state: String,
    pub abbreviation: String,
    pub counties: Vec<String>,
}

/// Per-coach coverage summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachCoverage {
    pub coach: String,
    /// States where the coach holds every county.
    pub full_states: Vec<String>,
    pub partial_states: Vec<PartialState>,
    /// Every assigned county, sorted, across all states.
    pub all_counties: Vec<String>,
}

impl CoachCoverage {
    /// "Colorado (CO), Utah (UT)" line for the printed report.
    pub fn full_states_line(&self) -> String {
        self.full_states
            .iter()
            .map(|state| format!("{} ({})", state, state_abbreviation(state)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A state whose selected counties are split between several coaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedState {
    pub state: String,
    pub coaches: Vec<String>,
}

/// Coverage report over the current county selection. Coaches and states
/// are emitted in sorted order so reports are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub coaches: Vec<CoachCoverage>,
    /// States with more than one assigned coach.
    pub shared_states: Vec<SharedState>,
}

/// Builds the per-coach coverage report from the currently selected
/// counties. Counties without an assignment are left out entirely.
///
/// A state counts as fully covered only when the coach's assigned county
/// count equals the state's total county count per the index, and that
/// total is non-zero; a state the index knows nothing about can never be
/// "full".
pub fn build_report(
    selected: &[CountyRecord],
    index: &GeoIndex,
    assignments: &AssignmentMap,
) -> CoverageReport {
    let mut by_coach: BTreeMap<&str, BTreeMap<&str, Vec<&CountyRecord>>> = BTreeMap::new();
    let mut coaches_by_state: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for county in selected {
        let Some(assignment) = assignments.get(county.id.as_ref()) else { continue };
        by_coach
            .entry(assignment.coach.as_str())
            .or_default()
            .entry(county.state.as_ref())
            .or_default()
            .push(county);
        coaches_by_state
            .entry(county.state.as_ref())
            .or_default()
            .insert(assignment.coach.as_str());
    }

    let coaches = by_coach
        .into_iter()
        .map(|(coach, states)| {
            let mut full_states = Vec::new();
            let mut partial_states = Vec::new();
            let mut all_counties = Vec::new();

            for (state, counties) in states {
                let total = index.county_count(state);
                let mut names: Vec<String> =
                    counties.iter().map(|county| county.name.to_string()).collect();
                names.sort();
                all_counties.extend(names.iter().cloned());

                if total > 0 && counties.len() == total {
                    full_states.push(state.to_string());
                } else {
                    partial_states.push(PartialState {
                        state: state.to_string(),
                        abbreviation: state_abbreviation(state),
                        counties: names,
                    });
                }
            }

            all_counties.sort();
            CoachCoverage { coach: coach.to_string(), full_states, partial_states, all_counties }
        })
        .collect();

    let shared_states = coaches_by_state
        .into_iter()
        .filter(|(_, coaches)| coaches.len() > 1)
        .map(|(state, coaches)| SharedState {
            state: state.to_string(),
            coaches: coaches.into_iter().map(str::to_string).collect(),
        })
        .collect();

    CoverageReport { coaches, shared_states }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::index::GeoIndex;
    use crate::topo::Feature;
    use crate::types::{CountyFips, CountyRecord};

    use super::{build_report, AssignmentMap, CoachAssignment};

    fn index() -> GeoIndex {
        let mut index = GeoIndex::new();
        index.index_states(&[Feature::new("04", "Arizona"), Feature::new("49", "Utah")]);
        index.index_counties(&[
            Feature::new("04001", "Apache"),
            Feature::new("04005", "Coconino"),
            Feature::new("04013", "Maricopa"),
            Feature::new("49011", "Davis"),
        ]);
        index
    }

    fn county(id: &str, name: &str, state: &str) -> CountyRecord {
        CountyRecord {
            name: Arc::from(name),
            id: Arc::from(id),
            state: Arc::from(state),
            fips: CountyFips::new(id),
        }
    }

    fn assign(map: &mut AssignmentMap, id: &str, coach: &str) {
        map.insert(
            Arc::from(id),
            CoachAssignment { coach: coach.to_string(), color: "Blue".to_string() },
        );
    }

    #[test]
    fn full_versus_partial_coverage() {
        let index = index();
        let selected = vec![
            county("04013", "Maricopa", "Arizona"),
            county("49011", "Davis", "Utah"),
        ];
        let mut assignments = AssignmentMap::default();
        assign(&mut assignments, "04013", "Jason Mark");
        assign(&mut assignments, "49011", "Jason Mark");

        let report = build_report(&selected, &index, &assignments);
        assert_eq!(report.coaches.len(), 1);
        let coverage = &report.coaches[0];
        // Utah has exactly one county and Jason holds it; Arizona has three
        // and he holds one.
        assert_eq!(coverage.full_states, vec!["Utah".to_string()]);
        assert_eq!(coverage.partial_states.len(), 1);
        assert_eq!(coverage.partial_states[0].state, "Arizona");
        assert_eq!(coverage.partial_states[0].abbreviation, "AZ");
        assert_eq!(coverage.partial_states[0].counties, vec!["Maricopa".to_string()]);
        assert_eq!(coverage.full_states_line(), "Utah (UT)");
    }

    #[test]
    fn unassigned_counties_are_excluded() {
        let index = index();
        let selected = vec![county("04013", "Maricopa", "Arizona")];
        let assignments = AssignmentMap::default();
        let report = build_report(&selected, &index, &assignments);
        assert!(report.coaches.is_empty());
        assert!(report.shared_states.is_empty());
    }

    #[test]
    fn unindexed_state_is_never_full() {
        let index = GeoIndex::new();
        let selected = vec![county("04013", "Maricopa", "Arizona")];
        let mut assignments = AssignmentMap::default();
        assign(&mut assignments, "04013", "Jason Mark");

        let report = build_report(&selected, &index, &assignments);
        assert!(report.coaches[0].full_states.is_empty());
        assert_eq!(report.coaches[0].partial_states[0].state, "Arizona");
    }

    #[test]
    fn states_split_between_coaches_are_flagged() {
        let index = index();
        let selected = vec![
            county("04013", "Maricopa", "Arizona"),
            county("04005", "Coconino", "Arizona"),
            county("49011", "Davis", "Utah"),
        ];
        let mut assignments = AssignmentMap::default();
        assign(&mut assignments, "04013", "Jason Mark");
        assign(&mut assignments, "04005", "Alex Robin");
        assign(&mut assignments, "49011", "Jason Mark");

        let report = build_report(&selected, &index, &assignments);
        assert_eq!(report.shared_states.len(), 1);
        assert_eq!(report.shared_states[0].state, "Arizona");
        assert_eq!(
            report.shared_states[0].coaches,
            vec!["Alex Robin".to_string(), "Jason Mark".to_string()]
        );
    }

    #[test]
    fn roster_lists_all_assigned_counties_sorted() {
        let index = index();
        let selected = vec![
            county("04013", "Maricopa", "Arizona"),
            county("04001", "Apache", "Arizona"),
            county("49011", "Davis", "Utah"),
        ];
        let mut assignments = AssignmentMap::default();
        assign(&mut assignments, "04013", "Jason Mark");
        assign(&mut assignments, "04001", "Jason Mark");
        assign(&mut assignments, "49011", "Jason Mark");

        let report = build_report(&selected, &index, &assignments);
        assert_eq!(
            report.coaches[0].all_counties,
            vec!["Apache".to_string(), "Davis".to_string(), "Maricopa".to_string()]
        );
    }
}
