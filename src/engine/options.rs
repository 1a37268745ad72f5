use std::sync::Arc;

/// Host-facing engine configuration.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Allow more than one simultaneous state/county selection. When off,
    /// selecting replaces the previous selection instead of adding to it.
    pub multi_select: bool,
    /// Pre-seed one selected state by its topology id (usually the FIPS code).
    pub initial_selected_state: Option<Arc<str>>,
    /// Whether the county layer renders at all, independent of selection.
    pub show_counties: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            multi_select: true,
            initial_selected_state: None,
            show_counties: true,
        }
    }
}

impl EngineOptions {
    pub fn single_select() -> Self {
        Self { multi_select: false, ..Self::default() }
    }

    pub fn with_initial_state(mut self, state_id: &str) -> Self {
        self.initial_selected_state = Some(Arc::from(state_id));
        self
    }
}
