use std::fmt;

use crate::types::{CountyRecord, StateRecord};

pub type StateSelectFn = dyn FnMut(&[StateRecord], &[CountyRecord]);
pub type CountySelectFn = dyn FnMut(&[CountyRecord]);

/// Host callbacks, fired after every mutating operation.
///
/// The slices passed in are freshly cloned snapshots; mutating or storing
/// them cannot reach back into engine state.
#[derive(Default)]
pub struct SelectionHooks {
    pub(super) on_state_select: Option<Box<StateSelectFn>>,
    pub(super) on_county_select: Option<Box<CountySelectFn>>,
}

impl SelectionHooks {
    pub(super) fn emit_states(&mut self, states: &[StateRecord], counties: &[CountyRecord]) {
        if let Some(hook) = self.on_state_select.as_mut() {
            hook(states, counties);
        }
    }

    pub(super) fn emit_counties(&mut self, counties: &[CountyRecord]) {
        if let Some(hook) = self.on_county_select.as_mut() {
            hook(counties);
        }
    }
}

impl fmt::Debug for SelectionHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionHooks")
            .field("on_state_select", &self.on_state_select.is_some())
            .field("on_county_select", &self.on_county_select.is_some())
            .finish()
    }
}
