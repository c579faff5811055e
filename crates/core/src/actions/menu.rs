//! Active-action selection over the latest discovery result.

use super::Action;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionMenu {
    actions: Vec<Action>,
    active: Option<usize>,
}

impl ActionMenu {
    /// Replace the list; selection resets to the first entry, or none if empty.
    pub fn set_actions(&mut self, actions: Vec<Action>) {
        self.active = if actions.is_empty() { None } else { Some(0) };
        self.actions = actions;
    }

    /// Move the selection by `step`, wrapping in both directions.
    pub fn advance(&mut self, step: i32) {
        let Some(current) = self.active else {
            return;
        };
        let len = self.actions.len() as i64;
        let next = (current as i64 + i64::from(step)).rem_euclid(len);
        self.active = Some(next as usize);
    }

    pub fn active(&self) -> Option<&Action> {
        self.active.and_then(|idx| self.actions.get(idx))
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
