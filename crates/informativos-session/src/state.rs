//! Per-session mutable state.
//!
//! One [`SessionState`] is owned by exactly one user session and threaded
//! explicitly through operations, with no process-wide singletons, so a
//! multi-session host stays safe by construction: the dataset is shared
//! read-only while each session's state is isolated.

use std::collections::HashSet;

use tracing::debug;

/// Favorites, assertiva/caso selections, and the current study goal.
///
/// All entries are julgado ids. Created empty at session start, mutated
/// only by explicit user actions, discarded at session end.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    favorites: HashSet<String>,
    selected_assertiva: Option<String>,
    selected_caso: Option<String>,
    caso_dialog_open: bool,
    study_goal: Vec<String>,
    selected_goal: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Favorites ──

    pub fn favorites(&self) -> &HashSet<String> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Toggle a favorite; returns the new membership (true = now favorited),
    /// which the UI uses for its confirmation toast.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if self.favorites.remove(id) {
            debug!(id, "removed favorite");
            false
        } else {
            self.favorites.insert(id.to_string());
            debug!(id, "added favorite");
            true
        }
    }

    // ── Assertiva / caso prático selections ──
    //
    // The two selections are mutually exclusive: picking a julgado for one
    // feature clears the other, and the caso dialog tracks its selection.

    pub fn select_for_assertiva(&mut self, id: &str) {
        self.selected_assertiva = Some(id.to_string());
        self.selected_caso = None;
        self.caso_dialog_open = false;
    }

    pub fn select_for_caso(&mut self, id: &str) {
        self.selected_caso = Some(id.to_string());
        self.selected_assertiva = None;
        self.caso_dialog_open = true;
    }

    pub fn close_caso_dialog(&mut self) {
        self.caso_dialog_open = false;
        self.selected_caso = None;
    }

    pub fn selected_assertiva(&self) -> Option<&str> {
        self.selected_assertiva.as_deref()
    }

    pub fn selected_caso(&self) -> Option<&str> {
        self.selected_caso.as_deref()
    }

    pub fn caso_dialog_open(&self) -> bool {
        self.caso_dialog_open
    }

    // ── Study goal ──

    /// Replace the current study goal; any previous goal selection is reset.
    pub fn set_study_goal(&mut self, ids: Vec<String>) {
        debug!(count = ids.len(), "study goal set");
        self.study_goal = ids;
        self.selected_goal = None;
    }

    pub fn study_goal(&self) -> &[String] {
        &self.study_goal
    }

    pub fn select_goal(&mut self, id: &str) {
        self.selected_goal = Some(id.to_string());
    }

    pub fn selected_goal(&self) -> Option<&str> {
        self.selected_goal.as_deref()
    }

    // ── Staleness ──

    /// Clear selections whose id is no longer in `valid_ids`, and drop
    /// stale study-goal entries.
    ///
    /// A stale id is "not found", never an error; favorites are kept as-is
    /// because they are only ever consulted through the filter.
    pub fn prune_selections(&mut self, valid_ids: &HashSet<String>) {
        if let Some(id) = &self.selected_assertiva
            && !valid_ids.contains(id)
        {
            debug!(%id, "clearing stale assertiva selection");
            self.selected_assertiva = None;
        }
        if let Some(id) = &self.selected_caso
            && !valid_ids.contains(id)
        {
            debug!(%id, "clearing stale caso selection");
            self.selected_caso = None;
            self.caso_dialog_open = false;
        }
        if let Some(id) = &self.selected_goal
            && !valid_ids.contains(id)
        {
            debug!(%id, "clearing stale goal selection");
            self.selected_goal = None;
        }
        self.study_goal.retain(|id| valid_ids.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_favorite_roundtrip() {
        let mut state = SessionState::new();
        assert!(state.toggle_favorite("a"));
        assert!(state.is_favorite("a"));
        assert!(!state.toggle_favorite("a"));
        assert!(!state.is_favorite("a"));
    }

    #[test]
    fn assertiva_and_caso_selections_are_mutually_exclusive() {
        let mut state = SessionState::new();

        state.select_for_assertiva("a");
        assert_eq!(state.selected_assertiva(), Some("a"));
        assert_eq!(state.selected_caso(), None);
        assert!(!state.caso_dialog_open());

        state.select_for_caso("b");
        assert_eq!(state.selected_caso(), Some("b"));
        assert_eq!(state.selected_assertiva(), None);
        assert!(state.caso_dialog_open());
    }

    #[test]
    fn closing_the_caso_dialog_clears_its_selection() {
        let mut state = SessionState::new();
        state.select_for_caso("b");
        state.close_caso_dialog();
        assert_eq!(state.selected_caso(), None);
        assert!(!state.caso_dialog_open());
    }

    #[test]
    fn setting_a_study_goal_resets_the_goal_selection() {
        let mut state = SessionState::new();
        state.set_study_goal(vec!["a".to_string(), "b".to_string()]);
        state.select_goal("a");
        assert_eq!(state.selected_goal(), Some("a"));

        state.set_study_goal(vec!["c".to_string()]);
        assert_eq!(state.selected_goal(), None);
        assert_eq!(state.study_goal(), ["c".to_string()]);
    }

    #[test]
    fn prune_clears_stale_selections_and_goal_entries() {
        let mut state = SessionState::new();
        state.toggle_favorite("gone");
        state.select_for_caso("gone");
        state.set_study_goal(vec!["kept".to_string(), "gone".to_string()]);
        state.select_goal("gone");

        state.prune_selections(&valid(&["kept"]));

        assert_eq!(state.selected_caso(), None);
        assert!(!state.caso_dialog_open());
        assert_eq!(state.selected_goal(), None);
        assert_eq!(state.study_goal(), ["kept".to_string()]);
        // Favorites survive staleness; the filter is their only consumer.
        assert!(state.is_favorite("gone"));
    }

    #[test]
    fn prune_keeps_valid_selections() {
        let mut state = SessionState::new();
        state.select_for_assertiva("a");
        state.prune_selections(&valid(&["a", "b"]));
        assert_eq!(state.selected_assertiva(), Some("a"));
    }
}
