use std::time::{Duration, Instant};

use crate::store::{ProductStore, SavedProduct};

/// Minimum trimmed query length before the store is searched.
pub const MIN_QUERY_LEN: usize = 2;

/// How long the dropdown stays up after the name field loses focus, so a
/// click on a suggestion (which blurs the field first) still lands.
pub const BLUR_HIDE_DELAY: Duration = Duration::from_millis(200);

/// Transient autocomplete state for one add-item form.
///
/// Owns the dropdown contents, its visibility, the keyboard highlight and the
/// one-shot "just selected" suppression flag. All transitions are reactions to
/// discrete input events; the only timed piece is the delayed hide on blur,
/// armed here and applied by `tick`.
#[derive(Debug, Default)]
pub struct AutocompleteState {
    suggestions: Vec<SavedProduct>,
    visible: bool,
    /// Keyboard highlight; `None` means no suggestion is highlighted.
    highlighted: Option<usize>,
    /// Set right after a selection so the programmatic refill does not reopen
    /// the dropdown; consumed by the next text change.
    suppress_search: bool,
    /// Pending delayed hide armed by blur. Any later focus, text change or
    /// selection overwrites visibility, so clearing this is enough to cancel.
    hide_deadline: Option<Instant>,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suggestions(&self) -> &[SavedProduct] {
        &self.suggestions
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_search_suppressed(&self) -> bool {
        self.suppress_search
    }

    /// The highlighted suggestion, if the dropdown is visible and a row is
    /// keyboard-highlighted.
    pub fn highlighted(&self) -> Option<&SavedProduct> {
        if !self.visible {
            return None;
        }
        self.highlighted.and_then(|i| self.suggestions.get(i))
    }

    pub fn suggestion_at(&self, index: usize) -> Option<&SavedProduct> {
        self.suggestions.get(index)
    }

    /// React to the name field's text changing.
    ///
    /// Consumes the suppression flag: the change that follows a selection never
    /// searches, the one after that resumes normal behavior. Queries shorter
    /// than `MIN_QUERY_LEN` (trimmed) clear the dropdown without searching.
    pub fn on_text_change(&mut self, text: &str, store: &dyn ProductStore) {
        let was_suppressed = self.suppress_search;
        self.suppress_search = false;
        self.hide_deadline = None;

        if !was_suppressed && text.trim().chars().count() >= MIN_QUERY_LEN {
            self.suggestions = store.search(text);
            self.visible = !self.suggestions.is_empty();
        } else {
            self.suggestions.clear();
            self.visible = false;
        }

        self.highlighted = None;
    }

    /// React to the name field gaining focus: re-show existing suggestions
    /// unless a selection just filled the field.
    pub fn on_focus(&mut self) {
        self.hide_deadline = None;
        if !self.suggestions.is_empty() && !self.suppress_search {
            self.visible = true;
        }
    }

    /// React to the name field losing focus: arm the delayed hide instead of
    /// hiding immediately, so a suggestion click still registers.
    pub fn on_blur(&mut self, now: Instant) {
        if self.visible {
            self.hide_deadline = Some(now + BLUR_HIDE_DELAY);
        }
    }

    /// Apply the pending blur hide once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.hide_deadline {
            if now >= deadline {
                self.visible = false;
                self.hide_deadline = None;
            }
        }
    }

    /// ArrowDown: advance the highlight, capped at the last suggestion.
    pub fn highlight_next(&mut self) {
        if !self.visible || self.suggestions.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(self.suggestions.len() - 1),
        });
    }

    /// ArrowUp: move the highlight back, down to "none highlighted".
    pub fn highlight_previous(&mut self) {
        if !self.visible {
            return;
        }
        self.highlighted = match self.highlighted {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Escape: hide the dropdown but keep the suggestions, so refocusing the
    /// field can show them again.
    pub fn on_escape(&mut self) {
        self.visible = false;
    }

    /// A pointer press landed outside the name field and the dropdown.
    pub fn on_outside_press(&mut self) {
        self.visible = false;
    }

    /// Record that a suggestion was just applied: hide and empty the dropdown
    /// and suppress the search triggered by the programmatic refill.
    pub fn mark_selected(&mut self) {
        self.suppress_search = true;
        self.visible = false;
        self.suggestions.clear();
        self.highlighted = None;
        self.hide_deadline = None;
    }

    /// Drop all transient state, including the suppression flag. Used after a
    /// successful submit clears the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_deadline
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
