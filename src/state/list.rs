//! Shared list-screen state: fetch outcome plus delete-mode plumbing.
//!
//! DESIGN
//! ======
//! Every list screen carries the same loading/error/delete-mode shape, so it
//! lives here once instead of being re-declared per entity. Confirmation
//! dialog targets stay with the owning page; this model only knows whether
//! destructive affordances are visible.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

/// State for a screen rendering one fetched collection.
#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub delete_mode: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            delete_mode: false,
        }
    }
}

impl<T> ListState<T> {
    /// Settled state for a successful fetch.
    #[must_use]
    pub fn loaded(items: Vec<T>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
            delete_mode: false,
        }
    }

    /// Settled state for a failed fetch.
    #[must_use]
    pub fn failed(message: String) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: Some(message),
            delete_mode: false,
        }
    }

    /// Flip delete-mode visibility. Two toggles restore the original state.
    pub fn toggle_delete_mode(&mut self) {
        self.delete_mode = !self.delete_mode;
    }

    /// Splice out every item matching `doomed`; used after a confirmed
    /// delete so the screen updates without a refetch.
    pub fn remove_where(&mut self, doomed: impl Fn(&T) -> bool) {
        self.items.retain(|item| !doomed(item));
    }
}

/// Label for the delete-mode toggle button.
#[must_use]
pub fn delete_mode_label(active: bool) -> &'static str {
    if active { "Done" } else { "Delete" }
}
