//! Page request state and its transitions.
//!
//! `Idle → Loading → {Loaded, Failed}`; a load-more moves `Loaded` back to
//! `Loading`, a refresh moves any phase to `Loading` after clearing items.

/// Message stored in [`PageState::error`] when a page fails to load.
pub const LOAD_ERROR: &str = "Failed to load items";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Accumulated pages plus loading flags.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<T> {
    pub items: Vec<T>,
    /// Page currently loaded (or being loaded), 1-based
    pub page: u32,
    pub phase: Phase,
    pub is_loading: bool,
    pub error: Option<String>,
    /// True iff the last fetched page was full
    pub has_more: bool,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            phase: Phase::Idle,
            is_loading: false,
            error: None,
            has_more: true,
        }
    }
}

impl<T> PageState<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a load-more would fetch the next page.
    pub fn can_load_more(&self) -> bool {
        !self.is_loading && self.has_more && self.phase != Phase::Idle && !self.first_page_failed()
    }

    /// The first page failed, so there is no page to continue from.
    pub fn first_page_failed(&self) -> bool {
        self.phase == Phase::Failed && self.page <= 1 && self.items.is_empty()
    }

    /// Nothing left to fetch and something was shown.
    pub fn is_exhausted(&self) -> bool {
        !self.has_more && !self.items.is_empty()
    }

    pub(crate) fn begin_refresh(&mut self) {
        self.items.clear();
        self.page = 1;
        self.has_more = true;
        self.begin_loading();
    }

    /// Returns the page to fetch.
    pub(crate) fn begin_load_more(&mut self) -> u32 {
        self.page += 1;
        self.begin_loading();
        self.page
    }

    pub(crate) fn apply_page(&mut self, page: u32, items: Vec<T>, limit: u32) {
        self.has_more = items.len() == limit as usize;
        if page <= 1 {
            self.items = items;
        } else {
            self.items.extend(items);
        }
        self.page = page;
        self.phase = Phase::Loaded;
        self.is_loading = false;
        self.error = None;
    }

    /// Items and `has_more` stay at their last known-good values; a failed
    /// load-more rolls the page counter back so a retry asks for the same page.
    pub(crate) fn apply_failure(&mut self, page: u32) {
        if page > 1 {
            self.page = page - 1;
        }
        self.phase = Phase::Failed;
        self.is_loading = false;
        self.error = Some(LOAD_ERROR.to_string());
    }

    fn begin_loading(&mut self) {
        self.phase = Phase::Loading;
        self.is_loading = true;
        self.error = None;
    }
}
