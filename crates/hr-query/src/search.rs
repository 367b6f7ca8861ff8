//! Retained search state for list views.

use hr_domain::{Employee, FilterCriteria, FilterUpdate};

use crate::engine;

/// Number of cards revealed per "load more" step.
pub const PAGE_STEP: usize = 8;

/// Criteria kept across renders of one list view.
///
/// Records are passed in on every call; only the criteria and the
/// visible window are retained.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    criteria: FilterCriteria,
    window: DisplayWindow,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            window: DisplayWindow::default(),
        }
    }

    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.window.reset();
    }

    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.criteria.apply(update);
        self.window.reset();
    }

    pub fn reset(&mut self) {
        self.criteria.reset();
        self.window.reset();
    }

    /// All records matching the current criteria.
    pub fn results<'a>(&self, records: &'a [Employee]) -> Vec<&'a Employee> {
        engine::filter(records, &self.criteria)
    }

    /// Matching records limited to the visible window.
    pub fn visible<'a>(&self, records: &'a [Employee]) -> Page<'a> {
        let results = self.results(records);
        let total = results.len();
        let shown = self.window.count.min(total);
        Page {
            items: results.into_iter().take(shown).collect(),
            total,
            has_more: shown < total,
        }
    }

    /// Reveal the next step of results.
    pub fn load_more(&mut self, records: &[Employee]) {
        let total = self.results(records).len();
        self.window.advance(total);
    }

    /// Show the first `pages` steps at once; equivalent to `pages - 1`
    /// calls to [`SearchState::load_more`].
    pub fn show_pages(&mut self, records: &[Employee], pages: usize) {
        let total = self.results(records).len();
        self.window.set_steps(pages.max(1), total);
    }
}

/// A visible slice of the filtered list.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub items: Vec<&'a Employee>,
    pub total: usize,
    pub has_more: bool,
}

#[derive(Debug, Clone, Copy)]
struct DisplayWindow {
    count: usize,
}

impl DisplayWindow {
    fn advance(&mut self, total: usize) {
        self.count = (self.count + PAGE_STEP).min(total.max(PAGE_STEP));
    }

    fn set_steps(&mut self, steps: usize, total: usize) {
        self.count = steps.saturating_mul(PAGE_STEP).min(total.max(PAGE_STEP));
    }

    fn reset(&mut self) {
        self.count = PAGE_STEP;
    }
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self { count: PAGE_STEP }
    }
}
