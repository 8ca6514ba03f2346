//! # Workbench
//!
//! The client session: catalog, selection and everything the user sees.
//!
//! The workbench owns two independent state containers:
//! - the `Catalog` (write-once per load, read-only afterwards)
//! - the `SelectionState` (read-write, session-local)
//!
//! and a `ViewState` describing the visible surface: the search query and
//! results panel, the selected-skills list, the submit control, the loading
//! indicator, the error area and the results area. Every operation updates
//! the view before it returns, so callers can redraw straight from it.
//!
//! ## Submission Guard
//!
//! `submit` holds an [`InFlight`] guard while the request is outstanding.
//! The guard disables submit and shows the loading indicator when taken, and
//! restores both in `Drop`, so the control comes back on success, on error,
//! and when the submission future is dropped mid-flight.

use crate::client::Optimizer;
use buildsmith_core::{
    BuildReport, BuildResult, BuildsmithError, Catalog, CatalogEntry, SelectionState, render,
};

// =============================================================================
// VIEW TYPES
// =============================================================================

/// Where a click landed, relative to the search widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SearchInput,
    ResultsPanel,
    Elsewhere,
}

/// Content of the results panel after a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    /// At least one entry matched, in catalog order.
    Matches(Vec<CatalogEntry>),
    /// Nothing matched. Rendered as an explicit indicator, never an empty list.
    NoSkillsFound,
    /// The catalog is not loaded (yet, or after a failed load); nothing was searched.
    CatalogUnavailable,
}

impl SearchView {
    fn from_matches(matches: Vec<CatalogEntry>) -> Self {
        if matches.is_empty() {
            Self::NoSkillsFound
        } else {
            Self::Matches(matches)
        }
    }
}

/// Load state of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    NotLoaded,
    Loaded,
    Failed,
}

/// Everything currently visible to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub results_panel_visible: bool,
    pub search: Option<SearchView>,
    /// Selected skills as `"<name> <level>"`, in name order.
    pub selected: Vec<String>,
    /// Bumped on every re-render of the selected-skills list.
    pub render_revision: u64,
    pub submit_enabled: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub report: Option<BuildReport>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results_panel_visible: false,
            search: None,
            selected: Vec::new(),
            render_revision: 0,
            submit_enabled: true,
            loading: false,
            error: None,
            report: None,
        }
    }
}

impl ViewState {
    /// Replace any previous error and clear prior results.
    fn show_error(&mut self, error: &BuildsmithError) {
        self.report = None;
        self.error = Some(error.to_string());
    }

    fn show_report(&mut self, report: BuildReport) {
        self.error = None;
        self.report = Some(report);
    }
}

// =============================================================================
// SUBMISSION GUARD
// =============================================================================

/// Marks a submission as outstanding for as long as it lives.
#[derive(Debug)]
pub struct InFlight<'a> {
    view: &'a mut ViewState,
}

impl<'a> InFlight<'a> {
    /// Disable submit, show loading, clear the previous error.
    pub fn begin(view: &'a mut ViewState) -> Self {
        view.submit_enabled = false;
        view.loading = true;
        view.error = None;
        Self { view }
    }

    /// The view, for publishing the outcome before the guard is released.
    pub fn view(&mut self) -> &mut ViewState {
        self.view
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.view.loading = false;
        self.view.submit_enabled = true;
    }
}

// =============================================================================
// WORKBENCH
// =============================================================================

/// One client session.
#[derive(Debug, Default)]
pub struct Workbench {
    catalog: Catalog,
    catalog_status: CatalogStatus,
    selection: SelectionState,
    view: ViewState,
}

impl Workbench {
    /// Create a session with an empty catalog and selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn catalog_status(&self) -> CatalogStatus {
        self.catalog_status
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Fetch the skill list once and install the expanded catalog.
    ///
    /// On failure the error is shown, the catalog is left empty, and no retry
    /// is attempted. Returns the number of catalog entries on success.
    pub async fn load_catalog<O: Optimizer>(
        &mut self,
        optimizer: &O,
    ) -> Result<usize, BuildsmithError> {
        match optimizer.fetch_skills().await {
            Ok(defs) => {
                self.catalog = Catalog::from_defs(&defs);
                self.catalog_status = CatalogStatus::Loaded;
                tracing::debug!(entries = self.catalog.len(), "catalog installed");
                Ok(self.catalog.len())
            }
            Err(e) => {
                tracing::error!(error = %e, "catalog load failed");
                self.catalog = Catalog::new();
                self.catalog_status = CatalogStatus::Failed;
                self.view.show_error(&e);
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Search panel
    // -------------------------------------------------------------------------

    /// Handle a change of the search input. Always shows the results panel.
    pub fn search(&mut self, text: &str) -> &SearchView {
        self.view.query = text.to_string();
        self.view.results_panel_visible = true;
        let result = match self.catalog_status {
            CatalogStatus::Loaded => SearchView::from_matches(self.catalog.search(text)),
            CatalogStatus::NotLoaded | CatalogStatus::Failed => SearchView::CatalogUnavailable,
        };
        self.view.search.insert(result)
    }

    /// Handle a click. Only clicks outside both search widgets hide the panel.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Elsewhere {
            self.view.results_panel_visible = false;
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select a catalog entry. Returns `true` if the selection changed.
    pub fn choose(&mut self, entry: &CatalogEntry) -> bool {
        let changed = self.selection.add_skill(&entry.name, entry.level);
        self.view.results_panel_visible = true;
        self.rerender_selection();
        changed
    }

    /// Select the `index`-th (1-based) entry of the current search results.
    pub fn choose_match(&mut self, index: usize) -> Result<bool, BuildsmithError> {
        let entry = match &self.view.search {
            Some(SearchView::Matches(matches)) => index
                .checked_sub(1)
                .and_then(|i| matches.get(i))
                .cloned(),
            _ => None,
        }
        .ok_or_else(|| {
            BuildsmithError::InvalidSelection(format!("no search result #{index}"))
        })?;
        Ok(self.choose(&entry))
    }

    /// Select `name` at `level`, provided the catalog offers that entry.
    pub fn choose_by_name(&mut self, name: &str, level: u32) -> Result<bool, BuildsmithError> {
        let entry = self.catalog.find(name, level).cloned().ok_or_else(|| {
            match self.catalog.max_level(name) {
                Some(max) => BuildsmithError::InvalidSelection(format!(
                    "level {level} for '{name}' is outside 1..={max}"
                )),
                None => BuildsmithError::InvalidSelection(format!("unknown skill '{name}'")),
            }
        })?;
        Ok(self.choose(&entry))
    }

    /// Drop a skill from the selection. Returns `true` if it was selected.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.selection.remove_skill(name);
        self.rerender_selection();
        removed
    }

    fn rerender_selection(&mut self) {
        self.view.selected = self
            .selection
            .list()
            .iter()
            .map(|(name, level)| format!("{name} {level}"))
            .collect();
        self.view.render_revision = self.view.render_revision.saturating_add(1);
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Submit the selection and publish the outcome to the view.
    ///
    /// On success the rendered report replaces any error; on failure prior
    /// results are cleared and the error is shown.
    pub async fn submit<O>(&mut self, optimizer: &O) -> Result<BuildResult, BuildsmithError>
    where
        O: Optimizer + Sync,
    {
        let mut in_flight = InFlight::begin(&mut self.view);
        let outcome = optimizer.submit(&self.selection).await;

        match &outcome {
            Ok(build) => in_flight.view().show_report(render(build)),
            Err(e) => {
                tracing::warn!(error = %e, "submission failed");
                in_flight.view().show_error(e);
            }
        }

        outcome
    }
}

// =============================================================================
// TESTS
// =============================================================================
