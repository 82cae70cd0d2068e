//! Selected-project state for an interactive front end.
//!
//! The session owns the only mutable state the dashboard has: which snapshot
//! is selected and which page of the module ranking is showing. Derived views
//! are never stored; [`ProjectSession::report`] recomputes them on demand.

use crate::core::ProjectSnapshot;
use crate::dashboard::{derive_dashboard, risk_inputs, DashboardReport, Settings};
use crate::pagination::PageState;

#[derive(Debug, Clone, Default)]
pub struct ProjectSession {
    settings: Settings,
    snapshot: Option<ProjectSnapshot>,
    page: PageState,
}

impl ProjectSession {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            snapshot: None,
            page: PageState::new(0, settings.display.page_size),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn snapshot(&self) -> Option<&ProjectSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Replaces the selected project and returns to page 1.
    pub fn select_project(&mut self, snapshot: ProjectSnapshot) {
        let module_count = risk_inputs(&snapshot).len();
        tracing::info!(
            project_id = snapshot.project_id,
            modules = module_count,
            "selected project"
        );
        self.page.reset(module_count);
        self.snapshot = Some(snapshot);
    }

    pub fn clear_project(&mut self) {
        self.snapshot = None;
        self.page.reset(0);
    }

    /// Returns whether the page changed; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.page.go_to(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.page.next()
    }

    pub fn previous_page(&mut self) -> bool {
        self.page.previous()
    }

    /// Derived views for the current state, or `None` before a project is
    /// selected.
    pub fn report(&self) -> Option<DashboardReport> {
        self.snapshot
            .as_ref()
            .map(|snapshot| derive_dashboard(snapshot, self.page.current_page(), &self.settings))
    }
}
