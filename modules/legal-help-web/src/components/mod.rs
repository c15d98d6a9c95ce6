use legal_help_common::reference::{self, CATEGORIES};
use legal_help_common::HomeForm;

use crate::session::CaseSession;

pub mod analysis;
pub mod case;
pub mod failure;
pub mod home;
pub mod layout;

pub use analysis::render_analysis;
pub use case::render_case;
pub use failure::render_failure;
pub use home::render_home;

pub const NO_FEEDBACK_MESSAGE: &str =
    "No analysis feedback available. Go back and submit a solution first.";

// --- View Models ---

#[derive(Clone, PartialEq)]
pub struct HomeView {
    pub api_key_configured: bool,
    pub regions: Vec<String>,
    pub localities: Vec<String>,
    pub categories: Vec<String>,
    pub region: String,
    pub locality: String,
    pub category: String,
    pub timeline: String,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct CaseView {
    pub scenario: Option<String>,
    pub solution: String,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct AnalysisView {
    pub feedback: Option<String>,
    pub closed: bool,
}

/// Build the Home view from whatever the user last submitted. Unknown
/// selections fall back to the first entry, and the city list always
/// follows the selected state.
pub fn home_view(form: &HomeForm, api_key_configured: bool, error: Option<String>) -> HomeView {
    let region = reference::find_region(form.region.trim()).unwrap_or(reference::default_region());

    let locality = if region.localities.contains(&form.locality.trim()) {
        form.locality.trim()
    } else {
        region.localities[0]
    };

    let category = if reference::is_category(form.category.trim()) {
        form.category.trim()
    } else {
        CATEGORIES[0]
    };

    HomeView {
        api_key_configured,
        regions: reference::regions().map(str::to_string).collect(),
        localities: region.localities.iter().map(|s| s.to_string()).collect(),
        categories: CATEGORIES.iter().map(|s| s.to_string()).collect(),
        region: region.name.to_string(),
        locality: locality.to_string(),
        category: category.to_string(),
        timeline: form.timeline.clone(),
        error,
    }
}

pub fn case_view(session: &CaseSession, solution: String, error: Option<String>) -> CaseView {
    CaseView {
        scenario: session.scenario().map(str::to_string),
        solution,
        error,
    }
}

pub fn analysis_view(session: &CaseSession, closed: bool) -> AnalysisView {
    AnalysisView {
        feedback: session
            .analysis_feedback()
            .filter(|f| !f.is_empty())
            .map(str::to_string),
        closed,
    }
}
