use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    Form,
};
use tracing::{info, warn};

use legal_help_common::{
    reference, validate_solution, CaseRequest, HomeForm, SolutionForm, ValidationError,
};

use crate::components::{
    analysis_view, case_view, home_view, render_analysis, render_case, render_failure,
    render_home,
};
use crate::screens::Screen;
use crate::session::SessionHandle;
use crate::AppState;

// --- Home ---

pub async fn home_page(
    session: SessionHandle,
    State(state): State<Arc<AppState>>,
    Query(form): Query<HomeForm>,
) -> Response {
    let view = home_view(&form, state.api_key_configured, None);
    session.respond(Html(render_home(view)))
}

pub async fn home_submit(
    session: SessionHandle,
    State(state): State<Arc<AppState>>,
    Form(form): Form<HomeForm>,
) -> Response {
    let request = match CaseRequest::from_form(&form) {
        Ok(request) => request,
        Err(e) => {
            info!(error = %e, "Rejected case request");
            let view = home_view(&form, state.api_key_configured, Some(e.to_string()));
            return session.respond((StatusCode::UNPROCESSABLE_ENTITY, Html(render_home(view))));
        }
    };

    let scenario = match state.writer.generate_scenario(&request).await {
        Ok(scenario) => scenario,
        Err(e) => {
            warn!(error = %e, "Scenario generation failed");
            return session.respond(failure(Screen::Home));
        }
    };

    state
        .sessions
        .update(session.id, |s| s.record_scenario(scenario))
        .await;

    session.respond(Redirect::to(Screen::Home.after_success().path()))
}

// --- Case ---

pub async fn case_page(session: SessionHandle) -> Response {
    let view = case_view(&session.state, String::new(), None);
    session.respond(Html(render_case(view)))
}

pub async fn case_submit(
    session: SessionHandle,
    State(state): State<Arc<AppState>>,
    Form(form): Form<SolutionForm>,
) -> Response {
    let solution = match validate_solution(&form.solution) {
        Ok(solution) => solution.to_string(),
        Err(e) => return reject_solution(session, form.solution, e.to_string()),
    };

    let Some(scenario) = session.state.scenario().map(str::to_string) else {
        return reject_solution(
            session,
            form.solution,
            ValidationError::NoScenario.to_string(),
        );
    };

    let feedback = match state.writer.analyze_solution(&scenario, &solution).await {
        Ok(feedback) => feedback,
        Err(e) => {
            warn!(error = %e, "Solution analysis failed");
            return session.respond(failure(Screen::Case));
        }
    };

    let recorded = state
        .sessions
        .update(session.id, |s| {
            // A newer scenario may have landed while the model was busy.
            if s.scenario() != Some(scenario.as_str()) {
                return Err(ValidationError::NoScenario);
            }
            s.record_analysis(solution, feedback)
        })
        .await;

    match recorded {
        Ok(()) => session.respond(Redirect::to(Screen::Case.after_success().path())),
        Err(e) => {
            warn!(error = %e, "Session changed during analysis");
            reject_solution(session, form.solution, e.to_string())
        }
    }
}

fn reject_solution(session: SessionHandle, solution: String, message: String) -> Response {
    let view = case_view(&session.state, solution, Some(message));
    session.respond((StatusCode::UNPROCESSABLE_ENTITY, Html(render_case(view))))
}

// --- Analysis ---

pub async fn analysis_page(session: SessionHandle) -> Response {
    let view = analysis_view(&session.state, false);
    session.respond(Html(render_analysis(view)))
}

pub async fn analysis_close(session: SessionHandle) -> Response {
    let view = analysis_view(&session.state, true);
    session.respond(Html(render_analysis(view)))
}

// --- Reference data ---

pub async fn api_localities(Path(region): Path<String>) -> Response {
    match reference::localities(&region) {
        Some(localities) => Json(localities).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("Unknown state: {region}")})),
        )
            .into_response(),
    }
}

fn failure(screen: Screen) -> (StatusCode, Html<String>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(render_failure(screen)))
}
