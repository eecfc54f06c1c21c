//! Manager dashboard routes

use actix_web::{get, patch, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::config::DashboardStat;
use crate::core::SubmissionSearch;
use crate::error::{ApiError, ApiResult};
use crate::models::{Session, Submission, SubmissionStatus};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView<'a> {
    pub stats: &'a [DashboardStat],
    pub pending_count: usize,
    pub total: usize,
    pub submissions: Vec<Submission>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: SubmissionStatus,
}

/// stats cards and the submissions table
#[get("")]
pub async fn dashboard(
    state: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
) -> HttpResponse {
    let search = SubmissionSearch::new(query.search.as_deref());
    let submissions: Vec<Submission> = state
        .submissions
        .all()
        .into_iter()
        .filter(|s| search.matches(s))
        .collect();

    HttpResponse::Ok().json(DashboardView {
        stats: &state.config.dashboard_stats,
        pending_count: state.submissions.pending_count(),
        total: submissions.len(),
        submissions,
    })
}

/// approve, reject or reopen a submission; artist managers only
#[patch("/submissions/{id}")]
pub async fn update_status(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<u32>,
    body: web::Json<StatusUpdate>,
) -> ApiResult<HttpResponse> {
    if !session.is_manager() {
        return Err(ApiError::Forbidden(
            "Only artist managers can review submissions".to_string(),
        ));
    }

    let id = path.into_inner();
    let updated = state
        .submissions
        .set_status(id, body.status)
        .ok_or_else(|| ApiError::NotFound(format!("Submission {} not found", id)))?;

    tracing::info!(
        "Account {} marked submission {} {}",
        session.account_id,
        id,
        updated.status.as_str()
    );
    Ok(HttpResponse::Ok().json(updated))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard).service(update_status);
}
