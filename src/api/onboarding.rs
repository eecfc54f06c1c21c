//! Onboarding wizard routes
//!
//! Each client view starts its own wizard and drives it with `next`/`back`.
//! Sections are written whole with `PUT`. Advancing past the review step
//! validates the full form and submits it.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

use crate::core::onboarding::{BasicSection, FeeSkillSection, LocationSection};
use crate::core::wizard::ProgressEntry;
use crate::core::{FieldError, OnboardingForm, OnboardingStep, StepOutcome, SubmissionDesk};
use crate::error::{ApiError, ApiResult};
use crate::models::{Category, FeeBand, Language};
use crate::state::AppState;
use crate::stores::Wizard;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub id: Uuid,
    pub step: OnboardingStep,
    pub step_number: usize,
    pub title: &'static str,
    pub is_last: bool,
    pub progress: Vec<ProgressEntry>,
    pub form: OnboardingForm,
    /// Problems with the section shown on the current step
    pub step_errors: Vec<FieldError>,
    pub submitted: bool,
}

impl From<Wizard> for WizardView {
    fn from(wizard: Wizard) -> Self {
        let step = wizard.sequencer.current();
        Self {
            id: wizard.id,
            step,
            step_number: step.index() + 1,
            title: step.title(),
            is_last: wizard.sequencer.is_last(),
            progress: wizard.sequencer.progress(),
            step_errors: step.validate(&wizard.form),
            form: wizard.form,
            submitted: wizard.submitted,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingOptions {
    pub categories: Vec<&'static str>,
    pub languages: Vec<&'static str>,
    pub fee_ranges: Vec<&'static str>,
}

fn not_found(id: &Uuid) -> ApiError {
    ApiError::NotFound(format!("Onboarding session {} not found", id))
}

/// apply `edit` to a wizard that has not yet submitted, returning its view
fn edit_wizard(
    state: &AppState,
    id: &Uuid,
    edit: impl FnOnce(&mut Wizard),
) -> ApiResult<HttpResponse> {
    let wizard = state
        .wizards
        .update(id, |w| {
            if w.submitted {
                return Err(ApiError::Conflict(
                    "Application already submitted".to_string(),
                ));
            }
            edit(w);
            Ok(w.clone())
        })
        .ok_or_else(|| not_found(id))??;

    Ok(HttpResponse::Ok().json(WizardView::from(wizard)))
}

#[get("/options")]
pub async fn options() -> HttpResponse {
    HttpResponse::Ok().json(OnboardingOptions {
        categories: Category::ALL.iter().map(|c| c.as_str()).collect(),
        languages: Language::ALL.iter().map(|l| l.as_str()).collect(),
        fee_ranges: FeeBand::ALL.iter().map(|b| b.label()).collect(),
    })
}

/// start a new wizard at the first step
#[post("")]
pub async fn start(state: web::Data<AppState>) -> HttpResponse {
    let wizard = state.wizards.create();
    tracing::debug!("Started onboarding session {}", wizard.id);
    HttpResponse::Created().json(WizardView::from(wizard))
}

#[get("/{id}")]
pub async fn get_wizard(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let wizard = state.wizards.get(&id).ok_or_else(|| not_found(&id))?;
    Ok(HttpResponse::Ok().json(WizardView::from(wizard)))
}

#[put("/{id}/basic")]
pub async fn put_basic(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<BasicSection>,
) -> ApiResult<HttpResponse> {
    let section = body.into_inner();
    edit_wizard(&state, &path, |w| w.form.basic = section)
}

#[put("/{id}/fee-skill")]
pub async fn put_fee_skill(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<FeeSkillSection>,
) -> ApiResult<HttpResponse> {
    let section = body.into_inner();
    edit_wizard(&state, &path, |w| w.form.fee_skill = section)
}

#[put("/{id}/location")]
pub async fn put_location(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<LocationSection>,
) -> ApiResult<HttpResponse> {
    let section = body.into_inner();
    edit_wizard(&state, &path, |w| w.form.location = section)
}

/// advance one step; on the review step, validate and submit
#[post("/{id}/next")]
pub async fn next(state: web::Data<AppState>, path: web::Path<Uuid>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    let (outcome, wizard) = state
        .wizards
        .update(&id, |w| {
            if w.submitted {
                return Err(ApiError::Conflict(
                    "Application already submitted".to_string(),
                ));
            }
            let outcome = w.sequencer.advance(&w.form);
            if matches!(outcome, StepOutcome::Submit(_)) {
                w.submitted = true;
            }
            Ok((outcome, w.clone()))
        })
        .ok_or_else(|| not_found(&id))??;

    match outcome {
        StepOutcome::Moved(_) => Ok(HttpResponse::Ok().json(WizardView::from(wizard))),
        StepOutcome::Blocked(errors) => {
            tracing::debug!("Onboarding {} blocked with {} errors", id, errors.len());
            Err(ApiError::Validation(errors))
        }
        StepOutcome::Submit(application) => {
            let receipt = SubmissionDesk::new(&state.submissions).submit(&wizard.form, &application)?;
            Ok(HttpResponse::Ok().json(receipt))
        }
    }
}

/// go back one step; no-op on the first step
#[post("/{id}/back")]
pub async fn back(state: web::Data<AppState>, path: web::Path<Uuid>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    edit_wizard(&state, &id, |w| {
        w.sequencer.retreat();
    })
}

#[delete("/{id}")]
pub async fn discard(state: web::Data<AppState>, path: web::Path<Uuid>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    if !state.wizards.remove(&id) {
        return Err(not_found(&id));
    }
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(options)
        .service(start)
        .service(get_wizard)
        .service(put_basic)
        .service(put_fee_skill)
        .service(put_location)
        .service(next)
        .service(back)
        .service(discard);
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::state::tests::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_full_wizard_submission() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/onboarding").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let view: Value = test::read_body_json(resp).await;
        let id = view["id"].as_str().unwrap().to_string();
        assert_eq!(view["step"], "basic");
        assert_eq!(view["stepNumber"], 1);
        assert_eq!(view["progress"][0]["state"], "current");
        assert_eq!(view["stepErrors"].as_array().unwrap().len(), 2);

        let basic = json!({"fullName": "Nina Simone", "bio": "Pianist", "categories": ["Singer"]});
        let fee_skill = json!({"fee": "$1000-2500", "languages": ["English", "French"]});
        let location = json!({"location": "Paris, FR"});

        for (section, body) in [("basic", &basic), ("fee-skill", &fee_skill), ("location", &location)] {
            let req = test::TestRequest::put()
                .uri(&format!("/api/onboarding/{}/{}", id, section))
                .set_json(body)
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        for expected in ["fee-skill", "location", "review"] {
            let req = test::TestRequest::post()
                .uri(&format!("/api/onboarding/{}/next", id))
                .to_request();
            let view: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(view["step"], expected);
        }

        let req = test::TestRequest::post()
            .uri(&format!("/api/onboarding/{}/next", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let receipt: Value = test::read_body_json(resp).await;
        assert_eq!(receipt["success"], true);
        assert_eq!(
            receipt["data"],
            json!({"basic": basic, "feeSkill": fee_skill, "location": location})
        );
        assert_eq!(receipt["submission"]["status"], "pending");
        assert_eq!(receipt["submission"]["id"], 6);

        // the wizard stays on review and refuses a second submission
        let req = test::TestRequest::get()
            .uri(&format!("/api/onboarding/{}", id))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["step"], "review");
        assert_eq!(view["submitted"], true);

        let req = test::TestRequest::post()
            .uri(&format!("/api/onboarding/{}/next", id))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CONFLICT
        );

        // a submitted wizard cannot step back off review either
        let req = test::TestRequest::post()
            .uri(&format!("/api/onboarding/{}/back", id))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CONFLICT
        );
        let req = test::TestRequest::get()
            .uri(&format!("/api/onboarding/{}", id))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["step"], "review");

        let req = test::TestRequest::get().uri("/api/dashboard").to_request();
        let dashboard: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(dashboard["total"], 6);
        assert_eq!(dashboard["submissions"][5]["name"], "Nina Simone");
    }

    #[actix_web::test]
    async fn test_blocked_submission_and_back() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/onboarding").to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        let id = view["id"].as_str().unwrap().to_string();

        // back at the first step is a no-op
        let req = test::TestRequest::post()
            .uri(&format!("/api/onboarding/{}/back", id))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["stepNumber"], 1);

        for _ in 0..3 {
            let req = test::TestRequest::post()
                .uri(&format!("/api/onboarding/{}/next", id))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::post()
            .uri(&format!("/api/onboarding/{}/next", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(!body["errors"].as_array().unwrap().is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/api/onboarding/{}", id))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["step"], "review");
        assert_eq!(view["submitted"], false);

        let req = test::TestRequest::post()
            .uri(&format!("/api/onboarding/{}/back", id))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["step"], "location");
    }

    #[actix_web::test]
    async fn test_unknown_and_discarded() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/onboarding/00000000-0000-0000-0000-000000000000")
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::post().uri("/api/onboarding").to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        let id = view["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/onboarding/{}", id))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::post()
            .uri(&format!("/api/onboarding/{}/next", id))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_options() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/onboarding/options")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["categories"].as_array().unwrap().len(), 8);
        assert_eq!(body["feeRanges"][5], "$5000+");
        assert_eq!(body["languages"][0], "English");
    }
}
