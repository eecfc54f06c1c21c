//! REST API routes for Artistly

pub mod artists;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod onboarding;
pub mod submit;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::error::ApiError;

/// Route JSON body failures through `ApiError` so they answer with `{"msg": ...}`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        ApiError::BadRequest(err.to_string()).into()
    })
}

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            // Home page
            .configure(home::configure)
            // Artist listing
            .service(web::scope("/artists").configure(artists::configure))
            // Manager dashboard
            .service(web::scope("/dashboard").configure(dashboard::configure))
            // Onboarding wizard
            .service(web::scope("/onboarding").configure(onboarding::configure))
            // Sign-in / sign-up
            .service(web::scope("/auth").configure(auth::configure))
            // Echo stub
            .configure(submit::configure),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_bad_json_uses_api_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/signin")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("[1, 2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["msg"].is_string());
    }
}
