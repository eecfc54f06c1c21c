//! Onboarding submission stub: echoes the posted JSON back

use actix_web::{post, web, HttpResponse};

use crate::core::submission::echo;
use crate::core::EchoResponse;

/// Accepts any JSON body. Invalid JSON gets `{success:false, error}` with a 400.
#[post("/submitonboard")]
pub async fn submit_onboard(body: web::Bytes) -> HttpResponse {
    match echo(&body) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            tracing::debug!("Rejected onboarding body: {}", e);
            HttpResponse::BadRequest().json(EchoResponse::failed(e.to_string()))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_onboard);
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::state::tests::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_echoes_body() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(api::configure),
        )
        .await;

        let record = json!({
            "basic": {"fullName": "Nina", "bio": "", "categories": ["Singer"]},
            "feeSkill": {"fee": "$500-1000", "languages": ["English"]},
            "location": {"location": "Paris"}
        });
        let req = test::TestRequest::post()
            .uri("/api/submitonboard")
            .set_json(&record)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], record);
    }

    #[actix_web::test]
    async fn test_malformed_json() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/submitonboard")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"basic\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("EOF"));
    }
}
