//! Sign-up, sign-in and session routes
//!
//! A successful sign-up or sign-in opens a [`Session`] and returns a signed
//! token, both in the body and as the `artistly_session` cookie. Routes that
//! need the caller's identity take `Session` as an extractor.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::dev::Payload;
use actix_web::{get, post, web, FromRequest, HttpRequest, HttpResponse};
use serde::Serialize;
use std::future::{ready, Ready};

use crate::core::accounts::{LoginForm, SignupForm};
use crate::error::{ApiError, ApiResult};
use crate::models::{Account, Session};
use crate::state::AppState;
use crate::utils::auth::{create_token, hash_password, verify_password, verify_token};

pub const SESSION_COOKIE: &str = "artistly_session";

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub msg: &'static str,
    pub token: String,
    pub session: Session,
}

/// read a bearer token, falling back to the session cookie
fn request_token(req: &HttpRequest) -> Option<String> {
    let bearer = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string());

    bearer.or_else(|| req.cookie(SESSION_COOKIE).map(|c| c.value().to_string()))
}

fn session_from_request(req: &HttpRequest) -> ApiResult<Session> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("app state not registered")))?;

    let token = request_token(req)
        .ok_or_else(|| ApiError::Unauthorized("No token provided".to_string()))?;

    let claims = verify_token(&token, &state.config.server_id)
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()))?;

    state
        .sessions
        .get(&claims.sid)
        .ok_or_else(|| ApiError::Unauthorized("Session has ended".to_string()))
}

impl FromRequest for Session {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(session_from_request(req))
    }
}

fn build_session_cookie(token: &str, max_age: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .max_age(CookieDuration::seconds(max_age))
        .finish()
}

/// open a session for an account and build the response carrying its token
fn open_session(state: &AppState, account: &Account, msg: &'static str) -> ApiResult<HttpResponse> {
    let ttl = state.config.session_ttl_secs;
    let session = state.sessions.open(Session::for_account(account, ttl));
    let token = create_token(&session, &state.config.server_id)?;

    Ok(HttpResponse::Ok()
        .cookie(build_session_cookie(&token, ttl))
        .json(AuthResponse {
            msg,
            token,
            session,
        }))
}

/// sign-up endpoint
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupForm>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner().validate().map_err(ApiError::Validation)?;

    if state.accounts.get_by_email(&request.email).is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password = request.password.clone();
    let password_hash = web::block(move || hash_password(&password))
        .await
        .map_err(|e| anyhow::anyhow!("password hashing failed: {}", e))?;

    let account = state
        .accounts
        .create(&request, password_hash)
        .ok_or_else(|| ApiError::Conflict("Email already registered".to_string()))?;

    tracing::info!("New {} account {}", account.user_type.as_str(), account.id);
    open_session(&state, &account, "Account created")
}

/// sign-in endpoint
#[post("/signin")]
pub async fn signin(
    state: web::Data<AppState>,
    body: web::Json<LoginForm>,
) -> ApiResult<HttpResponse> {
    let form = body.into_inner();
    form.validate().map_err(ApiError::Validation)?;

    let invalid = || ApiError::Unauthorized("Invalid email or password".to_string());
    let account = state.accounts.get_by_email(&form.email).ok_or_else(invalid)?;

    let stored = account.password_hash.clone();
    let verified = web::block(move || verify_password(&form.password, &stored))
        .await
        .map_err(|e| anyhow::anyhow!("password check failed: {}", e))??;

    if !verified {
        tracing::debug!("Failed sign-in for account {}", account.id);
        return Err(invalid());
    }

    open_session(&state, &account, "Signed in")
}

/// end the caller's session
#[post("/signout")]
pub async fn signout(state: web::Data<AppState>, session: Session) -> HttpResponse {
    state.sessions.end(&session.id);

    let mut removal = Cookie::named(SESSION_COOKIE);
    removal.set_path("/");
    removal.make_removal();

    HttpResponse::Ok()
        .cookie(removal)
        .json(serde_json::json!({ "msg": "Signed out" }))
}

/// current session
#[get("/session")]
pub async fn current_session(session: Session) -> HttpResponse {
    HttpResponse::Ok().json(session)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(signup)
        .service(signin)
        .service(signout)
        .service(current_session);
}
