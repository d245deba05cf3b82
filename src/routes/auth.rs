//! Auth routes — login, signup, session introspection, role selection.
//!
//! ERROR HANDLING
//! ==============
//! Handlers return `ApiError`, which maps onto the status codes the
//! client's REST helpers translate into user-facing messages. Credential
//! verification is intentionally absent: this host only has to produce a
//! `{authenticated, role}` session for the client.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use client::nav::Role;

use crate::services::session::{AccountError, SessionUser};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const SESSION_TTL_DAYS: i64 = 30;
const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

// =============================================================================
// VALIDATION
// =============================================================================

pub(crate) fn normalize_email(raw: &str) -> Result<String, ApiError> {
    let email = raw.trim().to_ascii_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::InvalidEmail);
    }
    Ok(email)
}

pub(crate) fn validate_role_slug(raw: &str) -> Result<String, ApiError> {
    Role::parse(raw).map(|role| role.as_str().to_owned()).ok_or(ApiError::UnknownRole)
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password too short")]
    PasswordTooShort,
    #[error("email or password not recognized")]
    InvalidCredentials,
    #[error("unknown role")]
    UnknownRole,
    #[error("not signed in")]
    Unauthorized,
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidEmail | Self::PasswordTooShort => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::UnknownRole => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Account(AccountError::EmailTaken) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated account extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        let app_state = AppState::from_ref(state);
        let user = app_state.sessions.validate(token).ok_or(ApiError::Unauthorized)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::days(SESSION_TTL_DAYS))
        .build()
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

/// `POST /api/auth/login` — open a session for an existing account.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionUser>), ApiError> {
    let email = normalize_email(&req.email)?;
    if req.password.is_empty() {
        return Err(ApiError::InvalidCredentials);
    }

    let (token, user) = state.sessions.login(&email).ok_or(ApiError::InvalidCredentials)?;
    tracing::info!(user = %user.id, "login");
    Ok((jar.add(session_cookie(token)), Json(user)))
}

#[derive(Deserialize)]
pub struct SignupRequest {
    name: String,
    email: String,
    password: String,
    role: Option<String>,
}

/// `POST /api/auth/signup` — create an account and open a session.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SignupRequest>,
) -> Result<(CookieJar, Json<SessionUser>), ApiError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidCredentials);
    }
    let email = normalize_email(&req.email)?;
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::PasswordTooShort);
    }
    let role = req.role.as_deref().map(validate_role_slug).transpose()?;

    let (token, user) = state.sessions.signup(name, &email, role)?;
    tracing::info!(user = %user.id, role = ?user.role, "signup");
    Ok((jar.add(session_cookie(token)), Json(user)))
}

/// `GET /api/auth/me` — the account behind the session cookie.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — revoke the session and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        state.sessions.revoke(cookie.value());
    }
    (jar.remove(Cookie::build((COOKIE_NAME, "")).path("/").build()), StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct RoleRequest {
    role: String,
}

/// `POST /api/auth/role` — record a role selection for the signed-in
/// account.
pub async fn select_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RoleRequest>,
) -> Result<Json<SessionUser>, ApiError> {
    let slug = validate_role_slug(&req.role)?;
    let user = state.sessions.set_role(&auth.token, &slug).ok_or(ApiError::Unauthorized)?;
    tracing::info!(user = %user.id, role = %slug, "role selected");
    Ok(Json(user))
}

#[derive(Deserialize)]
pub struct ResetRequest {
    email: String,
}

/// `POST /api/auth/forgot-password` — accept a reset request. Sending the
/// email is out of scope; the request is logged and acknowledged.
pub async fn forgot_password(Json(req): Json<ResetRequest>) -> Result<StatusCode, ApiError> {
    let email = normalize_email(&req.email)?;
    tracing::info!(%email, "password reset requested");
    Ok(StatusCode::ACCEPTED)
}
