//! Login and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::gate::{DASHBOARD_PATH, LOGIN_PATH};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::forms::LoginForm;
use crate::web::session_cookie::SessionCookie;

/// Template for the login page.
///
/// Renders `templates/login.html` with the email/password form and, after a
/// failed attempt, the error message and the email entered.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// Signed-in administrators never reach this handler; the session gate
/// sends them to `/dashboard`.
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {
        error: None,
        email: String::new(),
    }
}

/// Checks credentials and starts a session.
///
/// # Endpoint
///
/// `POST /login` (form: `email`, `password`)
///
/// # Responses
///
/// - **303** to `/dashboard` with the session cookie on success
/// - **401** login page with "Invalid login credentials"
/// - **400** login page when a field is blank
pub async fn login_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|ua| ua.chars().take(512).collect::<String>());

    match state
        .auth_service
        .login(&form.email, &form.password, user_agent)
        .await
    {
        Ok(issued) => {
            let cookie = state.session_cookie.issue(&issued.token, issued.expires_at);
            Ok((
                [(header::SET_COOKIE, cookie)],
                Redirect::to(DASHBOARD_PATH),
            )
                .into_response())
        }
        Err(e @ (AppError::Unauthorized { .. } | AppError::Validation { .. })) => {
            let page = LoginTemplate {
                error: Some(e.to_string()),
                email: form.email.trim().to_string(),
            };
            Ok((e.status(), page).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Ends the current session and clears the cookie.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = SessionCookie::read(&headers)
        && let Err(e) = state.auth_service.logout(&token).await
    {
        tracing::warn!(error = %e, "Failed to delete session on logout");
    }

    (
        StatusCode::SEE_OTHER,
        [
            (header::SET_COOKIE, state.session_cookie.clear()),
            (header::LOCATION, header::HeaderValue::from_static(LOGIN_PATH)),
        ],
    )
        .into_response()
}
