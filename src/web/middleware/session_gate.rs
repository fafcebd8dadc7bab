//! Session gate: resolves the dashboard session and guards routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, header::SET_COOKIE, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::Session;
use crate::domain::gate::{self, DASHBOARD_PATH, GateDecision, LOGIN_PATH};
use crate::state::AppState;
use crate::web::session_cookie::SessionCookie;

/// Runs on every request before routing.
///
/// # Flow
///
/// 1. Read the `portfolio_session` cookie
/// 2. Resolve it via [`crate::application::services::AuthService::resolve`]
/// 3. Store the result as [`CurrentSession`] in request extensions
/// 4. Apply [`gate::decide`]:
///    - `/dashboard/**` without a session redirects to `/login`
///    - `/login` with a session redirects to `/dashboard`
///    - everything else continues to the handler
///
/// When the session was extended during lookup the cookie is re-issued on
/// the response. A cookie that no longer maps to a session is cleared.
///
/// # Errors
///
/// Backend failures while resolving are logged and the request is treated as
/// unauthenticated.
pub async fn layer(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let token = SessionCookie::read(req.headers());

    let resolved = match &token {
        Some(token) => match state.auth_service.resolve(token).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed");
                None
            }
        },
        None => None,
    };

    let decision = gate::decide(req.uri().path(), resolved.is_some());

    // Set-Cookie to attach to whatever response goes out
    let cookie_update: Option<HeaderValue> = match (&token, &resolved) {
        (Some(token), Some(r)) => r
            .refreshed
            .map(|expires_at| state.session_cookie.issue(token, expires_at)),
        (Some(_), None) => Some(state.session_cookie.clear()),
        _ => None,
    };

    let mut response = match decision {
        GateDecision::RedirectToLogin => {
            tracing::debug!(path = %req.uri().path(), "No session, redirecting to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
        GateDecision::RedirectToDashboard => Redirect::to(DASHBOARD_PATH).into_response(),
        GateDecision::PassThrough => {
            req.extensions_mut()
                .insert(CurrentSession(resolved.map(|r| r.session)));
            next.run(req).await
        }
    };

    if let Some(cookie) = cookie_update
        && !response.headers().contains_key(SET_COOKIE)
    {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }

    response
}

/// The session resolved by [`layer`] for this request, if any.
#[derive(Debug, Clone, Default)]
pub struct CurrentSession(pub Option<Session>);

impl<S: Send + Sync> FromRequestParts<S> for CurrentSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<CurrentSession>()
            .cloned()
            .unwrap_or_default())
    }
}

/// A signed-in administrator. Handlers taking this argument are only
/// reachable with a session; without one the request is sent to `/login`.
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

impl<S: Send + Sync> FromRequestParts<S> for AdminSession {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .and_then(|current| current.0.clone())
            .map(AdminSession)
            .ok_or_else(|| Redirect::to(LOGIN_PATH))
    }
}
