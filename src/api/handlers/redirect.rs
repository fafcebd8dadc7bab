//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::{debug, error};

use crate::state::AppState;

/// Where visitors land when a slug does not resolve.
pub const FALLBACK_PATH: &str = "/";

/// Redirects a slug to its destination, counting the click.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Request Flow
///
/// 1. Increment the slug's click counter and fetch its URL (one statement)
/// 2. Return 307 Temporary Redirect to the URL
///
/// # Fallback
///
/// Unknown slugs and backend failures both redirect to `/`, so visitors
/// never see an error page. The two cases are distinguished in logs and in
/// the `redirects_total{outcome}` counter: `hit`, `miss` or `error`.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Redirect {
    match state.short_link_service.resolve(&slug).await {
        Ok(Some(url)) => {
            metrics::counter!("redirects_total", "outcome" => "hit").increment(1);
            debug!(slug = %slug, "Redirecting");
            Redirect::temporary(&url)
        }
        Ok(None) => {
            metrics::counter!("redirects_total", "outcome" => "miss").increment(1);
            debug!(slug = %slug, "Unknown slug");
            Redirect::temporary(FALLBACK_PATH)
        }
        Err(e) => {
            metrics::counter!("redirects_total", "outcome" => "error").increment(1);
            error!(slug = %slug, error = %e, "Failed to resolve slug");
            Redirect::temporary(FALLBACK_PATH)
        }
    }
}
