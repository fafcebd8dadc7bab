//! Route protection rules for the dashboard.
//!
//! The decision is a pure function of the request path and whether a valid
//! session exists; [`crate::web::middleware::session_gate`] applies it.

/// Path visitors are sent to when they need to sign in.
pub const LOGIN_PATH: &str = "/login";

/// Landing path for signed-in administrators.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of the gate for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request through unchanged.
    PassThrough,
    /// Protected path without a session.
    RedirectToLogin,
    /// Login page requested while already signed in.
    RedirectToDashboard,
}

/// Returns true for `/dashboard` and everything below it.
pub fn requires_session(path: &str) -> bool {
    path == DASHBOARD_PATH
        || path
            .strip_prefix(DASHBOARD_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Decides what to do with a request.
pub fn decide(path: &str, authenticated: bool) -> GateDecision {
    if requires_session(path) && !authenticated {
        return GateDecision::RedirectToLogin;
    }

    if path == LOGIN_PATH && authenticated {
        return GateDecision::RedirectToDashboard;
    }

    GateDecision::PassThrough
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_requires_session() {
        assert_eq!(decide("/dashboard", false), GateDecision::RedirectToLogin);
        assert_eq!(
            decide("/dashboard/projects", false),
            GateDecision::RedirectToLogin
        );
        assert_eq!(
            decide("/dashboard/projects/1/delete", false),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_dashboard_with_session_passes() {
        assert_eq!(decide("/dashboard", true), GateDecision::PassThrough);
        assert_eq!(decide("/dashboard/content", true), GateDecision::PassThrough);
    }

    #[test]
    fn test_login_with_session_redirects() {
        assert_eq!(decide("/login", true), GateDecision::RedirectToDashboard);
        assert_eq!(decide("/login", false), GateDecision::PassThrough);
    }

    #[test]
    fn test_similar_prefixes_are_public() {
        assert_eq!(decide("/dashboards", false), GateDecision::PassThrough);
        assert_eq!(decide("/dashboard-promo", false), GateDecision::PassThrough);
        assert_eq!(decide("/login-help", true), GateDecision::PassThrough);
    }

    #[test]
    fn test_public_paths_pass() {
        assert_eq!(decide("/", false), GateDecision::PassThrough);
        assert_eq!(decide("/abc", false), GateDecision::PassThrough);
        assert_eq!(decide("/abc", true), GateDecision::PassThrough);
    }
}
