mod common;

use sqlx::PgPool;

#[sqlx::test]
async fn test_dashboard_redirects_anonymous_visitors(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool).await;

    for path in ["/dashboard", "/dashboard/content", "/dashboard/profile"] {
        let response = server.get(path).await;

        assert_eq!(response.status_code(), 303, "{}", path);
        assert_eq!(response.header("location"), "/login");
    }
}

#[sqlx::test]
async fn test_dashboard_actions_redirect_anonymous_visitors(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool.clone()).await;

    let response = server
        .post("/dashboard/short-links")
        .form(&[("slug", "sneaky"), ("url", "https://example.com")])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/login");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_public_pages_need_no_session(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool).await;

    server.get("/").await.assert_status_ok();
    server.get("/login").await.assert_status_ok();
}

#[sqlx::test]
async fn test_login_then_dashboard(pool: PgPool) {
    let (server, state) = common::create_test_server(pool).await;
    let cookie = common::login(&server, &state).await;

    let response = server.get("/dashboard").add_header("Cookie", cookie).await;

    response.assert_status_ok();
    assert!(response.text().contains(common::ADMIN_EMAIL));
}

#[sqlx::test]
async fn test_login_page_redirects_signed_in_admin(pool: PgPool) {
    let (server, state) = common::create_test_server(pool).await;
    let cookie = common::login(&server, &state).await;

    let response = server.get("/login").add_header("Cookie", cookie).await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/dashboard");
}

#[sqlx::test]
async fn test_login_sets_http_only_cookie(pool: PgPool) {
    let (server, state) = common::create_test_server(pool).await;
    state
        .auth_service
        .create_user(common::ADMIN_EMAIL, common::ADMIN_PASSWORD)
        .await
        .unwrap();

    let response = server
        .post("/login")
        .form(&[
            ("email", common::ADMIN_EMAIL),
            ("password", common::ADMIN_PASSWORD),
        ])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/dashboard");

    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with("portfolio_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
}

#[sqlx::test]
async fn test_login_wrong_password(pool: PgPool) {
    let (server, state) = common::create_test_server(pool).await;
    state
        .auth_service
        .create_user(common::ADMIN_EMAIL, common::ADMIN_PASSWORD)
        .await
        .unwrap();

    let response = server
        .post("/login")
        .form(&[("email", common::ADMIN_EMAIL), ("password", "wrong-password")])
        .await;

    response.assert_status_unauthorized();
    assert!(response.text().contains("Invalid login credentials"));
}

#[sqlx::test]
async fn test_unknown_cookie_is_rejected_and_cleared(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool).await;

    let response = server
        .get("/dashboard")
        .add_header("Cookie", "portfolio_session=forged-token")
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/login");
    let set_cookie = response.header("set-cookie");
    assert!(set_cookie.to_str().unwrap().contains("Max-Age=0"));
}

#[sqlx::test]
async fn test_logout_ends_session(pool: PgPool) {
    let (server, state) = common::create_test_server(pool).await;
    let cookie = common::login(&server, &state).await;

    let response = server.post("/logout").add_header("Cookie", cookie.clone()).await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/login");

    let response = server.get("/dashboard").add_header("Cookie", cookie).await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/login");
}
