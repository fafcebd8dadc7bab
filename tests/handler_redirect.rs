mod common;

use sqlx::PgPool;

async fn rows(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool.clone()).await;
    common::create_short_link(&pool, "cv", "https://example.com/cv.pdf").await;

    let response = server.get("/cv").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/cv.pdf");
    assert_eq!(common::clicks(&pool, "cv").await, 1);
}

#[sqlx::test]
async fn test_redirect_unknown_slug_goes_home(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool).await;

    let response = server.get("/notfound").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "/");
}

#[sqlx::test]
async fn test_repeated_redirects_count_every_click(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool.clone()).await;
    common::create_short_link(&pool, "gh", "https://github.com/me").await;

    for _ in 0..5 {
        server.get("/gh").await;
    }

    assert_eq!(common::clicks(&pool, "gh").await, 5);
}

#[sqlx::test]
async fn test_reserved_paths_are_not_slugs(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool).await;

    let response = server.get("/login").await;

    response.assert_status_ok();
    assert!(response.text().contains("Sign in"));
}

#[sqlx::test]
async fn test_existing_count_is_incremented(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool.clone()).await;
    sqlx::query(
        "INSERT INTO short_links (slug, original_url, clicks) VALUES ('abc', 'https://example.com', 5)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let response = server.get("/abc").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");
    assert_eq!(common::clicks(&pool, "abc").await, 6);
}

#[sqlx::test]
async fn test_unknown_slug_writes_nothing(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool.clone()).await;
    common::create_short_link(&pool, "abc", "https://example.com").await;

    let before = rows(&pool).await;

    let response = server.get("/zzz").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "/");
    assert_eq!(rows(&pool).await, before);
    assert_eq!(common::clicks(&pool, "abc").await, 0);
}
