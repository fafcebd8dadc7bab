mod common;

use sqlx::PgPool;

#[sqlx::test]
async fn test_health_check_healthy(pool: PgPool) {
    let (server, _state) = common::create_test_server(pool).await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json: serde_json::Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert!(json["version"].is_string());
}
