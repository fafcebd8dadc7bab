use chrono::{Duration, Utc};
use portfolio_site::domain::entities::NewSession;
use portfolio_site::domain::repositories::AuthRepository;
use portfolio_site::error::AppError;
use portfolio_site::infrastructure::persistence::PgAuthRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn session(token_hash: &str, user_id: i64, expires_in: Duration) -> NewSession {
    NewSession {
        token_hash: token_hash.to_string(),
        user_id,
        user_agent: Some("TestBot/1.0".to_string()),
        expires_at: Utc::now() + expires_in,
    }
}

#[sqlx::test]
async fn test_create_and_find_user(pool: PgPool) {
    let repo = PgAuthRepository::new(Arc::new(pool));

    let user = repo.create_user("me@example.com", "hash").await.unwrap();
    let found = repo.find_user_by_email("me@example.com").await.unwrap();

    assert_eq!(found.unwrap().id, user.id);
    assert!(repo.find_user_by_email("other@example.com").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_email_conflicts(pool: PgPool) {
    let repo = PgAuthRepository::new(Arc::new(pool));

    repo.create_user("me@example.com", "hash").await.unwrap();
    let result = repo.create_user("me@example.com", "hash2").await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_find_session_with_email(pool: PgPool) {
    let repo = PgAuthRepository::new(Arc::new(pool));
    let user = repo.create_user("me@example.com", "hash").await.unwrap();

    repo.create_session(session("live", user.id, Duration::hours(1)))
        .await
        .unwrap();

    let found = repo.find_session("live").await.unwrap().unwrap();
    assert_eq!(found.user_id, user.id);
    assert_eq!(found.email, "me@example.com");
}

#[sqlx::test]
async fn test_expired_session_not_found(pool: PgPool) {
    let repo = PgAuthRepository::new(Arc::new(pool));
    let user = repo.create_user("me@example.com", "hash").await.unwrap();

    repo.create_session(session("old", user.id, Duration::hours(-1)))
        .await
        .unwrap();

    assert!(repo.find_session("old").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_extend_session(pool: PgPool) {
    let repo = PgAuthRepository::new(Arc::new(pool));
    let user = repo.create_user("me@example.com", "hash").await.unwrap();
    repo.create_session(session("tok", user.id, Duration::minutes(5)))
        .await
        .unwrap();

    let later = Utc::now() + Duration::hours(10);
    repo.extend_session("tok", later).await.unwrap();

    let found = repo.find_session("tok").await.unwrap().unwrap();
    assert!(found.expires_at > Utc::now() + Duration::hours(9));
}

#[sqlx::test]
async fn test_delete_expired_sessions(pool: PgPool) {
    let repo = PgAuthRepository::new(Arc::new(pool));
    let user = repo.create_user("me@example.com", "hash").await.unwrap();

    repo.create_session(session("old1", user.id, Duration::hours(-2)))
        .await
        .unwrap();
    repo.create_session(session("old2", user.id, Duration::minutes(-1)))
        .await
        .unwrap();
    repo.create_session(session("live", user.id, Duration::hours(1)))
        .await
        .unwrap();

    assert_eq!(repo.delete_expired_sessions().await.unwrap(), 2);
    assert!(repo.find_session("live").await.unwrap().is_some());
}

#[sqlx::test]
async fn test_update_password_ends_sessions(pool: PgPool) {
    let repo = PgAuthRepository::new(Arc::new(pool));
    let user = repo.create_user("me@example.com", "hash").await.unwrap();
    repo.create_session(session("tok", user.id, Duration::hours(1)))
        .await
        .unwrap();

    assert!(repo.update_password("me@example.com", "new-hash").await.unwrap());
    assert!(repo.find_session("tok").await.unwrap().is_none());

    let stored = repo.find_user_by_email("me@example.com").await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    assert!(!repo.update_password("nobody@example.com", "x").await.unwrap());
}

#[sqlx::test]
async fn test_delete_user_cascades_sessions(pool: PgPool) {
    let repo = PgAuthRepository::new(Arc::new(pool));
    let user = repo.create_user("me@example.com", "hash").await.unwrap();
    repo.create_session(session("tok", user.id, Duration::hours(1)))
        .await
        .unwrap();

    assert!(repo.delete_user("me@example.com").await.unwrap());
    assert!(repo.find_session("tok").await.unwrap().is_none());
    assert!(repo.list_users().await.unwrap().is_empty());
}
