//! Integration tests for the PostgreSQL repositories.
//!
//! Exercises the repository ports against a real database:
//! - Insert and read back users and reimbursements
//! - Unique constraint violations surface as persistence errors
//! - Unknown lookup keys and roles are rejected
//! - Filtering by status and type, listing by author
//!
//! Run with `DATABASE_URL` pointing at a disposable PostgreSQL server.

use assert_matches::assert_matches;
use chrono::Utc;
use ers_core::error::CoreError;
use ers_core::models::{Reimbursement, User};
use ers_core::repository::{ReimbursementRepository, UserRepository};
use ers_core::status::ReimbStatus;
use ers_db::repositories::RoleRepo;
use ers_db::{PgReimbursementRepository, PgUserRepository};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str, role: &str) -> User {
    User {
        id: 0,
        username: username.to_string(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: format!("{username}@example.com"),
        role: role.to_string(),
    }
}

fn new_reimb(author: &str, reimb_type: &str) -> Reimbursement {
    Reimbursement {
        amount: 48.75,
        submitted: Some(Utc::now()),
        description: format!("{reimb_type} expense"),
        author: author.to_string(),
        status: "pending".to_string(),
        reimb_type: reimb_type.to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_tables_are_seeded(pool: PgPool) {
    ers_db::health_check(&pool).await.unwrap();

    for role in ["admin", "manager", "employee"] {
        let id = RoleRepo::resolve_id(&pool, role).await.unwrap();
        assert!(id.is_some(), "{role} should be seeded");
    }
    assert_eq!(RoleRepo::resolve_id(&pool, "auditor").await.unwrap(), None);

    let statuses: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM reimbursement_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    let expected: Vec<(i16, String)> = [
        ReimbStatus::Pending,
        ReimbStatus::Approved,
        ReimbStatus::Denied,
    ]
    .into_iter()
    .map(|s| (s.id(), s.as_str().to_string()))
    .collect();
    assert_eq!(statuses, expected);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_save_and_lookup_round_trip(pool: PgPool) {
    let repo = PgUserRepository::new(pool);
    let saved = repo.save(&new_user("alice", "manager")).await.unwrap();
    assert!(saved.id > 0);

    let by_id = repo.get_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(by_id, saved);

    let by_email = repo
        .get_by_unique_key("email", "alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, saved.id);
    assert_eq!(by_email.role, "manager");

    assert!(repo.get_by_id(saved.id + 100).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_is_persistence_error(pool: PgPool) {
    let repo = PgUserRepository::new(pool);
    repo.save(&new_user("bob", "employee")).await.unwrap();

    let mut dup = new_user("bob", "employee");
    dup.email = "other@example.com".to_string();
    assert_matches!(repo.save(&dup).await, Err(CoreError::ResourcePersistence(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_role_and_key_are_bad_requests(pool: PgPool) {
    let repo = PgUserRepository::new(pool);
    assert_matches!(
        repo.save(&new_user("carol", "ceo")).await,
        Err(CoreError::BadRequest(_))
    );
    assert_matches!(
        repo.get_by_unique_key("password", "x").await,
        Err(CoreError::BadRequest(_))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_update_keeps_hash_when_password_empty(pool: PgPool) {
    let repo = PgUserRepository::new(pool);
    let saved = repo.save(&new_user("dave", "employee")).await.unwrap();

    let mut changed = saved.clone();
    changed.password = String::new();
    changed.last_name = "Renamed".to_string();
    changed.role = "manager".to_string();
    assert!(repo.update(&changed).await.unwrap());

    let reloaded = repo.get_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(reloaded.password, saved.password);
    assert_eq!(reloaded.last_name, "Renamed");
    assert_eq!(reloaded.role, "manager");

    let missing = User { id: saved.id + 100, ..changed };
    assert!(!repo.update(&missing).await.unwrap());
}

// ---------------------------------------------------------------------------
// Reimbursements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn reimbursement_save_update_and_filter(pool: PgPool) {
    let users = PgUserRepository::new(pool.clone());
    let author = users.save(&new_user("erin", "employee")).await.unwrap();
    let repo = PgReimbursementRepository::new(pool);

    let travel = repo.save(&new_reimb("erin", "travel")).await.unwrap();
    let food = repo.save(&new_reimb("erin", "food")).await.unwrap();
    assert_ne!(travel.id, food.id);

    let mut approved = travel.clone();
    approved.status = "approved".to_string();
    approved.resolver = Some("manager1".to_string());
    approved.resolved = Some(Utc::now());
    assert!(repo.update(&approved).await.unwrap());

    let reloaded = repo.get_by_id(travel.id).await.unwrap().unwrap();
    assert_eq!(reloaded.status, "approved");
    assert_eq!(reloaded.resolver.as_deref(), Some("manager1"));

    let pending = repo.filter(Some(ReimbStatus::Pending), None).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, food.id);

    let approved_travel = repo
        .filter(Some(ReimbStatus::Approved), Some("travel".to_string()))
        .await
        .unwrap();
    assert_eq!(approved_travel.len(), 1);

    let by_author = repo.get_by_author_id(author.id).await.unwrap();
    assert_eq!(by_author.len(), 2);

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
}
