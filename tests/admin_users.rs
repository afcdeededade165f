use sea_orm::DatabaseConnection;
use uuid::Uuid;

use admin_directory::{
    config::DatabaseConfig,
    db::connection,
    db::entities::admin_user::AdminRole,
    error::AppError,
    services::{AdminUserService, ServiceContext},
};

// Every test gets a private in-memory database with the schema synced from
// the entity definitions, so constraint behavior below is the real thing.
async fn connect() -> DatabaseConnection {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 5,
        min_idle: 1,
    };
    connection::connect(&cfg).await.expect("connect and sync schema")
}

async fn admin_users() -> AdminUserService {
    let db = connect().await;
    ServiceContext::new(&db).admin_users()
}

#[tokio::test]
async fn create_defaults_role_to_agent_and_starts_active() {
    let service = admin_users().await;

    let account = service
        .create("agent@example.com", "opaque-hash", None, None)
        .await
        .expect("create should succeed");

    assert_eq!(account.role, AdminRole::Agent);
    assert!(account.is_active);
    assert!(account.parent_id.is_none());
    assert_ne!(account.id, Uuid::nil());
    assert_eq!(account.password_hash, "opaque-hash");
}

#[tokio::test]
async fn generated_ids_are_unique_per_record() {
    let service = admin_users().await;

    let first = service
        .create("first@example.com", "hash", None, None)
        .await
        .expect("first create should succeed");
    let second = service
        .create("second@example.com", "hash", None, None)
        .await
        .expect("second create should succeed");

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let service = admin_users().await;

    service
        .create("ops@example.com", "hash-1", None, None)
        .await
        .expect("first create should succeed");

    let err = service
        .create("ops@example.com", "hash-2", Some(AdminRole::Admin), None)
        .await
        .expect_err("second create with same email should fail");
    assert!(matches!(err, AppError::Conflict(_)));

    // the losing insert must not have replaced the original
    let stored = service
        .find_by_email("ops@example.com")
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(stored.password_hash, "hash-1");
}

#[tokio::test]
async fn explicit_role_round_trips_through_storage() {
    let service = admin_users().await;

    let created = service
        .create("root@example.com", "hash", Some(AdminRole::Admin), None)
        .await
        .expect("create should succeed");

    let loaded = service
        .find_by_id(&created.id)
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(loaded.role, AdminRole::Admin);
}

#[tokio::test]
async fn lifecycle_mutations_persist() {
    let service = admin_users().await;

    let admin = service
        .create("boss@example.com", "hash", Some(AdminRole::Admin), None)
        .await
        .expect("admin create should succeed");
    let agent = service
        .create("agent@example.com", "old-hash", None, None)
        .await
        .expect("agent create should succeed");

    service
        .set_parent(&agent.id, Some(admin.id))
        .await
        .expect("reparent should succeed");
    service
        .rotate_password_hash(&agent.id, "new-hash")
        .await
        .expect("rotation should succeed");
    service
        .set_role(&agent.id, AdminRole::Admin)
        .await
        .expect("promotion should succeed");
    let deactivated = service
        .set_active(&agent.id, false)
        .await
        .expect("deactivation should succeed");
    assert!(!deactivated.is_active);

    let stored = service
        .find_by_id(&agent.id)
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(stored.parent_id, Some(admin.id));
    assert_eq!(stored.password_hash, "new-hash");
    assert_eq!(stored.role, AdminRole::Admin);
    assert!(!stored.is_active);
    assert!(stored.updated_at >= stored.created_at);
}

#[tokio::test]
async fn mutating_a_missing_record_reports_not_found() {
    let service = admin_users().await;

    let err = service
        .set_active(&Uuid::new_v4(), false)
        .await
        .expect_err("mutating a missing record should fail");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let service = admin_users().await;

    let account = service
        .create("gone@example.com", "hash", None, None)
        .await
        .expect("create should succeed");

    service
        .delete(&account.id)
        .await
        .expect("delete should succeed");

    let lookup = service
        .find_by_id(&account.id)
        .await
        .expect("lookup should succeed");
    assert!(lookup.is_none());

    let err = service
        .delete(&account.id)
        .await
        .expect_err("second delete should fail");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn list_children_pages_through_an_agent_roster() {
    let service = admin_users().await;

    let admin = service
        .create("boss@example.com", "hash", Some(AdminRole::Admin), None)
        .await
        .expect("admin create should succeed");
    for n in 0..3 {
        service
            .create(&format!("agent{n}@example.com"), "hash", None, Some(admin.id))
            .await
            .expect("agent create should succeed");
    }

    let first_page = service
        .list_children(&admin.id, 1, 2)
        .await
        .expect("first page should succeed");
    assert_eq!(first_page.data.len(), 2);
    assert!(first_page.has_next);
    assert!(
        first_page
            .data
            .iter()
            .all(|account| account.parent_id == Some(admin.id))
    );

    let second_page = service
        .list_children(&admin.id, 2, 2)
        .await
        .expect("second page should succeed");
    assert_eq!(second_page.data.len(), 1);
    assert!(!second_page.has_next);
}

#[tokio::test]
async fn ensure_root_admin_is_idempotent() {
    let service = admin_users().await;

    let seeded = service
        .ensure_root_admin("root@example.com", "root-hash")
        .await
        .expect("first seeding should succeed");
    assert_eq!(seeded.role, AdminRole::Admin);
    assert!(seeded.parent_id.is_none());

    let again = service
        .ensure_root_admin("root@example.com", "other-hash")
        .await
        .expect("second seeding should succeed");
    assert_eq!(again.id, seeded.id);
    assert_eq!(again.password_hash, "root-hash");
}
