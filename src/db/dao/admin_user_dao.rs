use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult, PaginatedResponse};
use crate::db::entities::admin_user::{self, AdminRole};
use crate::db::entities::prelude::AdminUser;

#[derive(Clone)]
pub struct AdminUserDao {
    db: DatabaseConnection,
}

impl DaoBase for AdminUserDao {
    type Entity = AdminUser;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl AdminUserDao {
    /// Inserts an account. Role falls back to `Agent` and the record starts
    /// active when the caller leaves those unspecified.
    pub async fn create_admin_user(
        &self,
        email: &str,
        password_hash: &str,
        role: Option<AdminRole>,
        parent_id: Option<Uuid>,
    ) -> DaoResult<admin_user::Model> {
        let model = admin_user::ActiveModel {
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            role: Set(role.unwrap_or(AdminRole::Agent)),
            parent_id: Set(parent_id),
            is_active: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<admin_user::Model>> {
        let email = email.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(admin_user::Column::Email.eq(email))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    pub async fn list(
        &self,
        page: u64,
        page_size: u64,
    ) -> DaoResult<PaginatedResponse<admin_user::Model>> {
        self.find(page, page_size, None, |query| query).await
    }

    /// Accounts whose parent_id equals the given id, oldest first. A flat
    /// one-level read; nothing here walks the hierarchy.
    pub async fn list_children(
        &self,
        parent_id: Uuid,
        page: u64,
        page_size: u64,
    ) -> DaoResult<PaginatedResponse<admin_user::Model>> {
        self.find(
            page,
            page_size,
            Some((admin_user::Column::CreatedAt, Order::Asc)),
            move |query| query.filter(admin_user::Column::ParentId.eq(parent_id)),
        )
        .await
    }

    pub async fn set_role(&self, id: Uuid, role: AdminRole) -> DaoResult<admin_user::Model> {
        self.update(id, move |active| {
            active.role = Set(role);
        })
        .await
    }

    pub async fn set_active(&self, id: Uuid, is_active: bool) -> DaoResult<admin_user::Model> {
        self.update(id, move |active| {
            active.is_active = Set(is_active);
        })
        .await
    }

    pub async fn set_parent(
        &self,
        id: Uuid,
        parent_id: Option<Uuid>,
    ) -> DaoResult<admin_user::Model> {
        self.update(id, move |active| {
            active.parent_id = Set(parent_id);
        })
        .await
    }

    pub async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> DaoResult<admin_user::Model> {
        let password_hash = password_hash.to_string();
        self.update(id, move |active| {
            active.password_hash = Set(password_hash);
        })
        .await
    }
}
