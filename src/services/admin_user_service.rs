use uuid::Uuid;

use crate::{
    db::dao::{AdminUserDao, DaoBase, DaoLayerError, PaginatedResponse},
    db::entities::admin_user::{self, AdminRole},
    error::AppError,
};

/// Domain facade over the account DAO. Absent records come back as `None`
/// from the lookups; mutations on missing ids surface `AppError::NotFound`.
#[derive(Clone)]
pub struct AdminUserService {
    admin_user_dao: AdminUserDao,
}

impl AdminUserService {
    pub fn new(admin_user_dao: AdminUserDao) -> Self {
        Self { admin_user_dao }
    }

    /// Creates an account. Role defaults to `Agent` when unspecified and new
    /// accounts start active. A duplicate email is a conflict.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        role: Option<AdminRole>,
        parent_id: Option<Uuid>,
    ) -> Result<admin_user::Model, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::bad_request("email required"));
        }
        if password_hash.is_empty() {
            return Err(AppError::bad_request("password hash required"));
        }

        Ok(self
            .admin_user_dao
            .create_admin_user(email, password_hash, role, parent_id)
            .await?)
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<admin_user::Model>, AppError> {
        match self.admin_user_dao.find_by_id(*id).await {
            Ok(model) => Ok(Some(model)),
            Err(DaoLayerError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<admin_user::Model>, AppError> {
        Ok(self.admin_user_dao.find_by_email(email).await?)
    }

    pub async fn list(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<PaginatedResponse<admin_user::Model>, AppError> {
        Ok(self.admin_user_dao.list(page, page_size).await?)
    }

    pub async fn list_children(
        &self,
        parent_id: &Uuid,
        page: u64,
        page_size: u64,
    ) -> Result<PaginatedResponse<admin_user::Model>, AppError> {
        Ok(self
            .admin_user_dao
            .list_children(*parent_id, page, page_size)
            .await?)
    }

    pub async fn set_role(
        &self,
        id: &Uuid,
        role: AdminRole,
    ) -> Result<admin_user::Model, AppError> {
        Ok(self.admin_user_dao.set_role(*id, role).await?)
    }

    pub async fn set_active(
        &self,
        id: &Uuid,
        is_active: bool,
    ) -> Result<admin_user::Model, AppError> {
        Ok(self.admin_user_dao.set_active(*id, is_active).await?)
    }

    pub async fn set_parent(
        &self,
        id: &Uuid,
        parent_id: Option<Uuid>,
    ) -> Result<admin_user::Model, AppError> {
        Ok(self.admin_user_dao.set_parent(*id, parent_id).await?)
    }

    pub async fn rotate_password_hash(
        &self,
        id: &Uuid,
        password_hash: &str,
    ) -> Result<admin_user::Model, AppError> {
        if password_hash.is_empty() {
            return Err(AppError::bad_request("password hash required"));
        }
        Ok(self
            .admin_user_dao
            .update_password_hash(*id, password_hash)
            .await?)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        self.admin_user_dao.delete(*id).await?;
        Ok(())
    }

    /// Idempotent seeding of the root ADMIN account: returns the existing
    /// record when the email is already taken, otherwise creates it with no
    /// parent.
    pub async fn ensure_root_admin(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<admin_user::Model, AppError> {
        if let Some(existing) = self.find_by_email(email).await? {
            tracing::info!("root admin already present: {}", existing.email);
            return Ok(existing);
        }

        let admin = self
            .create(email, password_hash, Some(AdminRole::Admin), None)
            .await?;
        tracing::info!("seeded root admin {}", admin.email);
        Ok(admin)
    }
}
