use sea_orm::DatabaseConnection;

use crate::{db::dao::DaoContext, services::admin_user_service::AdminUserService};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn admin_users(&self) -> AdminUserService {
        AdminUserService::new(self.daos.admin_users())
    }
}
