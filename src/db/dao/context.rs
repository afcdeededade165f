use sea_orm::DatabaseConnection;

use super::{AdminUserDao, DaoBase};

/// One handle that builds entity DAOs from a shared connection.
#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn admin_users(&self) -> AdminUserDao {
        DaoBase::new(&self.db)
    }
}
