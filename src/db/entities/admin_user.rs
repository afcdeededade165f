use sea_orm::ActiveValue;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::dao::base_traits::{HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};

/// Access level of a backoffice account.
///
/// Stored as a short string so the same definition works on PostgreSQL and
/// SQLite. Only these two values are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminRole {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "AGENT")]
    Agent,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Admin => "ADMIN",
            AdminRole::Agent => "AGENT",
        }
    }
}

/// Backoffice account record.
///
/// `parent_id` tracks which account created an agent. It is expected to hold
/// another record's id, but no foreign key or cycle check exists at this
/// layer; hierarchy rules live with whichever component walks the tree.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "admin_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    /// Opaque credential digest. Hashing happens upstream; a plaintext
    /// password must never reach this table.
    pub password_hash: String,
    pub role: AdminRole,
    #[sea_orm(indexed)]
    pub parent_id: Option<Uuid>,
    #[sea_orm(default_value = true)]
    pub is_active: bool,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
}

impl ActiveModelBehavior for ActiveModel {}

impl HasIdActiveModel for ActiveModel {
    fn id_is_set(&self) -> bool {
        !matches!(self.id, ActiveValue::NotSet)
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = ActiveValue::Set(id);
    }
}

impl TimestampedActiveModel for ActiveModel {
    fn set_created_at(&mut self, ts: DateTimeWithTimeZone) {
        self.created_at = ActiveValue::Set(ts);
    }

    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone) {
        self.updated_at = ActiveValue::Set(ts);
    }
}

impl HasCreatedAtColumn for Entity {
    fn created_at_column() -> Column {
        Column::CreatedAt
    }
}

#[cfg(test)]
mod tests {
    use super::AdminRole;

    #[test]
    fn role_string_values() {
        assert_eq!(AdminRole::Admin.as_str(), "ADMIN");
        assert_eq!(AdminRole::Agent.as_str(), "AGENT");
    }

    #[test]
    fn role_serializes_as_stored_value() {
        let admin = serde_json::to_string(&AdminRole::Admin).expect("serialize role");
        assert_eq!(admin, "\"ADMIN\"");

        let agent: AdminRole = serde_json::from_str("\"AGENT\"").expect("deserialize role");
        assert_eq!(agent, AdminRole::Agent);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = serde_json::from_str::<AdminRole>("\"MANAGER\"");
        assert!(err.is_err());
    }
}
