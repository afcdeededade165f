pub mod admin_user_dao;
pub mod base;
pub mod base_traits;
mod context;
pub mod error;

pub use admin_user_dao::AdminUserDao;
pub use base::{DaoBase, PaginatedResponse};
pub use base_traits::{HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
