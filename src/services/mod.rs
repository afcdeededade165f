pub mod admin_user_service;
pub mod context;

pub use admin_user_service::AdminUserService;
pub use context::ServiceContext;
