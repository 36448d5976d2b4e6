//! Persistence layer modules.

pub mod db;
pub mod message_repo;
pub mod project_repo;
pub mod schema;
pub mod task_repo;
pub mod team_repo;
pub mod user_repo;

/// Re-export the database pool type for convenience.
pub use sqlx::SqlitePool;
