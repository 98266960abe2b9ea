//! Database schema, models and queries

pub mod access_log;
pub mod analytics;
pub mod automation;
pub mod creators;
pub mod fans;
pub mod init;
pub mod models;
pub mod onboarding;
pub mod recommendations;
pub mod schedules;
pub mod sessions;
pub mod suggestions;
pub mod vaults;

pub use init::{init_database, init_memory_database};
pub use models::*;
