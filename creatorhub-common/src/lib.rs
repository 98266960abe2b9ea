//! # CreatorHub Common Library
//!
//! Shared code for the CreatorHub server and its tooling:
//! - Database schema, models and per-entity queries
//! - Session token helpers
//! - Configuration loading
//! - Error types

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
