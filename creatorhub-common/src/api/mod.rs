//! API module for shared HTTP API functionality
//!
//! This module contains ONLY pure functions and shared types. The server
//! wraps them with framework-specific middleware (Axum).

pub mod auth;

pub use auth::{bearer_token, generate_session_token, hash_session_token};
