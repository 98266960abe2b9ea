//! HTTP API handlers for creatorhub-server

pub mod analytics;
pub mod auth;
pub mod automation;
pub mod fans;
pub mod forms;
pub mod health;
pub mod onboarding;
pub mod recommendations;
pub mod scheduling;
pub mod suggestions;
pub mod vault;

pub use analytics::analytics_dashboard;
pub use auth::auth_middleware;
pub use automation::{automation_form, create_automation_flow};
pub use fans::fan_management_dashboard;
pub use health::health_routes;
pub use onboarding::{complete_onboarding, onboarding_status};
pub use recommendations::{create_recommendation, recommendation_form};
pub use scheduling::{content_scheduling_form, schedule_content};
pub use suggestions::{action_suggestion_form, create_action_suggestion};
pub use vault::{admin_read_vault, create_vault, list_vaults, read_vault};
