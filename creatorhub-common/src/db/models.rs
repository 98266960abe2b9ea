//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

/// Role held by a creator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Standard,
    Elevated,
}

impl Role {
    pub fn from_flag(is_elevated: bool) -> Self {
        if is_elevated {
            Role::Elevated
        } else {
            Role::Standard
        }
    }

    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Elevated)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Creator {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_elevated: bool,
    pub created_at: DateTime<Utc>,
}

impl Creator {
    pub fn role(&self) -> Role {
        Role::from_flag(self.is_elevated)
    }
}

/// Authenticated identity attached to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl Principal {
    pub fn is_elevated(&self) -> bool {
        self.role.is_elevated()
    }
}

impl From<Creator> for Principal {
    fn from(creator: Creator) -> Self {
        let role = creator.role();
        Self {
            id: creator.id,
            username: creator.username,
            role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vault {
    pub id: i64,
    pub creator_id: i64,
    pub content_file: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccessLogEntry {
    pub id: i64,
    pub admin_id: i64,
    pub vault_id: i64,
    pub access_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fan {
    pub id: i64,
    pub creator_id: i64,
    pub fan_name: String,
    /// Freeform interaction data
    pub fan_data: Json<Value>,
    pub segment: String,
    pub last_interaction: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActionSuggestion {
    pub id: i64,
    pub creator_id: i64,
    pub action_description: String,
    pub projected_outcome: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalyticsSnapshot {
    pub id: i64,
    pub creator_id: i64,
    pub engagement_rate: f64,
    pub fan_growth: i64,
    pub revenue: f64,
    pub content_performance: Json<Value>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AutomationFlow {
    pub id: i64,
    pub creator_id: i64,
    pub trigger_event: String,
    pub action_taken: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentSchedule {
    pub id: i64,
    pub creator_id: i64,
    /// Stored-file reference handed over by the storage backend
    pub content: String,
    /// Caller-supplied, kept verbatim
    pub schedule_time: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OnboardingStatus {
    pub creator_id: i64,
    pub onboarding_complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recommendation {
    pub id: i64,
    pub creator_id: i64,
    pub recommendation: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_from_creator_carries_role() {
        let creator = Creator {
            id: 3,
            username: "mona".to_string(),
            email: "mona@example.com".to_string(),
            is_elevated: true,
            created_at: Utc::now(),
        };

        let principal = Principal::from(creator);
        assert_eq!(principal.id, 3);
        assert_eq!(principal.role, Role::Elevated);
        assert!(principal.is_elevated());
    }

    #[test]
    fn test_role_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Standard).unwrap(), "\"standard\"");
        assert_eq!(serde_json::to_string(&Role::Elevated).unwrap(), "\"elevated\"");
    }
}
