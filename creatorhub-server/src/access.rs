//! Vault access control and audit recording
//!
//! A principal may see a vault when they own it or hold the elevated role.
//! Reads by an elevated non-owner always append an access-log entry before
//! any vault data is returned; if that insert fails the read fails. Owner
//! reads are never logged, and denied reads leave no entry.

use creatorhub_common::db::{access_log, vaults, AccessLogEntry, Principal, Vault};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};

/// Safe view a denied client is sent back to
pub const VAULT_LIST_PATH: &str = "/vault/";

pub const VAULT_DENIED_MESSAGE: &str = "You do not have permission to access this vault.";

/// Outcome of the per-request access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Principal owns the vault
    Owner,
    /// Principal is elevated and does not own the vault
    Elevated,
    Denied,
}

impl AccessDecision {
    pub fn is_permitted(self) -> bool {
        !matches!(self, AccessDecision::Denied)
    }

    /// Whether the caller must write an access-log entry
    pub fn requires_audit(self) -> bool {
        matches!(self, AccessDecision::Elevated)
    }
}

/// Decide whether `principal` may read `vault`
///
/// Ownership wins over the elevated role, so an elevated owner reading
/// their own vault is an `Owner` access.
pub fn check_vault_access(principal: &Principal, vault: &Vault) -> AccessDecision {
    if vault.creator_id == principal.id {
        AccessDecision::Owner
    } else if principal.is_elevated() {
        AccessDecision::Elevated
    } else {
        AccessDecision::Denied
    }
}

/// A permitted vault read
#[derive(Debug, Clone)]
pub struct VaultRead {
    pub vault: Vault,
    pub decision: AccessDecision,
    /// Present exactly when the read was an elevated non-owner access
    pub audit_entry: Option<AccessLogEntry>,
}

/// Look up a vault, run the access check and record the audit entry
pub async fn read_vault(db: &SqlitePool, principal: &Principal, vault_id: i64) -> ApiResult<VaultRead> {
    let vault = vaults::find_vault(db, vault_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("vault {}", vault_id)))?;

    let decision = check_vault_access(principal, &vault);

    if !decision.is_permitted() {
        warn!(
            "Unauthorized access attempt by {} to vault {}.",
            principal.username, vault_id
        );
        return Err(ApiError::permission_denied(VAULT_DENIED_MESSAGE, VAULT_LIST_PATH));
    }

    let audit_entry = if decision.requires_audit() {
        let entry = access_log::record_access(db, principal.id, vault.id).await?;
        info!(
            "Admin {} accessed the vault {} of creator {}.",
            principal.username, vault.id, vault.creator_id
        );
        Some(entry)
    } else {
        None
    };

    Ok(VaultRead {
        vault,
        decision,
        audit_entry,
    })
}

/// Vaults visible to `principal`: everything when elevated, else their own
pub async fn visible_vaults(db: &SqlitePool, principal: &Principal) -> ApiResult<Vec<Vault>> {
    let vaults = if principal.is_elevated() {
        vaults::list_all_vaults(db).await?
    } else {
        vaults::list_vaults_for_creator(db, principal.id).await?
    };

    Ok(vaults)
}
