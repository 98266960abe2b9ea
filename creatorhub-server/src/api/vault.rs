//! Vault endpoints
//!
//! - `GET /vault/` lists visible vaults
//! - `POST /vault/` registers a vault from a stored-file reference
//! - `GET /vault/:vault_id/` reads one vault (owner or elevated)
//! - `GET|POST /admin/vault/:vault_id/` elevated-only read

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use creatorhub_common::db::{vaults, AccessLogEntry, Principal, Vault};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::access::{self, VAULT_DENIED_MESSAGE, VAULT_LIST_PATH};
use crate::api::forms::require_field;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

pub const VAULT_ACCESS_MESSAGE: &str = "Successfully accessed the creator vault.";

#[derive(Debug, Serialize)]
pub struct VaultListResponse {
    pub vaults: Vec<Vault>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateVaultRequest {
    /// Reference returned by the storage backend
    pub content_file: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CreateVaultResponse {
    pub message: String,
    pub vault: Vault,
}

#[derive(Debug, Serialize)]
pub struct VaultReadResponse {
    pub message: String,
    pub vault: Vault,
    /// Set when this read was recorded in the access log
    pub access_log_entry: Option<AccessLogEntry>,
}

/// GET /vault/
pub async fn list_vaults(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Json<VaultListResponse>> {
    let vaults = access::visible_vaults(&state.db, &principal).await?;

    info!("User {} accessed their vaults.", principal.username);

    Ok(Json(VaultListResponse { vaults }))
}

/// POST /vault/
pub async fn create_vault(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    payload: Option<Json<CreateVaultRequest>>,
) -> ApiResult<(StatusCode, Json<CreateVaultResponse>)> {
    let form = payload.map(|Json(form)| form).unwrap_or_default();
    let content_file = require_field(form.content_file, "content_file", VAULT_LIST_PATH)?;
    let is_public = form.is_public.unwrap_or(false);

    let vault = vaults::create_vault(&state.db, principal.id, &content_file, is_public).await?;

    info!(
        "User {} created vault {} ({}).",
        principal.username,
        vault.id,
        if is_public { "public" } else { "private" }
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateVaultResponse {
            message: "Vault created successfully.".to_string(),
            vault,
        }),
    ))
}

/// GET /vault/:vault_id/
pub async fn read_vault(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(vault_id): Path<i64>,
) -> ApiResult<Json<VaultReadResponse>> {
    let read = access::read_vault(&state.db, &principal, vault_id).await?;

    info!("User {} read vault {}.", principal.username, vault_id);

    Ok(Json(VaultReadResponse {
        message: VAULT_ACCESS_MESSAGE.to_string(),
        vault: read.vault,
        access_log_entry: read.audit_entry,
    }))
}

/// GET|POST /admin/vault/:vault_id/
///
/// Non-elevated principals are refused before the vault is looked up.
pub async fn admin_read_vault(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(vault_id): Path<i64>,
) -> ApiResult<Json<VaultReadResponse>> {
    if !principal.is_elevated() {
        warn!(
            "Unauthorized access attempt by {} to vault {}.",
            principal.username, vault_id
        );
        return Err(ApiError::permission_denied(VAULT_DENIED_MESSAGE, VAULT_LIST_PATH));
    }

    let read = access::read_vault(&state.db, &principal, vault_id).await?;
    if read.audit_entry.is_none() {
        info!("Admin {} read their own vault {}.", principal.username, vault_id);
    }

    Ok(Json(VaultReadResponse {
        message: VAULT_ACCESS_MESSAGE.to_string(),
        vault: read.vault,
        access_log_entry: read.audit_entry,
    }))
}
