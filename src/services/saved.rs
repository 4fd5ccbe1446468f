//! Saved-components service.
//!
//! Each organization keeps a flat set of saved component ids that the
//! dashboard uses to mark cards as saved. The set is assumed small, so the
//! lookup is unpaginated. Reads degrade like the listing façade (empty set
//! on failure); the save/unsave mutations surface their errors because the
//! caller needs to know a toggle did not stick.

use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum SavedError {
    #[error("component not found: {0}")]
    ComponentNotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Fetch the set of component ids an organization has saved. Never fails:
/// a backend read error is logged and degraded to the empty set.
pub async fn fetch_saved_component_ids(pool: &PgPool, organization: &str) -> HashSet<Uuid> {
    match query_saved_component_ids(pool, organization).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!(error = %e, organization, "saved-components query failed; returning empty set");
            HashSet::new()
        }
    }
}

pub(crate) async fn query_saved_component_ids(
    pool: &PgPool,
    organization: &str,
) -> Result<HashSet<Uuid>, sqlx::Error> {
    let rows = sqlx::query_scalar::<_, Uuid>(
        "SELECT component_id FROM saved_components WHERE organization = $1",
    )
    .bind(organization)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().collect())
}

/// Save a component for an organization. Idempotent: saving an already-saved
/// component is a no-op.
///
/// # Errors
///
/// Returns `ComponentNotFound` if the component does not exist, or a
/// database error if the write fails.
pub async fn save_component(
    pool: &PgPool,
    organization: &str,
    component_id: Uuid,
) -> Result<(), SavedError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM components WHERE id = $1)")
        .bind(component_id)
        .fetch_one(pool)
        .await?;
    if !exists {
        return Err(SavedError::ComponentNotFound(component_id));
    }

    sqlx::query(
        "INSERT INTO saved_components (organization, component_id) VALUES ($1, $2) \
         ON CONFLICT (organization, component_id) DO NOTHING",
    )
    .bind(organization)
    .bind(component_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a component from an organization's saved set. Idempotent: removing
/// a component that was never saved is a no-op.
///
/// # Errors
///
/// Returns a database error if the delete fails.
pub async fn unsave_component(
    pool: &PgPool,
    organization: &str,
    component_id: Uuid,
) -> Result<(), SavedError> {
    sqlx::query("DELETE FROM saved_components WHERE organization = $1 AND component_id = $2")
        .bind(organization)
        .bind(component_id)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
#[path = "saved_test.rs"]
mod tests;
