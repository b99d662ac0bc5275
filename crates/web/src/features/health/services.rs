use storage::{HealthProfile, HealthProfileStore, error::Result};

/// Create or fully replace a profile
pub async fn save_health_profile(
    store: &dyn HealthProfileStore,
    profile: HealthProfile,
) -> Result<HealthProfile> {
    let stored = store.save(profile).await?;
    tracing::debug!(id = ?stored.id, "Health profile saved");
    Ok(stored)
}

/// List all profiles
pub async fn list_health_profiles(store: &dyn HealthProfileStore) -> Result<Vec<HealthProfile>> {
    store.find_all().await
}

/// Get a profile by id
pub async fn get_health_profile(
    store: &dyn HealthProfileStore,
    id: i64,
) -> Result<Option<HealthProfile>> {
    store.find_by_id(id).await
}
