use async_trait::async_trait;

use crate::error::Result;
use crate::models::HealthProfile;

pub mod health_profile;
pub mod memory;

/// Create/read access to stored health profiles.
#[async_trait]
pub trait HealthProfileStore: Send + Sync {
    /// Inserts `profile` when it carries no id (or an id nothing is stored
    /// under), otherwise replaces every field of the stored record with
    /// that id. Returns the record as stored, id populated.
    async fn save(&self, profile: HealthProfile) -> Result<HealthProfile>;

    async fn find_by_id(&self, id: i64) -> Result<Option<HealthProfile>>;

    /// All stored profiles, ordered by id.
    async fn find_all(&self) -> Result<Vec<HealthProfile>>;
}
