use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::HealthProfileStore;
use crate::error::Result;
use crate::models::HealthProfile;

#[derive(Debug, Default)]
struct Rows {
    profiles: BTreeMap<i64, HealthProfile>,
    last_id: i64,
}

/// Process-local store with the same save semantics as the Postgres one.
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryHealthProfileStore {
    rows: RwLock<Rows>,
}

impl MemoryHealthProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HealthProfileStore for MemoryHealthProfileStore {
    async fn save(&self, profile: HealthProfile) -> Result<HealthProfile> {
        let mut rows = self.rows.write().await;

        let id = match profile.id {
            Some(id) if rows.profiles.contains_key(&id) => id,
            _ => {
                rows.last_id += 1;
                rows.last_id
            }
        };

        let stored = profile.with_id(id);
        rows.profiles.insert(id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HealthProfile>> {
        Ok(self.rows.read().await.profiles.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<HealthProfile>> {
        Ok(self.rows.read().await.profiles.values().cloned().collect())
    }
}
