use async_trait::async_trait;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;
use sqlx::PgPool;

use super::HealthProfileStore;
use crate::error::Result;
use crate::models::HealthProfile;

type ProfileQuery<'q> = QueryAs<'q, Postgres, HealthProfile, PgArguments>;

pub struct PgHealthProfileStore {
    pool: PgPool,
}

impl PgHealthProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Binds every non-id column in schema order.
fn bind_fields<'q>(query: ProfileQuery<'q>, profile: &'q HealthProfile) -> ProfileQuery<'q> {
    query
        .bind(&profile.gender)
        .bind(profile.age)
        .bind(profile.height)
        .bind(profile.weight)
        .bind(&profile.goal_type)
        .bind(profile.target_weight)
        .bind(profile.period)
        .bind(&profile.activity_level)
        .bind(profile.body_fat_rate)
        .bind(profile.waistline)
        .bind(&profile.living_habits)
        .bind(&profile.sleep_quality)
        .bind(&profile.stress_level)
        .bind(&profile.diet_preference)
        .bind(&profile.allergens)
}

#[async_trait]
impl HealthProfileStore for PgHealthProfileStore {
    async fn save(&self, profile: HealthProfile) -> Result<HealthProfile> {
        let mut tx = self.pool.begin().await?;

        let replaced = match profile.id {
            Some(id) => {
                let query = sqlx::query_as::<_, HealthProfile>(
                    r#"
                    UPDATE user_health_info
                    SET gender = $2,
                        age = $3,
                        height = $4,
                        weight = $5,
                        goal_type = $6,
                        target_weight = $7,
                        period = $8,
                        activity_level = $9,
                        body_fat_rate = $10,
                        waistline = $11,
                        living_habits = $12,
                        sleep_quality = $13,
                        stress_level = $14,
                        diet_preference = $15,
                        allergens = $16
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id);

                bind_fields(query, &profile)
                    .fetch_optional(&mut *tx)
                    .await?
            }
            None => None,
        };

        let stored = match replaced {
            Some(stored) => stored,
            None => {
                // Unknown ids are not honoured; the identity column assigns one.
                let query = sqlx::query_as::<_, HealthProfile>(
                    r#"
                    INSERT INTO user_health_info (
                        gender, age, height, weight,
                        goal_type, target_weight, period,
                        activity_level,
                        body_fat_rate, waistline,
                        living_habits, sleep_quality, stress_level, diet_preference, allergens
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
                    RETURNING *
                    "#,
                );

                bind_fields(query, &profile).fetch_one(&mut *tx).await?
            }
        };

        tx.commit().await?;

        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HealthProfile>> {
        let profile = sqlx::query_as::<_, HealthProfile>(
            "SELECT * FROM user_health_info WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn find_all(&self) -> Result<Vec<HealthProfile>> {
        let profiles =
            sqlx::query_as::<_, HealthProfile>("SELECT * FROM user_health_info ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(profiles)
    }
}
