use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

/// A user's health profile: demographics, goal, activity level, optional
/// body metrics and lifestyle questionnaire answers.
///
/// Every field except `id` is free-form and nullable. `id` is assigned by
/// the store on first save and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    pub id: Option<i64>,

    pub gender: Option<String>,
    pub age: Option<i32>,
    /// Centimeters.
    pub height: Option<f64>,
    /// Kilograms.
    pub weight: Option<f64>,

    /// e.g. "fat-loss", "maintain".
    pub goal_type: Option<String>,
    /// Kilograms.
    pub target_weight: Option<f64>,
    /// Months.
    pub period: Option<i32>,

    /// sedentary / light / moderate / very-active, stored as given.
    pub activity_level: Option<String>,

    pub body_fat_rate: Option<f64>,
    /// Centimeters.
    pub waistline: Option<f64>,

    pub living_habits: Option<String>,
    pub sleep_quality: Option<String>,
    pub stress_level: Option<String>,
    pub diet_preference: Option<String>,
    pub allergens: Option<String>,
}

impl HealthProfile {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl<'r> FromRow<'r, PgRow> for HealthProfile {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get("id")?),
            gender: row.try_get("gender")?,
            age: row.try_get("age")?,
            height: row.try_get("height")?,
            weight: row.try_get("weight")?,
            goal_type: row.try_get("goal_type")?,
            target_weight: row.try_get("target_weight")?,
            period: row.try_get("period")?,
            activity_level: row.try_get("activity_level")?,
            body_fat_rate: row.try_get("body_fat_rate")?,
            waistline: row.try_get("waistline")?,
            living_habits: row.try_get("living_habits")?,
            sleep_quality: row.try_get("sleep_quality")?,
            stress_level: row.try_get("stress_level")?,
            diet_preference: row.try_get("diet_preference")?,
            allergens: row.try_get("allergens")?,
        })
    }
}
