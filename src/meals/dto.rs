use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::meals::repo::Meal;
use crate::meals::services::DietSummary;

/// Request body for creating or replacing a meal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealBody {
    pub name: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub meal_time: OffsetDateTime,
    pub is_diet: bool,
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Meal,
}

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<Meal>,
}

/// Summary payload. `bestOnDietSequence` goes out as a string, the wire
/// format clients already parse.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub meals_quantity: usize,
    pub meals_on_diet_quantity: usize,
    pub meals_off_diet_quantity: usize,
    pub best_on_diet_sequence: String,
}

impl From<DietSummary> for SummaryResponse {
    fn from(s: DietSummary) -> Self {
        Self {
            meals_quantity: s.total,
            meals_on_diet_quantity: s.on_diet,
            meals_off_diet_quantity: s.off_diet,
            best_on_diet_sequence: s.best_streak.to_string(),
        }
    }
}
