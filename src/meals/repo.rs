use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A meal as the rest of the crate sees it.
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub meal_time: OffsetDateTime,
    pub is_diet: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Row shape at the store boundary: the diet flag is a 0/1 integer there.
#[derive(Debug, FromRow)]
struct MealRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    description: String,
    meal_time: OffsetDateTime,
    is_diet: i16,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<MealRow> for Meal {
    fn from(r: MealRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            description: r.description,
            meal_time: r.meal_time,
            is_diet: r.is_diet != 0,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

fn diet_flag(is_diet: bool) -> i16 {
    i16::from(is_diet)
}

/// Insert a meal for the user with a fresh id; timestamps come from the
/// store clock.
pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    name: &str,
    description: &str,
    meal_time: OffsetDateTime,
    is_diet: bool,
) -> anyhow::Result<Uuid> {
    let meal_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO meals (id, user_id, name, description, meal_time, is_diet)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(meal_id)
    .bind(user_id)
    .bind(name)
    .bind(description)
    .bind(meal_time)
    .bind(diet_flag(is_diet))
    .execute(db)
    .await?;
    Ok(meal_id)
}

/// Replace the mutable fields of the meal matching both keys. Returns false
/// when no row matched; a wrong id and a foreign owner look the same.
pub async fn update(
    db: &PgPool,
    user_id: Uuid,
    meal_id: Uuid,
    name: &str,
    description: &str,
    meal_time: OffsetDateTime,
    is_diet: bool,
) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE meals
        SET name = $1, description = $2, meal_time = $3, is_diet = $4, updated_at = now()
        WHERE id = $5 AND user_id = $6
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(meal_time)
    .bind(diet_flag(is_diet))
    .bind(meal_id)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Hard-delete the meal matching both keys, under the same
/// indistinguishability rule as `update`.
pub async fn remove(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM meals
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(meal_id)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn get(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<Option<Meal>> {
    let row = sqlx::query_as::<_, MealRow>(
        r#"
        SELECT id, user_id, name, description, meal_time, is_diet, created_at, updated_at
        FROM meals
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(meal_id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(row.map(Meal::from))
}

/// All of the user's meals, ascending by meal time.
pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, MealRow>(
        r#"
        SELECT id, user_id, name, description, meal_time, is_diet, created_at, updated_at
        FROM meals
        WHERE user_id = $1
        ORDER BY meal_time
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows.into_iter().map(Meal::from).collect())
}

#[cfg(test)]
mod row_tests {
    use super::*;

    fn row(is_diet: i16) -> MealRow {
        MealRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "lunch".into(),
            description: "rice and beans".into(),
            meal_time: OffsetDateTime::UNIX_EPOCH,
            is_diet,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn diet_flag_maps_to_bool_and_back() {
        assert!(!Meal::from(row(0)).is_diet);
        assert!(Meal::from(row(1)).is_diet);

        assert_eq!(diet_flag(false), 0);
        assert_eq!(diet_flag(true), 1);
    }
}
