//! PostgreSQL store implementation
//!
//! Maps the Exercise entity onto the `exercises` table.
//!
//! This module uses dynamic queries (sqlx::query) instead of compile-time
//! checked macros (sqlx::query!) to allow compilation without DATABASE_URL.

use crate::error::StoreError;
use crate::repository::ExerciseRepository;
use async_trait::async_trait;
use reptrack_domain::{Exercise, ExerciseFields, ExerciseFilter, WeightUnit};
use reptrack_domain::{ExerciseName, Reps, Weight, WorkoutDate};
use sqlx::{PgPool, Row};
use tracing::debug;
use uuid::Uuid;

/// PostgreSQL-backed exercise store.
///
/// Owns the connection pool it is constructed with; pool lifecycle
/// (connect at startup, close at shutdown) is the daemon's concern.
pub struct PgExerciseStore {
    pool: PgPool,
}

impl PgExerciseStore {
    /// Create a new PostgreSQL exercise store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing).
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Decode one `exercises` row back into the domain.
///
/// Stored values were validated on the way in, so a decode failure here
/// means the table was modified out of band.
fn parse_exercise_row(row: &sqlx::postgres::PgRow) -> Result<Exercise, StoreError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| StoreError::Deserialization(format!("Failed to read id: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| StoreError::Deserialization(format!("Failed to read name: {}", e)))?;
    let reps: i32 = row
        .try_get("reps")
        .map_err(|e| StoreError::Deserialization(format!("Failed to read reps: {}", e)))?;
    let weight: i32 = row
        .try_get("weight")
        .map_err(|e| StoreError::Deserialization(format!("Failed to read weight: {}", e)))?;
    let unit: String = row
        .try_get("unit")
        .map_err(|e| StoreError::Deserialization(format!("Failed to read unit: {}", e)))?;
    let date: String = row
        .try_get("date")
        .map_err(|e| StoreError::Deserialization(format!("Failed to read date: {}", e)))?;

    let fields = ExerciseFields::new(
        ExerciseName::new(name)
            .map_err(|e| StoreError::Deserialization(format!("Invalid stored name: {}", e)))?,
        Reps::new(reps)
            .map_err(|e| StoreError::Deserialization(format!("Invalid stored reps: {}", e)))?,
        Weight::new(weight)
            .map_err(|e| StoreError::Deserialization(format!("Invalid stored weight: {}", e)))?,
        unit.parse::<WeightUnit>()
            .map_err(|e| StoreError::Deserialization(format!("Invalid stored unit: {}", e)))?,
        WorkoutDate::new(date)
            .map_err(|e| StoreError::Deserialization(format!("Invalid stored date: {}", e)))?,
    );

    Ok(Exercise::from_fields(id, fields))
}

#[async_trait]
impl ExerciseRepository for PgExerciseStore {
    async fn create(&self, fields: &ExerciseFields) -> Result<Exercise, StoreError> {
        let exercise = Exercise::from_fields(Uuid::now_v7(), fields.clone());

        sqlx::query(
            r#"
            INSERT INTO exercises (id, name, reps, weight, unit, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(exercise.id)
        .bind(exercise.name.as_str())
        .bind(exercise.reps.get())
        .bind(exercise.weight.get())
        .bind(exercise.unit.as_str())
        .bind(exercise.date.as_str())
        .execute(&self.pool)
        .await?;

        debug!(id = %exercise.id, "Inserted exercise");
        Ok(exercise)
    }

    async fn find(
        &self,
        filter: &ExerciseFilter,
        limit: i64,
    ) -> Result<Vec<Exercise>, StoreError> {
        // v7 ids are time-ordered, so ORDER BY id is insertion order.
        // NULLIF turns limit 0 into LIMIT NULL (no cap).
        let rows = match filter.reps {
            Some(reps) => {
                sqlx::query(
                    r#"
                    SELECT id, name, reps, weight, unit, date
                    FROM exercises
                    WHERE reps = $1
                    ORDER BY id ASC
                    LIMIT NULLIF($2, 0)
                    "#,
                )
                .bind(reps)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            },
            None => {
                sqlx::query(
                    r#"
                    SELECT id, name, reps, weight, unit, date
                    FROM exercises
                    ORDER BY id ASC
                    LIMIT NULLIF($1, 0)
                    "#,
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            },
        };

        rows.iter().map(parse_exercise_row).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Exercise>, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let row = sqlx::query(
            r#"
            SELECT id, name, reps, weight, unit, date
            FROM exercises
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(parse_exercise_row).transpose()
    }

    async fn replace(&self, id: &str, fields: &ExerciseFields) -> Result<u64, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(0);
        };

        let result = sqlx::query(
            r#"
            UPDATE exercises
            SET name = $2, reps = $3, weight = $4, unit = $5, date = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(fields.name.as_str())
        .bind(fields.reps.get())
        .bind(fields.weight.get())
        .bind(fields.unit.as_str())
        .bind(fields.date.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(0);
        };

        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
