//! In-memory store implementation
//!
//! Used for testing and development without a database.
//! Thread-safe using RwLock for concurrent access.

use crate::error::StoreError;
use crate::repository::ExerciseRepository;
use async_trait::async_trait;
use reptrack_domain::{Exercise, ExerciseFields, ExerciseFilter};
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory exercise store.
///
/// Records are kept in insertion order, so unfiltered listings come back
/// oldest first, matching the id-ordered listings of the SQL backend.
pub struct MemoryExerciseStore {
    exercises: RwLock<Vec<Exercise>>,
}

impl MemoryExerciseStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            exercises: RwLock::new(Vec::new()),
        }
    }

    /// Get the number of stored records
    pub fn exercise_count(&self) -> usize {
        self.exercises.read().unwrap().len()
    }

    /// Clear all data (useful for test setup)
    pub fn clear(&self) {
        self.exercises.write().unwrap().clear();
    }
}

impl Default for MemoryExerciseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExerciseRepository for MemoryExerciseStore {
    async fn create(&self, fields: &ExerciseFields) -> Result<Exercise, StoreError> {
        let exercise = Exercise::from_fields(Uuid::now_v7(), fields.clone());
        self.exercises.write().unwrap().push(exercise.clone());
        Ok(exercise)
    }

    async fn find(
        &self,
        filter: &ExerciseFilter,
        limit: i64,
    ) -> Result<Vec<Exercise>, StoreError> {
        let exercises = self.exercises.read().unwrap();
        let matching = exercises.iter().filter(|e| filter.matches(e)).cloned();

        let results: Vec<Exercise> = if limit > 0 {
            matching.take(limit as usize).collect()
        } else {
            matching.collect()
        };

        Ok(results)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Exercise>, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let exercises = self.exercises.read().unwrap();
        Ok(exercises.iter().find(|e| e.id == id).cloned())
    }

    async fn replace(&self, id: &str, fields: &ExerciseFields) -> Result<u64, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(0);
        };

        let mut exercises = self.exercises.write().unwrap();
        match exercises.iter_mut().find(|e| e.id == id) {
            Some(existing) => {
                *existing = Exercise::from_fields(id, fields.clone());
                Ok(1)
            },
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(0);
        };

        let mut exercises = self.exercises.write().unwrap();
        let before = exercises.len();
        exercises.retain(|e| e.id != id);

        Ok((before - exercises.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reptrack_domain::{ExerciseName, Reps, Weight, WeightUnit, WorkoutDate};

    fn fields(name: &str, reps: i32, weight: i32) -> ExerciseFields {
        ExerciseFields::new(
            ExerciseName::new(name).unwrap(),
            Reps::new(reps).unwrap(),
            Weight::new(weight).unwrap(),
            WeightUnit::Lbs,
            WorkoutDate::new("01-15-23").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_then_find_by_id() {
        let store = MemoryExerciseStore::new();

        let created = store.create(&fields("Bench Press", 10, 135)).await.unwrap();
        let found = store
            .find_by_id(&created.id.to_string())
            .await
            .unwrap()
            .expect("created record should be found");

        assert_eq!(found, created);
        assert_eq!(found.name.as_str(), "Bench Press");
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = MemoryExerciseStore::new();

        let a = store.create(&fields("Squat", 5, 225)).await.unwrap();
        let b = store.create(&fields("Squat", 5, 225)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.exercise_count(), 2);
    }

    #[tokio::test]
    async fn test_find_unfiltered_returns_all_in_order() {
        let store = MemoryExerciseStore::new();

        store.create(&fields("Squat", 5, 225)).await.unwrap();
        store.create(&fields("Deadlift", 3, 315)).await.unwrap();
        store.create(&fields("Press", 8, 95)).await.unwrap();

        let all = store.find(&ExerciseFilter::all(), 0).await.unwrap();
        let names: Vec<&str> = all.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["Squat", "Deadlift", "Press"]);
    }

    #[tokio::test]
    async fn test_find_filters_by_reps() {
        let store = MemoryExerciseStore::new();

        store.create(&fields("Squat", 5, 225)).await.unwrap();
        store.create(&fields("Deadlift", 3, 315)).await.unwrap();
        store.create(&fields("Front Squat", 5, 185)).await.unwrap();

        let fives = store.find(&ExerciseFilter::by_reps(5), 0).await.unwrap();
        assert_eq!(fives.len(), 2);
        assert!(fives.iter().all(|e| e.reps.get() == 5));

        let none = store.find(&ExerciseFilter::by_reps(20), 0).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_find_caps_at_limit() {
        let store = MemoryExerciseStore::new();

        for _ in 0..5 {
            store.create(&fields("Row", 12, 65)).await.unwrap();
        }

        let capped = store.find(&ExerciseFilter::all(), 2).await.unwrap();
        assert_eq!(capped.len(), 2);

        let uncapped = store.find(&ExerciseFilter::all(), 0).await.unwrap();
        assert_eq!(uncapped.len(), 5);
    }

    #[tokio::test]
    async fn test_replace_overwrites_all_fields() {
        let store = MemoryExerciseStore::new();

        let created = store.create(&fields("Bench Press", 10, 135)).await.unwrap();
        let id = created.id.to_string();

        let replacement = ExerciseFields::new(
            ExerciseName::new("Incline Press").unwrap(),
            Reps::new(8).unwrap(),
            Weight::new(50).unwrap(),
            WeightUnit::Kgs,
            WorkoutDate::new("02-20-23").unwrap(),
        );
        let modified = store.replace(&id, &replacement).await.unwrap();
        assert_eq!(modified, 1);

        let found = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.name.as_str(), "Incline Press");
        assert_eq!(found.reps.get(), 8);
        assert_eq!(found.weight.get(), 50);
        assert_eq!(found.unit, WeightUnit::Kgs);
        assert_eq!(found.date.as_str(), "02-20-23");
    }

    #[tokio::test]
    async fn test_replace_unknown_id_modifies_nothing() {
        let store = MemoryExerciseStore::new();
        store.create(&fields("Bench Press", 10, 135)).await.unwrap();

        let modified = store
            .replace(&Uuid::now_v7().to_string(), &fields("Other", 1, 1))
            .await
            .unwrap();

        assert_eq!(modified, 0);
        let all = store.find(&ExerciseFilter::all(), 0).await.unwrap();
        assert_eq!(all[0].name.as_str(), "Bench Press");
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let store = MemoryExerciseStore::new();

        let created = store.create(&fields("Bench Press", 10, 135)).await.unwrap();
        let id = created.id.to_string();

        assert_eq!(store.delete_by_id(&id).await.unwrap(), 1);
        assert!(store.find_by_id(&id).await.unwrap().is_none());

        // Deleting again removes nothing
        assert_eq!(store.delete_by_id(&id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_malformed_id_behaves_as_absent() {
        let store = MemoryExerciseStore::new();
        store.create(&fields("Bench Press", 10, 135)).await.unwrap();

        assert!(store.find_by_id("not-a-uuid").await.unwrap().is_none());
        assert_eq!(store.replace("not-a-uuid", &fields("X", 1, 1)).await.unwrap(), 0);
        assert_eq!(store.delete_by_id("not-a-uuid").await.unwrap(), 0);
        assert_eq!(store.exercise_count(), 1);
    }
}
