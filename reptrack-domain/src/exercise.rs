//! The Exercise entity
//!
//! An Exercise is the sole persisted entity: one logged set of an
//! exercise with its name, rep count, weight, unit, and date.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::{ExerciseName, Reps, Weight, WeightUnit, WorkoutDate};

/// A persisted exercise record.
///
/// The id is assigned by the store layer on create and is immutable
/// thereafter. All other fields are validated value objects, so the JSON
/// form is the flat object
/// `{"id": ..., "name": ..., "reps": ..., "weight": ..., "unit": ..., "date": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Exercise name
    pub name: ExerciseName,
    /// Repetition count
    pub reps: Reps,
    /// Weight moved
    pub weight: Weight,
    /// Unit the weight was recorded in
    pub unit: WeightUnit,
    /// Date the exercise was performed
    pub date: WorkoutDate,
}

impl Exercise {
    /// Assemble an Exercise from an id and its validated fields.
    pub fn from_fields(id: Uuid, fields: ExerciseFields) -> Self {
        Self {
            id,
            name: fields.name,
            reps: fields.reps,
            weight: fields.weight,
            unit: fields.unit,
            date: fields.date,
        }
    }
}

/// The validated, caller-supplied fields of an exercise: everything
/// except the id.
///
/// Create and full-replace both take this shape, so a record can never
/// be partially written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFields {
    /// Exercise name
    pub name: ExerciseName,
    /// Repetition count
    pub reps: Reps,
    /// Weight moved
    pub weight: Weight,
    /// Unit the weight was recorded in
    pub unit: WeightUnit,
    /// Date the exercise was performed
    pub date: WorkoutDate,
}

impl ExerciseFields {
    /// Bundle validated field values.
    pub fn new(
        name: ExerciseName,
        reps: Reps,
        weight: Weight,
        unit: WeightUnit,
        date: WorkoutDate,
    ) -> Self {
        Self {
            name,
            reps,
            weight,
            unit,
            date,
        }
    }
}

/// Listing filter for exercise queries.
///
/// `reps` is a raw integer rather than a `Reps`: a filter value is an
/// equality probe, not a persisted field, and a non-positive value is a
/// legal filter that matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    /// Exact rep count to match, if any
    pub reps: Option<i32>,
}

impl ExerciseFilter {
    /// Match every record.
    pub fn all() -> Self {
        Self { reps: None }
    }

    /// Match records with exactly this rep count.
    pub fn by_reps(reps: i32) -> Self {
        Self { reps: Some(reps) }
    }

    /// True when this exercise passes the filter.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        match self.reps {
            Some(reps) => exercise.reps.get() == reps,
            None => true,
        }
    }
}
