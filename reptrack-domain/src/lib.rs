//! Reptrack Domain
//!
//! The Exercise entity and its validated value objects.
//!
//! Everything in this crate is pure: no I/O, no async, no store access.
//! All field invariants are enforced at construction time, so an
//! `Exercise` that exists is a valid one.

#![warn(clippy::all)]

pub mod exercise;
pub mod value_objects;

// Re-exports for convenience
pub use exercise::{Exercise, ExerciseFields, ExerciseFilter};
pub use value_objects::{DomainError, ExerciseName, Reps, Weight, WeightUnit, WorkoutDate};
