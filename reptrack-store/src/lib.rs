//! Reptrack Store
//!
//! The data-access layer: the sole component permitted to query or
//! mutate the exercise store.
//!
//! The `ExerciseRepository` trait defines the storage interface; the
//! PostgreSQL implementation lives behind the `postgres` feature, and an
//! in-memory implementation backs tests and database-less development
//! builds.

#![warn(clippy::all)]

mod error;
mod memory;
mod repository;

#[cfg(feature = "postgres")]
mod postgres;

pub use error::StoreError;
pub use memory::MemoryExerciseStore;
pub use repository::ExerciseRepository;

#[cfg(feature = "postgres")]
pub use postgres::PgExerciseStore;
