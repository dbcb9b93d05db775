//! Value Objects for the Reptrack Domain
//!
//! Immutable, validated domain primitives.
//! All value objects enforce invariants at construction time.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domain errors for value object validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Name must be non-blank after trimming
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// Reps must be a positive integer
    #[error("Invalid reps: {0}")]
    InvalidReps(String),

    /// Weight must be a positive integer
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    /// Unit must be one of the fixed set
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// Date must match the MM-DD-YY digit pattern
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

// =============================================================================
// ExerciseName
// =============================================================================

/// ExerciseName is the free-text name of an exercise
///
/// # Invariants
/// - Must be non-blank after trimming
///
/// The original text is kept as entered; trimming only applies to the
/// validity check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseName(String);

impl ExerciseName {
    /// Create a new ExerciseName with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidName` if the text is blank after trimming
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidName(
                "name must not be blank".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the underlying text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExerciseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Reps
// =============================================================================

/// Reps is a positive repetition count
///
/// # Invariants
/// - Must be > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Reps(i32);

impl Reps {
    /// Create a new Reps with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidReps` if value <= 0
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidReps(
                "reps must be positive".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the underlying count
    pub fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Weight
// =============================================================================

/// Weight is a positive integer weight, in the unit recorded next to it
///
/// # Invariants
/// - Must be > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Weight(i32);

impl Weight {
    /// Create a new Weight with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidWeight` if value <= 0
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidWeight(
                "weight must be positive".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the underlying value
    pub fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// WeightUnit
// =============================================================================

/// WeightUnit is the unit a weight was recorded in
///
/// Wire form is lowercase (`"kgs"` / `"lbs"`). Parsing trims surrounding
/// whitespace but is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    Kgs,
    /// Pounds
    Lbs,
}

impl WeightUnit {
    /// Get the wire form of the unit
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kgs => "kgs",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "kgs" => Ok(WeightUnit::Kgs),
            "lbs" => Ok(WeightUnit::Lbs),
            other => Err(DomainError::InvalidUnit(format!(
                "expected kgs or lbs, got {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// WorkoutDate
// =============================================================================

/// Pattern for MM-DD-YY where each component is exactly two ASCII digits.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

/// WorkoutDate is the date an exercise was performed, as entered
///
/// # Invariants
/// - Must match `MM-DD-YY` with two digits per component
///
/// There is no calendar semantics: `99-99-99` is a valid WorkoutDate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkoutDate(String);

impl WorkoutDate {
    /// Create a new WorkoutDate with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidDate` if the text does not match the
    /// two-digit MM-DD-YY pattern
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !DATE_PATTERN.is_match(&value) {
            return Err(DomainError::InvalidDate(format!(
                "expected MM-DD-YY, got {:?}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Get the underlying text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
