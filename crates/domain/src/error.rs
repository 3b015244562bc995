use crate::WorkoutType;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("{0} must be a whole number")]
    NotWhole(&'static str),
    #[error("{0} is out of range")]
    OutOfRange(&'static str),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PackageError {
    #[error("unknown workout type code \"{0}\"")]
    UnknownTypeCode(String),
    #[error("{workout_type} package requires {expected} values, got {actual}")]
    ArityMismatch {
        workout_type: WorkoutType,
        expected: usize,
        actual: usize,
    },
    #[error("invalid input: {0}")]
    InvalidInput(#[from] WorkoutError),
}
