use thiserror::Error;

use crate::types::WorkoutKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout type: {0}")]
    UnknownType(String),

    #[error("{kind} expects {expected} values, got {got}")]
    Arity {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },

    #[error("malformed package {0:?}: expected CODE:v1,v2,...")]
    MalformedPackage(String),
}

pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;
