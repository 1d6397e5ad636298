//! Distance, speed and calorie statistics for running, race walking and
//! pool swimming, computed from raw sensor packages.

pub mod cli;
pub mod error;
pub mod package;
pub mod training;
pub mod types;
pub mod utils;

pub use error::{Result, WorkoutError};
pub use package::{Package, build_workout, default_packages};
pub use training::{Running, SportsWalking, Swimming, Training};
pub use types::{InfoMessage, WorkoutKind};
