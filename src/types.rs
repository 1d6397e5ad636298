use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::WorkoutError;

/// Closed set of workouts the sensors can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    Walking,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

    /// Three-letter code used in sensor packages.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::Walking => "WLK",
        }
    }

    /// Label shown in the summary line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
        }
    }

    /// Positional parameters in the order a package carries them.
    #[must_use]
    pub const fn params(self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            Self::Running => &["action", "duration", "weight"],
            Self::Walking => &["action", "duration", "weight", "height"],
        }
    }

    #[must_use]
    pub const fn arity(self) -> usize {
        self.params().len()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| WorkoutError::UnknownType(s.to_string()))
    }
}

/// Summary of one finished workout.
///
/// Units: duration in hours, distance in km, speed in km/h, calories in kcal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    #[must_use]
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(duration: f64, distance: f64, speed: f64, calories: f64) -> InfoMessage {
        InfoMessage {
            training_type: "Running".to_string(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    #[test]
    fn renders_three_decimals() {
        let m = message(1.0, 9.75, 9.75, 797.805);
        assert_eq!(
            m.get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
    }

    #[test]
    fn renders_large_and_tiny_values() {
        let m = message(12345.6789, 0.0001, 0.0, 1.0e6);
        let s = m.to_string();
        assert!(s.contains("Длительность: 12345.679 ч."));
        assert!(s.contains("Дистанция: 0.000 км"));
        assert!(s.contains("Ср. скорость: 0.000 км/ч"));
        assert!(s.contains("Потрачено ккал: 1000000.000."));
    }

    #[test]
    fn serializes_field_names() {
        let v = serde_json::to_value(message(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(v["training_type"], "Running");
        assert_eq!(v["calories"], 4.0);
    }

    #[test]
    fn parses_known_codes() {
        assert_eq!("SWM".parse::<WorkoutKind>(), Ok(WorkoutKind::Swimming));
        assert_eq!("RUN".parse::<WorkoutKind>(), Ok(WorkoutKind::Running));
        assert_eq!("WLK".parse::<WorkoutKind>(), Ok(WorkoutKind::Walking));
    }

    #[test]
    fn rejects_unknown_and_lowercase_codes() {
        for code in ["run", "BIKE", ""] {
            assert_eq!(
                code.parse::<WorkoutKind>(),
                Err(WorkoutError::UnknownType(code.to_string()))
            );
        }
    }

    #[test]
    fn arity_matches_constructor_order() {
        assert_eq!(WorkoutKind::Running.arity(), 3);
        assert_eq!(WorkoutKind::Walking.arity(), 4);
        assert_eq!(WorkoutKind::Swimming.arity(), 5);
        assert_eq!(WorkoutKind::Walking.params()[3], "height");
    }
}
