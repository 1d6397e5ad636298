//! Workout variants and their distance, speed and calorie formulas.
//!
//! Every variant carries the raw sensor [`Measurements`] and implements
//! [`Training`]. Running and walking share the step-based distance and
//! speed helpers; swimming derives speed from pool laps instead.

use crate::types::{InfoMessage, WorkoutKind};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Raw values common to every workout.
///
/// `action` is the number of steps or strokes, `duration` is in hours,
/// `weight` is in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub action: f64,
    pub duration: f64,
    pub weight: f64,
}

impl Measurements {
    #[must_use]
    pub const fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Distance in km covered by `action` movements of `step_len` meters.
#[must_use]
pub fn step_distance(action: f64, step_len: f64) -> f64 {
    action * step_len / M_IN_KM
}

/// Mean speed in km/h. `duration` must be positive.
#[must_use]
pub fn mean_speed(distance: f64, duration: f64) -> f64 {
    distance / duration
}

/// A workout whose summary evaluates distance, then speed, then calories.
pub trait Training {
    fn kind(&self) -> WorkoutKind;

    fn measurements(&self) -> &Measurements;

    fn distance(&self) -> f64;

    fn mean_speed(&self) -> f64;

    fn spent_calories(&self) -> f64;

    fn label(&self) -> &'static str {
        self.kind().label()
    }

    fn duration(&self) -> f64 {
        self.measurements().duration
    }

    /// Evaluates distance, then speed, then calories.
    fn summarize(&self) -> InfoMessage {
        let distance = self.distance();
        let speed = self.mean_speed();
        let calories = self.spent_calories();

        InfoMessage {
            training_type: self.label().to_string(),
            duration: self.duration(),
            distance,
            speed,
            calories,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    m: Measurements,
}

impl Running {
    pub const LEN_STEP: f64 = 0.65;
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    #[must_use]
    pub const fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            m: Measurements::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn measurements(&self) -> &Measurements {
        &self.m
    }

    fn distance(&self) -> f64 {
        step_distance(self.m.action, Self::LEN_STEP)
    }

    fn mean_speed(&self) -> f64 {
        mean_speed(self.distance(), self.m.duration)
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.m.weight
            / M_IN_KM
            * self.m.duration
            * MIN_IN_H
    }
}

/// Race walking. `height` is in cm.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    m: Measurements,
    height: f64,
}

impl SportsWalking {
    pub const LEN_STEP: f64 = 0.65;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    #[must_use]
    pub const fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            m: Measurements::new(action, duration, weight),
            height,
        }
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn measurements(&self) -> &Measurements {
        &self.m
    }

    fn distance(&self) -> f64 {
        step_distance(self.m.action, Self::LEN_STEP)
    }

    fn mean_speed(&self) -> f64 {
        mean_speed(self.distance(), self.m.duration)
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed() * Self::KMH_IN_MSEC;
        let height_m = self.height / Self::CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * self.m.weight
            + (speed_ms.powi(2) / height_m) * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.m.weight)
            * self.m.duration
            * MIN_IN_H
    }
}

/// Pool swimming. `length_pool` is in meters, `count_pool` is the number of laps.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    m: Measurements,
    length_pool: f64,
    count_pool: f64,
}

impl Swimming {
    /// Length of one stroke in meters.
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    #[must_use]
    pub const fn new(
        action: f64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            m: Measurements::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }

    #[must_use]
    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    #[must_use]
    pub const fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn measurements(&self) -> &Measurements {
        &self.m
    }

    fn distance(&self) -> f64 {
        step_distance(self.m.action, Self::LEN_STEP)
    }

    // Pool laps, not strokes.
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.m.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.m.weight
            * self.m.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn running_distance_and_speed() {
        let r = Running::new(15000.0, 1.5, 75.0);
        assert!(close(r.distance(), 15000.0 * 0.65 / 1000.0));
        assert!(close(r.mean_speed(), r.distance() / 1.5));
    }

    #[test]
    fn running_calories() {
        let r = Running::new(15000.0, 1.0, 75.0);
        let expected = (18.0 * 9.75 + 1.79) * 75.0 / 1000.0 * 1.0 * 60.0;
        assert!(close(r.spent_calories(), expected));
        assert!(close(r.spent_calories(), 797.805));
    }

    #[test]
    fn walking_uses_running_step_length() {
        let w = SportsWalking::new(9000.0, 1.0, 75.0, 180.0);
        let r = Running::new(9000.0, 1.0, 75.0);
        assert!(close(w.distance(), 5.85));
        assert!(close(w.distance(), r.distance()));
        assert!(close(w.mean_speed(), 5.85));
    }

    #[test]
    fn walking_calories_depend_on_height() {
        let short = SportsWalking::new(9000.0, 1.0, 75.0, 150.0);
        let tall = SportsWalking::new(9000.0, 1.0, 75.0, 200.0);
        assert!(short.spent_calories() > tall.spent_calories());

        let w = SportsWalking::new(9000.0, 1.0, 75.0, 180.0);
        assert!(close(w.spent_calories(), 349.251_747_525));
    }

    #[test]
    fn swimming_speed_ignores_strokes() {
        let a = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        let b = Swimming::new(5000.0, 1.0, 80.0, 25.0, 40.0);
        assert!(close(a.mean_speed(), 1.0));
        assert!(close(a.mean_speed(), b.mean_speed()));
        assert!(close(a.distance(), 720.0 * 1.38 / 1000.0));
    }

    #[test]
    fn swimming_weight_coefficient_multiplies() {
        let s = Swimming::new(720.0, 2.0, 80.0, 50.0, 40.0);
        let speed = 50.0 * 40.0 / 1000.0 / 2.0;
        assert!(close(s.spent_calories(), (speed + 1.1) * 2.0 * 80.0 * 2.0));
    }

    #[test]
    fn summarize_uses_variant_label() {
        let info = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).summarize();
        assert_eq!(info.training_type, "Swimming");
        assert!(close(info.duration, 1.0));
        assert!(close(info.calories, 336.0));

        let info = SportsWalking::new(9000.0, 1.0, 75.0, 180.0).summarize();
        assert_eq!(info.training_type, "SportsWalking");
    }

    #[test]
    fn zero_duration_yields_non_finite_speed() {
        let r = Running::new(100.0, 0.0, 70.0);
        assert!(!r.mean_speed().is_finite());
    }
}
