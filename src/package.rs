use crate::dlog;
use crate::error::{Result, WorkoutError};
use crate::training::{Running, SportsWalking, Swimming, Training};
use crate::types::WorkoutKind;
use std::str::FromStr;

/// One row of sensor data: a type code and positional values.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    pub fn build(&self) -> Result<Box<dyn Training>> {
        build_workout(&self.code, &self.data)
    }
}

/// Accepts `CODE:v1,v2,...`, e.g. `RUN:15000,1,75`.
///
/// The code itself is checked later by [`build_workout`].
impl FromStr for Package {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || WorkoutError::MalformedPackage(s.to_string());

        let (code, values) = s.split_once(':').ok_or_else(malformed)?;
        let code = code.trim();
        if code.is_empty() {
            return Err(malformed());
        }

        let data = values
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        Ok(Self::new(code, data))
    }
}

/// Packages processed when none are given on the command line.
#[must_use]
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build the workout named by `code` from positional sensor values.
pub fn build_workout(code: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let kind: WorkoutKind = code.parse()?;
    let workout = constructor(kind)(data)?;
    dlog!("built workout code={code} kind={kind} values={}", data.len());
    Ok(workout)
}

type Constructor = fn(&[f64]) -> Result<Box<dyn Training>>;

const fn constructor(kind: WorkoutKind) -> Constructor {
    match kind {
        WorkoutKind::Swimming => swimming,
        WorkoutKind::Running => running,
        WorkoutKind::Walking => walking,
    }
}

fn running(data: &[f64]) -> Result<Box<dyn Training>> {
    let [action, duration, weight] = positional::<3>(WorkoutKind::Running, data)?;
    Ok(Box::new(Running::new(action, duration, weight)))
}

fn walking(data: &[f64]) -> Result<Box<dyn Training>> {
    let [action, duration, weight, height] = positional::<4>(WorkoutKind::Walking, data)?;
    Ok(Box::new(SportsWalking::new(action, duration, weight, height)))
}

fn swimming(data: &[f64]) -> Result<Box<dyn Training>> {
    let [action, duration, weight, length_pool, count_pool] =
        positional::<5>(WorkoutKind::Swimming, data)?;
    Ok(Box::new(Swimming::new(
        action,
        duration,
        weight,
        length_pool,
        count_pool,
    )))
}

fn positional<const N: usize>(kind: WorkoutKind, data: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(data).map_err(|_| WorkoutError::Arity {
        kind,
        expected: N,
        got: data.len(),
    })
}
