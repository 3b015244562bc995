use strum::{Display, EnumIter};

use crate::{InfoMessage, PackageError, Running, Swimming, Walking, WorkoutError};

pub const METERS_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Running,
    Walking,
    Swimming,
}

impl WorkoutType {
    /// Code used by the sensors to tag a package of this type.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Running => "RUN",
            WorkoutType::Walking => "WLK",
            WorkoutType::Swimming => "SWM",
        }
    }

    /// Number of values in a package of this type.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::Walking => 4,
            WorkoutType::Swimming => 5,
        }
    }
}

impl TryFrom<&str> for WorkoutType {
    type Error = PackageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::Walking),
            "SWM" => Ok(WorkoutType::Swimming),
            _ => Err(PackageError::UnknownTypeCode(value.to_string())),
        }
    }
}

/// Readings shared by all workout types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    action_count: f64,
    duration_hours: f64,
    weight_kg: f64,
}

impl Measurement {
    pub fn new(action_count: f64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action_count: non_negative("action count", action_count)?,
            duration_hours: positive("duration", duration_hours)?,
            weight_kg: positive("weight", weight_kg)?,
        })
    }

    /// Number of steps or strokes.
    #[must_use]
    pub fn action_count(&self) -> f64 {
        self.action_count
    }

    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::NotFinite(field));
    }

    if value < 0.0 {
        return Err(WorkoutError::Negative(field));
    }

    Ok(value)
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if non_negative(field, value)? <= 0.0 {
        return Err(WorkoutError::NotPositive(field));
    }

    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

pub trait Training {
    /// Distance covered by a single step or stroke in meters.
    const STEP_LENGTH_M: f64;

    fn workout_type(&self) -> WorkoutType;

    fn measurement(&self) -> &Measurement;

    fn spent_calories(&self) -> f64;

    #[must_use]
    fn distance(&self) -> f64 {
        self.measurement().action_count() * Self::STEP_LENGTH_M / METERS_PER_KM
    }

    #[must_use]
    fn mean_speed(&self) -> f64 {
        self.distance() / self.measurement().duration_hours()
    }

    #[must_use]
    fn metrics(&self) -> Metrics {
        Metrics {
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed(),
            calories_kcal: self.spent_calories(),
        }
    }

    #[must_use]
    fn show_training_info(&self) -> InfoMessage {
        let metrics = self.metrics();
        InfoMessage {
            training_type: self.workout_type(),
            duration: self.measurement().duration_hours(),
            distance: metrics.distance_km,
            speed: metrics.mean_speed_kmh,
            calories: metrics.calories_kcal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

macro_rules! dispatch {
    ($workout: expr, $training: ident => $body: expr) => {
        match $workout {
            Workout::Running($training) => $body,
            Workout::Walking($training) => $body,
            Workout::Swimming($training) => $body,
        }
    };
}

impl Workout {
    #[must_use]
    pub fn workout_type(&self) -> WorkoutType {
        dispatch!(self, t => t.workout_type())
    }

    #[must_use]
    pub fn measurement(&self) -> &Measurement {
        dispatch!(self, t => t.measurement())
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        dispatch!(self, t => t.distance())
    }

    #[must_use]
    pub fn mean_speed(&self) -> f64 {
        dispatch!(self, t => t.mean_speed())
    }

    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        dispatch!(self, t => t.spent_calories())
    }

    #[must_use]
    pub fn metrics(&self) -> Metrics {
        dispatch!(self, t => t.metrics())
    }

    #[must_use]
    pub fn show_training_info(&self) -> InfoMessage {
        dispatch!(self, t => t.show_training_info())
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<Walking> for Workout {
    fn from(value: Walking) -> Self {
        Workout::Walking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}
