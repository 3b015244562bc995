use crate::{METERS_PER_KM, MINUTES_PER_HOUR, Measurement, Training, WorkoutType};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    measurement: Measurement,
}

impl Running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 1.79;

    #[must_use]
    pub fn new(measurement: Measurement) -> Self {
        Self { measurement }
    }
}

impl Training for Running {
    const STEP_LENGTH_M: f64 = 0.65;

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    fn spent_calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed() + Self::SPEED_SHIFT)
            * (self.measurement.weight_kg() / METERS_PER_KM)
            * (self.measurement.duration_hours() * MINUTES_PER_HOUR)
    }
}
