use crate::{
    MINUTES_PER_HOUR, Measurement, Training, WorkoutError, WorkoutType, workout::positive,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walking {
    measurement: Measurement,
    height_cm: f64,
}

impl Walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const CM_PER_M: f64 = 100.0;
    pub const KMH_TO_MS: f64 = 0.278;

    pub fn new(measurement: Measurement, height_cm: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            measurement,
            height_cm: positive("height", height_cm)?,
        })
    }

    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for Walking {
    const STEP_LENGTH_M: f64 = 0.65;

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Walking
    }

    fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    fn spent_calories(&self) -> f64 {
        let weight_kg = self.measurement.weight_kg();
        let speed_ms = self.mean_speed() * round(Self::KMH_TO_MS, 3);
        (Self::WEIGHT_MULTIPLIER * weight_kg
            + (speed_ms.powi(2) / (self.height_cm / Self::CM_PER_M))
                * Self::SPEED_HEIGHT_MULTIPLIER
                * weight_kg)
            * self.measurement.duration_hours()
            * MINUTES_PER_HOUR
    }
}

fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
