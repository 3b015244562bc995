use crate::{METERS_PER_KM, Measurement, Training, WorkoutError, WorkoutType, workout::positive};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    measurement: Measurement,
    pool_length_m: f64,
    pool_lap_count: u32,
}

impl Swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const SPEED_MULTIPLIER: f64 = 2.0;

    pub fn new(
        measurement: Measurement,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> Result<Self, WorkoutError> {
        if pool_lap_count == 0 {
            return Err(WorkoutError::NotPositive("pool lap count"));
        }

        Ok(Self {
            measurement,
            pool_length_m: positive("pool length", pool_length_m)?,
            pool_lap_count,
        })
    }

    #[must_use]
    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    #[must_use]
    pub fn pool_lap_count(&self) -> u32 {
        self.pool_lap_count
    }
}

impl Training for Swimming {
    const STEP_LENGTH_M: f64 = 1.38;

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    // Derived from the pool geometry, not from the stroke count.
    fn mean_speed(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lap_count)
            / METERS_PER_KM
            / self.measurement.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::SPEED_SHIFT)
            * Self::SPEED_MULTIPLIER
            * self.measurement.weight_kg()
            * self.measurement.duration_hours()
    }
}
