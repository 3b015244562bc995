use log::{debug, warn};

use crate::{
    Measurement, PackageError, Running, Swimming, Walking, Workout, WorkoutError, WorkoutType,
};

/// Build a workout from a sensor package.
///
/// The values fill the fields of the workout type identified by `type_code`
/// in order: action count, duration, weight, followed by the fields specific
/// to the workout type (height for walking, pool length and lap count for
/// swimming).
pub fn read_package(type_code: &str, values: &[f64]) -> Result<Workout, PackageError> {
    let result = WorkoutType::try_from(type_code).and_then(|workout_type| {
        debug!(
            "reading {workout_type} package with {} values",
            values.len()
        );
        workout(workout_type, values)
    });
    if let Err(ref err) = result {
        warn!("failed to read package {type_code:?}: {err}");
    }
    result
}

fn workout(workout_type: WorkoutType, values: &[f64]) -> Result<Workout, PackageError> {
    if values.len() != workout_type.arity() {
        return Err(PackageError::ArityMismatch {
            workout_type,
            expected: workout_type.arity(),
            actual: values.len(),
        });
    }

    let measurement = Measurement::new(values[0], values[1], values[2])?;

    let workout = match workout_type {
        WorkoutType::Running => Running::new(measurement).into(),
        WorkoutType::Walking => Walking::new(measurement, values[3])?.into(),
        WorkoutType::Swimming => {
            Swimming::new(measurement, values[3], lap_count(values[4])?)?.into()
        }
    };

    Ok(with_finite_metrics(workout)?)
}

/// Reject workouts whose values are valid on their own but overflow when combined.
fn with_finite_metrics(workout: Workout) -> Result<Workout, WorkoutError> {
    let metrics = workout.metrics();

    for (field, value) in [
        ("distance", metrics.distance_km),
        ("mean speed", metrics.mean_speed_kmh),
        ("calories", metrics.calories_kcal),
    ] {
        if !value.is_finite() {
            return Err(WorkoutError::OutOfRange(field));
        }
    }

    Ok(workout)
}

fn lap_count(value: f64) -> Result<u32, WorkoutError> {
    const FIELD: &str = "pool lap count";

    if !value.is_finite() {
        return Err(WorkoutError::NotFinite(FIELD));
    }

    if value.fract().abs() > 0.0 {
        return Err(WorkoutError::NotWhole(FIELD));
    }

    if value < 1.0 {
        return Err(WorkoutError::NotPositive(FIELD));
    }

    if value > f64::from(u32::MAX) {
        return Err(WorkoutError::OutOfRange(FIELD));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = value as u32;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::swimming("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], WorkoutType::Swimming, 336.0)]
    #[case::running("RUN", &[15000.0, 1.0, 75.0], WorkoutType::Running, 797.805)]
    #[case::walking("WLK", &[9000.0, 1.0, 75.0, 180.0], WorkoutType::Walking, 349.252)]
    fn test_read_package(
        #[case] type_code: &str,
        #[case] values: &[f64],
        #[case] workout_type: WorkoutType,
        #[case] calories: f64,
    ) {
        let workout = read_package(type_code, values).unwrap();
        assert_eq!(workout.workout_type(), workout_type);
        assert_approx_eq!(workout.spent_calories(), calories, 0.001);
    }

    #[test]
    fn test_read_package_fills_fields_in_order() {
        assert_eq!(
            read_package("SWM", &[720.0, 1.5, 80.0, 25.0, 40.0]),
            Ok(Workout::Swimming(
                Swimming::new(Measurement::new(720.0, 1.5, 80.0).unwrap(), 25.0, 40).unwrap()
            ))
        );
        assert_eq!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            Ok(Workout::Walking(
                Walking::new(Measurement::new(9000.0, 1.0, 75.0).unwrap(), 180.0).unwrap()
            ))
        );
    }

    #[test]
    fn test_read_package_accepts_tiny_duration_without_actions() {
        let workout = read_package("RUN", &[0.0, 1e-310, 75.0]).unwrap();
        let metrics = workout.metrics();
        assert!(metrics.mean_speed_kmh.is_finite());
        assert!(metrics.calories_kcal.is_finite());
    }

    #[test]
    fn test_read_package_is_deterministic() {
        let values = [15000.0, 1.0, 75.0];
        assert_eq!(
            read_package("RUN", &values).unwrap().metrics(),
            read_package("RUN", &values).unwrap().metrics()
        );
    }

    #[rstest]
    #[case::unknown_code(
        "XYZ",
        &[1.0, 1.0, 1.0],
        PackageError::UnknownTypeCode("XYZ".to_string())
    )]
    #[case::too_few_values(
        "WLK",
        &[9000.0, 1.0, 75.0],
        PackageError::ArityMismatch { workout_type: WorkoutType::Walking, expected: 4, actual: 3 }
    )]
    #[case::too_many_values(
        "RUN",
        &[15000.0, 1.0, 75.0, 180.0],
        PackageError::ArityMismatch { workout_type: WorkoutType::Running, expected: 3, actual: 4 }
    )]
    #[case::no_values(
        "SWM",
        &[],
        PackageError::ArityMismatch { workout_type: WorkoutType::Swimming, expected: 5, actual: 0 }
    )]
    #[case::zero_duration(
        "RUN",
        &[15000.0, 0.0, 75.0],
        PackageError::InvalidInput(WorkoutError::NotPositive("duration"))
    )]
    #[case::zero_height(
        "WLK",
        &[9000.0, 1.0, 75.0, 0.0],
        PackageError::InvalidInput(WorkoutError::NotPositive("height"))
    )]
    #[case::fractional_laps(
        "SWM",
        &[720.0, 1.0, 80.0, 25.0, 40.5],
        PackageError::InvalidInput(WorkoutError::NotWhole("pool lap count"))
    )]
    #[case::no_laps(
        "SWM",
        &[720.0, 1.0, 80.0, 25.0, 0.0],
        PackageError::InvalidInput(WorkoutError::NotPositive("pool lap count"))
    )]
    #[case::subnormal_duration(
        "RUN",
        &[15000.0, 1e-310, 75.0],
        PackageError::InvalidInput(WorkoutError::OutOfRange("mean speed"))
    )]
    #[case::huge_pool_length(
        "SWM",
        &[720.0, 1.0, 80.0, 1e308, 40.0],
        PackageError::InvalidInput(WorkoutError::OutOfRange("mean speed"))
    )]
    #[case::subnormal_height(
        "WLK",
        &[9000.0, 1.0, 75.0, 1e-320],
        PackageError::InvalidInput(WorkoutError::OutOfRange("calories"))
    )]
    fn test_read_package_error(
        #[case] type_code: &str,
        #[case] values: &[f64],
        #[case] expected: PackageError,
    ) {
        assert_eq!(read_package(type_code, values), Err(expected));
    }

    #[rstest]
    #[case(1.0, Ok(1))]
    #[case(40.0, Ok(40))]
    #[case(-0.5, Err(WorkoutError::NotWhole("pool lap count")))]
    #[case(-3.0, Err(WorkoutError::NotPositive("pool lap count")))]
    #[case(f64::INFINITY, Err(WorkoutError::NotFinite("pool lap count")))]
    #[case(1e10, Err(WorkoutError::OutOfRange("pool lap count")))]
    fn test_lap_count(#[case] value: f64, #[case] expected: Result<u32, WorkoutError>) {
        assert_eq!(lap_count(value), expected);
    }
}
