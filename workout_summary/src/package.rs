use thiserror::Error;

use crate::training::{Running, Session, SportsWalking, Swimming, Workout};

/// Workout type codes understood by [`read_package`].
pub const KNOWN_CODES: [&str; 3] = ["SWM", "RUN", "WLK"];

/// Failure to turn a sensor package into a workout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    #[error("unknown workout type `{code}`; available workout types: {}", KNOWN_CODES.join(", "))]
    UnknownWorkoutType { code: String },
    #[error("workout type `{code}` expects {expected} readings, got {got}")]
    WrongReadingCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Read one package of sensor data.
///
/// Readings are positional, their order is fixed per workout type:
///
/// | Code  | Readings in order                                 |
/// |-------|---------------------------------------------------|
/// | `SWM` | action, duration, weight, length_pool, count_pool |
/// | `RUN` | action, duration, weight                          |
/// | `WLK` | action, duration, weight, height                  |
///
/// Counter readings are truncated to integers, no further range validation
/// is applied.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, PackageError> {
    match workout_type {
        "SWM" => match *data {
            [action, duration, weight, length_pool, count_pool] => {
                Ok(Workout::Swimming(Swimming {
                    session: Session {
                        action: action as u64,
                        duration,
                        weight,
                    },
                    length_pool,
                    count_pool: count_pool as u32,
                }))
            }
            _ => Err(PackageError::WrongReadingCount {
                code: "SWM",
                expected: 5,
                got: data.len(),
            }),
        },
        "RUN" => match *data {
            [action, duration, weight] => Ok(Workout::Running(Running {
                session: Session {
                    action: action as u64,
                    duration,
                    weight,
                },
            })),
            _ => Err(PackageError::WrongReadingCount {
                code: "RUN",
                expected: 3,
                got: data.len(),
            }),
        },
        "WLK" => match *data {
            [action, duration, weight, height] => Ok(Workout::SportsWalking(SportsWalking {
                session: Session {
                    action: action as u64,
                    duration,
                    weight,
                },
                height,
            })),
            _ => Err(PackageError::WrongReadingCount {
                code: "WLK",
                expected: 4,
                got: data.len(),
            }),
        },
        other => Err(PackageError::UnknownWorkoutType {
            code: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::training::Training;

    #[test]
    fn reads_running_package() {
        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).expect("known package");

        assert_eq!(
            workout,
            Workout::Running(Running {
                session: Session {
                    action: 15000,
                    duration: 1.0,
                    weight: 75.0,
                },
            })
        );
    }

    #[test]
    fn reads_swimming_package() {
        let workout =
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("known package");

        let Workout::Swimming(swimming) = workout else {
            panic!("SWM must build a swimming workout");
        };

        assert_eq!(swimming.length_pool, 25.0);
        assert_eq!(swimming.count_pool, 40);
        assert_eq!(swimming.mean_speed(), 1.0);
    }

    #[test]
    fn reads_walking_package() {
        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("known package");

        let Workout::SportsWalking(walking) = workout else {
            panic!("WLK must build a walking workout");
        };

        assert_eq!(walking.height, 180.0);
        assert_eq!(walking.session.action, 9000);
    }

    #[test]
    fn unknown_code_lists_available_types() {
        let err = read_package("XYZ", &[1.0]).expect_err("XYZ is not a workout type");

        assert_eq!(
            err,
            PackageError::UnknownWorkoutType {
                code: "XYZ".to_owned(),
            }
        );

        let listing = err.to_string();
        for code in KNOWN_CODES {
            assert!(listing.contains(code), "`{listing}` misses {code}");
        }
    }

    #[test]
    fn wrong_reading_count() {
        let err = read_package("WLK", &[9000.0, 1.0]).expect_err("two readings out of four");

        assert_eq!(
            err,
            PackageError::WrongReadingCount {
                code: "WLK",
                expected: 4,
                got: 2,
            }
        );
    }
}
