use crate::info::InfoMessage;

/// Meters covered by one unit of [`Session::action`] on foot.
pub const LEN_STEP: f64 = 0.65;
/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;

const MIN_IN_HOUR: f64 = 60.0;

/// Raw sensor readings shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    /// Number of steps or strokes counted by the sensor
    pub action: u64,
    /// Workout duration in hours. Mean speed divides by this value
    pub duration: f64,
    /// Weight of the athlete in kilograms
    pub weight: f64,
}

/// Metric set every workout kind provides.
///
/// Distance and mean speed come with step-counter defaults; a workout kind
/// replaces them only when its sensors measure movement differently.
/// Calorie cost has no sensible default, each kind supplies its own formula.
///
/// Metrics are recomputed from the readings on every call, nothing is
/// cached.
pub trait Training {
    /// Shared sensor readings of the workout.
    fn session(&self) -> &Session;

    /// Display name of the activity.
    fn training_type(&self) -> &'static str;

    /// Meters covered by a single unit of [`Session::action`].
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Covered distance in kilometers.
    fn distance(&self) -> f64 {
        self.session().action as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed over the whole workout in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration
    }

    /// Energy spent during the workout in kilocalories.
    fn spent_calories(&self) -> f64;

    /// Summary of the finished workout.
    fn info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.training_type().to_owned(),
            duration: self.session().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// Workout: running.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Running {
    pub session: Session,
}

impl Running {
    const SPEED_FACTOR: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;
}

impl Training for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    // Negative for mean speeds below ~1.11 km/h, the raw value is reported
    // as-is
    fn spent_calories(&self) -> f64 {
        let Session {
            duration, weight, ..
        } = self.session;

        (Self::SPEED_FACTOR * self.mean_speed() - Self::SPEED_SHIFT) * weight / M_IN_KM
            * (duration * MIN_IN_HOUR)
    }
}

/// Workout: sports walking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SportsWalking {
    pub session: Session,
    /// Height of the athlete in centimeters
    pub height: f64,
}

impl SportsWalking {
    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;
}

impl Training for SportsWalking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn spent_calories(&self) -> f64 {
        let Session {
            duration, weight, ..
        } = self.session;

        // The squared-speed/height quotient is truncated before weighting
        (Self::WEIGHT_FACTOR * weight
            + (self.mean_speed().powi(2) / self.height).floor()
                * Self::SPEED_HEIGHT_FACTOR
                * weight)
            * (duration * MIN_IN_HOUR)
    }
}

/// Workout: swimming.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swimming {
    pub session: Session,
    /// Length of the pool in meters
    pub length_pool: f64,
    /// How many times the pool was crossed
    pub count_pool: u32,
}

impl Swimming {
    /// Meters covered by one stroke
    const LEN_STEP: f64 = 1.38;
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_FACTOR: f64 = 2.0;
}

impl Training for Swimming {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Pool readings are more precise than the stroke counter, so speed
    /// comes from them instead of [`Training::distance`].
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.session.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::SPEED_SHIFT) * Self::WEIGHT_FACTOR * self.session.weight
    }
}

/// A workout of any supported kind, as built from a sensor package.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Summary of the finished workout.
    pub fn info(&self) -> InfoMessage {
        match self {
            Self::Running(training) => training.info(),
            Self::SportsWalking(training) => training.info(),
            Self::Swimming(training) => training.info(),
        }
    }
}
