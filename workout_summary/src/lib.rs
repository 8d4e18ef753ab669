//! # Workout summary
//!
//! Turns raw sensor packages into a fixed-format training report.
//!
//! A package is a workout type code plus positional numeric readings, e.g.
//! `("RUN", [15000, 1, 75])`. Reading a package builds a [`Workout`] and
//! every workout kind derives its metrics from the readings on demand:
//!
//! ```notrust
//! distance   = action * LEN_STEP / M_IN_KM
//! mean_speed = distance / duration
//! ```
//!
//! Swimming measures speed from pool readings instead, and each kind
//! carries its own calorie formula.

mod info;
mod package;
mod report;
mod training;

pub use self::info::*;
pub use self::package::*;
pub use self::report::*;
pub use self::training::*;
