use std::io::{self, Write};

use crate::training::Workout;

/// Write the rendered summary of one workout as a single line.
pub fn report(out: &mut impl Write, workout: &Workout) -> io::Result<()> {
    writeln!(out, "{}", workout.info())
}
