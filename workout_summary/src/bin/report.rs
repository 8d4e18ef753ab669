use std::{
    error::Error,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::warn;
use workout_summary::{read_package, report};

/// Packages processed when no input file is given.
const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file with sensor packages, one `CODE,reading,..` row per
    /// workout. Processes the built-in sample packages when omitted
    pub input: Option<PathBuf>,
    /// Print each summary as json instead of the report template
    #[arg(short, long, default_value_t = false, required = false)]
    pub json: bool,
}

fn read_csv_packages(path: impl AsRef<Path>) -> Result<Vec<(String, Vec<f64>)>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path.as_ref())
        .map_err(|e| format!("Failed to open input file. Reason: {e}"))?;

    let mut packages = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| format!("Failed to read input row. Reason: {e}"))?;

        let mut fields = record.iter();

        let Some(code) = fields.next() else {
            continue;
        };

        let readings = fields
            .map(|field| field.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>();

        match readings {
            Ok(readings) => packages.push((code.trim().to_owned(), readings)),
            Err(e) => warn!("Skipping package `{code}`: {e}"),
        }
    }

    Ok(packages)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let Args { input, json } = <Args as clap::Parser>::parse();

    let packages = match &input {
        Some(path) => read_csv_packages(path)?,
        None => SAMPLE_PACKAGES
            .iter()
            .map(|(code, readings)| ((*code).to_owned(), readings.to_vec()))
            .collect(),
    };

    let mut out = std::io::stdout().lock();

    for (code, readings) in packages {
        let workout = match read_package(&code, &readings) {
            Ok(workout) => workout,
            Err(e) => {
                warn!("{e}");
                continue;
            }
        };

        match json {
            true => writeln!(
                out,
                "{}",
                serde_json::to_string(&workout.info())
                    .expect("serde serialization can't fail")
            )?,
            false => report(&mut out, &workout)?,
        }
    }

    Ok(())
}
