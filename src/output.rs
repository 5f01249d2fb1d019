use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::result::Results;
use crate::settings::Settings;

/// Write the normalised sweep to a plain-text file, one `theta intensity`
/// row per observation angle.
pub fn write_sweep(result: &Results, directory: &Path) -> Result<()> {
    fs::create_dir_all(directory)?;
    let file = File::create(directory.join("intensity_sweep"))?;
    let mut writer = BufWriter::new(file);

    for point in &result.points {
        writeln!(writer, "{} {}", point.theta, point.intensity)?;
    }

    Ok(())
}

/// Write the normalised sweep as a JSON array of `{theta, intensity}`
/// objects for external chart consumers.
pub fn write_sweep_json(result: &Results, directory: &Path) -> Result<()> {
    fs::create_dir_all(directory)?;
    let file = File::create(directory.join("intensity_sweep.json"))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &result.points)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    date: String,
    num_angles: usize,
    peak_raw: f32,
    settings: &'a Settings,
}

/// Write a TOML run summary: timestamp, sweep size, the raw peak used as
/// the normalisation reference, and the full settings.
pub fn write_summary(settings: &Settings, result: &Results) -> Result<()> {
    fs::create_dir_all(&settings.directory)?;

    let summary = RunSummary {
        date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        num_angles: result.points.len(),
        peak_raw: result.peak_raw.unwrap_or(0.0),
        settings,
    };

    let file = File::create(settings.directory.join("run_summary.toml"))?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", toml::to_string(&summary)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::DataPoint;

    #[test]
    fn sweep_file_has_one_row_per_point() {
        let dir = std::env::temp_dir().join("sedi_output_test");
        let result = Results {
            points: vec![
                DataPoint {
                    theta: -1.0,
                    intensity: 50.0,
                },
                DataPoint {
                    theta: 0.0,
                    intensity: 100.0,
                },
            ],
            peak_raw: Some(2.0),
        };

        write_sweep(&result, &dir).unwrap();
        let contents = fs::read_to_string(dir.join("intensity_sweep")).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert_eq!(contents.lines().next().unwrap(), "-1 50");
    }
}
