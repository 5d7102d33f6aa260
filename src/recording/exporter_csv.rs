//! CSV export of recorded motion samples.
//!
//! Each export writes two channel files, one for the accelerometer and one
//! for the compass, replacing any previous contents.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::recording::types::{ExportError, ExportSummary, Sample};
use crate::sensors::types::Reading;

/// File name of the accelerometer channel.
pub const ACCELEROMETER_FILE: &str = "accelerometer_data.csv";
/// File name of the compass channel.
pub const COMPASS_FILE: &str = "compass_data.csv";

const ACCELEROMETER_HEADER: &str = "accel_x,accel_y,accel_z";
const COMPASS_HEADER: &str = "compass_x,compass_y,compass_z";

/// Format a value exactly, in decimal notation.
///
/// Uses the shortest representation that parses back to the same value;
/// integral values keep one fractional digit.
pub fn format_value(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

fn write_row(output: &mut Vec<u8>, reading: &Reading) -> std::io::Result<()> {
    let fields: Vec<String> = reading
        .components()
        .into_iter()
        .map(|c| c.map_or(String::new(), format_value))
        .collect();
    writeln!(output, "{}", fields.join(","))
}

fn export_channel(
    header: &str,
    samples: &[Sample],
    reading: impl Fn(&Sample) -> &Reading,
) -> std::io::Result<String> {
    let mut output = Vec::new();

    writeln!(output, "{}", header)?;
    for sample in samples {
        write_row(&mut output, reading(sample))?;
    }

    String::from_utf8(output).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Export the accelerometer channel to CSV text.
pub fn export_accelerometer_csv(samples: &[Sample]) -> std::io::Result<String> {
    export_channel(ACCELEROMETER_HEADER, samples, |s| &s.accelerometer)
}

/// Export the compass channel to CSV text.
pub fn export_compass_csv(samples: &[Sample]) -> std::io::Result<String> {
    export_channel(COMPASS_HEADER, samples, |s| &s.compass)
}

/// Writes sample buffers to the two channel files in a directory.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    /// Create an exporter writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Create an exporter writing into the process working directory.
    pub fn in_working_dir() -> Self {
        Self::new(".")
    }

    /// Directory the files are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the accelerometer channel file.
    pub fn accelerometer_path(&self) -> PathBuf {
        self.output_dir.join(ACCELEROMETER_FILE)
    }

    /// Path of the compass channel file.
    pub fn compass_path(&self) -> PathBuf {
        self.output_dir.join(COMPASS_FILE)
    }

    /// Write both channel files, truncating previous contents.
    pub fn export(&self, samples: &[Sample]) -> Result<ExportSummary, ExportError> {
        let accelerometer_path = self.accelerometer_path();
        let compass_path = self.compass_path();

        write_channel(&accelerometer_path, export_accelerometer_csv(samples))?;
        write_channel(&compass_path, export_compass_csv(samples))?;

        tracing::info!(
            "Exported {} samples to {} and {}",
            samples.len(),
            accelerometer_path.display(),
            compass_path.display()
        );

        Ok(ExportSummary {
            accelerometer_path,
            compass_path,
            rows: samples.len(),
        })
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::in_working_dir()
    }
}

fn write_channel(path: &Path, content: std::io::Result<String>) -> Result<(), ExportError> {
    let content = content.map_err(|e| ExportError::write_failed(path, e))?;
    std::fs::write(path, content).map_err(|e| ExportError::write_failed(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_samples(count: usize) -> Vec<Sample> {
        (0..count)
            .map(|i| {
                let v = i as f64;
                Sample {
                    accelerometer: Reading::new(v + 0.125, -v, 9.81),
                    compass: Reading::new(25.0, v * 0.1, -40.0),
                }
            })
            .collect()
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_format_value() {
        assert_eq!(format_value(1.0), "1.0");
        assert_eq!(format_value(-3.0), "-3.0");
        assert_eq!(format_value(3.14159), "3.14159");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_export_csv_generates_content() {
        let samples = create_test_samples(10);

        let csv = export_accelerometer_csv(&samples).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        // Header + 10 data rows
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "accel_x,accel_y,accel_z");
        assert_eq!(lines[1], "0.125,-0.0,9.81");
    }

    #[test]
    fn test_export_compass_header() {
        let csv = export_compass_csv(&create_test_samples(2)).unwrap();
        let header = csv.lines().next().unwrap();

        assert_eq!(header, "compass_x,compass_y,compass_z");
        assert_eq!(csv.lines().nth(2).unwrap(), "25.0,0.1,-40.0");
    }

    #[test]
    fn test_export_empty_samples_writes_header_only() {
        let csv = export_accelerometer_csv(&[]).unwrap();
        assert_eq!(csv, "accel_x,accel_y,accel_z\n");
    }

    #[test]
    fn test_csv_handles_missing_component() {
        let samples = vec![Sample {
            accelerometer: Reading::from_components(Some(1.0), None, Some(3.0)),
            compass: Reading::new(4.0, 5.0, 6.0),
        }];

        let csv = export_accelerometer_csv(&samples).unwrap();
        assert_eq!(csv.lines().nth(1).unwrap(), "1.0,,3.0");
    }

    #[test]
    fn test_round_trip_values() {
        let samples = create_test_samples(25);
        let csv = export_accelerometer_csv(&samples).unwrap();

        for (line, sample) in csv.lines().skip(1).zip(samples.iter()) {
            let values: Vec<f64> = line.split(',').map(|f| f.parse().unwrap()).collect();
            assert_eq!(values[0], sample.accelerometer.x.unwrap());
            assert_eq!(values[1], sample.accelerometer.y.unwrap());
            assert_eq!(values[2], sample.accelerometer.z.unwrap());
        }
    }

    #[test]
    fn test_export_writes_both_files() {
        let tmp = TempDir::new().unwrap();
        let exporter = CsvExporter::new(tmp.path());

        let summary = exporter.export(&create_test_samples(3)).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.accelerometer_path, tmp.path().join(ACCELEROMETER_FILE));

        let accel = std::fs::read_to_string(exporter.accelerometer_path()).unwrap();
        let compass = std::fs::read_to_string(exporter.compass_path()).unwrap();
        assert_eq!(accel.lines().count(), 4);
        assert_eq!(compass.lines().count(), 4);
    }

    #[test]
    fn test_export_truncates_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let exporter = CsvExporter::new(tmp.path());

        exporter.export(&create_test_samples(10)).unwrap();
        exporter.export(&create_test_samples(2)).unwrap();

        let accel = std::fs::read_to_string(exporter.accelerometer_path()).unwrap();
        assert_eq!(accel.lines().count(), 3);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let exporter = CsvExporter::new(tmp.path().join("does-not-exist"));

        let err = exporter.export(&create_test_samples(1)).unwrap_err();
        match err {
            ExportError::WriteFailed { path, .. } => {
                assert_eq!(path, exporter.accelerometer_path());
            }
        }
    }
}
