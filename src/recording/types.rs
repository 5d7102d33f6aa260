//! Recording types for motion sample capture and export.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sensors::types::{ReadResult, Reading};

/// Status of the recording controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingStatus {
    /// Not recording
    #[default]
    Idle,
    /// Actively recording
    Recording,
}

/// One accelerometer and one compass reading captured at the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Accelerometer reading
    pub accelerometer: Reading,
    /// Compass reading
    pub compass: Reading,
}

impl Sample {
    /// Join two readings into a sample.
    ///
    /// Returns `None` unless both readings are available and every component
    /// is present; incomplete ticks are never recorded.
    pub fn join(accelerometer: &ReadResult, compass: &ReadResult) -> Option<Self> {
        match (accelerometer, compass) {
            (Ok(accel), Ok(compass)) if accel.is_complete() && compass.is_complete() => {
                Some(Self {
                    accelerometer: *accel,
                    compass: *compass,
                })
            }
            _ => None,
        }
    }
}

/// Ordered, append-only sequence of recorded samples.
///
/// Only the recording controller mutates the buffer; everyone else sees it
/// through a shared reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<Sample>,
}

impl SampleBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub(crate) fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of buffered samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in capture order.
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterate samples in capture order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

/// Paths written by a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Accelerometer channel file
    pub accelerometer_path: PathBuf,
    /// Compass channel file
    pub compass_path: PathBuf,
    /// Number of data rows in each file
    pub rows: usize,
}

/// Result of stopping a recording.
#[derive(Debug, Clone, PartialEq)]
pub enum StopOutcome {
    /// Buffer was written and cleared.
    Exported {
        /// When the recording session started
        started_at: Option<DateTime<Utc>>,
        /// Files written
        summary: ExportSummary,
    },
    /// Nothing was buffered, so no files were touched.
    NothingToExport,
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to write an output file
    #[error("Failed to write {path}: {message}")]
    WriteFailed {
        /// Path that could not be written
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },
}

impl ExportError {
    pub(crate) fn write_failed(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        ExportError::WriteFailed {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
