//! Recording controller for capturing motion samples.
//!
//! Owns the recording flag and the sample buffer. Samples are only appended
//! while recording; stopping flushes the buffer through the CSV exporter.

use chrono::{DateTime, Utc};

use crate::recording::exporter_csv::CsvExporter;
use crate::recording::types::{ExportError, RecordingStatus, Sample, SampleBuffer, StopOutcome};

/// Records joint accelerometer/compass samples between start and stop.
#[derive(Debug)]
pub struct RecordingController {
    /// Current recording status
    status: RecordingStatus,
    /// Samples captured since the last successful export
    buffer: SampleBuffer,
    /// Writer for the channel files
    exporter: CsvExporter,
    /// When the current (or last unsaved) session started
    started_at: Option<DateTime<Utc>>,
}

impl RecordingController {
    /// Create a controller exporting through `exporter`.
    pub fn new(exporter: CsvExporter) -> Self {
        Self {
            status: RecordingStatus::Idle,
            buffer: SampleBuffer::new(),
            exporter,
            started_at: None,
        }
    }

    /// Create a controller exporting into the working directory.
    pub fn with_defaults() -> Self {
        Self::new(CsvExporter::in_working_dir())
    }

    /// Start recording. Does nothing if already recording.
    pub fn start(&mut self) {
        if self.status == RecordingStatus::Recording {
            return;
        }

        self.status = RecordingStatus::Recording;
        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }

        if self.buffer.is_empty() {
            tracing::info!("Started recording");
        } else {
            tracing::info!(
                "Started recording after {} unsaved samples",
                self.buffer.len()
            );
        }
    }

    /// Stop recording and flush buffered samples.
    ///
    /// The status is Idle once this returns, whatever the outcome. An empty
    /// buffer skips the export entirely. The buffer is cleared only when the
    /// export succeeds; on failure it is kept so that a later stop can retry.
    pub fn stop(&mut self) -> Result<StopOutcome, ExportError> {
        if self.status == RecordingStatus::Recording {
            tracing::info!("Stopped recording with {} samples", self.buffer.len());
        }
        self.status = RecordingStatus::Idle;

        if self.buffer.is_empty() {
            self.started_at = None;
            return Ok(StopOutcome::NothingToExport);
        }

        match self.exporter.export(self.buffer.as_slice()) {
            Ok(summary) => {
                self.buffer.clear();
                Ok(StopOutcome::Exported {
                    started_at: self.started_at.take(),
                    summary,
                })
            }
            Err(e) => {
                tracing::error!(
                    "Export failed, keeping {} samples: {}",
                    self.buffer.len(),
                    e
                );
                Err(e)
            }
        }
    }

    /// Append a sample if recording. Returns whether it was stored.
    pub fn record(&mut self, sample: Sample) -> bool {
        if self.status != RecordingStatus::Recording {
            return false;
        }

        self.buffer.push(sample);
        true
    }

    /// Drop any buffered samples without exporting them.
    pub fn discard(&mut self) {
        let dropped = self.buffer.len();
        self.buffer.clear();
        if self.status == RecordingStatus::Idle {
            self.started_at = None;
        }
        tracing::info!("Discarded {} unsaved samples", dropped);
    }

    /// Current recording status.
    pub fn status(&self) -> RecordingStatus {
        self.status
    }

    /// Whether samples are being captured.
    pub fn is_recording(&self) -> bool {
        self.status == RecordingStatus::Recording
    }

    /// Buffered samples.
    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// Whether samples from a failed export are still waiting to be saved.
    pub fn has_unsaved_samples(&self) -> bool {
        self.status == RecordingStatus::Idle && !self.buffer.is_empty()
    }

    /// Start time of the current session.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Exporter used on stop.
    pub fn exporter(&self) -> &CsvExporter {
        &self.exporter
    }
}

impl Default for RecordingController {
    fn default() -> Self {
        Self::with_defaults()
    }
}
