//! Recording module for motion sample capture and export.

pub mod exporter_csv;
pub mod recorder;
pub mod types;

pub use exporter_csv::CsvExporter;
pub use recorder::RecordingController;
pub use types::{ExportError, ExportSummary, RecordingStatus, Sample, SampleBuffer, StopOutcome};
