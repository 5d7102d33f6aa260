//! Integration tests for the poll, record and export flow.

use sensorlog::polling::PollingLoop;
use sensorlog::recording::exporter_csv::{ACCELEROMETER_FILE, COMPASS_FILE};
use sensorlog::recording::recorder::RecordingController;
use sensorlog::recording::types::{RecordingStatus, StopOutcome};
use sensorlog::recording::CsvExporter;
use sensorlog::sensors::types::{Capability, Reading, SensorError};
use tempfile::TempDir;

use crate::sensor_mock::{MockSensorReader, RecordingSurface};

fn read_file(dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(dir.path().join(name)).unwrap()
}

#[test]
fn test_unavailable_tick_is_not_recorded() {
    let tmp = TempDir::new().unwrap();
    let mut controller = RecordingController::new(CsvExporter::new(tmp.path()));
    let mut reader = MockSensorReader::new();
    reader.push_readings([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
    reader.push(
        Err(SensorError::Unavailable(Capability::Accelerometer)),
        Ok(Reading::new(7.0, 8.0, 9.0)),
    );
    let mut polling = PollingLoop::new(Box::new(reader));
    let mut surface = RecordingSurface::default();

    controller.start();
    assert!(polling.tick(&mut controller, &mut surface).recorded);
    assert!(!polling.tick(&mut controller, &mut surface).recorded);

    assert_eq!(
        surface.texts[&Capability::Accelerometer],
        "Accelerometer not implemented on this platform"
    );
    assert_eq!(
        surface.texts[&Capability::Compass],
        "Compass Data:\nX: 7.00\nY: 8.00\nZ: 9.00"
    );

    let outcome = controller.stop().unwrap();
    assert!(matches!(outcome, StopOutcome::Exported { ref summary, .. } if summary.rows == 1));
    assert_eq!(controller.status(), RecordingStatus::Idle);
    assert!(controller.buffer().is_empty());

    assert_eq!(
        read_file(&tmp, ACCELEROMETER_FILE),
        "accel_x,accel_y,accel_z\n1.0,2.0,3.0\n"
    );
    assert_eq!(
        read_file(&tmp, COMPASS_FILE),
        "compass_x,compass_y,compass_z\n4.0,5.0,6.0\n"
    );
}

#[test]
fn test_every_tick_updates_display_while_idle() {
    let tmp = TempDir::new().unwrap();
    let mut controller = RecordingController::new(CsvExporter::new(tmp.path()));
    let mut reader = MockSensorReader::new();
    for i in 0..3 {
        reader.push_readings([i as f64, 0.0, 0.0], [0.0, 0.0, 0.0]);
    }
    let mut polling = PollingLoop::new(Box::new(reader));
    let mut surface = RecordingSurface::default();

    for _ in 0..3 {
        polling.tick(&mut controller, &mut surface);
    }

    assert_eq!(surface.updates, 6);
    assert_eq!(
        surface.texts[&Capability::Accelerometer],
        "Accelerometer Data:\nX: 2.00\nY: 0.00\nZ: 0.00"
    );
    assert!(controller.buffer().is_empty());
}

#[test]
fn test_recorded_values_round_trip_exactly() {
    let tmp = TempDir::new().unwrap();
    let mut controller = RecordingController::new(CsvExporter::new(tmp.path()));
    let mut reader = MockSensorReader::new();
    let values: Vec<([f64; 3], [f64; 3])> = (0..40)
        .map(|i| {
            let t = i as f64 * 0.05;
            (
                [t.sin() * 0.4, t.cos() / 3.0, 9.80665],
                [25.0 * t.cos(), -25.0 * t.sin(), -40.0 + t],
            )
        })
        .collect();
    for (accel, compass) in &values {
        reader.push_readings(*accel, *compass);
    }
    let mut polling = PollingLoop::new(Box::new(reader));
    let mut surface = RecordingSurface::default();

    controller.start();
    for _ in 0..values.len() {
        polling.tick(&mut controller, &mut surface);
    }
    controller.stop().unwrap();

    let accel = read_file(&tmp, ACCELEROMETER_FILE);
    let compass = read_file(&tmp, COMPASS_FILE);
    assert_eq!(accel.lines().count(), values.len() + 1);
    assert_eq!(compass.lines().count(), values.len() + 1);

    let parse = |line: &str| -> Vec<f64> {
        line.split(',').map(|f| f.parse().unwrap()).collect()
    };
    for ((accel_line, compass_line), (accel_expected, compass_expected)) in accel
        .lines()
        .skip(1)
        .zip(compass.lines().skip(1))
        .zip(values.iter())
    {
        assert_eq!(parse(accel_line), accel_expected.to_vec());
        assert_eq!(parse(compass_line), compass_expected.to_vec());
    }
}

#[test]
fn test_start_twice_keeps_buffer() {
    let tmp = TempDir::new().unwrap();
    let mut controller = RecordingController::new(CsvExporter::new(tmp.path()));
    let mut reader = MockSensorReader::new();
    reader.push_readings([1.0, 1.0, 1.0], [2.0, 2.0, 2.0]);
    let mut polling = PollingLoop::new(Box::new(reader));
    let mut surface = RecordingSurface::default();

    controller.start();
    polling.tick(&mut controller, &mut surface);
    controller.start();

    assert_eq!(controller.status(), RecordingStatus::Recording);
    assert_eq!(controller.buffer().len(), 1);
}

#[test]
fn test_stop_without_samples_leaves_no_files() {
    let tmp = TempDir::new().unwrap();
    let mut controller = RecordingController::new(CsvExporter::new(tmp.path()));
    let mut polling = PollingLoop::new(Box::new(MockSensorReader::new()));
    let mut surface = RecordingSurface::default();

    controller.start();
    for _ in 0..5 {
        polling.tick(&mut controller, &mut surface);
    }

    assert_eq!(controller.stop().unwrap(), StopOutcome::NothingToExport);
    assert!(!tmp.path().join(ACCELEROMETER_FILE).exists());
    assert!(!tmp.path().join(COMPASS_FILE).exists());
}

#[test]
fn test_second_session_replaces_files() {
    let tmp = TempDir::new().unwrap();
    let mut controller = RecordingController::new(CsvExporter::new(tmp.path()));
    let mut reader = MockSensorReader::new();
    reader
        .push_readings([1.0, 1.0, 1.0], [1.0, 1.0, 1.0])
        .push_readings([2.0, 2.0, 2.0], [2.0, 2.0, 2.0])
        .push_readings([3.0, 3.0, 3.0], [3.0, 3.0, 3.0]);
    let mut polling = PollingLoop::new(Box::new(reader));
    let mut surface = RecordingSurface::default();

    controller.start();
    polling.tick(&mut controller, &mut surface);
    polling.tick(&mut controller, &mut surface);
    controller.stop().unwrap();

    controller.start();
    polling.tick(&mut controller, &mut surface);
    controller.stop().unwrap();

    assert_eq!(
        read_file(&tmp, ACCELEROMETER_FILE),
        "accel_x,accel_y,accel_z\n3.0,3.0,3.0\n"
    );
}
