//! Scripted sensor reader and display surface for integration tests.

use sensorlog::sensors::reader::SensorReader;
use sensorlog::sensors::types::{Capability, ReadResult, Reading, SensorError};
use sensorlog::ui::DisplaySurface;
use std::collections::{HashMap, VecDeque};

/// Sensor reader replaying scripted results, one per tick.
///
/// Once a script runs out the capability reports Unavailable.
#[derive(Default)]
pub struct MockSensorReader {
    accelerometer: VecDeque<ReadResult>,
    compass: VecDeque<ReadResult>,
}

impl MockSensorReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one tick's results.
    pub fn push(&mut self, accelerometer: ReadResult, compass: ReadResult) -> &mut Self {
        self.accelerometer.push_back(accelerometer);
        self.compass.push_back(compass);
        self
    }

    /// Queue a tick where both capabilities return full readings.
    pub fn push_readings(&mut self, accelerometer: [f64; 3], compass: [f64; 3]) -> &mut Self {
        let [ax, ay, az] = accelerometer;
        let [cx, cy, cz] = compass;
        self.push(Ok(Reading::new(ax, ay, az)), Ok(Reading::new(cx, cy, cz)))
    }
}

impl SensorReader for MockSensorReader {
    fn read_accelerometer(&mut self) -> ReadResult {
        self.accelerometer
            .pop_front()
            .unwrap_or(Err(SensorError::Unavailable(Capability::Accelerometer)))
    }

    fn read_compass(&mut self) -> ReadResult {
        self.compass
            .pop_front()
            .unwrap_or(Err(SensorError::Unavailable(Capability::Compass)))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Display surface recording the last text per capability.
#[derive(Default)]
pub struct RecordingSurface {
    pub texts: HashMap<Capability, String>,
    pub updates: usize,
}

impl DisplaySurface for RecordingSurface {
    fn set_text(&mut self, capability: Capability, text: String) {
        self.updates += 1;
        self.texts.insert(capability, text);
    }
}
