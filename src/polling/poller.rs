//! Sensor polling loop.
//!
//! Each tick reads both capabilities independently, refreshes the display
//! surface, and records a joint sample while recording is active.

use std::time::{Duration, Instant};

use crate::polling::ticker::{Ticker, POLL_PERIOD};
use crate::recording::recorder::RecordingController;
use crate::recording::types::Sample;
use crate::sensors::reader::SensorReader;
use crate::sensors::types::{Capability, ReadResult};
use crate::ui::format::reading_text;
use crate::ui::DisplaySurface;

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Accelerometer query result
    pub accelerometer: ReadResult,
    /// Compass query result
    pub compass: ReadResult,
    /// Whether a sample was appended to the buffer
    pub recorded: bool,
}

/// Fixed-rate sensor polling loop.
pub struct PollingLoop {
    reader: Box<dyn SensorReader>,
    ticker: Ticker,
    ticks: u64,
}

impl PollingLoop {
    /// Create a polling loop over `reader`, ticking every 50 ms.
    pub fn new(reader: Box<dyn SensorReader>) -> Self {
        Self {
            reader,
            ticker: Ticker::new(POLL_PERIOD),
            ticks: 0,
        }
    }

    /// Run one tick.
    pub fn tick(
        &mut self,
        controller: &mut RecordingController,
        surface: &mut dyn DisplaySurface,
    ) -> TickReport {
        let accelerometer = self.reader.read_accelerometer();
        let compass = self.reader.read_compass();

        surface.set_text(
            Capability::Accelerometer,
            reading_text(Capability::Accelerometer, &accelerometer),
        );
        surface.set_text(
            Capability::Compass,
            reading_text(Capability::Compass, &compass),
        );

        let recorded = controller.is_recording()
            && Sample::join(&accelerometer, &compass)
                .map(|sample| controller.record(sample))
                .unwrap_or(false);

        self.ticks += 1;
        tracing::trace!(tick = self.ticks, recorded, "Polled sensors");

        TickReport {
            accelerometer,
            compass,
            recorded,
        }
    }

    /// Run a tick if one is due at `now`.
    pub fn poll(
        &mut self,
        now: Instant,
        controller: &mut RecordingController,
        surface: &mut dyn DisplaySurface,
    ) -> Option<TickReport> {
        if self.ticker.poll(now) {
            Some(self.tick(controller, surface))
        } else {
            None
        }
    }

    /// Time until the next tick is due.
    pub fn time_until_next_tick(&self, now: Instant) -> Duration {
        self.ticker.time_until_next(now)
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Name of the sensor backend.
    pub fn reader_name(&self) -> &str {
        self.reader.name()
    }
}
