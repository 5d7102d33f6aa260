//! Linux industrial I/O (IIO) sensor backend.
//!
//! Motion sensors on Linux laptops, tablets and phones are exposed by the
//! kernel under `/sys/bus/iio/devices/iio:deviceN/`. Each axis has a
//! `<channel>_<axis>_raw` attribute; the physical value is
//! `(raw + offset) * scale`, where scale and offset are either per-axis or
//! shared by the channel.

use std::path::{Path, PathBuf};

use crate::sensors::reader::SensorReader;
use crate::sensors::types::{Capability, ReadResult, Reading, SensorError};

/// Default sysfs root for IIO devices.
pub const DEFAULT_IIO_ROOT: &str = "/sys/bus/iio/devices";

const AXES: [&str; 3] = ["x", "y", "z"];

fn channel_prefix(capability: Capability) -> &'static str {
    match capability {
        Capability::Accelerometer => "in_accel",
        Capability::Compass => "in_magn",
    }
}

/// One IIO channel group (accelerometer or magnetometer) on a device.
#[derive(Debug, Clone)]
struct IioChannel {
    device_dir: PathBuf,
    prefix: &'static str,
}

impl IioChannel {
    /// Find the first device under `root` providing this capability.
    fn find(devices: &[PathBuf], capability: Capability) -> Option<Self> {
        let prefix = channel_prefix(capability);
        devices
            .iter()
            .find(|dir| dir.join(format!("{}_x_raw", prefix)).exists())
            .map(|dir| Self {
                device_dir: dir.clone(),
                prefix,
            })
    }

    fn read(&self) -> Reading {
        Reading::from_components(
            self.read_axis(AXES[0]),
            self.read_axis(AXES[1]),
            self.read_axis(AXES[2]),
        )
    }

    fn read_axis(&self, axis: &str) -> Option<f64> {
        let raw = self.attribute(&format!("{}_{}_raw", self.prefix, axis))?;
        let scale = self
            .attribute(&format!("{}_{}_scale", self.prefix, axis))
            .or_else(|| self.attribute(&format!("{}_scale", self.prefix)))
            .unwrap_or(1.0);
        let offset = self
            .attribute(&format!("{}_{}_offset", self.prefix, axis))
            .or_else(|| self.attribute(&format!("{}_offset", self.prefix)))
            .unwrap_or(0.0);
        Some((raw + offset) * scale)
    }

    fn attribute(&self, name: &str) -> Option<f64> {
        read_number(&self.device_dir.join(name))
    }
}

fn read_number(path: &Path) -> Option<f64> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|content| content.trim().parse::<f64>().ok())
}

/// Sensor reader backed by sysfs IIO attributes.
#[derive(Debug, Clone, Default)]
pub struct IioSensorReader {
    accelerometer: Option<IioChannel>,
    compass: Option<IioChannel>,
}

impl IioSensorReader {
    /// Scan `root` for IIO devices exposing accelerometer and magnetometer
    /// channels. Missing or unreadable roots yield a reader with no
    /// capabilities.
    pub fn discover(root: &Path) -> Self {
        let mut devices: Vec<PathBuf> = match std::fs::read_dir(root) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_dir())
                .collect(),
            Err(e) => {
                tracing::debug!("Cannot scan IIO root {}: {}", root.display(), e);
                Vec::new()
            }
        };
        devices.sort();

        let accelerometer = IioChannel::find(&devices, Capability::Accelerometer);
        let compass = IioChannel::find(&devices, Capability::Compass);

        for (capability, channel) in [
            (Capability::Accelerometer, &accelerometer),
            (Capability::Compass, &compass),
        ] {
            match channel {
                Some(channel) => tracing::debug!(
                    "Found {} at {}",
                    capability,
                    channel.device_dir.display()
                ),
                None => tracing::debug!("No IIO device provides {}", capability),
            }
        }

        Self {
            accelerometer,
            compass,
        }
    }

    /// Whether a device was found for the capability.
    pub fn has(&self, capability: Capability) -> bool {
        self.channel(capability).is_some()
    }

    fn channel(&self, capability: Capability) -> Option<&IioChannel> {
        match capability {
            Capability::Accelerometer => self.accelerometer.as_ref(),
            Capability::Compass => self.compass.as_ref(),
        }
    }

    fn read_capability(&self, capability: Capability) -> ReadResult {
        self.channel(capability)
            .map(IioChannel::read)
            .ok_or(SensorError::Unavailable(capability))
    }
}

impl SensorReader for IioSensorReader {
    fn read_accelerometer(&mut self) -> ReadResult {
        self.read_capability(Capability::Accelerometer)
    }

    fn read_compass(&mut self) -> ReadResult {
        self.read_capability(Capability::Compass)
    }

    fn name(&self) -> &str {
        "iio"
    }
}
