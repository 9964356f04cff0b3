use std::fmt;
use std::time::Instant;

use rgb::RGB8;

/// Errors reported by hardware collaborators. A failed strip write is fatal
/// for the engine; there is nothing this layer can do about a dead display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    WriteFailed(String),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::WriteFailed(msg) => write!(f, "strip write failed: {msg}"),
        }
    }
}

impl std::error::Error for DeviceError {}

/// The addressable strip. Implementations apply the brightness scalar and
/// their configured wire order; callers always pass logical RGB.
pub trait PixelStrip {
    fn pixel_count(&self) -> usize;
    fn write(&mut self, pixels: &[RGB8], brightness: f32) -> Result<(), DeviceError>;
}

/// Single-pixel status indicator, only used for the power-on indication.
pub trait StatusLed {
    fn set(&mut self, color: RGB8);
    fn set_brightness(&mut self, value: f32);
}

/// Monotonic time source in wrapping milliseconds. Consumers must use
/// wrapping arithmetic on the returned ticks.
pub trait MonotonicClock {
    fn now_ms(&self) -> u32;
}

/// Non-blocking source of command lines.
pub trait CommandPort {
    fn poll_line(&mut self) -> Option<String>;
}

pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl MonotonicClock for SystemClock {
    fn now_ms(&self) -> u32 {
        // Truncation is the wraparound the trait promises.
        self.start.elapsed().as_millis() as u32
    }
}

/// Host stand-in for the controller's indicator LED.
pub struct LogStatusLed {
    brightness: f32,
}

impl LogStatusLed {
    pub fn new() -> LogStatusLed {
        LogStatusLed { brightness: 1.0 }
    }
}

impl StatusLed for LogStatusLed {
    fn set(&mut self, color: RGB8) {
        log::debug!(
            "Status LED: ({}, {}, {}) at brightness {}",
            color.r,
            color.g,
            color.b,
            self.brightness
        );
    }

    fn set_brightness(&mut self, value: f32) {
        self.brightness = value;
    }
}
