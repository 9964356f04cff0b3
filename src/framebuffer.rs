use rgb::RGB8;

use crate::devices::{DeviceError, PixelStrip};

/// In-memory frame for the strip: one RGB value per pixel plus a global
/// brightness scalar applied by the device at commit time. The pixel count is
/// fixed for the lifetime of the buffer.
pub struct FrameBuffer {
    pixels: Vec<RGB8>,
    brightness: f32,
}

impl FrameBuffer {
    pub fn new(pixel_count: usize) -> FrameBuffer {
        FrameBuffer {
            pixels: vec![RGB8::new(0, 0, 0); pixel_count],
            brightness: 1.0,
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    pub fn fill(&mut self, color: RGB8) {
        self.pixels.fill(color);
    }

    pub fn set(&mut self, index: usize, color: RGB8) -> Result<(), String> {
        match self.pixels.get_mut(index) {
            Some(pixel) => {
                *pixel = color;
                Ok(())
            }
            None => Err(format!(
                "pixel index {index} out of range (strip has {} pixels)",
                self.pixels.len()
            )),
        }
    }

    /// Anything outside [0, 1] (NaN included) falls back to full brightness.
    /// That is the firmware's policy: a garbled brightness request must never
    /// leave the strip dark.
    pub fn set_brightness(&mut self, value: f32) {
        self.brightness = if (0.0..=1.0).contains(&value) {
            value
        } else {
            1.0
        };
    }

    /// Pushes the frame to the strip. The one place this layer touches
    /// hardware.
    pub fn commit(&self, strip: &mut dyn PixelStrip) -> Result<(), DeviceError> {
        strip.write(&self.pixels, self.brightness)
    }
}
