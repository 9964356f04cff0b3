use crate::color::wheel;
use crate::framebuffer::FrameBuffer;

/// Full-strip hue rotation. No rate gate; this advances on every loop
/// iteration, so the loop frequency sets the cycle speed.
pub struct RainbowState {
    frame: u8,
}

impl RainbowState {
    pub fn new() -> RainbowState {
        RainbowState { frame: 0 }
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Renders the current frame and moves the counter one step around the
    /// 0..=255 cycle.
    pub fn advance(&mut self, framebuffer: &mut FrameBuffer) -> Result<(), String> {
        let pixel_count = framebuffer.len();
        for i in 0..pixel_count {
            let position = ((i * 256 / pixel_count + self.frame as usize) & 255) as u8;
            framebuffer.set(i, wheel(position))?;
        }
        self.frame = self.frame.wrapping_add(1);
        Ok(())
    }
}
