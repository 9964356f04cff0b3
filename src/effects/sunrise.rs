use crate::color::sunrise_channels;
use crate::framebuffer::FrameBuffer;
use crate::intervaltimer::IntervalGate;

/// One frame every 3.9 s walks the 230-frame ramp in about 15 minutes.
pub const SUNRISE_INTERVAL_MS: u32 = 3900;

/// Last frame of the ramp; the effect holds there.
pub const SUNRISE_MAX_FRAME: u8 = 230;

/// Slow dawn ramp over the whole strip.
pub struct SunriseState {
    frame: u8,
    pub gate: IntervalGate,
}

impl SunriseState {
    pub fn new(now_ms: u32) -> SunriseState {
        SunriseState {
            frame: 0,
            gate: IntervalGate::new(SUNRISE_INTERVAL_MS, now_ms),
        }
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Renders the current frame uniformly, then steps toward the terminal
    /// frame. Past the end this keeps re-rendering the same colors, which is
    /// the intended hold.
    pub fn advance(&mut self, framebuffer: &mut FrameBuffer) {
        framebuffer.fill(sunrise_channels(self.frame));
        if self.frame < SUNRISE_MAX_FRAME {
            self.frame += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_advance_renders_frame_zero() {
        let mut framebuffer = FrameBuffer::new(40);
        let mut state = SunriseState::new(0);
        state.advance(&mut framebuffer);
        assert!(framebuffer
            .pixels()
            .iter()
            .all(|p| *p == sunrise_channels(0)));
        assert_eq!(state.frame(), 1);
    }

    #[test]
    fn holds_at_the_terminal_frame() {
        let mut framebuffer = FrameBuffer::new(40);
        let mut state = SunriseState::new(0);
        for _ in 0..1000 {
            state.advance(&mut framebuffer);
        }
        assert_eq!(state.frame(), SUNRISE_MAX_FRAME);

        let frozen = framebuffer.pixels().to_vec();
        state.advance(&mut framebuffer);
        assert_eq!(state.frame(), SUNRISE_MAX_FRAME);
        assert_eq!(framebuffer.pixels(), &frozen[..]);
        assert!(framebuffer
            .pixels()
            .iter()
            .all(|p| *p == sunrise_channels(SUNRISE_MAX_FRAME)));
    }
}
