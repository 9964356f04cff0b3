use rand::Rng;
use rgb::RGB8;

use crate::color::gamma_correct;
use crate::framebuffer::FrameBuffer;
use crate::intervaltimer::IntervalGate;

pub const MOONLIGHT_INTERVAL_MS: u32 = 50;

/// Maximum number of simultaneous shimmer animations.
pub const SLOT_COUNT: usize = 20;

/// Base purple the strip rests on and every shimmer returns to.
pub const BASE_COLOR: RGB8 = RGB8 { r: 130, g: 0, b: 255 };

const BASE_COLOR_F: [f32; 3] = [130.0, 0.0, 255.0];

/// Per-step channel deltas for the rising half of a shimmer; the falling half
/// applies the inverse.
const RISE_DELTA: [f32; 3] = [2.4, 3.0, -4.0];

const SHIMMER_STEPS: u8 = 100;

/// One transient sparkle: a pixel that drifts away from the base purple for
/// 50 steps and drifts back over the next 50. Colors are kept as floats so
/// the fractional deltas accumulate without rounding between steps.
pub struct ShimmerSlot {
    pub active: bool,
    pub progress: u8,
    pub color: [f32; 3],
    pub position: usize,
}

impl ShimmerSlot {
    fn idle() -> ShimmerSlot {
        ShimmerSlot {
            active: false,
            progress: 0,
            color: BASE_COLOR_F,
            position: 0,
        }
    }

    pub fn activate(&mut self, position: usize) {
        self.active = true;
        self.progress = 0;
        self.color = BASE_COLOR_F;
        self.position = position;
    }

    /// One color step. Step 100 snaps back to the exact base color and frees
    /// the slot for reuse, so float residue can never build up.
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }

        if self.progress < SHIMMER_STEPS / 2 {
            for (channel, delta) in self.color.iter_mut().zip(RISE_DELTA) {
                *channel += delta;
            }
        } else {
            for (channel, delta) in self.color.iter_mut().zip(RISE_DELTA) {
                *channel -= delta;
            }
        }

        self.progress += 1;
        if self.progress >= SHIMMER_STEPS {
            self.color = BASE_COLOR_F;
            self.active = false;
        }
    }

    pub fn rounded_color(&self) -> RGB8 {
        RGB8::new(
            self.color[0].round() as u8,
            self.color[1].round() as u8,
            self.color[2].round() as u8,
        )
    }
}

/// Purple base glow with up to 20 independent shimmers on top. Only the
/// shimmer pixels are gamma corrected; the base fill is committed raw.
pub struct MoonlightState {
    frame: u8,
    slots: [ShimmerSlot; SLOT_COUNT],
    pub gate: IntervalGate,
}

impl MoonlightState {
    pub fn new(now_ms: u32) -> MoonlightState {
        MoonlightState {
            frame: 0,
            slots: std::array::from_fn(|_| ShimmerSlot::idle()),
            gate: IntervalGate::new(MOONLIGHT_INTERVAL_MS, now_ms),
        }
    }

    pub fn active_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }

    pub fn advance<R: Rng>(
        &mut self,
        rng: &mut R,
        framebuffer: &mut FrameBuffer,
    ) -> Result<(), String> {
        // Roughly one tick in ten tries to light a new shimmer; an already
        // active slot keeps running instead.
        let draw = (rng.gen_range(0.0f32..2.0) * 100.0).floor() as u32;
        if draw % 10 == 0 {
            let index = rng.gen_range(0..SLOT_COUNT);
            if !self.slots[index].active {
                let position = rng.gen_range(0..framebuffer.len());
                self.slots[index].activate(position);
            }
        }

        // The session counter re-lays the base fill each time it wraps.
        // Finished shimmer pixels stay as they are until then.
        if self.frame == 0 {
            framebuffer.fill(BASE_COLOR);
        }

        for slot in &mut self.slots {
            slot.advance();
            if slot.active {
                framebuffer.set(slot.position, gamma_correct(slot.rounded_color()))?;
            }
        }

        self.frame = if self.frame >= SHIMMER_STEPS {
            0
        } else {
            self.frame + 1
        };
        Ok(())
    }
}
