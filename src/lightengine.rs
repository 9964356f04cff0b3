use rgb::RGB8;

use crate::command::{parse_line, Command};
use crate::devices::{CommandPort, DeviceError, MonotonicClock, PixelStrip, StatusLed};
use crate::effects::{EffectState, MoonlightState, RainbowState, SunriseState};
use crate::framebuffer::FrameBuffer;
use crate::intervaltimer::IntervalTimer;

/// Loop rate. Rainbow advances every iteration, so this also sets its cycle
/// time: 256 frames at 125 Hz is a hue rotation every ~2 s.
const LOOP_FREQ_HZ: f32 = 125.0;

const STATUS_POWER_COLOR: RGB8 = RGB8 { r: 25, g: 0, b: 0 };

/// The control loop: polls the command port, decodes, advances the active
/// effect when its gate allows and commits frames to the strip. Owns the
/// frame buffer and effect state outright; nothing else touches them.
pub struct LightEngine {
    framebuffer: FrameBuffer,
    effect: EffectState,
    strip: Box<dyn PixelStrip>,
    status: Box<dyn StatusLed>,
    clock: Box<dyn MonotonicClock>,
    port: Box<dyn CommandPort>,
    timer: IntervalTimer,
}

impl LightEngine {
    /// Builds the engine and performs the power-on indication: dim red on the
    /// status LED, main strip dark and committed once.
    pub fn new(
        strip: Box<dyn PixelStrip>,
        mut status: Box<dyn StatusLed>,
        clock: Box<dyn MonotonicClock>,
        port: Box<dyn CommandPort>,
    ) -> Result<LightEngine, DeviceError> {
        let pixel_count = strip.pixel_count();

        status.set_brightness(0.5);
        status.set(RGB8::new(0, 0, 0));
        status.set(STATUS_POWER_COLOR);

        let mut engine = LightEngine {
            framebuffer: FrameBuffer::new(pixel_count),
            effect: EffectState::Off,
            strip,
            status,
            clock,
            port,
            timer: IntervalTimer::new(LOOP_FREQ_HZ, false),
        };

        engine.framebuffer.fill(RGB8::new(0, 0, 0));
        engine.framebuffer.commit(engine.strip.as_mut())?;
        Ok(engine)
    }

    /// Runs forever under normal operation. Only a strip write failure gets
    /// out; everything a command line can do wrong is recovered inside.
    pub fn run(&mut self) -> Result<(), DeviceError> {
        loop {
            while let Some(line) = self.port.poll_line() {
                self.handle_line(&line)?;
            }
            self.tick()?;
            self.timer.sleep_until_next_tick();
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Result<(), DeviceError> {
        match parse_line(line) {
            Some(command) => self.apply(command),
            None => Ok(()),
        }
    }

    fn apply(&mut self, command: Command) -> Result<(), DeviceError> {
        let now = self.clock.now_ms();
        match command {
            Command::Rainbow => {
                self.framebuffer.set_brightness(1.0);
                self.effect = EffectState::Rainbow(RainbowState::new());
            }
            Command::Off => {
                self.framebuffer.set_brightness(1.0);
                self.effect = EffectState::Off;
                self.framebuffer.fill(RGB8::new(0, 0, 0));
                self.framebuffer.commit(self.strip.as_mut())?;
            }
            Command::Colour(color) => {
                self.framebuffer.set_brightness(1.0);
                self.effect = EffectState::Solid(color);
                self.framebuffer.fill(color);
                self.framebuffer.commit(self.strip.as_mut())?;
            }
            Command::Sunrise => {
                self.framebuffer.set_brightness(1.0);
                self.effect = EffectState::Sunrise(SunriseState::new(now));
            }
            Command::Moonlight => {
                // Brightness deliberately carries over; moonlight is meant to
                // be usable dimmed.
                self.effect = EffectState::Moonlight(MoonlightState::new(now));
            }
            Command::Brightness(value) => {
                self.framebuffer.set_brightness(value);
                self.framebuffer.commit(self.strip.as_mut())?;
            }
        }
        Ok(())
    }

    /// One cooperative step: advance the active effect if it is due and
    /// commit the result.
    pub fn tick(&mut self) -> Result<(), DeviceError> {
        let now = self.clock.now_ms();
        let advanced = match &mut self.effect {
            EffectState::Off | EffectState::Solid(_) => Ok(false),
            EffectState::Rainbow(state) => state.advance(&mut self.framebuffer).map(|()| true),
            EffectState::Sunrise(state) => {
                if state.gate.is_due(now) {
                    state.advance(&mut self.framebuffer);
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            EffectState::Moonlight(state) => {
                if state.gate.is_due(now) {
                    state
                        .advance(&mut rand::thread_rng(), &mut self.framebuffer)
                        .map(|()| true)
                } else {
                    Ok(false)
                }
            }
        };

        match advanced {
            Ok(true) => self.framebuffer.commit(self.strip.as_mut()),
            Ok(false) => Ok(()),
            Err(err) => {
                log::warn!("Skipping frame: {err}");
                Ok(())
            }
        }
    }

    pub fn effect(&self) -> &EffectState {
        &self.effect
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }
}
