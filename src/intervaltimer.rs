use std::thread;
use std::time::{Duration, Instant};

/// Blocking fixed-rate pacer for the main loop.
pub struct IntervalTimer {
    interval: Duration,
    last_tick: Instant,
    thread_name: String,
    measure_fps: bool,
    last_fps_print: Instant,
    frames: u32,
}

impl IntervalTimer {
    pub fn new(freq_hz: f32, measure_fps: bool) -> IntervalTimer {
        let frame_duration_microsec = 1000.0 / freq_hz * 1000.0;
        let cur_thread = thread::current();
        let thread_name = if let Some(name) = cur_thread.name() {
            name
        } else {
            "unnamed"
        };

        IntervalTimer {
            interval: Duration::from_micros(frame_duration_microsec as u64),
            last_tick: Instant::now(),
            thread_name: thread_name.to_string(),
            measure_fps,
            last_fps_print: Instant::now(),
            frames: 0,
        }
    }

    pub fn sleep_until_next_tick(&mut self) {
        if self.measure_fps {
            self.update_fps();
        }

        let next_tick = if self.last_tick + self.interval > Instant::now() {
            self.last_tick + self.interval
        } else {
            log::debug!("{} skipped a frame", self.thread_name);
            Instant::now() + self.interval
        };

        std::thread::sleep(next_tick - Instant::now());
        self.last_tick = next_tick
    }

    fn update_fps(&mut self) {
        self.frames += 1;

        if Instant::now() - self.last_fps_print > Duration::from_secs(1) {
            log::debug!("{} FPS: {}", self.thread_name, self.frames);
            self.frames = 0;
            self.last_fps_print = Instant::now();
        }
    }
}

/// Non-blocking rate gate over wrapping millisecond ticks. Effects hold one of
/// these so switching effects resets the gate along with the rest of their
/// state. Wrapping subtraction keeps a timer wraparound from stalling the
/// effect for a full cycle.
pub struct IntervalGate {
    interval_ms: u32,
    last_tick_ms: u32,
}

impl IntervalGate {
    pub fn new(interval_ms: u32, now_ms: u32) -> IntervalGate {
        IntervalGate {
            interval_ms,
            last_tick_ms: now_ms,
        }
    }

    /// True once per interval; advances the gate when it fires.
    pub fn is_due(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_tick_ms) >= self.interval_ms {
            self.last_tick_ms = now_ms;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_fires_once_per_interval() {
        let mut gate = IntervalGate::new(50, 1000);
        assert!(!gate.is_due(1000));
        assert!(!gate.is_due(1049));
        assert!(gate.is_due(1050));
        assert!(!gate.is_due(1051));
        assert!(gate.is_due(1100));
    }

    #[test]
    fn gate_survives_timer_wraparound() {
        let start = u32::MAX - 10;
        let mut gate = IntervalGate::new(50, start);
        assert!(!gate.is_due(start.wrapping_add(41)));
        assert!(gate.is_due(start.wrapping_add(50)));
        // No multi-cycle stall after the wrap.
        assert!(gate.is_due(89));
    }
}
