#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

use crate::FrameAnimator;

#[cfg(target_arch = "wasm32")]
fn now() -> f32 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or(0.0, |perf| (perf.now() / 1000.0) as f32)
}

#[cfg(not(target_arch = "wasm32"))]
fn now(start: Instant) -> f32 {
    start.elapsed().as_secs_f32()
}

/// Host-side frame clock feeding [`FrameAnimator::advance`]
///
/// Measures delta time & counts frames per second, sampled once per second.
/// Until the first full second has passed, `fps` is estimated from the latest delta
pub struct FrameClock {
    #[cfg(not(target_arch = "wasm32"))]
    start: Instant,
    last_time: f32,
    accumulator: f32,
    frame_count: u32,
    sampled: bool,
    /// Time in seconds since the last frame
    pub delta: f32,
    /// Frames per second
    pub fps: u32,
    /// Total number of frames since start
    pub frame: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            start: Instant::now(),
            last_time: 0.0,
            accumulator: 0.0,
            frame_count: 0,
            sampled: false,
            delta: 0.0,
            fps: 0,
            frame: 0,
        }
    }

    /// Measures wall time since the previous call & steps the clock by it
    pub fn update(&mut self) {
        let cur_time = {
            #[cfg(not(target_arch = "wasm32"))]
            {
                now(self.start)
            }
            #[cfg(target_arch = "wasm32")]
            {
                now()
            }
        };

        let delta = cur_time - self.last_time;
        self.last_time = cur_time;
        self.step(delta);
    }

    /// Steps the clock by a fixed `delta`, for headless or fixed-step hosts
    pub fn step(&mut self, delta: f32) {
        self.delta = delta.max(0.0);
        self.accumulator += self.delta;
        self.frame_count += 1;
        self.frame += 1;

        if self.accumulator >= 1.0 {
            self.fps = self.frame_count;
            self.frame_count = 0;
            self.accumulator = 0.0;
            self.sampled = true;
        } else if !self.sampled && self.delta > 0.0 {
            self.fps = (1.0 / self.delta).round() as u32;
        }
    }

    /// Advances `animator` by the current frame
    pub fn drive(&self, animator: &mut FrameAnimator) {
        animator.advance(self.delta, self.fps);
    }
}
