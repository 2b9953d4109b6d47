//! Per-frame update loop.
//!
//! Each frame the orbit controller is updated with the time since the last
//! frame, then the renderer draws the scene:
//! 1. Measure the frame delta on the [`Clock`]
//! 2. Call [`Controls::update`] with the current [`OrbitControls`]
//! 3. Call [`Renderer::render`]
//!
//! Input is not polled here; window events go through
//! [`crate::context::handle_window_event`] between frames.

use instant::{Duration, Instant};

use crate::{
    camera::OrbitControls, context::AppContext, data_structures::scene::Scene, render::Renderer,
};

/// Wall clock for the frame loop.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: Instant,
    last: Instant,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time since the previous call (or since creation).
    pub fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// The interactive camera controller: damped orbiting and auto-rotation.
pub trait Controls {
    fn update(&mut self, settings: &OrbitControls, dt: Duration);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub dt: Duration,
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    clock: Clock,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick<C: Controls, R: Renderer>(
        &mut self,
        ctx: &AppContext,
        scene: &Scene,
        controls: &mut C,
        renderer: &mut R,
    ) -> anyhow::Result<FrameStats> {
        let dt = self.clock.delta();
        controls.update(&ctx.controls, dt);
        if let Err(e) = renderer.render(scene, ctx) {
            log::error!("Unable to render frame {}: {}", self.frames, e);
            return Err(e);
        }
        let stats = FrameStats {
            frame: self.frames,
            dt,
            elapsed: self.clock.elapsed(),
        };
        self.frames += 1;
        Ok(stats)
    }

    /// Drive `count` frames back to back, stopping at the first render error.
    pub fn run_frames<C: Controls, R: Renderer>(
        &mut self,
        count: u64,
        ctx: &AppContext,
        scene: &Scene,
        controls: &mut C,
        renderer: &mut R,
    ) -> anyhow::Result<Option<FrameStats>> {
        let mut last = None;
        for _ in 0..count {
            last = Some(self.tick(ctx, scene, controls, renderer)?);
        }
        Ok(last)
    }
}

/// Install the `env_logger` backend for the `log` facade (level via `RUST_LOG`).
pub fn init_logging() {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    }
}
