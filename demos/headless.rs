//! Runs the demo without a GPU: loads the assets from `./assets`, builds the
//! scene and drives a few frames through a renderer that only logs.
//!
//! `RUST_LOG=debug cargo run --example headless`

use instant::Duration;
use text_scatter::{
    camera::OrbitControls,
    config::DemoConfig,
    context::{self, AppContext},
    data_structures::scene::Scene,
    flow::{Controls, FrameLoop},
    render::Renderer,
    resources::{self, FsAssetLoader},
};

struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, scene: &Scene, ctx: &AppContext) -> anyhow::Result<()> {
        let (width, height) = ctx.viewport.buffer_size();
        log::info!(
            "frame: {} instances + \"{}\" into {}x{} (aspect {:.3}, pixel ratio cap {})",
            scene.decoration_count(),
            scene.text.content,
            width,
            height,
            ctx.projection.aspect(),
            ctx.renderer_config().max_pixel_ratio
        );
        Ok(())
    }
}

/// Spins the camera angle by the auto-rotate speed, ignoring damping.
#[derive(Default)]
struct SpinControls {
    azimuth: f32,
}

impl Controls for SpinControls {
    fn update(&mut self, settings: &OrbitControls, dt: Duration) {
        if settings.auto_rotate {
            // one full turn per 60 seconds at speed 1
            self.azimuth += settings.auto_rotate_speed * dt.as_secs_f32() * std::f32::consts::TAU / 60.0;
        }
        log::debug!("camera azimuth {:.4}", self.azimuth);
    }
}

fn main() -> anyhow::Result<()> {
    text_scatter::init_logging();

    let config = DemoConfig::default();
    let loader = FsAssetLoader::new(config.assets.root.clone());
    let runtime = tokio::runtime::Runtime::new()?;
    let scene = runtime.block_on(resources::setup(&loader, &config, &mut rand::rng()))?;

    let mut ctx = AppContext::new(&config, 1280, 720, 1.0);
    context::on_resize(&mut ctx, 1920, 1080, 2.5);
    context::on_pointer_move(&mut ctx, 1600.0);

    let mut frame_loop = FrameLoop::new();
    let mut controls = SpinControls::default();
    let mut renderer = LogRenderer;
    for _ in 0..5 {
        frame_loop.tick(&ctx, &scene, &mut controls, &mut renderer)?;
        std::thread::sleep(Duration::from_millis(16));
    }
    log::info!("rendered {} frames", frame_loop.frames());
    Ok(())
}
