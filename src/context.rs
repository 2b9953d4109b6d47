//! Application context and the input handlers that mutate it.
//!
//! [`AppContext`] owns everything the handlers and the frame loop touch:
//! viewport size, camera, projection and orbit settings. Handlers take it as
//! an explicit `&mut` parameter.

use winit::event::WindowEvent;

use crate::{
    camera::{Camera, OrbitControls, Projection},
    config::{ControlsConfig, DemoConfig, RendererConfig},
};

/// Window size in logical pixels plus the pixel ratio of the output buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Device pixel ratio actually used for the output buffer.
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Size of the output buffer in physical pixels.
    pub fn buffer_size(&self) -> (u32, u32) {
        (
            (self.width as f64 * self.pixel_ratio).round() as u32,
            (self.height as f64 * self.pixel_ratio).round() as u32,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    pub viewport: Viewport,
    pub camera: Camera,
    pub projection: Projection,
    pub controls: OrbitControls,
    pub(crate) controls_config: ControlsConfig,
    pub(crate) renderer: RendererConfig,
    scale_factor: f64,
}

impl AppContext {
    /// `width` and `height` are logical pixels.
    pub fn new(config: &DemoConfig, width: u32, height: u32, scale_factor: f64) -> Self {
        let camera = Camera::from(&config.camera);
        let projection = Projection::new(
            width,
            height,
            config.camera.fovy,
            config.camera.znear,
            config.camera.zfar,
        );
        Self {
            viewport: Viewport {
                width,
                height,
                pixel_ratio: scale_factor.min(config.renderer.max_pixel_ratio),
            },
            camera,
            projection,
            controls: OrbitControls::from(&config.controls),
            controls_config: config.controls,
            renderer: config.renderer,
            scale_factor,
        }
    }

    pub fn renderer_config(&self) -> &RendererConfig {
        &self.renderer
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

/// Map the pointer's horizontal position (logical pixels) onto the auto-rotate speed:
/// left edge spins one way, right edge the other, centre stands still.
pub fn on_pointer_move(ctx: &mut AppContext, x: f64) {
    if ctx.viewport.width == 0 {
        return;
    }
    let offset = x / ctx.viewport.width as f64 - 0.5;
    ctx.controls.auto_rotate_speed = offset as f32 * ctx.controls_config.pointer_gain;
}

/// Apply a new logical window size and device pixel ratio.
///
/// Returns `false` and leaves the context alone for zero-sized windows
/// (minimised), which would otherwise produce a degenerate projection.
pub fn on_resize(ctx: &mut AppContext, width: u32, height: u32, scale_factor: f64) -> bool {
    if width == 0 || height == 0 {
        log::debug!("ignoring resize to {}x{}", width, height);
        return false;
    }
    ctx.scale_factor = scale_factor;
    ctx.viewport = Viewport {
        width,
        height,
        pixel_ratio: scale_factor.min(ctx.renderer.max_pixel_ratio),
    };
    ctx.projection.resize(width, height);
    true
}

/// Keep the logical size and switch to a new device pixel ratio.
pub fn on_scale_factor_changed(ctx: &mut AppContext, scale_factor: f64) -> bool {
    let (width, height) = (ctx.viewport.width, ctx.viewport.height);
    on_resize(ctx, width, height, scale_factor)
}

/// Route the window events the demo cares about to their handlers.
///
/// Returns whether the event changed the context.
pub fn handle_window_event(ctx: &mut AppContext, event: &WindowEvent) -> bool {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            let before = ctx.controls.auto_rotate_speed;
            let position = position.to_logical::<f64>(ctx.scale_factor);
            on_pointer_move(ctx, position.x);
            before != ctx.controls.auto_rotate_speed
        }
        WindowEvent::Resized(size) => {
            // winit reports device pixels, the viewport holds logical ones
            let size = size.to_logical::<f64>(ctx.scale_factor);
            let (width, height) = (size.width.round() as u32, size.height.round() as u32);
            on_resize(ctx, width, height, ctx.scale_factor)
        }
        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
            on_scale_factor_changed(ctx, *scale_factor)
        }
        _ => false,
    }
}
