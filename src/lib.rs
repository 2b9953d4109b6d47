//! text-scatter
//!
//! Scene assembly for a small matcap demo: extruded 3D text in the middle of
//! the screen, surrounded by randomly placed donuts and octahedra, with an
//! orbiting camera whose auto-rotation follows the pointer. Drawing is left to
//! an external renderer; this crate decides what gets drawn and where.
//!
//! High-level modules
//! - `scatter`: rejection sampling of positions outside an exclusion radius
//! - `data_structures`: instances, decoration batches and the scene description
//! - `config`: every tunable with its default value
//! - `resources`: asynchronous asset loading and the load-then-scatter setup
//! - `camera`: camera placement, projection and orbit-control settings
//! - `context`: the application context and its input handlers
//! - `render`: the renderer boundary
//! - `flow`: the per-frame update loop and logging setup
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod render;
pub mod resources;
pub mod scatter;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use flow::init_logging;
pub use winit::dpi::{PhysicalPosition, PhysicalSize};
pub use winit::event::WindowEvent;
