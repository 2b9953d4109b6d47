//! Engine data structures: instances, decorations and the scene.
//!
//! - `instance` holds per-instance transformation data and its GPU layout
//! - `decoration` contains the decoration kinds and the batch builder
//! - `scene` is the finished scene handed to the renderer

pub mod decoration;
pub mod instance;
pub mod scene;
