//! Boundary to the rendering collaborator.
//!
//! The crate never talks to a GPU; a [`Renderer`] receives the finished
//! [`Scene`] and the current [`AppContext`] once per frame and draws them.

use crate::{context::AppContext, data_structures::scene::Scene};

pub trait Renderer {
    fn render(&mut self, scene: &Scene, ctx: &AppContext) -> anyhow::Result<()>;
}
