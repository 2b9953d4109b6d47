#![allow(dead_code)]

use std::{cell::Cell, collections::HashMap, time::Duration};

use rand::{SeedableRng, rngs::StdRng};
use text_scatter::{
    camera::OrbitControls,
    config::{AssetConfig, DemoConfig},
    context::AppContext,
    data_structures::scene::Scene,
    flow::Controls,
    render::Renderer,
    resources::AssetLoader,
};

pub(crate) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Serves assets from memory and counts how many were requested.
pub(crate) struct MemoryLoader {
    files: HashMap<String, Vec<u8>>,
    requests: Cell<u32>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            requests: Cell::new(0),
        }
    }

    /// A loader holding every file the default configuration asks for.
    pub fn demo() -> Self {
        let assets = AssetConfig::default();
        Self::new()
            .with(&assets.font, br#"{"glyphs":{},"familyName":"Helvetiker"}"#)
            .with(&assets.text_matcap, b"\x89PNG matcap 9")
            .with(&assets.decoration_matcap, b"\x89PNG matcap 10")
    }

    pub fn with(mut self, file_name: &str, data: &[u8]) -> Self {
        self.files.insert(file_name.to_string(), data.to_vec());
        self
    }

    pub fn without(mut self, file_name: &str) -> Self {
        self.files.remove(file_name);
        self
    }

    pub fn requests(&self) -> u32 {
        self.requests.get()
    }
}

impl AssetLoader for MemoryLoader {
    async fn load_binary(&self, file_name: &str) -> anyhow::Result<Vec<u8>> {
        self.requests.set(self.requests.get() + 1);
        self.files
            .get(file_name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such file: {file_name}"))
    }
}

/// Records what it was asked to draw; optionally fails on a given frame.
pub(crate) struct RecordingRenderer {
    pub frames: Vec<(usize, f32)>,
    pub fail_on: Option<usize>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            fail_on: None,
        }
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, scene: &Scene, ctx: &AppContext) -> anyhow::Result<()> {
        if self.fail_on == Some(self.frames.len()) {
            anyhow::bail!("surface lost");
        }
        self.frames
            .push((scene.decoration_count(), ctx.controls.auto_rotate_speed));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct CountingControls {
    pub updates: u32,
    pub last_speed: f32,
    pub total: Duration,
}

impl Controls for CountingControls {
    fn update(&mut self, settings: &OrbitControls, dt: Duration) {
        self.updates += 1;
        self.last_speed = settings.auto_rotate_speed;
        self.total += dt;
    }
}

pub(crate) fn demo_scene(seed: u64) -> Scene {
    let config = DemoConfig::default();
    let loader = MemoryLoader::demo();
    futures::executor::block_on(text_scatter::resources::setup(
        &loader,
        &config,
        &mut seeded(seed),
    ))
    .expect("demo scene should build")
}

/// Returns the same word forever.
pub(crate) struct ConstantRng(pub u32);

impl rand::RngCore for ConstantRng {
    fn next_u32(&mut self) -> u32 {
        self.0
    }

    fn next_u64(&mut self) -> u64 {
        ((self.0 as u64) << 32) | self.0 as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            chunk.copy_from_slice(&self.0.to_le_bytes()[..chunk.len()]);
        }
    }
}
