//! Scene description handed to the renderer.
//!
//! A [`Scene`] is plain data: the centred text mesh, the matcap materials and
//! the decoration batches around it. It is built once, after the assets are
//! in, and never mutated by the frame loop.

use anyhow::bail;
use rand::Rng;

use crate::{
    config::DemoConfig,
    data_structures::{
        decoration::{Batch, Geometry, build_batch},
        instance::Instance,
    },
    resources::{Assets, FontAsset, TextureAsset},
    scatter::ScatterError,
};

/// Linear RGB colour with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> anyhow::Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("expected a colour of the form #RRGGBB, got {hex:?}");
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bevel {
    pub thickness: f32,
    pub size: f32,
    pub offset: f32,
    pub segments: u32,
}

/// Extrusion parameters for the text mesh; triangulation is up to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextGeometry {
    pub size: f32,
    pub depth: f32,
    pub curve_segments: u32,
    pub bevel: Option<Bevel>,
    /// Translate the geometry so its bounding box is centred on the origin.
    pub centered: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Matcap {
    pub texture: TextureAsset,
    pub transparent: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextMesh {
    pub content: String,
    pub geometry: TextGeometry,
    pub font: FontAsset,
    pub material: Matcap,
}

/// One decoration batch together with the shape every member shares.
#[derive(Clone, Debug, PartialEq)]
pub struct DecorationLayer {
    pub geometry: Geometry,
    pub batch: Batch,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub background: Color,
    pub text: TextMesh,
    pub decoration_material: Matcap,
    pub layers: Vec<DecorationLayer>,
}

impl Scene {
    pub fn decoration_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.batch.len()).sum()
    }

    pub fn rejected_draws(&self) -> u64 {
        self.layers.iter().map(|layer| layer.batch.rejected_draws).sum()
    }

    pub fn instances(&self) -> impl Iterator<Item = Instance> + '_ {
        self.layers.iter().flat_map(|layer| layer.batch.instances())
    }
}

/// Lay out the scene around the loaded assets.
///
/// Every constraint is validated before the first random draw, so a bad
/// configuration leaves `rng` untouched. Batches are built one after another
/// in configuration order.
pub fn build_scene<R: Rng + ?Sized>(
    config: &DemoConfig,
    assets: Assets,
    rng: &mut R,
) -> Result<Scene, ScatterError> {
    let volume = config.scatter.volume()?;
    let styles = config
        .decorations
        .iter()
        .map(|decoration| decoration.style())
        .collect::<Result<Vec<_>, _>>()?;

    let mut layers = Vec::with_capacity(styles.len());
    for (decoration, style) in config.decorations.iter().zip(&styles) {
        let batch = build_batch(decoration.count, &volume, style, rng)?;
        log::debug!(
            "placed {} {:?} decorations ({} draws rejected)",
            batch.len(),
            batch.kind,
            batch.rejected_draws
        );
        layers.push(DecorationLayer {
            geometry: decoration.geometry,
            batch,
        });
    }

    let scene = Scene {
        background: config.renderer.background,
        text: TextMesh {
            content: config.text.content.clone(),
            geometry: config.text.geometry,
            font: assets.font,
            material: Matcap {
                texture: assets.text_matcap,
                transparent: false,
            },
        },
        decoration_material: Matcap {
            texture: assets.decoration_matcap,
            transparent: true,
        },
        layers,
    };
    log::info!(
        "scene ready: {} decorations in {} layers, {} draws rejected",
        scene.decoration_count(),
        scene.layers.len(),
        scene.rejected_draws()
    );
    Ok(scene)
}
