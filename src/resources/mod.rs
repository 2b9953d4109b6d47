//! Loading of the demo's font and matcap textures.
//!
//! Files are fetched as raw bytes; decoding them is the renderer's job.

use std::{future::Future, path::PathBuf};

use anyhow::{Context as _, bail};
use rand::Rng;

use crate::{
    config::{AssetConfig, DemoConfig},
    data_structures::scene::{Scene, build_scene},
};

/// Typeface definition for the text mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct FontAsset {
    pub path: String,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextureAsset {
    pub path: String,
    pub data: Vec<u8>,
    /// Colour data is sRGB-encoded and must be linearised when sampled.
    pub srgb: bool,
}

/// Everything the scene needs before it can be built.
#[derive(Clone, Debug, PartialEq)]
pub struct Assets {
    pub font: FontAsset,
    pub text_matcap: TextureAsset,
    pub decoration_matcap: TextureAsset,
}

/// Source of raw asset bytes.
pub trait AssetLoader {
    fn load_binary(&self, file_name: &str) -> impl Future<Output = anyhow::Result<Vec<u8>>>;
}

/// Reads assets from a directory on disk.
#[derive(Clone, Debug)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for FsAssetLoader {
    async fn load_binary(&self, file_name: &str) -> anyhow::Result<Vec<u8>> {
        let path = self.root.join(file_name);
        let data = tokio::fs::read(&path)
            .await
            .with_context(|| format!("could not read {}", path.display()))?;
        Ok(data)
    }
}

async fn load_nonempty<L: AssetLoader>(loader: &L, file_name: &str) -> anyhow::Result<Vec<u8>> {
    log::debug!("loading {}", file_name);
    let data = loader
        .load_binary(file_name)
        .await
        .with_context(|| format!("failed to load asset {file_name}"))?;
    if data.is_empty() {
        bail!("asset {file_name} is empty");
    }
    Ok(data)
}

pub async fn load_font<L: AssetLoader>(loader: &L, file_name: &str) -> anyhow::Result<FontAsset> {
    let data = load_nonempty(loader, file_name).await?;
    Ok(FontAsset {
        path: file_name.to_string(),
        data,
    })
}

pub async fn load_texture<L: AssetLoader>(
    loader: &L,
    file_name: &str,
    srgb: bool,
) -> anyhow::Result<TextureAsset> {
    let data = load_nonempty(loader, file_name).await?;
    Ok(TextureAsset {
        path: file_name.to_string(),
        data,
        srgb,
    })
}

/// Load the font and both matcaps concurrently. The first failure wins.
pub async fn load_assets<L: AssetLoader>(
    loader: &L,
    config: &AssetConfig,
) -> anyhow::Result<Assets> {
    let (font, text_matcap, decoration_matcap) = futures::try_join!(
        load_font(loader, &config.font),
        load_texture(loader, &config.text_matcap, true),
        load_texture(loader, &config.decoration_matcap, false),
    )?;
    log::info!(
        "assets ready: {} ({} bytes), {}, {}",
        font.path,
        font.data.len(),
        text_matcap.path,
        decoration_matcap.path
    );
    Ok(Assets {
        font,
        text_matcap,
        decoration_matcap,
    })
}

/// Wait for the assets, then scatter the decorations around the text.
///
/// No random draws happen until every asset (the font in particular) has
/// resolved; a loading failure leaves `rng` untouched.
pub async fn setup<L: AssetLoader, R: Rng + ?Sized>(
    loader: &L,
    config: &DemoConfig,
    rng: &mut R,
) -> anyhow::Result<Scene> {
    let assets = load_assets(loader, &config.assets).await?;
    let scene = build_scene(config, assets, rng).context("failed to build the scene")?;
    Ok(scene)
}
