//! Demo configuration.
//!
//! Every tunable of the demo lives here with its default value; the rest of
//! the crate reads these structs instead of hard-coding numbers.

use std::path::PathBuf;

use cgmath::{Deg, Point3};

use crate::{
    data_structures::{
        decoration::{BatchStyle, DecorationKind, Geometry, OpacityRange, ScaleRange},
        scene::{Bevel, Color, TextGeometry},
    },
    scatter::{DEFAULT_MAX_ATTEMPTS, ScatterError, ScatterVolume},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterConfig {
    pub half_width: f32,
    pub min_distance: f32,
    pub max_attempts: u32,
}

impl ScatterConfig {
    pub fn volume(&self) -> Result<ScatterVolume, ScatterError> {
        Ok(ScatterVolume::new(self.half_width, self.min_distance)?
            .with_max_attempts(self.max_attempts))
    }
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            half_width: 5.0,
            min_distance: 1.3,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorationConfig {
    pub kind: DecorationKind,
    pub count: usize,
    pub geometry: Geometry,
    /// `[min, max)` scale factor.
    pub scale: (f32, f32),
    /// `[min, max)` opacity.
    pub opacity: (f32, f32),
}

impl DecorationConfig {
    pub fn donuts() -> Self {
        Self {
            kind: DecorationKind::Donut,
            count: 100,
            geometry: Geometry::Torus {
                radius: 0.3,
                tube: 0.2,
                radial_segments: 20,
                tubular_segments: 45,
            },
            scale: (0.05, 0.5),
            opacity: (0.6, 1.0),
        }
    }

    pub fn octahedra() -> Self {
        Self {
            kind: DecorationKind::Octahedron,
            count: 100,
            geometry: Geometry::Octahedron {
                radius: 1.0,
                detail: 0,
            },
            scale: (0.02, 0.2),
            opacity: (0.6, 1.0),
        }
    }

    pub fn style(&self) -> Result<BatchStyle, ScatterError> {
        Ok(BatchStyle {
            kind: self.kind,
            scale: ScaleRange::new(self.scale.0, self.scale.1)?,
            opacity: OpacityRange::new(self.opacity.0, self.opacity.1)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextConfig {
    pub content: String,
    pub geometry: TextGeometry,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            content: "text-scatter".to_string(),
            geometry: TextGeometry {
                size: 0.5,
                depth: 0.2,
                curve_segments: 5,
                bevel: Some(Bevel {
                    thickness: 0.03,
                    size: 0.02,
                    offset: 0.0,
                    segments: 4,
                }),
                centered: true,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub position: Point3<f32>,
    pub target: Point3<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fovy: Deg(75.0),
            znear: 0.1,
            zfar: 100.0,
            position: Point3::new(1.0, 1.0, 4.0),
            target: Point3::new(0.0, 0.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlsConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_pan: bool,
    pub enable_zoom: bool,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    /// Multiplier from the pointer's offset to the window centre (in
    /// `[-0.5, 0.5)` of the width) to auto-rotate speed.
    pub pointer_gain: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.08,
            enable_pan: true,
            enable_zoom: true,
            auto_rotate: true,
            auto_rotate_speed: 0.0,
            pointer_gain: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RendererConfig {
    pub background: Color,
    pub max_pixel_ratio: f64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x59, 0x3F, 0x50),
            max_pixel_ratio: 2.0,
        }
    }
}

/// Asset paths, relative to `root`.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetConfig {
    pub root: PathBuf,
    pub font: String,
    pub text_matcap: String,
    pub decoration_matcap: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./assets"),
            font: "fonts/helvetiker_regular.typeface.json".to_string(),
            text_matcap: "textures/matcaps/9.png".to_string(),
            decoration_matcap: "textures/matcaps/10.png".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub scatter: ScatterConfig,
    pub text: TextConfig,
    pub decorations: Vec<DecorationConfig>,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub renderer: RendererConfig,
    pub assets: AssetConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            scatter: ScatterConfig::default(),
            text: TextConfig::default(),
            decorations: vec![DecorationConfig::donuts(), DecorationConfig::octahedra()],
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            renderer: RendererConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}
