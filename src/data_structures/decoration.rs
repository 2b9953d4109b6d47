//! Decorative meshes scattered around the text and the batch builder that
//! places them.

use std::f32::consts::PI;

use cgmath::{Rad, Vector3};
use rand::Rng;

use crate::{
    data_structures::instance::{Instance, InstanceRaw},
    scatter::{ScatterError, ScatterVolume},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Donut,
    Octahedron,
}

/// Shape parameters forwarded to the renderer's geometry generators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Octahedron {
        radius: f32,
        detail: u32,
    },
}

/// Half-open interval `[min, max)` of strictly positive scale factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRange {
    min: f32,
    max: f32,
}

impl ScaleRange {
    pub fn new(min: f32, max: f32) -> Result<Self, ScatterError> {
        if !(min > 0.0) || !(max > min) || !max.is_finite() {
            return Err(ScatterError::InvalidScaleRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.min..self.max)
    }
}

/// Half-open interval `[min, max)` inside `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpacityRange {
    min: f32,
    max: f32,
}

impl OpacityRange {
    pub fn new(min: f32, max: f32) -> Result<Self, ScatterError> {
        if !(min >= 0.0) || !(max > min) || max > 1.0 {
            return Err(ScatterError::InvalidOpacityRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.min..self.max)
    }
}

/// What varies per decoration kind when building a batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchStyle {
    pub kind: DecorationKind,
    pub scale: ScaleRange,
    pub opacity: OpacityRange,
}

/// One placed decoration.
///
/// Opacity lives on the decoration itself rather than on a material shared by
/// the whole batch.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub position: Vector3<f32>,
    pub rotation_x: Rad<f32>,
    pub rotation_y: Rad<f32>,
    pub scale: f32,
    pub opacity: f32,
}

impl Decoration {
    pub fn to_instance(&self) -> Instance {
        Instance::from_placement(self.position, self.rotation_x, self.rotation_y, self.scale)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
    pub kind: DecorationKind,
    pub decorations: Vec<Decoration>,
    /// Draws discarded by the exclusion ball while placing this batch.
    pub rejected_draws: u64,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn instances(&self) -> Vec<Instance> {
        self.decorations.iter().map(Decoration::to_instance).collect()
    }

    pub fn to_raw(&self) -> Vec<InstanceRaw> {
        self.decorations
            .iter()
            .map(|decoration| decoration.to_instance().to_raw())
            .collect()
    }
}

/// Place `count` decorations of one kind.
///
/// Each decoration gets its own draws, taken in this order: opacity, position,
/// rotation about X, rotation about Y, scale. Nothing is shared between
/// decorations or derived from the position.
pub fn build_batch<R: Rng + ?Sized>(
    count: usize,
    volume: &ScatterVolume,
    style: &BatchStyle,
    rng: &mut R,
) -> Result<Batch, ScatterError> {
    let mut decorations = Vec::with_capacity(count);
    let mut rejected_draws = 0u64;
    for _ in 0..count {
        let opacity = style.opacity.sample(rng);
        let placement = volume.sample_counted(rng)?;
        rejected_draws += placement.rejected as u64;
        let rotation_x = Rad(rng.random_range(0.0..PI));
        let rotation_y = Rad(rng.random_range(0.0..PI));
        let scale = style.scale.sample(rng);
        decorations.push(Decoration {
            kind: style.kind,
            position: placement.position,
            rotation_x,
            rotation_y,
            scale,
            opacity,
        });
    }
    Ok(Batch {
        kind: style.kind,
        decorations,
        rejected_draws,
    })
}
