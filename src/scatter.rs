//! Constrained random scatter placement.
//!
//! Positions are drawn uniformly from the cube `[-W, W)³` and redrawn until
//! they land outside the open ball of radius `d_min` around the origin, so the
//! accepted positions are uniform over the cube minus that ball. Nothing here
//! knows about scenes or rendering: a [`ScatterVolume`] plus a random source is
//! all it takes.

use std::fmt;

use cgmath::{InnerSpace, Vector3};
use rand::Rng;

/// Upper bound on draws for a single position before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Failures of the placement and batch routines.
///
/// All of them are configuration problems detected synchronously; none of
/// them are worth retrying with the same parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ScatterError {
    /// The half-width is not positive, or the exclusion radius is negative or
    /// reaches the corners of the cube, so no position can ever be accepted.
    InvalidConstraint { half_width: f32, min_distance: f32 },
    /// Scales must come from a non-empty interval of strictly positive values.
    InvalidScaleRange { min: f32, max: f32 },
    /// Opacities must come from a non-empty interval inside `[0, 1]`.
    InvalidOpacityRange { min: f32, max: f32 },
    /// The draw cap was hit without an accepted position.
    SamplingExhausted { attempts: u32 },
}

impl fmt::Display for ScatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScatterError::InvalidConstraint {
                half_width,
                min_distance,
            } => write!(
                f,
                "invalid scatter constraint: half width {half_width}, minimum distance {min_distance}"
            ),
            ScatterError::InvalidScaleRange { min, max } => {
                write!(f, "invalid scale range [{min}, {max})")
            }
            ScatterError::InvalidOpacityRange { min, max } => {
                write!(f, "invalid opacity range [{min}, {max})")
            }
            ScatterError::SamplingExhausted { attempts } => {
                write!(f, "no valid position found after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for ScatterError {}

/// A position accepted by [`ScatterVolume::sample_counted`] together with the
/// number of draws thrown away before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vector3<f32>,
    pub rejected: u32,
}

/// The region decorations are scattered into: the cube `[-W, W)³` without the
/// ball of radius `min_distance` around the origin.
///
/// Construction validates the constraint, so every `ScatterVolume` in
/// existence can actually be sampled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterVolume {
    half_width: f32,
    min_distance: f32,
    max_attempts: u32,
}

impl ScatterVolume {
    pub fn new(half_width: f32, min_distance: f32) -> Result<Self, ScatterError> {
        let invalid = ScatterError::InvalidConstraint {
            half_width,
            min_distance,
        };
        if !half_width.is_finite() || half_width <= 0.0 {
            return Err(invalid);
        }
        // `!(x >= 0)` also rejects NaN
        if !(min_distance >= 0.0) || min_distance >= half_width * 3f32.sqrt() {
            return Err(invalid);
        }
        Ok(Self {
            half_width,
            min_distance,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Replace the draw cap. A cap of zero is treated as one.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Share of the cube's volume covered by the excluded ball, i.e. the
    /// probability that a single draw gets rejected.
    ///
    /// Only exact while the ball fits inside the cube (`d_min <= W`).
    pub fn excluded_fraction(&self) -> f64 {
        let r = self.min_distance as f64;
        let side = 2.0 * self.half_width as f64;
        (4.0 / 3.0 * std::f64::consts::PI * r.powi(3)) / side.powi(3)
    }

    pub fn contains(&self, position: Vector3<f32>) -> bool {
        let w = self.half_width;
        let in_cube = [position.x, position.y, position.z]
            .iter()
            .all(|c| (-w..w).contains(c));
        in_cube && position.magnitude2() >= self.min_distance * self.min_distance
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vector3<f32>, ScatterError> {
        self.sample_counted(rng).map(|placement| placement.position)
    }

    /// Draw until a position clears the exclusion ball.
    pub fn sample_counted<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Placement, ScatterError> {
        let w = self.half_width;
        let min_sq = self.min_distance * self.min_distance;
        for attempt in 0..self.max_attempts {
            let position = Vector3::new(
                rng.random_range(-w..w),
                rng.random_range(-w..w),
                rng.random_range(-w..w),
            );
            if position.magnitude2() >= min_sq {
                if attempt > 100 {
                    log::debug!("scatter position accepted after {} rejected draws", attempt);
                }
                return Ok(Placement {
                    position,
                    rejected: attempt,
                });
            }
        }
        log::warn!(
            "gave up scattering after {} draws (half width {}, minimum distance {})",
            self.max_attempts,
            self.half_width,
            self.min_distance
        );
        Err(ScatterError::SamplingExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// One-shot placement: validate `(half_width, min_distance)` and draw a
/// single position from `rng`.
pub fn generate<R: Rng + ?Sized>(
    half_width: f32,
    min_distance: f32,
    rng: &mut R,
) -> Result<Vector3<f32>, ScatterError> {
    ScatterVolume::new(half_width, min_distance)?.sample(rng)
}
