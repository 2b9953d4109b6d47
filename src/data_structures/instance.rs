//! Instance transformation data handed to the renderer.
//!
//! Every placed decoration ends up as an [`Instance`]; the renderer uploads the
//! packed [`InstanceRaw`] form so all copies of one mesh draw in a single call.

use cgmath::{Euler, One, Rad, SquareMatrix};

/// Per-instance transformation: position, rotation (as quaternion), and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Instance {
    /// Create a new instance with identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            // `Quaternion::one()` is the identity quaternion (no rotation)
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Build a uniformly scaled instance rotated about X, then Y.
    ///
    /// Z is left alone: the decoration shapes are symmetric about it.
    pub fn from_placement(
        position: cgmath::Vector3<f32>,
        rotation_x: Rad<f32>,
        rotation_y: Rad<f32>,
        scale: f32,
    ) -> Self {
        Self {
            position,
            rotation: Euler::new(rotation_x, rotation_y, Rad(0.0)).into(),
            scale: cgmath::Vector3::new(scale, scale, scale),
        }
    }

    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::from_translation(self.position)
            * cgmath::Matrix4::from(self.rotation)
            * cgmath::Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        let world_matrix = self.to_matrix();
        let handedness = world_matrix.determinant().signum();
        InstanceRaw {
            model: world_matrix.into(),
            normal: cgmath::Matrix3::from(self.rotation).into(),
            handedness,
        }
    }
}

impl From<cgmath::Vector3<f32>> for Instance {
    fn from(position: cgmath::Vector3<f32>) -> Self {
        Instance {
            position,
            ..Default::default()
        }
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

/**
 * The raw instance is the data the renderer copies into its instance buffer:
 * a 4x4 model matrix, the 3x3 normal matrix and the sign of the determinant.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 3]; 3],
    pub handedness: f32,
}
