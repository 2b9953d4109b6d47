//! Camera placement, perspective projection and orbit-control settings.
//!
//! The orbit controller itself (damping, auto-rotation) belongs to the
//! renderer side; this module only carries the parameters it reads.

use cgmath::{Matrix4, Point3, Rad, Vector3, perspective};

use crate::config::{CameraConfig, ControlsConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
}

impl Camera {
    pub fn new<P: Into<Point3<f32>>>(position: P, target: P) -> Self {
        Self {
            position: position.into(),
            target: target.into(),
        }
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.target, Vector3::unit_y())
    }
}

impl From<&CameraConfig> for Camera {
    fn from(config: &CameraConfig) -> Self {
        Self::new(config.position, config.target)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn fovy(&self) -> Rad<f32> {
        self.fovy
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Settings read by the orbit controller every frame.
///
/// Only `auto_rotate_speed` changes at runtime (driven by the pointer).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_pan: bool,
    pub enable_zoom: bool,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl From<&ControlsConfig> for OrbitControls {
    fn from(config: &ControlsConfig) -> Self {
        Self {
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor,
            enable_pan: config.enable_pan,
            enable_zoom: config.enable_zoom,
            auto_rotate: config.auto_rotate,
            auto_rotate_speed: config.auto_rotate_speed,
        }
    }
}
