//! GPU-ready vertex layouts for hosts that draw with a graphics API.

use glam::{DVec2, Vec4};

/// A colored point in viewport pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl ScreenVertex {
    #[must_use]
    pub fn new(position: DVec2, color: Vec4) -> Self {
        Self {
            position: position.as_vec2().to_array(),
            color: color.to_array(),
        }
    }
}

/// Per-instance data for a filled dot.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct DotInstance {
    pub center: [f32; 2],
    pub diameter: f32,
    pub _padding: f32,
    pub color: [f32; 4],
}

impl DotInstance {
    #[must_use]
    pub fn new(center: DVec2, diameter: f32, color: Vec4) -> Self {
        Self {
            center: center.as_vec2().to_array(),
            diameter,
            _padding: 0.0,
            color: color.to_array(),
        }
    }
}
