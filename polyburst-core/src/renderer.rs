//! Render target contract
//!
//! Particles never rasterize anything themselves. They map their logical
//! points to pixels through a [`Renderer`] and hand over a [`TriangleFan`]:
//! one center vertex followed by the ordered ring of perimeter vertices.

use glam::{DVec2, IVec2, UVec2};

use crate::color::Color;
use crate::view::CartesianPlane;

/// A positioned, colored fan vertex in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanVertex {
    pub position: DVec2,
    pub color: Color,
}

/// A filled triangle fan
///
/// `vertices[0]` is the hub. Every consecutive pair after it forms one
/// triangle with the hub, so `n + 1` vertices make `n - 1` triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleFan {
    pub vertices: Vec<FanVertex>,
}

impl TriangleFan {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, position: DVec2, color: Color) {
        self.vertices.push(FanVertex { position, color });
    }

    pub fn center(&self) -> Option<&FanVertex> {
        self.vertices.first()
    }

    pub fn perimeter(&self) -> &[FanVertex] {
        self.vertices.get(1..).unwrap_or_default()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }
}

/// Something particles can be drawn onto
pub trait Renderer {
    /// Current target size in pixels (width, height)
    fn size(&self) -> UVec2;

    /// Paint a filled triangle fan
    fn draw_fan(&mut self, fan: &TriangleFan);

    /// Convert a pixel position to coordinates in `plane`
    fn map_pixel_to_coords(&self, pixel: IVec2, plane: &CartesianPlane) -> DVec2 {
        plane.map_pixel_to_coords(pixel.as_dvec2(), self.size())
    }

    /// Convert coordinates in `plane` to a pixel position
    fn map_coords_to_pixel(&self, coords: DVec2, plane: &CartesianPlane) -> DVec2 {
        plane.map_coords_to_pixel(coords, self.size())
    }
}

/// Headless renderer that keeps every fan it is asked to draw
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    size: UVec2,
    fans: Vec<TriangleFan>,
}

impl RecordingRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: UVec2::new(width, height),
            fans: Vec::new(),
        }
    }

    /// Middle pixel of the target
    pub fn center_pixel(&self) -> IVec2 {
        (self.size / 2).as_ivec2()
    }

    pub fn fans(&self) -> &[TriangleFan] {
        &self.fans
    }

    /// Take the recorded fans, leaving the recorder empty
    pub fn take_fans(&mut self) -> Vec<TriangleFan> {
        std::mem::take(&mut self.fans)
    }

    pub fn clear(&mut self) {
        self.fans.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn draw_fan(&mut self, fan: &TriangleFan) {
        self.fans.push(fan.clone());
    }
}
