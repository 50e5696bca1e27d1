//! Pixel and logical coordinate spaces
//!
//! Render targets address pixels with the origin in the top-left corner and
//! Y growing downward. Particles live in a logical Cartesian plane described
//! by a [`CartesianPlane`]: a rectangle of logical space (center and size)
//! stretched over the whole target. A negative height flips the Y axis, which
//! is how [`CartesianPlane::for_target`] makes logical Y grow upward.
//!
//! For a target of `W x H` pixels and a plane with center `c` and size `s`:
//!
//! ```text
//! x = c.x + (px / W - 0.5) * s.x
//! y = c.y + (py / H - 0.5) * s.y
//! ```

use glam::{DVec2, UVec2};

/// A rectangle of logical space mapped onto a render target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPlane {
    center: DVec2,
    size: DVec2,
}

impl CartesianPlane {
    pub fn new(center: DVec2, size: DVec2) -> Self {
        Self { center, size }
    }

    /// Plane centered on the logical origin with one logical unit per pixel
    /// and Y pointing up
    ///
    /// The middle pixel of the target maps to `(0, 0)`.
    pub fn for_target(target_size: UVec2) -> Self {
        let size = target_size.as_dvec2();
        Self::new(DVec2::ZERO, DVec2::new(size.x, -size.y))
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Convert a pixel position on a target of `target_size` to logical coordinates
    pub fn map_pixel_to_coords(&self, pixel: DVec2, target_size: UVec2) -> DVec2 {
        let normalized = pixel / target_size.as_dvec2() - DVec2::splat(0.5);
        self.center + normalized * self.size
    }

    /// Convert logical coordinates to a pixel position on a target of `target_size`
    pub fn map_coords_to_pixel(&self, coords: DVec2, target_size: UVec2) -> DVec2 {
        let normalized = (coords - self.center) / self.size + DVec2::splat(0.5);
        normalized * target_size.as_dvec2()
    }
}
