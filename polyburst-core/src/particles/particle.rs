//! Individual particle representation

use std::ops::RangeInclusive;

use glam::{DVec2, IVec2};
use log::{debug, trace};
use rand::Rng;

use super::emission::{Launch, check_point_count, generate_vertices};
use super::{DEFAULT_GRAVITY, DEFAULT_SCALE_PER_UPDATE, DEFAULT_TTL};
use crate::color::Color;
use crate::error::{BurstError, Result};
use crate::matrix::Matrix;
use crate::renderer::{Renderer, TriangleFan};
use crate::transform;
use crate::view::CartesianPlane;

/// Particle tuning
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    /// Lifetime in seconds
    pub ttl: f64,
    /// Downward acceleration (logical units / s²)
    pub gravity: f64,
    /// Scale applied about the center on every update
    pub scale_per_update: f64,
    /// Launch speed magnitude range, per axis
    pub speed_range: RangeInclusive<u32>,
    /// Vertex distance from the center
    pub radius_range: RangeInclusive<u32>,
    /// Hub color of the fan
    pub center_color: Color,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            gravity: DEFAULT_GRAVITY,
            scale_per_update: DEFAULT_SCALE_PER_UPDATE,
            speed_range: 100..=500,
            radius_range: 20..=80,
            center_color: Color::WHITE,
        }
    }
}

impl ParticleConfig {
    /// Reject parameters that cannot produce a sensible particle
    pub fn validate(&self) -> Result<()> {
        if !(self.ttl.is_finite() && self.ttl > 0.0) {
            return Err(BurstError::Configuration(format!(
                "ttl must be a positive number of seconds, got {}",
                self.ttl
            )));
        }
        if !self.gravity.is_finite() {
            return Err(BurstError::Configuration(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !(self.scale_per_update.is_finite() && self.scale_per_update > 0.0) {
            return Err(BurstError::Configuration(format!(
                "scale per update must be positive, got {}",
                self.scale_per_update
            )));
        }
        if self.speed_range.is_empty() {
            return Err(BurstError::Configuration(format!(
                "empty speed range {:?}",
                self.speed_range
            )));
        }
        if self.radius_range.is_empty() {
            return Err(BurstError::Configuration(format!(
                "empty radius range {:?}",
                self.radius_range
            )));
        }
        Ok(())
    }
}

/// Lifecycle of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleState {
    /// Time-to-live is still positive
    Alive,
    /// Time-to-live reached zero; the owner should drop the particle
    Expired,
}

/// A spinning, shrinking polygon on a ballistic arc
#[derive(Debug, Clone)]
pub struct Particle {
    /// 2 x num_points, logical coordinates of the ring
    points: Matrix,
    num_points: usize,
    ttl: f64,
    /// Radians per second
    angular_velocity: f64,
    /// Logical units per second
    velocity: DVec2,
    gravity: f64,
    scale_per_update: f64,
    center_color: Color,
    perimeter_color: Color,
    /// Moved by the same deltas as `points`, never recomputed from them
    center: DVec2,
    plane: CartesianPlane,
}

impl Particle {
    /// Spawn a particle with default tuning at a pixel position on `renderer`
    pub fn new<T, R>(renderer: &T, click: IVec2, num_points: usize, rng: &mut R) -> Result<Self>
    where
        T: Renderer + ?Sized,
        R: Rng + ?Sized,
    {
        Self::with_config(&ParticleConfig::default(), renderer, click, num_points, rng)
    }

    /// Spawn a particle at a pixel position on `renderer`
    ///
    /// The logical plane is centered on the middle of the target with Y up,
    /// so a click on the middle pixel puts the particle at `(0, 0)`.
    pub fn with_config<T, R>(
        config: &ParticleConfig,
        renderer: &T,
        click: IVec2,
        num_points: usize,
        rng: &mut R,
    ) -> Result<Self>
    where
        T: Renderer + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        check_point_count(num_points)?;

        let size = renderer.size();
        if size.min_element() == 0 {
            return Err(BurstError::Configuration(format!(
                "render target {}x{} has no area",
                size.x, size.y
            )));
        }

        let plane = CartesianPlane::for_target(size);
        let center = renderer.map_pixel_to_coords(click, &plane);

        let launch = Launch::draw(&config.speed_range, rng);
        let points = generate_vertices(center, num_points, &config.radius_range, rng)?;

        debug!(
            "Spawned particle at {center} with {num_points} points, velocity {}, spin {:.3} rad/s",
            launch.velocity, launch.angular_velocity
        );

        Ok(Self {
            points,
            num_points,
            ttl: config.ttl,
            angular_velocity: launch.angular_velocity,
            velocity: launch.velocity,
            gravity: config.gravity,
            scale_per_update: config.scale_per_update,
            center_color: config.center_color,
            perimeter_color: launch.perimeter_color,
            center,
            plane,
        })
    }

    /// Remaining lifetime in seconds (zero or negative once expired)
    #[inline]
    pub fn ttl(&self) -> f64 {
        self.ttl
    }

    #[inline]
    pub fn state(&self) -> ParticleState {
        if self.ttl > 0.0 {
            ParticleState::Alive
        } else {
            ParticleState::Expired
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state() == ParticleState::Alive
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Tracked center in logical coordinates
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Ring vertices, one column per point
    pub fn points(&self) -> &Matrix {
        &self.points
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// (hub color, perimeter color)
    pub fn colors(&self) -> (Color, Color) {
        (self.center_color, self.perimeter_color)
    }

    /// The logical plane used to map to and from pixels
    pub fn plane(&self) -> &CartesianPlane {
        &self.plane
    }

    /// Advance the particle by `dt` seconds
    ///
    /// Spins about the center, applies the per-update scale about the center,
    /// then moves ring and center by the same ballistic step. An expired
    /// particle keeps moving if updated; dropping it is the owner's job.
    pub fn update(&mut self, dt: f64) {
        let was_alive = self.is_alive();
        self.ttl -= dt;

        self.rotate(dt * self.angular_velocity);
        self.scale(self.scale_per_update);

        let dx = self.velocity.x * dt;
        let dy = self.velocity.y * dt - self.gravity * dt * dt / 2.0;

        self.translate(dx, dy);
        self.center += DVec2::new(dx, dy);

        trace!("Particle at {} ttl {:.3}", self.center, self.ttl);
        if was_alive && !self.is_alive() {
            debug!("Particle expired at {}", self.center);
        }
    }

    /// Rotate the ring by `theta` radians about the tracked center
    pub fn rotate(&mut self, theta: f64) {
        let center = self.center;
        self.translate(-center.x, -center.y);
        self.points = &transform::rotation(theta) * &self.points;
        self.translate(center.x, center.y);
    }

    /// Scale the ring by `c` about the tracked center
    pub fn scale(&mut self, c: f64) {
        let center = self.center;
        self.translate(-center.x, -center.y);
        self.points = &transform::scaling(c) * &self.points;
        self.translate(center.x, center.y);
    }

    /// Shift every ring vertex by `(dx, dy)`
    ///
    /// The tracked center is left alone; [`Particle::update`] moves it itself.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.points = &transform::translation(dx, dy, self.num_points) + &self.points;
    }

    /// Build the pixel-space fan for this particle
    pub fn fan<T: Renderer + ?Sized>(&self, renderer: &T) -> TriangleFan {
        let mut fan = TriangleFan::with_capacity(self.num_points + 1);

        fan.push(
            renderer.map_coords_to_pixel(self.center, &self.plane),
            self.center_color,
        );
        for point in self.points.columns() {
            fan.push(
                renderer.map_coords_to_pixel(point, &self.plane),
                self.perimeter_color,
            );
        }

        fan
    }

    /// Hand this particle's fan to `renderer`
    pub fn draw<T: Renderer + ?Sized>(&self, renderer: &mut T) {
        let fan = self.fan(&*renderer);
        renderer.draw_fan(&fan);
    }
}
