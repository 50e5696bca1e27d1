//! The live particle set

use std::ops::RangeInclusive;

use glam::IVec2;
use log::debug;
use rand::Rng;

use super::particle::{Particle, ParticleConfig};
use super::MIN_POINTS;
use crate::error::{BurstError, Result};
use crate::renderer::Renderer;

/// Burst parameters
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Particles spawned per burst
    pub particles_per_burst: usize,
    /// Point count range for each spawned particle
    pub points_range: RangeInclusive<usize>,
    /// Tuning shared by every spawned particle
    pub particle: ParticleConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particles_per_burst: 5,
            points_range: 25..=50,
            particle: ParticleConfig::default(),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.points_range.is_empty() || *self.points_range.start() < MIN_POINTS {
            return Err(BurstError::Configuration(format!(
                "point range {:?} must be non-empty and start at {MIN_POINTS} or more",
                self.points_range
            )));
        }
        self.particle.validate()
    }
}

/// Owns every live particle, spawning them in bursts and culling them once
/// they expire
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            particles: Vec::new(),
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Spawn a burst of particles at a pixel position
    ///
    /// Returns the number of particles added.
    pub fn burst<T, R>(&mut self, renderer: &T, click: IVec2, rng: &mut R) -> Result<usize>
    where
        T: Renderer + ?Sized,
        R: Rng + ?Sized,
    {
        self.particles.reserve(self.config.particles_per_burst);

        for _ in 0..self.config.particles_per_burst {
            let num_points = rng.random_range(self.config.points_range.clone());
            let particle =
                Particle::with_config(&self.config.particle, renderer, click, num_points, rng)?;
            self.particles.push(particle);
        }

        debug!(
            "Burst of {} at pixel {click}, {} live",
            self.config.particles_per_burst,
            self.particles.len()
        );

        Ok(self.config.particles_per_burst)
    }

    /// Drop expired particles, then advance the rest by `dt` seconds
    ///
    /// A particle that expires during this update is still kept until the
    /// next one, so it gets drawn for the frame it expired in.
    pub fn update(&mut self, dt: f64) {
        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);

        let culled = before - self.particles.len();
        if culled > 0 {
            debug!("Culled {culled} expired particles, {} live", self.particles.len());
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.particles
                .par_iter_mut()
                .for_each(|particle| particle.update(dt));
        }

        #[cfg(not(feature = "parallel"))]
        for particle in &mut self.particles {
            particle.update(dt);
        }
    }

    /// Draw every particle in spawn order
    pub fn draw<T: Renderer + ?Sized>(&self, renderer: &mut T) {
        for particle in &self.particles {
            particle.draw(renderer);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

impl<'a> IntoIterator for &'a ParticleField {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
