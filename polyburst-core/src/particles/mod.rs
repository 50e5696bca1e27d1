//! Polygon particles
//!
//! A particle is a ring of points around a center, drawn as a triangle fan.
//! Each update it spins about its own center, shrinks a little, and follows a
//! ballistic arc under constant gravity until its time-to-live runs out.
//!
//! # Architecture
//!
//! - `Particle`: one polygon, its kinematics and colors
//! - `ParticleConfig`: lifetime, gravity, decay and the random draw ranges
//! - `ParticleField`: the live set, spawned in bursts and culled on expiry
//!
//! # Usage
//!
//! ```rust
//! use glam::IVec2;
//! use polyburst_core::particles::ParticleField;
//! use polyburst_core::renderer::RecordingRenderer;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut renderer = RecordingRenderer::new(1920, 1080);
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut field = ParticleField::default();
//!
//! field.burst(&renderer, IVec2::new(960, 540), &mut rng)?;
//!
//! // Each frame
//! field.update(1.0 / 60.0);
//! field.draw(&mut renderer);
//! # Ok::<(), polyburst_core::BurstError>(())
//! ```

mod emission;
mod field;
mod particle;

pub use emission::generate_vertices;
pub use field::{FieldConfig, ParticleField};
pub use particle::{Particle, ParticleConfig, ParticleState};

/// Default lifetime in seconds
pub const DEFAULT_TTL: f64 = 5.0;

/// Default downward acceleration in logical units per second squared
pub const DEFAULT_GRAVITY: f64 = 1000.0;

/// Default per-update scale factor
pub const DEFAULT_SCALE_PER_UPDATE: f64 = 0.999;

/// Smallest point count that still draws a polygon
pub const MIN_POINTS: usize = 3;
