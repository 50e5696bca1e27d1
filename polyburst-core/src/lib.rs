//! Polygon particle bursts driven by 2D affine transforms
//!
//! The crate has two layers:
//!
//! - [`matrix`] and [`transform`]: a small dense matrix type and the rotation,
//!   scaling and translation operators built from it
//! - [`particles`]: expanding, spinning, fading polygons animated with those
//!   operators, and the [`ParticleField`] that spawns and culls them
//!
//! Drawing goes through the [`Renderer`] trait. [`RecordingRenderer`] is a
//! headless implementation that keeps the fans it receives.

pub mod color;
pub mod error;
pub mod matrix;
pub mod particles;
pub mod renderer;
pub mod transform;
pub mod view;

// Re-export common types
pub use color::Color;
pub use error::{BurstError, Result};
pub use matrix::Matrix;
pub use particles::{FieldConfig, Particle, ParticleConfig, ParticleField, ParticleState};
pub use renderer::{FanVertex, RecordingRenderer, Renderer, TriangleFan};
pub use view::CartesianPlane;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
