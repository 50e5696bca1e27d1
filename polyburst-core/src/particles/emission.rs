//! Random launch parameters and initial polygon generation

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::ops::RangeInclusive;

use glam::DVec2;
use rand::Rng;

use super::MIN_POINTS;
use crate::color::Color;
use crate::error::{BurstError, Result};
use crate::matrix::Matrix;

/// Randomized per-particle motion and color
#[derive(Debug, Clone, Copy)]
pub(crate) struct Launch {
    pub angular_velocity: f64,
    pub velocity: DVec2,
    pub perimeter_color: Color,
}

impl Launch {
    /// Draw a launch from `rng`
    ///
    /// Spin is uniform in [0, π) rad/s. The horizontal speed is an integer in
    /// `speed_range` with a random sign, the vertical speed an integer in
    /// `speed_range` pointing up.
    pub fn draw<R: Rng + ?Sized>(speed_range: &RangeInclusive<u32>, rng: &mut R) -> Self {
        let angular_velocity = rng.random_range(0.0..PI);

        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let vx = sign * f64::from(rng.random_range(speed_range.clone()));
        let vy = f64::from(rng.random_range(speed_range.clone()));

        Self {
            angular_velocity,
            velocity: DVec2::new(vx, vy),
            perimeter_color: Color::random(rng),
        }
    }
}

pub(crate) fn check_point_count(num_points: usize) -> Result<()> {
    if num_points < MIN_POINTS {
        return Err(BurstError::Configuration(format!(
            "a particle needs at least {MIN_POINTS} points, got {num_points}"
        )));
    }
    Ok(())
}

/// Generate the initial ring of `num_points` vertices around `center`
///
/// The ring starts at a random angle in [0, π/2) and steps by
/// `2π / (num_points - 1)`, so the last vertex points in the same direction
/// as the first. Each vertex gets its own integer radius from
/// `radius_range`, so the two only meet when their radii happen to match.
pub fn generate_vertices<R: Rng + ?Sized>(
    center: DVec2,
    num_points: usize,
    radius_range: &RangeInclusive<u32>,
    rng: &mut R,
) -> Result<Matrix> {
    check_point_count(num_points)?;

    let mut theta = rng.random_range(0.0..FRAC_PI_2);
    let d_theta = TAU / (num_points - 1) as f64;

    let mut points = Matrix::zeros(2, num_points);
    for j in 0..num_points {
        let r = f64::from(rng.random_range(radius_range.clone()));
        let (sin, cos) = theta.sin_cos();

        points[(0, j)] = center.x + r * cos;
        points[(1, j)] = center.y + r * sin;

        theta += d_theta;
    }

    Ok(points)
}
