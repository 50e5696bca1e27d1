//! Command implementations for the polyburst CLI

pub mod fan;
pub mod simulate;

use anyhow::{Result, bail};
use rand::{SeedableRng, rngs::StdRng};

/// Seeded generator, or one seeded from the OS when no seed is given
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::info!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

pub(crate) fn check_frame_step(dt: f64) -> Result<()> {
    if !(dt.is_finite() && dt > 0.0) {
        bail!("Frame time must be a positive number of seconds, got {dt}");
    }
    Ok(())
}

pub(crate) fn check_target(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        bail!("Target size must be non-zero, got {width}x{height}");
    }
    Ok(())
}
