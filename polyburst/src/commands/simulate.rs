//! Headless simulation loop

use anyhow::{Context, Result};
use clap::Args;
use glam::{DVec2, IVec2};
use log::info;

use polyburst_core::{FieldConfig, ParticleConfig, ParticleField, RecordingRenderer, TriangleFan};

use super::{check_frame_step, check_target, make_rng};
use crate::utils::{add_table_row, create_table, format_point, format_seconds, parse_pixel};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Render target width in pixels
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Render target height in pixels
    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    /// Burst position as X,Y pixels (repeatable, defaults to the target center)
    #[arg(short, long = "click", value_parser = parse_pixel, allow_hyphen_values = true)]
    pub clicks: Vec<IVec2>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    pub frames: usize,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f64,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Particles spawned per burst
    #[arg(long, default_value_t = 5)]
    pub particles: usize,

    /// Fewest points per particle
    #[arg(long, default_value_t = 25)]
    pub min_points: usize,

    /// Most points per particle
    #[arg(long, default_value_t = 50)]
    pub max_points: usize,

    /// Print a table row every N frames
    #[arg(long, default_value_t = 60)]
    pub report_every: usize,
}

/// Running totals over a simulation
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SimulationStats {
    pub frames: usize,
    pub fans: usize,
    pub triangles: usize,
    pub peak_live: usize,
}

impl SimulationStats {
    fn record(&mut self, live: usize, fans: &[TriangleFan]) {
        self.frames += 1;
        self.fans += fans.len();
        self.triangles += fans.iter().map(TriangleFan::triangle_count).sum::<usize>();
        self.peak_live = self.peak_live.max(live);
    }
}

fn mean_center(field: &ParticleField) -> Option<DVec2> {
    if field.is_empty() {
        return None;
    }
    let sum: DVec2 = field.iter().map(|p| p.center()).sum();
    Some(sum / field.len() as f64)
}

/// Run the simulation without printing anything
pub fn run(args: &SimulateArgs) -> Result<(SimulationStats, Vec<Vec<String>>)> {
    check_target(args.width, args.height)?;
    check_frame_step(args.dt)?;

    let config = FieldConfig {
        particles_per_burst: args.particles,
        points_range: args.min_points..=args.max_points,
        particle: ParticleConfig::default(),
    };
    let mut field = ParticleField::new(config).context("Invalid burst configuration")?;
    let mut renderer = RecordingRenderer::new(args.width, args.height);
    let mut rng = make_rng(args.seed);

    let clicks = if args.clicks.is_empty() {
        vec![renderer.center_pixel()]
    } else {
        args.clicks.clone()
    };
    for click in &clicks {
        field
            .burst(&renderer, *click, &mut rng)
            .with_context(|| format!("Failed to spawn burst at {click}"))?;
    }
    info!(
        "Spawned {} particles in {} bursts on a {}x{} target",
        field.len(),
        clicks.len(),
        args.width,
        args.height
    );

    let every = args.report_every.max(1);
    let mut stats = SimulationStats::default();
    let mut rows = Vec::new();

    for frame in 1..=args.frames {
        renderer.clear();
        field.update(args.dt);
        field.draw(&mut renderer);
        stats.record(field.len(), renderer.fans());

        let done = field.is_empty();
        if frame % every == 0 || frame == args.frames || done {
            let fans = renderer.fans();
            rows.push(vec![
                frame.to_string(),
                format_seconds(frame as f64 * args.dt),
                field.len().to_string(),
                fans.len().to_string(),
                fans.iter()
                    .map(TriangleFan::triangle_count)
                    .sum::<usize>()
                    .to_string(),
                mean_center(&field).map_or_else(|| "-".to_string(), format_point),
            ]);
        }

        if done {
            info!("All particles expired after {frame} frames");
            break;
        }
    }

    Ok((stats, rows))
}

pub fn execute(args: &SimulateArgs) -> Result<()> {
    let (stats, rows) = run(args)?;

    println!("=== Simulation ===");
    let mut table = create_table(&[
        "Frame",
        "Time",
        "Live",
        "Fans",
        "Triangles",
        "Mean center",
    ]);
    for row in rows {
        add_table_row(&mut table, row);
    }
    table.printstd();

    println!();
    println!("Frames run:      {}", stats.frames);
    println!("Peak live:       {}", stats.peak_live);
    println!("Fans drawn:      {}", stats.fans);
    println!("Triangles drawn: {}", stats.triangles);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SimulateArgs {
        SimulateArgs {
            width: 800,
            height: 600,
            clicks: vec![IVec2::new(400, 300), IVec2::new(100, 500)],
            frames: 30,
            dt: 1.0 / 60.0,
            seed: Some(7),
            particles: 3,
            min_points: 10,
            max_points: 12,
            report_every: 10,
        }
    }

    #[test]
    fn test_run_counts() {
        let (stats, rows) = run(&args()).unwrap();
        assert_eq!(stats.frames, 30);
        assert_eq!(stats.peak_live, 6);
        assert_eq!(stats.fans, 6 * 30);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "10");
    }

    #[test]
    fn test_run_is_reproducible() {
        assert_eq!(run(&args()).unwrap(), run(&args()).unwrap());
    }

    #[test]
    fn test_run_stops_when_everything_expired() {
        let (stats, rows) = run(&SimulateArgs {
            frames: 1000,
            dt: 0.5,
            ..args()
        })
        .unwrap();
        // Expires on update 10, culled on update 11.
        assert_eq!(stats.frames, 11);
        assert_eq!(rows.last().unwrap()[2], "0");
    }

    #[test]
    fn test_run_rejects_bad_input() {
        assert!(run(&SimulateArgs { dt: 0.0, ..args() }).is_err());
        assert!(run(&SimulateArgs { width: 0, ..args() }).is_err());
        assert!(run(&SimulateArgs {
            min_points: 2,
            ..args()
        })
        .is_err());
    }
}
