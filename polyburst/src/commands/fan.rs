//! Single particle inspection

use anyhow::{Context, Result};
use clap::Args;
use glam::IVec2;

use polyburst_core::{Particle, RecordingRenderer};

use super::{check_frame_step, check_target, make_rng};
use crate::utils::{add_table_row, create_table, format_point, format_seconds, parse_pixel};

#[derive(Args, Debug)]
pub struct FanArgs {
    /// Render target width in pixels
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Render target height in pixels
    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    /// Spawn position as X,Y pixels (defaults to the target center)
    #[arg(short, long, value_parser = parse_pixel, allow_hyphen_values = true)]
    pub click: Option<IVec2>,

    /// Number of polygon points
    #[arg(short, long, default_value_t = 8)]
    pub points: usize,

    /// Random seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Updates to apply before printing
    #[arg(long, default_value_t = 0)]
    pub steps: usize,

    /// Seconds per update
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f64,
}

pub fn execute(args: &FanArgs) -> Result<()> {
    check_target(args.width, args.height)?;
    check_frame_step(args.dt)?;

    let renderer = RecordingRenderer::new(args.width, args.height);
    let click = args.click.unwrap_or_else(|| renderer.center_pixel());
    let mut rng = make_rng(args.seed);

    let mut particle = Particle::new(&renderer, click, args.points, &mut rng)
        .with_context(|| format!("Failed to build a {}-point particle", args.points))?;
    for _ in 0..args.steps {
        particle.update(args.dt);
    }

    let (hub_color, rim_color) = particle.colors();
    println!("=== Particle ===");
    println!("State:       {:?}", particle.state());
    println!("TTL:         {}", format_seconds(particle.ttl()));
    println!("Center:      {}", format_point(particle.center()));
    println!("Velocity:    {}", format_point(particle.velocity()));
    println!("Spin:        {:.3} rad/s", particle.angular_velocity());
    println!("Colors:      {hub_color} -> {rim_color}");

    let fan = particle.fan(&renderer);
    println!("\n=== Fan ({} triangles) ===", fan.triangle_count());
    let mut table = create_table(&["#", "Role", "Pixel", "Color"]);
    for (i, vertex) in fan.vertices.iter().enumerate() {
        add_table_row(
            &mut table,
            vec![
                i.to_string(),
                if i == 0 { "hub" } else { "rim" }.to_string(),
                format_point(vertex.position),
                vertex.color.to_string(),
            ],
        );
    }
    table.printstd();

    Ok(())
}
