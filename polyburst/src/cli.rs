//! Root CLI structure for polyburst

use clap::{Parser, Subcommand};

use crate::commands::fan::FanArgs;
use crate::commands::simulate::SimulateArgs;

#[derive(Parser)]
#[command(name = "polyburst")]
#[command(about = "Headless polygon particle burst simulator", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run bursts through a number of frames and report what was drawn
    Simulate(SimulateArgs),

    /// Build a single particle and print its fan in pixel space
    Fan(FanArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from([
            "polyburst",
            "-vv",
            "simulate",
            "--click",
            "10,20",
            "--click",
            "30,40",
            "--frames",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Simulate(args) => {
                assert_eq!(args.clicks.len(), 2);
                assert_eq!(args.frames, 5);
            }
            _ => panic!("expected simulate"),
        }
    }
}
