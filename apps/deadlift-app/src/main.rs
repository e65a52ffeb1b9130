//! deadlift payload estimation CLI.
//!
//! Provides three modes of operation:
//! - `payload`: Estimate the maximum tip payload at a configuration
//! - `torques`: Print per-joint holding torques at a configuration
//! - `info`: Print a summary of the selected joint group's chain

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use deadlift_core::config::EstimatorConfig;
use deadlift_core::types::{JointState, Wrench};
use deadlift_dynamics::RneSolver;
use deadlift_payload::PayloadEstimator;
use deadlift_urdf::parse_file;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Payload and torque estimation for serial robot arms.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Robot description, estimator configuration, and group selection shared
/// by every subcommand.
#[derive(Args)]
struct Target {
    /// Path to the URDF robot description.
    #[arg(short, long)]
    urdf: PathBuf,

    /// Path to the estimator TOML configuration.
    #[arg(short, long)]
    config: PathBuf,

    /// Name of the joint group to analyze.
    #[arg(short, long)]
    group: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the maximum tip payload at a configuration.
    Payload {
        #[command(flatten)]
        target: Target,

        /// Joint positions, comma separated (defaults to all zero).
        #[arg(long, value_delimiter = ',')]
        at: Option<Vec<f32>>,
    },

    /// Print per-joint holding torques at a configuration.
    Torques {
        #[command(flatten)]
        target: Target,

        /// Joint positions, comma separated (defaults to all zero).
        #[arg(long, value_delimiter = ',')]
        at: Option<Vec<f32>>,
    },

    /// Print a summary of the selected joint group's chain.
    Info {
        #[command(flatten)]
        target: Target,
    },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Payload { target, at } => {
            let est = build_estimator(&target)?;
            let positions = positions_or_zero(at, est.dof());
            let estimate = est.max_payload(&positions)?;

            println!("payload estimate: {:.3} N", estimate.payload);
            match estimate.saturated_joint {
                Some(i) => {
                    let names = est.oracle().chain().joint_names();
                    println!("saturated joint:  {} (index {i})", names[i]);
                }
                None => println!("saturated joint:  not reported"),
            }
        }
        Commands::Torques { target, at } => {
            let est = build_estimator(&target)?;
            let positions = positions_or_zero(at, est.dof());
            let state = JointState::at_rest(&positions);
            let torques = est.torques(&state, &Wrench::zero_set(est.dof()))?;

            let names = est.oracle().chain().joint_names();
            for (name, torque) in names.iter().zip(torques.iter()) {
                println!("{name}: {torque:.4}");
            }
        }
        Commands::Info { target } => {
            let est = build_estimator(&target)?;
            let chain = est.oracle().chain();

            println!("group:     {}", target.group);
            println!("base link: {}", chain.base_link());
            println!("tip link:  {}", chain.tip_link());
            println!("dof:       {}", chain.dof());
            for joint in chain.joints() {
                let kind = if joint.is_prismatic {
                    "prismatic"
                } else {
                    "revolute"
                };
                println!(
                    "  {} ({kind}, effort limit {:.1})",
                    joint.name, joint.effort_limit
                );
            }
        }
    }
    Ok(())
}

fn build_estimator(target: &Target) -> Result<PayloadEstimator<RneSolver>, Box<dyn Error>> {
    let model = parse_file(&target.urdf)?;
    let config = EstimatorConfig::from_file(&target.config)?;
    Ok(PayloadEstimator::from_model(&model, &config, &target.group)?)
}

fn positions_or_zero(at: Option<Vec<f32>>, dof: usize) -> Vec<f32> {
    at.unwrap_or_else(|| vec![0.0; dof])
}
