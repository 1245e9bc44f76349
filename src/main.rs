mod config;
mod error;
mod github;
mod sync;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{EpicsConfig, MilestoneConfig};
use crate::error::Result;
use crate::github::{GithubClient, GithubConfig};
use crate::sync::{EpicSynchronizer, MilestoneSynchronizer};

#[derive(Parser)]
#[command(name = "project-sync")]
#[command(about = "Replay milestone and epic definitions against the GitHub API", long_about = None)]
struct Cli {
    /// Directory of per-repository milestone definition files
    #[arg(long, default_value = "project-config/milestones")]
    milestones_dir: PathBuf,

    /// Epics definition file
    #[arg(long, default_value = "project-config/epics.yml")]
    epics_file: PathBuf,

    /// Print the planned creations instead of calling the API
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Credential check comes first: fail before touching files or the network.
    let github_config = GithubConfig::from_env()?;

    let milestone_configs = config::load_milestones(&cli.milestones_dir)?;
    let epics = config::load_epics(&cli.epics_file)?;

    if cli.dry_run {
        print_plan(&milestone_configs, &epics);
        return Ok(());
    }

    let client = GithubClient::new(github_config)?;

    let milestone_summary = MilestoneSynchronizer::new(&client).sync(&milestone_configs)?;
    println!(
        "Milestone sync complete: {} milestones, {} issues",
        milestone_summary.milestones, milestone_summary.issues
    );

    let epic_summary = EpicSynchronizer::new(&client).sync(&epics)?;
    println!("Epic sync complete: {} issues", epic_summary.issues);

    Ok(())
}

/// Print what a real run would create, without creating anything
fn print_plan(configs: &[MilestoneConfig], epics: &EpicsConfig) {
    for config in configs {
        println!("{}:", config.repo);
        for milestone in &config.milestones {
            println!(
                "  milestone '{}' ({} issues)",
                milestone.title,
                milestone.issues.len()
            );
        }
    }

    for epic in &epics.epics {
        println!("epic '{}' -> {} repositories", epic.title, epic.repos.len());
    }
}
