/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

//! Run a robot through a maze, replaying a solution string.
//!
//! Without arguments this plays the built-in demo maze with its solution:
//!
//!   robot-explorer --show-steps
//!   robot-explorer --maze maze.txt --solution eessw --config explorer.toml

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use robot_explorer::explorer::{DEMO_MAZE, DEMO_SOLUTION};
use robot_explorer::{Environment, ExplorerConfig, ScriptedExplorer, Simulation, Stage};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "robot-explorer")]
#[command(about = "Replay a solution against a robot explorer maze")]
struct Cli {
    /// Maze text file, one character per room. Defaults to the built-in demo maze.
    #[arg(long)]
    maze: Option<PathBuf>,

    /// Urges to replay, e.g. "eessw". Defaults to the demo solution.
    #[arg(long)]
    solution: Option<String>,

    /// TOML file with `max_steps` and `show_steps`.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    max_steps: Option<usize>,

    /// Print the stage after every move.
    #[arg(long)]
    show_steps: bool,
}

fn resolve_config(cli: &Cli) -> Result<ExplorerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            ExplorerConfig::from_toml_str(&text)?
        }
        None => ExplorerConfig::default(),
    };
    if let Some(max_steps) = cli.max_steps {
        config.max_steps = max_steps;
    }
    config.show_steps |= cli.show_steps;
    Ok(config)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let maze = match &cli.maze {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read maze {}", path.display()))?,
        None => DEMO_MAZE.to_string(),
    };
    let solution = cli.solution.as_deref().unwrap_or(DEMO_SOLUTION);

    let stage = Stage::build(&maze).context("failed to build stage")?;
    let explorer = ScriptedExplorer::from_solution(solution).context("failed to read solution")?;
    info!(?config, "starting");

    println!("{}", stage);
    let mut simulation = Simulation::new(stage, explorer, config.max_steps);
    simulation.run_with(|stage, urge| {
        if config.show_steps {
            println!();
            println!("{}", urge);
            println!("{}", stage);
        }
    });

    let reached_end = simulation.environment().is_terminal();
    println!(
        "steps: {}, energy: {}, reached end: {}",
        simulation.steps(),
        simulation.score(),
        reached_end
    );
    Ok(())
}
