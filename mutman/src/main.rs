//! CLI for mutmut mutation-testing operations.
//!
//! One subcommand per exposed operation. Text results print to stdout;
//! `prioritize` prints the structured ranking as pretty JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mutman::io::config::load_config;
use mutman::io::process::ProcessRunner;
use mutman::logging;
use mutman::tools::Tools;

#[derive(Parser)]
#[command(
    name = "mutman",
    version,
    about = "Mutation-testing orchestration for mutmut"
)]
struct Cli {
    /// Path to the manager configuration file.
    #[arg(long, default_value = "mutman.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a full mutation testing session.
    Run {
        /// Module or package to mutate; empty uses the engine's default scope.
        #[arg(long, default_value = "")]
        target: String,
        /// Extra engine options, split on whitespace (e.g. "--use-coverage").
        #[arg(long, default_value = "")]
        options: String,
        /// Virtual environment containing the engine.
        #[arg(long)]
        venv_path: Option<PathBuf>,
    },
    /// Show overall results of the last run.
    Results {
        #[arg(long)]
        venv_path: Option<PathBuf>,
    },
    /// List surviving mutants from the last run.
    Survivors {
        #[arg(long)]
        venv_path: Option<PathBuf>,
    },
    /// Rerun one survivor, or all survivors when no id is given.
    Rerun {
        /// Survivor to rerun; omit to rerun all.
        #[arg(long)]
        mutation_id: Option<String>,
        #[arg(long)]
        venv_path: Option<PathBuf>,
    },
    /// Clean the engine cache.
    Clean {
        #[arg(long)]
        venv_path: Option<PathBuf>,
    },
    /// Show the code diff for one mutant.
    Show {
        mutation_id: String,
        #[arg(long)]
        venv_path: Option<PathBuf>,
    },
    /// Rank survivors by likely materiality.
    Prioritize {
        #[arg(long)]
        venv_path: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let config = load_config(&cli.config)
        .with_context(|| format!("load config {}", cli.config.display()))?;
    let runner = ProcessRunner {
        timeout: config.engine_timeout(),
    };
    let tools = Tools::new(runner, config);

    match cli.command {
        Command::Run {
            target,
            options,
            venv_path,
        } => println!("{}", tools.run(&target, &options, venv_path.as_deref())),
        Command::Results { venv_path } => {
            println!("{}", tools.show_results(venv_path.as_deref()));
        }
        Command::Survivors { venv_path } => {
            println!("{}", tools.show_survivors(venv_path.as_deref()));
        }
        Command::Rerun {
            mutation_id,
            venv_path,
        } => println!(
            "{}",
            tools.rerun_survivor(mutation_id.as_deref(), venv_path.as_deref())
        ),
        Command::Clean { venv_path } => {
            println!("{}", tools.clean_cache(venv_path.as_deref()));
        }
        Command::Show {
            mutation_id,
            venv_path,
        } => println!("{}", tools.show_mutant(&mutation_id, venv_path.as_deref())),
        Command::Prioritize { venv_path } => {
            let ranking = tools.prioritize_survivors(venv_path.as_deref());
            let payload =
                serde_json::to_string_pretty(&ranking).context("serialize ranking")?;
            println!("{payload}");
        }
    }
    Ok(())
}
