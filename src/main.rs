//! Picker - 词库人工筛选工具
//!
//! 入口：初始化日志、加载配置、解析命令行，默认进入筛选会话。

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use picker::config::{load_config, AppConfig};
use picker::core::{catalog_status, run_session, TriageEnd};
use picker::solution::{run_draw, run_retire};
use picker::store::DataStore;
use picker::ui::StdConsole;

#[derive(Parser)]
#[command(name = "picker")]
#[command(about = "Triage candidate words into the pool or the rejected set")]
#[command(version)]
struct Cli {
    /// Extra TOML config file (overrides config/default.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding words.js and the JSON data files
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive triage session (default)
    Triage {
        /// Fixed shuffle seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,

        /// Run the session without writing pool/rejected
        #[arg(long)]
        dry_run: bool,
    },

    /// Move a random pool word into solution.json
    Draw,

    /// Keep only the latest solution, archive the rest into history.json
    Retire,

    /// Print catalog and data file counts
    Status,
}

fn main() -> anyhow::Result<()> {
    picker::observability::init();

    let cli = Cli::parse();
    let mut cfg = load_config(cli.config.clone()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        AppConfig::default()
    });
    if let Some(dir) = cli.data_dir {
        cfg.data.dir = dir;
    }
    let store = DataStore::new(cfg.data.clone());

    match cli.command.unwrap_or(Commands::Triage {
        seed: None,
        dry_run: false,
    }) {
        Commands::Triage { seed, dry_run } => {
            let seed = seed.or(cfg.triage.seed);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let dry_run = dry_run || cfg.triage.dry_run;

            let mut console = StdConsole::new();
            let outcome = run_session(&store, &mut console, &mut rng, dry_run)
                .context("Triage session failed, nothing was written")?;

            let how = match outcome.end {
                TriageEnd::Exhausted => "all candidates reviewed",
                TriageEnd::Quit => "stopped early",
            };
            println!(
                "{}: {} added to pool, {} rejected{}",
                how,
                outcome.added,
                outcome.commit.rejected.len(),
                if outcome.written { "" } else { " (dry run)" }
            );
        }
        Commands::Draw => {
            let mut rng = StdRng::from_entropy();
            let drawn = run_draw(&store, &cfg.solution, chrono::Utc::now(), &mut rng)
                .context("Failed to draw a solution")?;
            println!(
                "drew index {} (expires {})",
                drawn.index.unwrap_or_default(),
                drawn.expiration.unwrap_or_default()
            );
        }
        Commands::Retire => {
            let retired = run_retire(&store).context("Failed to retire solutions")?;
            println!("retired {} solutions", retired);
        }
        Commands::Status => {
            let status = catalog_status(&store).context("Failed to read data files")?;
            println!("words:      {}", status.words);
            println!("excluded:   {}", status.excluded);
            println!("rejected:   {}", status.rejected);
            println!("pool:       {}", status.pool);
            println!("candidates: {}", status.candidates);
        }
    }

    Ok(())
}
