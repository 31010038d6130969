use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitesearch::{evaluate, suggest, ContentIndex, SearchConfig, SearchOutcome, SearchSession};

mod cli;
use cli::display::{print_index_summary, print_outcome};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitesearch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            index,
            query,
            json,
            explain,
        } => {
            let index = load_index(&index)?;
            let outcome = evaluate(&index, &query);
            emit(&outcome, json, explain)
        }
        Commands::Inspect { index } => {
            let index = load_index(&index)?;
            print_index_summary(&index, &suggest(&index));
            Ok(())
        }
        Commands::Interactive {
            index,
            delay_ms,
            json,
        } => {
            let index = Arc::new(load_index(&index)?);
            let config = SearchConfig {
                debounce_ms: delay_ms.unwrap_or(config.debounce_ms),
            };
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("failed to start runtime")?;
            runtime.block_on(run_interactive(index, config, json))
        }
    }
}

fn load_config(path: Option<&str>) -> Result<SearchConfig> {
    let config = match path {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => SearchConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn load_index(path: &str) -> Result<ContentIndex> {
    ContentIndex::load(path).with_context(|| format!("failed to load index from {}", path))
}

fn emit(outcome: &SearchOutcome, json: bool, explain: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(outcome)?);
    } else {
        print_outcome(outcome, explain);
    }
    Ok(())
}

/// Each stdin line is the new contents of the search box. Every settle prints.
async fn run_interactive(index: Arc<ContentIndex>, config: SearchConfig, json: bool) -> Result<()> {
    tracing::info!(debounce_ms = config.debounce_ms, "reading queries from stdin");

    let mut session = SearchSession::new(index, &config);
    let mut states = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut printed = 0u64;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("failed to read stdin")? {
                    Some(line) => session.input(line),
                    None => break,
                }
            }
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = states.borrow_and_update().clone();
                if !state.is_searching() && state.settle_count() > printed {
                    printed = state.settle_count();
                    emit(&session.outcome(), json, false)?;
                }
            }
        }
    }

    // Input closed: let the last query settle before exiting.
    let outcome = session.settled().await;
    if session.subscribe().borrow().settle_count() > printed {
        emit(&outcome, json, false)?;
    }
    session.close();
    Ok(())
}
