use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use who_pays::{await_selection, result_caption, GameSession, SessionConfig, TokioClock};

/// Pick who pays the bill.
#[derive(Parser, Debug)]
#[command(name = "who-pays", version, about)]
struct Cli {
    /// Participant names. Read one per line from stdin when omitted.
    names: Vec<String>,

    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Suspense delay in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print the final snapshot as JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "who_pays=debug" } else { "who_pays=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

async fn read_stdin_names() -> anyhow::Result<Vec<String>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut names = Vec::new();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        names.push(line);
    }
    Ok(names)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(delay_ms) = cli.delay_ms {
        config = config.with_selection_delay(Duration::from_millis(delay_ms));
    }
    tracing::debug!(?config, "starting session");

    let names = if cli.names.is_empty() {
        read_stdin_names().await?
    } else {
        cli.names.clone()
    };

    let mut session = GameSession::with_config(config, TokioClock::new());
    for name in &names {
        if let Err(err) = session.add_participant(name) {
            eprintln!("{}", err.user_message());
        }
    }

    if session.start_game().is_none() {
        eprintln!(
            "Need at least {} players to start, got {}",
            session.config().min_participants,
            session.participants().len()
        );
        std::process::exit(2);
    }

    if !cli.json {
        println!("Choosing who pays...");
    }
    await_selection(&mut session).await;

    let snapshot = session.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", result_caption(snapshot.selected_loser.as_deref()));
    }

    Ok(())
}
