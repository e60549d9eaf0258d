//! Digit Bingo - terminal bulls and cows.

#![warn(missing_docs)]

use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use digit_bingo::cli::{Cli, Command, Switch};
use digit_bingo::{
    AppConfig, KeyValueStore, MemoryStore, RecordBook, Session, Settings, SqliteStore,
    format_record,
};
use digit_bingo_core::{RepeatPolicy, Round, format_clock};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let store = open_store(&config, cli.ephemeral)?;
    let policy = cli.command.repeat_policy();

    match cli.command {
        Command::Solo { .. } => run_solo(&config, store, policy).await,
        Command::Duel { .. } => run_duel(&config, store).await,
        Command::Records { clear } => run_records(store, clear),
        Command::Settings { vibration } => run_settings(store, vibration),
    }
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,digit_bingo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = AppConfig::load_or_default(&cli.config)?;
    let config = match &cli.db_path {
        Some(db_path) => {
            info!(db_path = %db_path, "Overriding database path");
            config.with_db_path(db_path.clone())
        }
        None => config,
    };
    let config = match cli.command {
        Command::Duel {
            feedback: Some(strategy),
        } => {
            info!(%strategy, "Overriding duel feedback");
            config.with_duel_feedback(strategy)
        }
        _ => config,
    };
    Ok(config)
}

#[instrument(skip(config))]
fn open_store(config: &AppConfig, ephemeral: bool) -> Result<Rc<dyn KeyValueStore>> {
    if ephemeral {
        info!("Using in-memory storage");
        return Ok(Rc::new(MemoryStore::new()));
    }
    Ok(Rc::new(SqliteStore::open(config.db_path().clone())?))
}

/// Play a solo round, asking for the repeat policy if none was given.
#[instrument(skip(config, store))]
async fn run_solo(
    config: &AppConfig,
    store: Rc<dyn KeyValueStore>,
    policy: Option<RepeatPolicy>,
) -> Result<()> {
    let vibration = Settings::new(Rc::clone(&store)).vibration_enabled();
    let mut round = Round::solo(RecordBook::new(store));
    if let Some(policy) = policy {
        round.choose_policy(policy)?;
    }
    Session::new(round, vibration).run(config.tick_interval()).await
}

/// Play a duel round.
#[instrument(skip(config, store))]
async fn run_duel(config: &AppConfig, store: Rc<dyn KeyValueStore>) -> Result<()> {
    let strategy = *config.duel_feedback();
    let vibration = Settings::new(Rc::clone(&store)).vibration_enabled();
    let round = Round::duel(strategy, RecordBook::new(store));
    println!("Type your secret code for your friend to crack, then press enter.");
    Session::new(round, vibration).run(config.tick_interval()).await
}

/// List records with a summary, or clear them.
#[instrument(skip(store))]
fn run_records(store: Rc<dyn KeyValueStore>, clear: bool) -> Result<()> {
    let book = RecordBook::new(store);
    if clear {
        book.clear_records();
        println!("Records cleared.");
        return Ok(());
    }

    let records = book.get_records();
    if records.is_empty() {
        println!("No records yet. Win a round to set one.");
        return Ok(());
    }
    for (i, entry) in records.iter().enumerate() {
        println!("{:>3}. {}", i + 1, format_record(entry));
    }

    let stats = book.stats();
    println!();
    println!(
        "{} wins ({} solo, {} duel)",
        stats.total(),
        stats.solo(),
        stats.duel()
    );
    if let (Some(tries), Some(time)) = (stats.best_tries(), stats.best_time_sec()) {
        println!("Best: {} tries, {}", tries, format_clock(*time));
    }
    Ok(())
}

/// Show the settings, changing vibration first if asked.
#[instrument(skip(store))]
fn run_settings(store: Rc<dyn KeyValueStore>, vibration: Option<Switch>) -> Result<()> {
    let settings = Settings::new(store);
    if let Some(switch) = vibration {
        settings.set_vibration_enabled(switch.is_on());
    }
    let state = if settings.vibration_enabled() { "on" } else { "off" };
    println!("Vibration: {}", state);
    Ok(())
}
