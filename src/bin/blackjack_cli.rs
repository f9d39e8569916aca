//! Консольный блэкджек с сохранением счетов в JSON.
//!
//! ```text
//! cargo run --bin blackjack_cli -- --decks 6 --seed 42
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use console_casino::config::{CasinoConfig, DEFAULT_DECKS, DEFAULT_SHUFFLE_POINT, DEFAULT_USERS_FILE};
use console_casino::console::{run_blackjack, Console};
use console_casino::infra::{ConfiguredRng, JsonFileAccountStore};
use console_casino::session::Session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Blackjack с сохранением баланса", long_about = None)]
struct Args {
    /// JSON-файл со счетами игроков.
    #[arg(long, default_value = DEFAULT_USERS_FILE)]
    users_file: PathBuf,

    /// Число колод в шузе.
    #[arg(long, default_value_t = DEFAULT_DECKS)]
    decks: u32,

    /// Доля розданных карт, после которой шуз перемешивается.
    #[arg(long, default_value_t = DEFAULT_SHUFFLE_POINT)]
    shuffle_point: f64,

    /// Seed для воспроизводимых раздач.
    #[arg(long)]
    seed: Option<u64>,

    /// Уровень логов (пишутся в stderr).
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let mut config = CasinoConfig {
        users_file: args.users_file,
        seed: args.seed,
        ..CasinoConfig::default()
    };
    config.shoe.decks = args.decks;
    config.shoe.shuffle_point = args.shuffle_point;
    config.validate().context("неверная конфигурация")?;

    info!(?config, "старт блэкджека");

    let store = JsonFileAccountStore::new(config.users_file.clone());
    let rng = ConfiguredRng::from_seed(config.seed);
    let mut session =
        Session::open(store, config.shoe.clone(), rng).context("не удалось собрать шуз")?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_blackjack(&mut session, &mut console).context("сессия завершилась с ошибкой")?;

    Ok(())
}
