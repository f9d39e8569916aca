//! Крестики-нолики на двоих в консоли.

use std::io;

use anyhow::Context;
use clap::Parser;

use console_casino::config::DEFAULT_BOARD_SIZE;
use console_casino::console::Console;
use console_casino::tictactoe::{play_game, Board, GameResult};

#[derive(Parser, Debug)]
#[command(author, version, about = "Крестики-нолики N×N", long_about = None)]
struct Args {
    /// Сторона доски (1-9).
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

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

    let mut board = Board::new(args.size).context("неверный размер доски")?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match play_game(&mut board, &mut console) {
        GameResult::Winner(mark) => console.say(&format!("\n{mark} побеждает!")),
        GameResult::Draw => console.say("\nНичья!"),
        GameResult::Aborted => console.say("\nИгра прервана."),
    }

    Ok(())
}
