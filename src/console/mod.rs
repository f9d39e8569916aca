//! Консольный фронт: ASCII-карты, меню, ввод решений.

pub mod menu;
pub mod prompt;
pub mod render;

pub use menu::{run_blackjack, MenuChoice};
pub use prompt::Console;
