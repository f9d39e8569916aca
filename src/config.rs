//! Конфигурация: шуз, файл со счетами, seed RNG.
//!
//! Дефолты совпадают с классическим столом: 6 колод, перемешивание после 75%
//! розданных карт, 7 риффлов.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;
use crate::engine::shuffle::DEFAULT_RIFFLE_PASSES;

pub const DEFAULT_USERS_FILE: &str = "blackjack_users.json";
pub const DEFAULT_DECKS: u32 = 6;
pub const DEFAULT_SHUFFLE_POINT: f64 = 0.75;
pub const DEFAULT_BOARD_SIZE: usize = 3;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("В шузе должна быть хотя бы одна колода")]
    NoDecks,

    #[error("Точка перемешивания должна быть в [0, 1), получено {0}")]
    ShufflePointOutOfRange(f64),

    #[error("Размер доски должен быть от 1 до 9, получено {0}")]
    BoardSize(usize),

    #[error("Карты {card} не хватает в шузе из {decks} колод")]
    StackedCardUnavailable { card: Card, decks: u32 },
}

/// Параметры шуза.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShoeConfig {
    /// Число 52-карточных колод.
    pub decks: u32,
    /// Доля розданных карт, после которой шуз пересобирается.
    pub shuffle_point: f64,
    pub riffle_passes: u32,
}

impl Default for ShoeConfig {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            shuffle_point: DEFAULT_SHUFFLE_POINT,
            riffle_passes: DEFAULT_RIFFLE_PASSES,
        }
    }
}

impl ShoeConfig {
    pub fn with_decks(decks: u32) -> Self {
        Self {
            decks,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        // При shuffle_point = 1 порог равен нулю и пустой шуз никогда не пересоберётся.
        if !(0.0..1.0).contains(&self.shuffle_point) {
            return Err(ConfigError::ShufflePointOutOfRange(self.shuffle_point));
        }
        Ok(())
    }

    /// Полная ёмкость шуза в картах.
    pub fn capacity(&self) -> usize {
        self.decks as usize * 52
    }

    /// Если карт осталось меньше этого числа: пересобираем.
    pub fn reshuffle_below(&self) -> f64 {
        self.capacity() as f64 * (1.0 - self.shuffle_point)
    }
}

/// Общая конфигурация консольного казино.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CasinoConfig {
    pub users_file: PathBuf,
    pub shoe: ShoeConfig,
    /// Фиксированный seed для воспроизводимых раздач; `None`: системная энтропия.
    pub seed: Option<u64>,
}

impl Default for CasinoConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            shoe: ShoeConfig::default(),
            seed: None,
        }
    }
}

impl CasinoConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shoe.validate()
    }
}

/// Размер доски крестиков-ноликов: 1..=9 (координаты вводятся одной цифрой).
pub fn validate_board_size(size: usize) -> Result<(), ConfigError> {
    if (1..=9).contains(&size) {
        Ok(())
    } else {
        Err(ConfigError::BoardSize(size))
    }
}
