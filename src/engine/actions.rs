use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Решение игрока в свой ход. Удвоения, сплита и сдачи в этих правилах нет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerDecision {
    Hit,
    Stand,
}

/// Парсинг ответа игрока: `h`/`hit` или `s`/`stand`, регистр и пробелы не важны.
impl FromStr for PlayerDecision {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hit" => Ok(PlayerDecision::Hit),
            "s" | "stand" => Ok(PlayerDecision::Stand),
            other => Err(EngineError::UnknownDecision(other.to_string())),
        }
    }
}
