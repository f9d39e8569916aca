//! Движок блэкджека: шуз, ход игрока, правило дилера, расчёт.
//!
//! Высокоуровневый объект: `RoundEngine`
//! Основные операции:
//!   - `start_round` – принять ставку и раздать карты
//!   - `apply_decision` – применить hit/stand игрока
//!   - `advance_if_needed` – авто-ход дилера и расчёт

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod history;
pub mod settlement;
pub mod shoe;
pub mod shuffle;
pub mod validation;

pub use actions::PlayerDecision;
pub use errors::EngineError;
pub use game_loop::{
    advance_if_needed, apply_decision, dealer_should_hit, start_round, RoundEngine, RoundPhase,
    RoundStatus, RoundSummary,
};
pub use history::{RoundEvent, RoundEventKind, RoundHistory, Seat};
pub use settlement::{resolve, settle, RoundOutcome};
pub use shoe::Shoe;

/// RNG интерфейс для engine.
/// Реализации: в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Честная монетка.
    fn coin_flip(&mut self) -> bool;

    /// Равномерное целое из `[low, high]` (обе границы включены).
    fn range_inclusive(&mut self, low: usize, high: usize) -> usize;
}
