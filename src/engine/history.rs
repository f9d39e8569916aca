use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::money::Money;
use crate::engine::actions::PlayerDecision;
use crate::engine::settlement::RoundOutcome;

/// Кому ушла карта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Seat {
    Player,
    Dealer,
}

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Ставка принята и списана со счёта.
    BetPlaced { bet: Money },

    /// Карта сдана.
    CardDealt { seat: Seat, card: Card },

    /// Натуральный блэкджек после раздачи: ход дилера пропускается.
    NaturalDealt { player: bool, dealer: bool },

    /// Решение игрока.
    PlayerDecided { decision: PlayerDecision },

    /// Дилер остановился (или перебрал) с этой суммой.
    DealerStood { value: u32 },

    /// Расчёт.
    Settled { outcome: RoundOutcome, payout: Money },
}

/// Событие раунда с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    /// Сколько карт получил участник за раунд.
    pub fn cards_dealt_to(&self, seat: Seat) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, RoundEventKind::CardDealt { seat: s, .. } if s == seat))
            .count()
    }
}
