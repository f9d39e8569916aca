use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::money::Money;
use crate::engine::{RoundOutcome, RoundPhase};

/// DTO руки. `None` в `cards`: карта рубашкой вверх.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandViewDto {
    pub cards: Vec<Option<Card>>,
    /// Полная сумма – только если все карты открыты.
    pub value: Option<u32>,
    /// Сумма открытых карт (для дилера с закрытой картой).
    pub visible_value: u32,
    pub is_blackjack: bool,
    pub is_bust: bool,
}

impl HandViewDto {
    pub fn is_hidden(&self) -> bool {
        self.value.is_none()
    }
}

/// DTO стола во время раунда: то, что видит игрок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundViewDto {
    pub phase: RoundPhase,
    pub bet: Money,
    pub balance: Money,
    pub player: HandViewDto,
    pub dealer: HandViewDto,
    pub cards_remaining: usize,
}

/// DTO статистики счёта, включая производные метрики.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountStatsDto {
    pub username: String,
    pub balance: Money,
    pub total_deposited: Money,
    pub total_bet: Money,
    pub total_won: Money,
    pub net_earnings: Money,
    /// В процентах.
    pub roi: f64,
    pub games_played: u32,
    pub games_won: u32,
    /// В процентах.
    pub win_rate: f64,
    pub created_date: String,
}

/// DTO итогов раунда (экран "FINAL RESULTS").
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundResultDto {
    pub outcome: RoundOutcome,
    pub message: String,
    pub bet: Money,
    pub payout: Money,
    pub balance_after: Money,
    pub player: HandViewDto,
    pub dealer: HandViewDto,
}
