use serde::{Deserialize, Serialize};

use crate::domain::account::Account;
use crate::domain::hand::Hand;
use crate::domain::money::Money;

/// Обычный выигрыш: ставка возвращается вдвойне.
pub const WIN_MULTIPLIER: f64 = 2.0;
/// Натуральный блэкджек платит 3:2 (ставка + 1.5 ставки).
pub const BLACKJACK_MULTIPLIER: f64 = 2.5;

/// Исход раунда. Порядок вариантов = порядок проверки в `resolve`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Игрок перебрал: проигрыш при любой руке дилера.
    PlayerBust,
    DealerBust,
    /// Блэкджек у обоих: пуш.
    BothBlackjack,
    PlayerBlackjack,
    DealerBlackjack,
    PlayerHigher,
    DealerHigher,
    /// Равные суммы без перебора и без натуралов.
    Push,
}

impl RoundOutcome {
    /// Сколько возвращается игроку (0: ставка проиграна).
    pub fn payout(self, bet: Money) -> Money {
        match self {
            RoundOutcome::DealerBust | RoundOutcome::PlayerHigher => bet * WIN_MULTIPLIER,
            RoundOutcome::PlayerBlackjack => bet * BLACKJACK_MULTIPLIER,
            RoundOutcome::BothBlackjack | RoundOutcome::Push => bet,
            RoundOutcome::PlayerBust
            | RoundOutcome::DealerBlackjack
            | RoundOutcome::DealerHigher => Money::ZERO,
        }
    }

    pub fn is_win(self) -> bool {
        matches!(
            self,
            RoundOutcome::DealerBust | RoundOutcome::PlayerBlackjack | RoundOutcome::PlayerHigher
        )
    }

    pub fn is_push(self) -> bool {
        matches!(self, RoundOutcome::BothBlackjack | RoundOutcome::Push)
    }

    pub fn is_loss(self) -> bool {
        !self.is_win() && !self.is_push()
    }

    /// Короткое описание для экрана результатов.
    pub fn describe(self) -> &'static str {
        match self {
            RoundOutcome::PlayerBust => "Перебор! Дилер выигрывает.",
            RoundOutcome::DealerBust => "Дилер перебрал! Вы выиграли!",
            RoundOutcome::BothBlackjack => "Блэкджек у обоих! Пуш.",
            RoundOutcome::PlayerBlackjack => "БЛЭКДЖЕК! Вы выиграли!",
            RoundOutcome::DealerBlackjack => "У дилера блэкджек! Вы проиграли.",
            RoundOutcome::PlayerHigher => "Вы выиграли!",
            RoundOutcome::DealerHigher => "Дилер выигрывает.",
            RoundOutcome::Push => "Пуш! Ничья.",
        }
    }
}

/// Определить исход по финальным рукам. Срабатывает ровно одна ветка.
pub fn resolve(player: &Hand, dealer: &Hand) -> RoundOutcome {
    if player.is_bust() {
        return RoundOutcome::PlayerBust;
    }
    if dealer.is_bust() {
        return RoundOutcome::DealerBust;
    }

    match (player.is_blackjack(), dealer.is_blackjack()) {
        (true, true) => return RoundOutcome::BothBlackjack,
        (true, false) => return RoundOutcome::PlayerBlackjack,
        (false, true) => return RoundOutcome::DealerBlackjack,
        (false, false) => {}
    }

    match player.value().cmp(&dealer.value()) {
        std::cmp::Ordering::Greater => RoundOutcome::PlayerHigher,
        std::cmp::Ordering::Less => RoundOutcome::DealerHigher,
        std::cmp::Ordering::Equal => RoundOutcome::Push,
    }
}

/// Провести выплату по счёту. Возвращает выплаченную сумму.
pub fn settle(account: &mut Account, outcome: RoundOutcome, bet: Money) -> Money {
    let payout = outcome.payout(bet);
    if outcome.is_win() {
        account.settle_win(payout);
    } else if outcome.is_push() {
        account.refund(payout);
    }
    payout
}
