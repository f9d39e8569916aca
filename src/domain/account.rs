use chrono::{Local, NaiveDateTime};

use crate::domain::money::Money;
use crate::engine::errors::EngineError;
use crate::engine::validation::{validate_bet_amount, validate_bet_headroom, validate_deposit_into};

/// Счёт игрока: баланс + накопительная статистика.
///
/// Баланс меняется только через `deposit` / `place_bet` / `settle_win` / `refund`,
/// поэтому поля закрыты.
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    username: String,
    balance: Money,
    total_deposited: Money,
    total_bet: Money,
    total_won: Money,
    games_played: u32,
    games_won: u32,
    created_at: NaiveDateTime,
}

impl Account {
    /// Новый пустой счёт (первый логин).
    pub fn new(username: impl Into<String>) -> Self {
        Self::new_at(username, Local::now().naive_local())
    }

    pub fn new_at(username: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            username: username.into(),
            balance: Money::ZERO,
            total_deposited: Money::ZERO,
            total_bet: Money::ZERO,
            total_won: Money::ZERO,
            games_played: 0,
            games_won: 0,
            created_at,
        }
    }

    /// Восстановить счёт из сохранённых значений (см. `infra::mapping`).
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        username: impl Into<String>,
        balance: Money,
        total_deposited: Money,
        total_bet: Money,
        total_won: Money,
        games_played: u32,
        games_won: u32,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            username: username.into(),
            balance,
            total_deposited,
            total_bet,
            total_won,
            games_played,
            games_won,
            created_at,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn total_deposited(&self) -> Money {
        self.total_deposited
    }

    pub fn total_bet(&self) -> Money {
        self.total_bet
    }

    pub fn total_won(&self) -> Money {
        self.total_won
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn games_won(&self) -> u32 {
        self.games_won
    }

    pub fn created(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Пополнение. Неположительная сумма или выход за `Money::MAX` отклоняются,
    /// счёт не меняется.
    pub fn deposit(&mut self, amount: Money) -> Result<(), EngineError> {
        validate_deposit_into(self, amount)?;
        self.balance += amount;
        self.total_deposited += amount;
        Ok(())
    }

    /// Списать ставку. Отказ, если ставка больше баланса, не положительна
    /// или выигрыш по ней вывел бы счёт за `Money::MAX`.
    pub fn place_bet(&mut self, amount: Money) -> Result<(), EngineError> {
        validate_bet_amount(self.balance, amount)?;
        validate_bet_headroom(self, amount)?;
        self.balance -= amount;
        self.total_bet += amount;
        Ok(())
    }

    /// Зачислить выигрыш (ставка + приз) и засчитать победу.
    pub fn settle_win(&mut self, payout: Money) {
        self.balance += payout;
        self.total_won += payout;
        self.games_won += 1;
    }

    /// Пуш: ставка возвращается, победой не считается.
    pub fn refund(&mut self, bet: Money) {
        self.balance += bet;
    }

    pub fn record_game(&mut self) {
        self.games_played += 1;
    }

    pub fn net_earnings(&self) -> Money {
        self.total_won - self.total_bet
    }

    /// ROI в процентах; 0, пока не было ни одной ставки.
    pub fn roi(&self) -> f64 {
        if self.total_bet.is_zero() {
            return 0.0;
        }
        self.net_earnings().0 / self.total_bet.0 * 100.0
    }

    /// Процент выигранных игр; 0, пока не сыграно ни одной.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.games_played) * 100.0
    }
}
