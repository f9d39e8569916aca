use crate::domain::account::Account;
use crate::domain::money::Money;
use crate::engine::errors::EngineError;
use crate::engine::settlement::BLACKJACK_MULTIPLIER;

/// Проверка суммы ставки относительно баланса (без проверки "пустого" счёта).
pub fn validate_bet_amount(balance: Money, bet: Money) -> Result<(), EngineError> {
    if !bet.is_positive() {
        return Err(EngineError::InvalidBet);
    }
    if bet > balance {
        return Err(EngineError::InsufficientFunds { bet, balance });
    }
    Ok(())
}

/// Даже максимальная выплата (блэкджек) должна оставить счёт в пределах `Money::MAX`.
pub fn validate_bet_headroom(account: &Account, bet: Money) -> Result<(), EngineError> {
    let best = bet * BLACKJACK_MULTIPLIER;
    let fits = (account.balance() - bet + best).within_limit()
        && (account.total_won() + best).within_limit()
        && (account.total_bet() + bet).within_limit();
    if fits {
        Ok(())
    } else {
        Err(EngineError::InvalidBet)
    }
}

/// Полная проверка перед стартом раунда: сначала сам счёт, потом ставка.
pub fn validate_bet(account: &Account, bet: Money) -> Result<(), EngineError> {
    if !account.balance().is_positive() {
        return Err(EngineError::OutOfFunds);
    }
    validate_bet_amount(account.balance(), bet)?;
    validate_bet_headroom(account, bet)
}

pub fn validate_deposit(amount: Money) -> Result<(), EngineError> {
    if amount.is_positive() && amount.within_limit() {
        Ok(())
    } else {
        Err(EngineError::InvalidDeposit)
    }
}

/// Пополнение конкретного счёта: баланс и сумма пополнений остаются в пределах.
pub fn validate_deposit_into(account: &Account, amount: Money) -> Result<(), EngineError> {
    validate_deposit(amount)?;
    let fits = (account.balance() + amount).within_limit()
        && (account.total_deposited() + amount).within_limit();
    if fits {
        Ok(())
    } else {
        Err(EngineError::InvalidDeposit)
    }
}
