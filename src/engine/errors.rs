use crate::domain::Money;

use thiserror::Error;

/// Ошибки движка блэкджека.
///
/// Все варианты, кроме `Internal`, это ожидаемые отказы; состояние не меняется,
/// вызывающий код может переспросить ввод.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("На счёте нет денег — сначала пополните баланс")]
    OutOfFunds,

    #[error("Ставка должна быть положительной, а выигрыш не выводить баланс за {max}", max = Money::MAX)]
    InvalidBet,

    #[error("Недостаточно средств: ставка {bet}, баланс {balance}")]
    InsufficientFunds { bet: Money, balance: Money },

    #[error("Сумма пополнения должна быть положительной, а баланс не больше {max}", max = Money::MAX)]
    InvalidDeposit,

    #[error("Неизвестное решение '{0}' — введите h (hit) или s (stand)")]
    UnknownDecision(String),

    #[error("Недопустимое действие в текущей фазе раунда")]
    IllegalAction,

    #[error("Раунд не активен")]
    NoActiveRound,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
