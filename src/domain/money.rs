use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Сумма денег на счёте. Обёртка над f64, чтобы не путать с обычными числами.
///
/// Дробные значения допустимы: ставка может быть любой положительной,
/// а блэкджек платит 3:2.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Money(pub f64);

impl Money {
    pub const ZERO: Money = Money(0.0);
    /// Предел для любой суммы на счёте: баланса, накоплений, выплаты.
    /// Выше него (и тем более при `inf`) JSON со счетами уже не прочитать.
    pub const MAX: Money = Money(1e12);

    pub fn new(amount: f64) -> Self {
        Money(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Строго больше нуля (NaN сюда не попадает).
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Конечна и не больше `Money::MAX`.
    pub fn within_limit(&self) -> bool {
        self.0.is_finite() && *self <= Money::MAX
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

/// Множитель выплаты: 2× за обычный выигрыш, 2.5× за блэкджек.
impl Mul<f64> for Money {
    type Output = Money;

    fn mul(self, rhs: f64) -> Self::Output {
        Money(self.0 * rhs)
    }
}

impl fmt::Display for Money {
    /// Формат вида `$25.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
