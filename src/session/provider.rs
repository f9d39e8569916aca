use std::collections::VecDeque;

use crate::api::dto::RoundViewDto;
use crate::domain::money::Money;
use crate::engine::errors::EngineError;

/// Источник решений: человек за консолью или скрипт в тестах.
///
/// Ответы могут быть невалидными: сессия переспросит без побочных эффектов.
/// `None` означает, что ввод кончился (EOF / прерывание).
pub trait DecisionProvider {
    fn bet_amount(&mut self, balance: Money) -> Option<Money>;

    /// Сырой ответ на "hit или stand?": парсит уже сессия.
    fn hit_or_stand(&mut self, view: &RoundViewDto) -> Option<String>;

    /// Сумма пополнения; 0: пропустить.
    fn deposit_amount(&mut self, balance: Money) -> Option<Money>;

    /// Ответ отклонён, сейчас спросят снова.
    fn rejected(&mut self, _error: &EngineError) {}
}

/// Заранее записанные ответы. Для тестов и автоматических прогонов.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    pub bets: VecDeque<Money>,
    pub moves: VecDeque<String>,
    pub deposits: VecDeque<Money>,
    /// Все отказы, которые сессия вернула по ходу.
    pub rejections: Vec<EngineError>,
}

impl ScriptedDecisions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bet(mut self, amount: f64) -> Self {
        self.bets.push_back(Money(amount));
        self
    }

    pub fn moves<'a>(mut self, tokens: impl IntoIterator<Item = &'a str>) -> Self {
        self.moves.extend(tokens.into_iter().map(str::to_string));
        self
    }

    pub fn deposit(mut self, amount: f64) -> Self {
        self.deposits.push_back(Money(amount));
        self
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn bet_amount(&mut self, _balance: Money) -> Option<Money> {
        self.bets.pop_front()
    }

    fn hit_or_stand(&mut self, _view: &RoundViewDto) -> Option<String> {
        self.moves.pop_front()
    }

    fn deposit_amount(&mut self, _balance: Money) -> Option<Money> {
        self.deposits.pop_front()
    }

    fn rejected(&mut self, error: &EngineError) {
        self.rejections.push(error.clone());
    }
}
