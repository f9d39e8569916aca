use tracing::info;

use crate::config::{ConfigError, ShoeConfig};
use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::errors::EngineError;
use crate::engine::shuffle::casino_shuffle;
use crate::engine::RandomSource;

/// Шуз: несколько колод, из которых сдаёт дилер.
///
/// Верх шуза: конец вектора. Когда карт остаётся меньше порога
/// (`ShoeConfig::reshuffle_below`), шуз пересобирается ДО выдачи карты.
#[derive(Clone, Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    config: ShoeConfig,
    /// Сколько раз шуз пересобирался (включая первую сборку).
    shuffles: u64,
}

impl Shoe {
    /// Собрать и перемешать новый шуз.
    pub fn new<R: RandomSource>(config: ShoeConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut shoe = Self {
            cards: Vec::new(),
            config,
            shuffles: 0,
        };
        shoe.rebuild(rng);
        Ok(shoe)
    }

    /// "Подтасованный" шуз: сначала сдаются `top` в указанном порядке,
    /// затем остаток полного состава (без перемешивания).
    /// Для тестов и реплея раздач. Каждая карта `top` должна найтись в составе,
    /// иначе `ConfigError::StackedCardUnavailable`.
    pub fn stacked(config: ShoeConfig, top: Vec<Card>) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rest = Deck::multi(config.decks);
        rest.remove_cards(&top)
            .map_err(|card| ConfigError::StackedCardUnavailable {
                card,
                decks: config.decks,
            })?;

        let mut cards = rest.cards;
        cards.extend(top.into_iter().rev());

        Ok(Self {
            cards,
            config,
            shuffles: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn shuffles(&self) -> u64 {
        self.shuffles
    }

    pub fn needs_reshuffle(&self) -> bool {
        (self.cards.len() as f64) < self.config.reshuffle_below()
    }

    /// Пересобрать полный состав и перемешать.
    pub fn rebuild<R: RandomSource>(&mut self, rng: &mut R) {
        self.cards = Deck::multi(self.config.decks).cards;
        casino_shuffle(&mut self.cards, self.config.riffle_passes, rng);
        self.shuffles += 1;
        info!(
            decks = self.config.decks,
            cards = self.cards.len(),
            "шуз пересобран и перемешан"
        );
    }

    /// Сдать одну карту сверху, при необходимости сначала пересобрав шуз.
    pub fn deal_card<R: RandomSource>(&mut self, rng: &mut R) -> Result<Card, EngineError> {
        if self.needs_reshuffle() {
            self.rebuild(rng);
        }
        self.cards
            .pop()
            .ok_or(EngineError::Internal("шуз пуст после пересборки"))
    }
}
