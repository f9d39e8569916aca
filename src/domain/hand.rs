use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Порог, выше которого рука "сгорает".
pub const BLACKJACK: u32 = 21;

/// Рука игрока или дилера.
///
/// `value` пересчитывается после каждой карты: тузы сначала идут за 11
/// и понижаются до 1 по одному, пока сумма больше 21.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    value: u32,
    /// Сколько тузов всё ещё считаются за 11.
    soft_aces: u32,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Рука из готового набора карт (удобно для тестов и реплея).
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self::new();
        for card in cards {
            hand.add_card(card);
        }
        hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.value += card.value();
        if card.is_ace() {
            self.soft_aces += 1;
        }

        while self.value > BLACKJACK && self.soft_aces > 0 {
            self.value -= 10;
            self.soft_aces -= 1;
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Есть ли туз, который всё ещё считается за 11.
    pub fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Натуральный блэкджек: ровно две карты и 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.value > BLACKJACK
    }

    /// Сумма открытых карт, когда первая (закрытая) карта дилера скрыта.
    /// Номиналы без пересчёта тузов.
    pub fn visible_value(&self) -> u32 {
        self.cards.iter().skip(1).map(Card::value).sum()
    }
}
