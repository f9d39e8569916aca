use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене: просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// ♠ A..K, ♥ A..K, ♦ A..K, ♣ A..K.
    pub fn standard_52() -> Self {
        Self::multi(1)
    }

    /// Состав шуза: `decks` полных колод подряд, без перемешивания.
    pub fn multi(decks: u32) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * 52);
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Убрать по одному экземпляру каждой из указанных карт.
    ///
    /// `Err(card)`: экземпляры `card` кончились; колода к этому моменту
    /// уже частично изменена.
    pub fn remove_cards(&mut self, to_remove: &[Card]) -> Result<(), Card> {
        for card in to_remove {
            let pos = self
                .cards
                .iter()
                .position(|c| c == card)
                .ok_or(*card)?;
            self.cards.remove(pos);
        }
        Ok(())
    }
}
