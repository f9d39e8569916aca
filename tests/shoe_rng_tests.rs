//! Тесты шуза и RNG:
//! - пересборка при пересечении порога;
//! - детерминированность DeterministicRng;
//! - "подтасованный" шуз сдаёт карты в заданном порядке;
//! - риффл и срез не теряют и не дублируют карты.

use console_casino::config::{ConfigError, ShoeConfig};
use console_casino::domain::{Card, Deck};
use console_casino::engine::shuffle::{casino_shuffle, cut, riffle};
use console_casino::engine::{RandomSource, Shoe};
use console_casino::infra::{ConfiguredRng, DeterministicRng, SystemRng};

/// Фиксированный RNG: монетка всегда одна, срез всегда по нижней границе.
/// Запоминает запрошенные границы среза.
struct FixedRng {
    heads: bool,
    ranges: Vec<(usize, usize)>,
}

impl FixedRng {
    fn new(heads: bool) -> Self {
        Self {
            heads,
            ranges: Vec::new(),
        }
    }
}

impl RandomSource for FixedRng {
    fn coin_flip(&mut self) -> bool {
        self.heads
    }

    fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.ranges.push((low, high));
        low
    }
}

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

//
// Shoe
//
#[test]
fn new_shoe_is_full_and_shuffled_once() {
    let mut rng = DeterministicRng::from_seed(7);
    let shoe = Shoe::new(ShoeConfig::default(), &mut rng).unwrap();

    assert_eq!(shoe.capacity(), 312);
    assert_eq!(shoe.cards_remaining(), 312);
    assert_eq!(shoe.shuffles(), 1);
    assert!(!shoe.needs_reshuffle());
}

#[test]
fn crossing_threshold_rebuilds_before_deal() {
    let mut rng = DeterministicRng::from_seed(42);
    let mut shoe = Shoe::new(ShoeConfig::default(), &mut rng).unwrap();

    // Порог 312 * 0.25 = 78: пока осталось >= 78, пересборки нет.
    for _ in 0..235 {
        shoe.deal_card(&mut rng).unwrap();
    }
    assert_eq!(shoe.cards_remaining(), 77);
    assert_eq!(shoe.shuffles(), 1);
    assert!(shoe.needs_reshuffle());

    shoe.deal_card(&mut rng).unwrap();
    assert_eq!(shoe.cards_remaining(), shoe.capacity() - 1);
    assert_eq!(shoe.shuffles(), 2);
}

#[test]
fn single_deck_shoe_never_runs_dry() {
    let mut rng = DeterministicRng::from_seed(3);
    let mut shoe = Shoe::new(ShoeConfig::with_decks(1), &mut rng).unwrap();

    for _ in 0..1_000 {
        shoe.deal_card(&mut rng).unwrap();
        assert!(shoe.cards_remaining() < 52);
    }
    assert!(shoe.shuffles() > 1);
}

#[test]
fn shoe_config_validation() {
    let mut rng = SystemRng;

    let no_decks = ShoeConfig::with_decks(0);
    assert_eq!(
        Shoe::new(no_decks, &mut rng).unwrap_err(),
        ConfigError::NoDecks
    );

    let bad_point = ShoeConfig {
        shuffle_point: 1.0,
        ..ShoeConfig::default()
    };
    assert_eq!(
        bad_point.validate(),
        Err(ConfigError::ShufflePointOutOfRange(1.0))
    );

    let zero_point = ShoeConfig {
        shuffle_point: 0.0,
        ..ShoeConfig::default()
    };
    assert!(zero_point.validate().is_ok());
}

#[test]
fn stacked_shoe_deals_top_cards_in_order() {
    let top = vec![c("A♠"), c("K♥"), c("7c"), c("A♠")];
    let mut shoe = Shoe::stacked(ShoeConfig::default(), top.clone()).unwrap();
    let mut rng = SystemRng;

    assert_eq!(shoe.cards_remaining(), 312);
    for expected in top {
        assert_eq!(shoe.deal_card(&mut rng).unwrap(), expected);
    }
    assert_eq!(shoe.cards_remaining(), 308);
    assert_eq!(shoe.shuffles(), 0);
}

#[test]
fn stacked_shoe_cannot_hold_more_copies_than_its_decks() {
    let seven_aces = vec![c("A♠"); 7];
    assert_eq!(
        Shoe::stacked(ShoeConfig::default(), seven_aces).unwrap_err(),
        ConfigError::StackedCardUnavailable {
            card: c("A♠"),
            decks: 6
        }
    );

    let shoe = Shoe::stacked(ShoeConfig::default(), vec![c("A♠"); 6]).unwrap();
    assert_eq!(shoe.cards_remaining(), shoe.capacity());
}

#[test]
fn same_seed_same_deal_sequence() {
    let deal = |seed: u64| -> Vec<Card> {
        let mut rng = ConfiguredRng::from_seed(Some(seed));
        let mut shoe = Shoe::new(ShoeConfig::default(), &mut rng).unwrap();
        (0..40).map(|_| shoe.deal_card(&mut rng).unwrap()).collect()
    };

    assert_eq!(deal(123), deal(123));
    assert_ne!(deal(123), deal(456));
}

//
// shuffle.rs
//
#[test]
fn riffle_with_constant_coin_keeps_half_order() {
    let mut heads = FixedRng::new(true);
    let mut cards: Vec<u32> = (0..10).collect();
    riffle(&mut cards, &mut heads);
    // Всегда левая половина: сначала 0..5, потом остаток правой.
    assert_eq!(cards, (0..10).collect::<Vec<u32>>());

    let mut tails = FixedRng::new(false);
    let mut cards: Vec<u32> = (0..10).collect();
    riffle(&mut cards, &mut tails);
    assert_eq!(cards, vec![5, 6, 7, 8, 9, 0, 1, 2, 3, 4]);
}

#[test]
fn cut_rotates_within_middle_half() {
    let mut rng = FixedRng::new(true);
    let mut cards: Vec<u32> = (0..8).collect();
    cut(&mut cards, &mut rng);

    assert_eq!(rng.ranges, vec![(2, 6)]);
    assert_eq!(cards, vec![2, 3, 4, 5, 6, 7, 0, 1]);

    // Пустая и одиночная колода: без изменений и без обращения к RNG.
    let mut one = vec![42u32];
    cut(&mut one, &mut rng);
    assert_eq!(one, vec![42]);
    assert_eq!(rng.ranges.len(), 1);
}

#[test]
fn casino_shuffle_is_a_permutation() {
    let mut rng = DeterministicRng::from_seed(99);
    let original = Deck::multi(6).cards;
    let mut cards = original.clone();
    casino_shuffle(&mut cards, 7, &mut rng);

    assert_eq!(cards.len(), original.len());
    assert_ne!(cards, original);

    let key = |c: &Card| (c.rank as u8, c.suit as u8);
    let mut a: Vec<_> = original.iter().map(key).collect();
    let mut b: Vec<_> = cards.iter().map(key).collect();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}
