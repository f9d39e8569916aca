//! "Казино"-перемешивание шуза: несколько риффлов и срез.
//!
//! Это косметическая модель: равномерность перестановок не гарантируется,
//! важно только, чтобы колода выглядела перемешанной.

use std::collections::VecDeque;

use crate::engine::RandomSource;

/// Сколько риффлов по умолчанию.
pub const DEFAULT_RIFFLE_PASSES: u32 = 7;

/// Полное перемешивание: `passes` риффлов, затем срез.
pub fn casino_shuffle<T, R: RandomSource>(cards: &mut Vec<T>, passes: u32, rng: &mut R) {
    for _ in 0..passes {
        riffle(cards, rng);
    }
    cut(cards, rng);
}

/// Один риффл: делим пополам и по монетке берём верхнюю карту из левой
/// или правой половины, пока одна из них не кончится; остаток в конец.
pub fn riffle<T, R: RandomSource>(cards: &mut Vec<T>, rng: &mut R) {
    let mid = cards.len() / 2;
    let mut right: VecDeque<T> = cards.drain(mid..).collect();
    let mut left: VecDeque<T> = cards.drain(..).collect();

    while !left.is_empty() && !right.is_empty() {
        let pile = if rng.coin_flip() { &mut left } else { &mut right };
        if let Some(card) = pile.pop_front() {
            cards.push(card);
        }
    }

    cards.extend(left);
    cards.extend(right);
}

/// Срез в случайной точке из средней половины колоды: [len/4, 3*len/4].
pub fn cut<T, R: RandomSource>(cards: &mut [T], rng: &mut R) {
    let len = cards.len();
    if len < 2 {
        return;
    }
    let cut_point = rng.range_inclusive(len / 4, 3 * len / 4);
    cards.rotate_left(cut_point);
}
