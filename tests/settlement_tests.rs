//! Расчёт исхода и выплат: порядок веток в `resolve` и эффекты `settle` на счёте.

use console_casino::domain::{Account, Card, Hand, Money};
use console_casino::engine::{resolve, settle, RoundOutcome};

fn hand(cards: &[&str]) -> Hand {
    Hand::from_cards(cards.iter().map(|s| s.parse::<Card>().unwrap()))
}

fn account_after_bet(balance: f64, bet: f64) -> Account {
    let mut acc = Account::new("settle");
    acc.deposit(Money(balance)).unwrap();
    acc.place_bet(Money(bet)).unwrap();
    acc.record_game();
    acc
}

#[test]
fn resolve_covers_every_branch() {
    let cases = [
        (hand(&["K♠", "Q♠", "5♠"]), hand(&["10♥", "9♥"]), RoundOutcome::PlayerBust),
        (hand(&["10♠", "8♠"]), hand(&["10♥", "6♥", "K♥"]), RoundOutcome::DealerBust),
        (hand(&["A♠", "K♠"]), hand(&["A♥", "Q♥"]), RoundOutcome::BothBlackjack),
        (hand(&["A♠", "K♠"]), hand(&["10♥", "9♥"]), RoundOutcome::PlayerBlackjack),
        (hand(&["10♠", "9♠"]), hand(&["A♥", "Q♥"]), RoundOutcome::DealerBlackjack),
        (hand(&["10♠", "9♠"]), hand(&["10♥", "8♥"]), RoundOutcome::PlayerHigher),
        (hand(&["10♠", "7♠"]), hand(&["10♥", "8♥"]), RoundOutcome::DealerHigher),
        (hand(&["10♠", "8♠"]), hand(&["10♥", "8♥"]), RoundOutcome::Push),
    ];

    for (player, dealer, expected) in cases {
        assert_eq!(
            resolve(&player, &dealer),
            expected,
            "player {:?} vs dealer {:?}",
            player.cards(),
            dealer.cards()
        );
    }
}

#[test]
fn three_card_21_is_not_a_natural() {
    // 21 из трёх карт против натурала дилера: проигрыш, не пуш.
    let player = hand(&["7♠", "7♥", "7♦"]);
    let dealer = hand(&["A♥", "K♥"]);
    assert_eq!(resolve(&player, &dealer), RoundOutcome::DealerBlackjack);

    // И наоборот: натурал игрока бьёт 21 дилера из трёх карт.
    let player = hand(&["A♠", "Q♠"]);
    let dealer = hand(&["5♥", "6♥", "K♥"]);
    assert_eq!(resolve(&player, &dealer), RoundOutcome::PlayerBlackjack);
}

#[test]
fn push_never_on_bust() {
    // Оба перебрали с одинаковой суммой: проигрыш игрока.
    let player = hand(&["K♠", "Q♠", "2♠"]);
    let dealer = hand(&["K♥", "Q♥", "2♥"]);
    assert_eq!(player.value(), dealer.value());
    let outcome = resolve(&player, &dealer);
    assert_eq!(outcome, RoundOutcome::PlayerBust);
    assert!(!outcome.is_push());

    for outcome in [RoundOutcome::PlayerBust, RoundOutcome::DealerBust] {
        assert!(!outcome.is_push());
    }
}

#[test]
fn payout_multipliers() {
    let bet = Money(10.0);
    assert_eq!(RoundOutcome::PlayerBlackjack.payout(bet), Money(25.0));
    assert_eq!(RoundOutcome::DealerBust.payout(bet), Money(20.0));
    assert_eq!(RoundOutcome::PlayerHigher.payout(bet), Money(20.0));
    assert_eq!(RoundOutcome::BothBlackjack.payout(bet), Money(10.0));
    assert_eq!(RoundOutcome::Push.payout(bet), Money(10.0));
    assert_eq!(RoundOutcome::PlayerBust.payout(bet), Money::ZERO);
    assert_eq!(RoundOutcome::DealerBlackjack.payout(bet), Money::ZERO);
    assert_eq!(RoundOutcome::DealerHigher.payout(bet), Money::ZERO);
}

#[test]
fn natural_win_updates_account() {
    let mut acc = account_after_bet(100.0, 10.0);
    let payout = settle(&mut acc, RoundOutcome::PlayerBlackjack, Money(10.0));

    assert_eq!(payout, Money(25.0));
    assert_eq!(acc.balance(), Money(115.0));
    assert_eq!(acc.total_won(), Money(25.0));
    assert_eq!(acc.games_won(), 1);
    assert_eq!(acc.games_played(), 1);
}

#[test]
fn both_naturals_refund_only() {
    let mut acc = account_after_bet(100.0, 10.0);
    let payout = settle(&mut acc, RoundOutcome::BothBlackjack, Money(10.0));

    assert_eq!(payout, Money(10.0));
    assert_eq!(acc.balance(), Money(100.0));
    assert_eq!(acc.total_won(), Money::ZERO);
    assert_eq!(acc.games_won(), 0);
}

#[test]
fn loss_changes_nothing_but_the_bet() {
    for outcome in [
        RoundOutcome::PlayerBust,
        RoundOutcome::DealerBlackjack,
        RoundOutcome::DealerHigher,
    ] {
        let mut acc = account_after_bet(100.0, 10.0);
        let before = acc.clone();
        assert_eq!(settle(&mut acc, outcome, Money(10.0)), Money::ZERO);
        assert_eq!(acc, before);
        assert!(outcome.is_loss());
    }
}

#[test]
fn every_outcome_has_a_message() {
    let all = [
        RoundOutcome::PlayerBust,
        RoundOutcome::DealerBust,
        RoundOutcome::BothBlackjack,
        RoundOutcome::PlayerBlackjack,
        RoundOutcome::DealerBlackjack,
        RoundOutcome::PlayerHigher,
        RoundOutcome::DealerHigher,
        RoundOutcome::Push,
    ];
    for outcome in all {
        assert!(!outcome.describe().is_empty());
        let kinds = [outcome.is_win(), outcome.is_push(), outcome.is_loss()];
        assert_eq!(kinds.iter().filter(|k| **k).count(), 1);
    }
}
