use crate::domain::account::Account;
use crate::domain::card::Card;
use crate::domain::hand::Hand;
use crate::engine::{RoundEngine, RoundSummary, Shoe};
use crate::infra::mapping::CREATED_DATE_FORMAT;

use super::dto::{AccountStatsDto, HandViewDto, RoundResultDto, RoundViewDto};

/// Сформировать DTO руки. `hide_first`: закрытая карта дилера.
pub fn build_hand_view(hand: &Hand, hide_first: bool) -> HandViewDto {
    let cards = hand
        .cards()
        .iter()
        .enumerate()
        .map(|(i, c)| if hide_first && i == 0 { None } else { Some(*c) })
        .collect();

    HandViewDto {
        cards,
        value: if hide_first { None } else { Some(hand.value()) },
        visible_value: if hide_first {
            hand.visible_value()
        } else {
            hand.value()
        },
        // Пока карта закрыта, натурал/перебор дилера не раскрываем.
        is_blackjack: !hide_first && hand.is_blackjack(),
        is_bust: !hide_first && hand.is_bust(),
    }
}

/// Руку из итогов раунда собираем заново: все карты уже открыты.
fn hand_from_cards(cards: &[Card]) -> Hand {
    Hand::from_cards(cards.iter().copied())
}

/// Состояние стола для игрока. Закрытая карта дилера скрыта во время хода игрока.
pub fn build_round_view(engine: &RoundEngine, shoe: &Shoe, account: &Account) -> RoundViewDto {
    RoundViewDto {
        phase: engine.phase,
        bet: engine.bet,
        balance: account.balance(),
        player: build_hand_view(&engine.player, false),
        dealer: build_hand_view(&engine.dealer, engine.dealer_hole_hidden()),
        cards_remaining: shoe.cards_remaining(),
    }
}

pub fn build_stats_view(account: &Account) -> AccountStatsDto {
    AccountStatsDto {
        username: account.username().to_string(),
        balance: account.balance(),
        total_deposited: account.total_deposited(),
        total_bet: account.total_bet(),
        total_won: account.total_won(),
        net_earnings: account.net_earnings(),
        roi: account.roi(),
        games_played: account.games_played(),
        games_won: account.games_won(),
        win_rate: account.win_rate(),
        created_date: account.created().format(CREATED_DATE_FORMAT).to_string(),
    }
}

pub fn build_round_result(summary: &RoundSummary, account: &Account) -> RoundResultDto {
    RoundResultDto {
        outcome: summary.outcome,
        message: summary.outcome.describe().to_string(),
        bet: summary.bet,
        payout: summary.payout,
        balance_after: account.balance(),
        player: build_hand_view(&hand_from_cards(&summary.player_cards), false),
        dealer: build_hand_view(&hand_from_cards(&summary.dealer_cards), false),
    }
}
