use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::account::Account;
use crate::domain::card::Card;
use crate::domain::hand::{Hand, BLACKJACK};
use crate::domain::money::Money;
use crate::engine::actions::PlayerDecision;
use crate::engine::errors::EngineError;
use crate::engine::history::{RoundEventKind, RoundHistory, Seat};
use crate::engine::settlement::{resolve, settle, RoundOutcome};
use crate::engine::shoe::Shoe;
use crate::engine::validation::validate_bet;
use crate::engine::RandomSource;

/// Дилер добирает, пока сумма меньше этого значения (стоит на любых 17).
pub const DEALER_STANDS_ON: u32 = 17;

/// Фаза раунда.
///
/// `Betting → Dealing → PlayerTurn → DealerTurn → Settlement → Done`,
/// с короткими путями `Dealing → Settlement` (натуральный блэкджек)
/// и `PlayerTurn → Settlement` (перебор игрока).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    Betting,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settlement,
    Done,
}

/// Итог завершённого раунда. Удобно для экрана результатов и истории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundSummary {
    pub bet: Money,
    pub outcome: RoundOutcome,
    pub payout: Money,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_value: u32,
    pub dealer_value: u32,
    pub history: RoundHistory,
}

/// Статус раунда для внешнего кода.
#[derive(Clone, Debug, PartialEq)]
pub enum RoundStatus {
    Ongoing,
    Finished(RoundSummary),
}

/// Внутреннее состояние раунда. Живёт от ставки до расчёта.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    pub phase: RoundPhase,
    pub bet: Money,
    pub player: Hand,
    pub dealer: Hand,
    /// История раунда.
    pub history: RoundHistory,
    summary: Option<RoundSummary>,
}

impl RoundEngine {
    fn new(bet: Money) -> Self {
        Self {
            phase: RoundPhase::Betting,
            bet,
            player: Hand::new(),
            dealer: Hand::new(),
            history: RoundHistory::new(),
            summary: None,
        }
    }

    /// Закрытая карта дилера скрыта, пока игрок принимает решения.
    pub fn dealer_hole_hidden(&self) -> bool {
        self.phase == RoundPhase::PlayerTurn
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RoundPhase::Done
    }

    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }
}

/// Старт нового раунда:
/// - проверяет и списывает ставку, засчитывает сыгранную игру;
/// - сдаёт по две карты (игрок первым в каждой паре);
/// - при натуральном блэкджеке у любой стороны сразу переходит к расчёту.
pub fn start_round<R: RandomSource>(
    account: &mut Account,
    shoe: &mut Shoe,
    rng: &mut R,
    bet: Money,
) -> Result<RoundEngine, EngineError> {
    validate_bet(account, bet)?;
    account.place_bet(bet)?;
    account.record_game();

    let mut engine = RoundEngine::new(bet);
    engine.history.push(RoundEventKind::BetPlaced { bet });
    debug!(user = account.username(), bet = bet.0, "ставка принята");

    engine.phase = RoundPhase::Dealing;
    deal_initial_cards(&mut engine, shoe, rng)?;

    let player_natural = engine.player.is_blackjack();
    let dealer_natural = engine.dealer.is_blackjack();
    if player_natural || dealer_natural {
        engine.history.push(RoundEventKind::NaturalDealt {
            player: player_natural,
            dealer: dealer_natural,
        });
        engine.phase = RoundPhase::Settlement;
    } else {
        engine.phase = RoundPhase::PlayerTurn;
    }

    Ok(engine)
}

/// Начальная раздача – по 2 карты, поочерёдно, игрок первым.
fn deal_initial_cards<R: RandomSource>(
    engine: &mut RoundEngine,
    shoe: &mut Shoe,
    rng: &mut R,
) -> Result<(), EngineError> {
    for _round in 0..2 {
        deal_to(engine, Seat::Player, shoe, rng)?;
        deal_to(engine, Seat::Dealer, shoe, rng)?;
    }
    Ok(())
}

fn deal_to<R: RandomSource>(
    engine: &mut RoundEngine,
    seat: Seat,
    shoe: &mut Shoe,
    rng: &mut R,
) -> Result<(), EngineError> {
    let card = shoe.deal_card(rng)?;
    match seat {
        Seat::Player => engine.player.add_card(card),
        Seat::Dealer => engine.dealer.add_card(card),
    }
    engine.history.push(RoundEventKind::CardDealt { seat, card });
    Ok(())
}

/// Применить решение игрока. Возвращает статус раунда (идёт / закончился).
///
/// Перебор сразу ведёт к расчёту, ровно 21: автоматический stand.
pub fn apply_decision<R: RandomSource>(
    engine: &mut RoundEngine,
    account: &mut Account,
    shoe: &mut Shoe,
    rng: &mut R,
    decision: PlayerDecision,
) -> Result<RoundStatus, EngineError> {
    match engine.phase {
        RoundPhase::PlayerTurn => {}
        RoundPhase::Done => return Err(EngineError::NoActiveRound),
        _ => return Err(EngineError::IllegalAction),
    }

    engine
        .history
        .push(RoundEventKind::PlayerDecided { decision });

    match decision {
        PlayerDecision::Hit => {
            deal_to(engine, Seat::Player, shoe, rng)?;
            if engine.player.is_bust() {
                engine.phase = RoundPhase::Settlement;
            } else if engine.player.value() == BLACKJACK {
                engine.phase = RoundPhase::DealerTurn;
            }
        }
        PlayerDecision::Stand => {
            engine.phase = RoundPhase::DealerTurn;
        }
    }

    advance_if_needed(engine, account, shoe, rng)
}

/// Авто-переход: ход дилера и расчёт, если до них дошло.
/// Пока ход за игроком, возвращает `Ongoing`.
pub fn advance_if_needed<R: RandomSource>(
    engine: &mut RoundEngine,
    account: &mut Account,
    shoe: &mut Shoe,
    rng: &mut R,
) -> Result<RoundStatus, EngineError> {
    loop {
        match engine.phase {
            RoundPhase::PlayerTurn => return Ok(RoundStatus::Ongoing),

            RoundPhase::DealerTurn => {
                while dealer_should_hit(&engine.dealer) {
                    deal_to(engine, Seat::Dealer, shoe, rng)?;
                }
                engine.history.push(RoundEventKind::DealerStood {
                    value: engine.dealer.value(),
                });
                engine.phase = RoundPhase::Settlement;
            }

            RoundPhase::Settlement => {
                let outcome = resolve(&engine.player, &engine.dealer);
                let payout = settle(account, outcome, engine.bet);
                engine
                    .history
                    .push(RoundEventKind::Settled { outcome, payout });

                info!(
                    user = account.username(),
                    bet = engine.bet.0,
                    ?outcome,
                    payout = payout.0,
                    balance = account.balance().0,
                    "раунд рассчитан"
                );

                engine.summary = Some(RoundSummary {
                    bet: engine.bet,
                    outcome,
                    payout,
                    player_cards: engine.player.cards().to_vec(),
                    dealer_cards: engine.dealer.cards().to_vec(),
                    player_value: engine.player.value(),
                    dealer_value: engine.dealer.value(),
                    history: engine.history.clone(),
                });
                engine.phase = RoundPhase::Done;
            }

            RoundPhase::Done => {
                return engine
                    .summary
                    .clone()
                    .map(RoundStatus::Finished)
                    .ok_or(EngineError::Internal("раунд завершён без итога"));
            }

            RoundPhase::Betting | RoundPhase::Dealing => {
                return Err(EngineError::Internal("раунд не прошёл раздачу"));
            }
        }
    }
}

/// Правило дилера: добор, пока меньше 17 (мягкие 17 тоже стоят).
pub fn dealer_should_hit(dealer: &Hand) -> bool {
    dealer.value() < DEALER_STANDS_ON
}
