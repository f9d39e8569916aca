//! Сессия: логин, пополнения, полный раунд со скриптованными решениями,
//! сохранение счетов после каждого раунда.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use console_casino::config::{ConfigError, ShoeConfig};
use console_casino::domain::{Card, Money};
use console_casino::engine::{EngineError, RoundOutcome, Shoe};
use console_casino::infra::{
    AccountMap, AccountRecord, AccountStore, DeterministicRng, InMemoryAccountStore,
    StorageError,
};
use console_casino::session::{LoginOutcome, ScriptedDecisions, Session, SessionError};

fn stacked(top: &[&str]) -> Shoe {
    let cards: Vec<Card> = top.iter().map(|s| s.parse().unwrap()).collect();
    Shoe::stacked(ShoeConfig::default(), cards).unwrap()
}

/// Игрок 19 против 18 у дилера.
const PLAYER_19_DEALER_18: [&str; 4] = ["10♠", "10♥", "9♠", "8♥"];

fn session_with<S: AccountStore>(store: S, top: &[&str]) -> Session<S, DeterministicRng> {
    Session::with_shoe(store, stacked(top), DeterministicRng::from_seed(5))
}

/// Хранилище, которое не умеет сохранять.
struct ReadOnlyStore;

impl AccountStore for ReadOnlyStore {
    fn load_accounts(&self) -> Result<AccountMap, StorageError> {
        Ok(AccountMap::new())
    }

    fn save_accounts(&mut self, _accounts: &AccountMap) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: PathBuf::from("/readonly/blackjack_users.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[test]
fn login_creates_then_finds_account() {
    let mut session = session_with(InMemoryAccountStore::new(), &[]);

    assert_eq!(session.login("  alice "), Ok(LoginOutcome::Created));
    assert_eq!(session.current_user(), Some("alice"));
    assert_eq!(session.current_account().unwrap().balance(), Money::ZERO);

    session.logout();
    assert_eq!(session.current_user(), None);
    assert_eq!(session.login("alice"), Ok(LoginOutcome::Existing));
    assert_eq!(session.book().len(), 1);

    assert_eq!(session.login("   "), Err(SessionError::EmptyUsername));
}

#[test]
fn stored_accounts_are_loaded_on_open() {
    let mut records = BTreeMap::new();
    records.insert(
        "alice".to_string(),
        AccountRecord {
            balance: Money(40.0),
            games_played: 2,
            ..AccountRecord::default()
        },
    );
    let mut session = session_with(InMemoryAccountStore::with_records(records), &[]);

    assert_eq!(session.login("alice"), Ok(LoginOutcome::Existing));
    let acc = session.current_account().unwrap();
    assert_eq!(acc.balance(), Money(40.0));
    assert_eq!(acc.games_played(), 2);
}

#[test]
fn operations_require_login() {
    let mut session = session_with(InMemoryAccountStore::new(), &PLAYER_19_DEALER_18);
    let mut provider = ScriptedDecisions::new().bet(10.0);

    assert_eq!(
        session.deposit(Money(10.0)),
        Err(SessionError::NotLoggedIn)
    );
    assert!(matches!(
        session.play_round(&mut provider),
        Err(SessionError::NotLoggedIn)
    ));
}

#[test]
fn full_round_with_retries_and_save() {
    let mut session = session_with(InMemoryAccountStore::new(), &PLAYER_19_DEALER_18);
    session.login("alice").unwrap();
    assert_eq!(session.deposit(Money(100.0)), Ok(Money(100.0)));

    let mut provider = ScriptedDecisions::new()
        .bet(0.0)
        .bet(500.0)
        .bet(10.0)
        .moves(["x", " S "]);

    let report = session.play_round(&mut provider).unwrap().unwrap();

    assert_eq!(report.summary.outcome, RoundOutcome::PlayerHigher);
    assert_eq!(report.result.payout, Money(20.0));
    assert_eq!(report.result.balance_after, Money(110.0));
    assert!(report.save_error.is_none());

    assert_eq!(
        provider.rejections,
        vec![
            EngineError::InvalidBet,
            EngineError::InsufficientFunds {
                bet: Money(500.0),
                balance: Money(100.0)
            },
            EngineError::UnknownDecision("x".to_string()),
        ]
    );

    let store = session.store();
    assert_eq!(store.saves(), 1);
    let saved = &store.records()["alice"];
    assert_eq!(saved.balance, Money(110.0));
    assert_eq!(saved.games_played, 1);
    assert_eq!(saved.games_won, 1);
    assert_eq!(saved.total_bet, Money(10.0));
}

#[test]
fn empty_balance_is_out_of_funds() {
    let mut session = session_with(InMemoryAccountStore::new(), &PLAYER_19_DEALER_18);
    session.login("bob").unwrap();
    let mut provider = ScriptedDecisions::new().bet(10.0);

    assert!(matches!(
        session.play_round(&mut provider),
        Err(SessionError::Engine(EngineError::OutOfFunds))
    ));
    assert_eq!(provider.bets.len(), 1);
}

#[test]
fn no_bet_means_no_round() {
    let mut session = session_with(InMemoryAccountStore::new(), &PLAYER_19_DEALER_18);
    session.login("carol").unwrap();
    session.deposit(Money(30.0)).unwrap();

    let mut provider = ScriptedDecisions::new();
    assert!(matches!(session.play_round(&mut provider), Ok(None)));

    let acc = session.current_account().unwrap();
    assert_eq!(acc.balance(), Money(30.0));
    assert_eq!(acc.games_played(), 0);
    assert_eq!(session.store().saves(), 0);
    assert_eq!(session.shoe().cards_remaining(), 312);
}

#[test]
fn input_ending_mid_round_stands() {
    let mut session = session_with(InMemoryAccountStore::new(), &PLAYER_19_DEALER_18);
    session.login("dave").unwrap();
    session.deposit(Money(50.0)).unwrap();

    let mut provider = ScriptedDecisions::new().bet(50.0);
    let report = session.play_round(&mut provider).unwrap().unwrap();

    assert_eq!(report.summary.player_cards.len(), 2);
    assert_eq!(report.summary.outcome, RoundOutcome::PlayerHigher);
    assert_eq!(session.store().records()["dave"].balance, Money(100.0));
}

#[test]
fn save_failure_is_reported_but_not_fatal() {
    let mut session = session_with(ReadOnlyStore, &PLAYER_19_DEALER_18);
    session.login("erin").unwrap();
    session.deposit(Money(20.0)).unwrap();

    let mut provider = ScriptedDecisions::new().bet(10.0).moves(["s"]);
    let report = session.play_round(&mut provider).unwrap().unwrap();

    assert!(matches!(report.save_error, Some(StorageError::Io { .. })));
    assert_eq!(
        session.current_account().unwrap().balance(),
        Money(30.0)
    );
    assert!(session.save().is_err());
}

#[test]
fn prompt_deposit_retries_until_valid_or_skipped() {
    let mut session = session_with(InMemoryAccountStore::new(), &[]);
    session.login("frank").unwrap();

    let mut provider = ScriptedDecisions::new().deposit(-5.0).deposit(20.0);
    assert_eq!(session.prompt_deposit(&mut provider), Ok(Some(Money(20.0))));
    assert_eq!(provider.rejections, vec![EngineError::InvalidDeposit]);

    let mut skip = ScriptedDecisions::new().deposit(0.0).deposit(99.0);
    assert_eq!(session.prompt_deposit(&mut skip), Ok(None));
    assert_eq!(skip.deposits.len(), 1);

    let acc = session.current_account().unwrap();
    assert_eq!(acc.balance(), Money(20.0));
    assert_eq!(acc.total_deposited(), Money(20.0));
}

#[test]
fn consecutive_rounds_share_the_shoe() {
    let top = [
        "10♠", "10♥", "9♠", "8♥", // 19 против 18
        "10♣", "9♦", "7♣", "8♦", "K♦", // 17 → hit K → перебор
    ];
    let mut session = session_with(InMemoryAccountStore::new(), &top);
    session.login("gina").unwrap();
    session.deposit(Money(100.0)).unwrap();

    let mut provider = ScriptedDecisions::new()
        .bet(10.0)
        .bet(20.0)
        .moves(["s", "h"]);

    let first = session.play_round(&mut provider).unwrap().unwrap();
    let second = session.play_round(&mut provider).unwrap().unwrap();

    assert_eq!(first.summary.outcome, RoundOutcome::PlayerHigher);
    assert_eq!(second.summary.outcome, RoundOutcome::PlayerBust);
    assert_eq!(session.shoe().cards_remaining(), 312 - 9);

    let acc = session.current_account().unwrap();
    assert_eq!(acc.balance(), Money(90.0));
    assert_eq!(acc.games_played(), 2);
    assert_eq!(acc.games_won(), 1);
    assert_eq!(session.store().saves(), 2);
}

#[test]
fn open_validates_shoe_config() {
    let session = Session::open(
        InMemoryAccountStore::new(),
        ShoeConfig::default(),
        DeterministicRng::from_seed(1),
    )
    .unwrap();
    assert_eq!(session.shoe().cards_remaining(), 312);
    assert_eq!(session.shoe().shuffles(), 1);

    let bad = Session::open(
        InMemoryAccountStore::new(),
        ShoeConfig::with_decks(0),
        DeterministicRng::from_seed(1),
    );
    assert!(matches!(bad, Err(ConfigError::NoDecks)));
}
