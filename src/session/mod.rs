//! Сессия игрока: логин, пополнения, раунды, сохранение счетов.
//!
//! Сессия владеет шузом, RNG и репозиторием счетов; хранилище передаётся
//! снаружи через `AccountStore`. Всё строго последовательно.

pub mod book;
pub mod provider;

use thiserror::Error;
use tracing::{info, warn};

use crate::api::dto::RoundResultDto;
use crate::api::queries::{build_round_result, build_round_view};
use crate::config::{ConfigError, ShoeConfig};
use crate::domain::{Account, Money, Username};
use crate::engine::{
    advance_if_needed, apply_decision, start_round, EngineError, PlayerDecision, RandomSource,
    RoundEngine, RoundStatus, RoundSummary, Shoe,
};
use crate::engine::validation::validate_bet;
use crate::infra::persistence::{load_or_empty, AccountStore, StorageError};

pub use book::{AccountBook, LoginOutcome};
pub use provider::{DecisionProvider, ScriptedDecisions};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("Сначала войдите под своим именем")]
    NotLoggedIn,

    #[error("Имя пользователя не может быть пустым")]
    EmptyUsername,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Отчёт о сыгранном раунде.
#[derive(Debug)]
pub struct RoundReport {
    pub summary: RoundSummary,
    pub result: RoundResultDto,
    /// Ошибка сохранения не фатальна: игра продолжается, вызывающий сообщает о ней.
    pub save_error: Option<StorageError>,
}

pub struct Session<S: AccountStore, R: RandomSource> {
    store: S,
    book: AccountBook,
    shoe: Shoe,
    rng: R,
    current: Option<Username>,
}

impl<S: AccountStore, R: RandomSource> Session<S, R> {
    /// Открыть сессию: загрузить счета (битые данные = пустой набор) и собрать шуз.
    pub fn open(store: S, shoe_config: ShoeConfig, mut rng: R) -> Result<Self, ConfigError> {
        let shoe = Shoe::new(shoe_config, &mut rng)?;
        Ok(Self::with_shoe(store, shoe, rng))
    }

    /// Сессия с готовым шузом (например, подтасованным в тестах).
    pub fn with_shoe(store: S, shoe: Shoe, rng: R) -> Self {
        let book = AccountBook::from_accounts(load_or_empty(&store));
        Self {
            store,
            book,
            shoe,
            rng,
            current: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn book(&self) -> &AccountBook {
        &self.book
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.current.as_deref().and_then(|name| self.book.get(name))
    }

    pub fn login(&mut self, username: &str) -> Result<LoginOutcome, SessionError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(SessionError::EmptyUsername);
        }
        let outcome = self.book.login(username);
        info!(user = username, ?outcome, "вход");
        self.current = Some(username.to_string());
        Ok(outcome)
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    fn account_mut(&mut self) -> Result<&mut Account, SessionError> {
        let name = self.current.as_deref().ok_or(SessionError::NotLoggedIn)?;
        self.book.get_mut(name).ok_or(SessionError::NotLoggedIn)
    }

    /// Пополнить текущий счёт. Возвращает новый баланс.
    pub fn deposit(&mut self, amount: Money) -> Result<Money, SessionError> {
        let account = self.account_mut()?;
        account.deposit(amount)?;
        Ok(account.balance())
    }

    /// Спросить сумму пополнения, пока не будет валидной.
    /// `Ok(None)`: игрок пропустил (ввёл 0) или ввод кончился.
    pub fn prompt_deposit<P: DecisionProvider>(
        &mut self,
        provider: &mut P,
    ) -> Result<Option<Money>, SessionError> {
        loop {
            let balance = self.account_mut()?.balance();
            let Some(amount) = provider.deposit_amount(balance) else {
                return Ok(None);
            };
            if amount.is_zero() {
                return Ok(None);
            }
            match self.deposit(amount) {
                Ok(_) => return Ok(Some(amount)),
                Err(SessionError::Engine(e)) => provider.rejected(&e),
                Err(e) => return Err(e),
            }
        }
    }

    /// Начать раунд с готовой ставкой.
    fn start_round(&mut self, bet: Money) -> Result<RoundEngine, SessionError> {
        let name = self.current.as_deref().ok_or(SessionError::NotLoggedIn)?;
        let account = self.book.get_mut(name).ok_or(SessionError::NotLoggedIn)?;
        Ok(start_round(account, &mut self.shoe, &mut self.rng, bet)?)
    }

    /// Решение игрока в уже начатом раунде.
    fn decide(
        &mut self,
        engine: &mut RoundEngine,
        decision: PlayerDecision,
    ) -> Result<RoundStatus, SessionError> {
        let name = self.current.as_deref().ok_or(SessionError::NotLoggedIn)?;
        let account = self.book.get_mut(name).ok_or(SessionError::NotLoggedIn)?;
        Ok(apply_decision(
            engine,
            account,
            &mut self.shoe,
            &mut self.rng,
            decision,
        )?)
    }

    /// Довести раунд до расчёта, если ход уже не за игроком.
    fn advance(&mut self, engine: &mut RoundEngine) -> Result<RoundStatus, SessionError> {
        let name = self.current.as_deref().ok_or(SessionError::NotLoggedIn)?;
        let account = self.book.get_mut(name).ok_or(SessionError::NotLoggedIn)?;
        Ok(advance_if_needed(engine, account, &mut self.shoe, &mut self.rng)?)
    }

    /// Полный раунд с внешним источником решений.
    ///
    /// - пустой счёт: `OutOfFunds` (вызывающий предлагает пополнить);
    /// - невалидные ставки и ответы переспрашиваются;
    /// - после расчёта счета сохраняются.
    ///
    /// `Ok(None)`: ввод кончился до того, как ставка была принята.
    pub fn play_round<P: DecisionProvider>(
        &mut self,
        provider: &mut P,
    ) -> Result<Option<RoundReport>, SessionError> {
        let balance = self.account_mut()?.balance();
        if !balance.is_positive() {
            return Err(EngineError::OutOfFunds.into());
        }

        let bet = loop {
            let account = self.account_mut()?;
            let Some(bet) = provider.bet_amount(account.balance()) else {
                return Ok(None);
            };
            match validate_bet(account, bet) {
                Ok(()) => break bet,
                Err(e) => provider.rejected(&e),
            }
        };

        let mut engine = self.start_round(bet)?;
        let mut status = self.advance(&mut engine)?;

        while status == RoundStatus::Ongoing {
            let view = {
                let name = self.current.as_deref().ok_or(SessionError::NotLoggedIn)?;
                let account = self.book.get(name).ok_or(SessionError::NotLoggedIn)?;
                build_round_view(&engine, &self.shoe, account)
            };

            // Ввод оборвался посреди раунда: доигрываем как stand,
            // чтобы ставка была рассчитана и сохранена.
            let decision = match provider.hit_or_stand(&view) {
                Some(token) => match token.parse::<PlayerDecision>() {
                    Ok(d) => d,
                    Err(e) => {
                        provider.rejected(&e);
                        continue;
                    }
                },
                None => PlayerDecision::Stand,
            };

            status = self.decide(&mut engine, decision)?;
        }

        let RoundStatus::Finished(summary) = status else {
            return Err(EngineError::Internal("раунд не завершился").into());
        };

        let save_error = self.save().err();
        let account = self.current_account().ok_or(SessionError::NotLoggedIn)?;
        let result = build_round_result(&summary, account);

        Ok(Some(RoundReport {
            summary,
            result,
            save_error,
        }))
    }

    /// Сохранить все счета. Ошибка логируется и возвращается: сессия живёт дальше.
    pub fn save(&mut self) -> Result<(), StorageError> {
        self.store
            .save_accounts(self.book.accounts())
            .inspect_err(|e| warn!(error = %e, "не удалось сохранить счета"))
    }
}
