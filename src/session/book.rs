use crate::domain::Account;
use crate::infra::persistence::AccountMap;

/// Результат логина.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Счёт уже был: "с возвращением".
    Existing,
    /// Новый пользователь: счёт создан с нулевым балансом.
    Created,
}

/// Репозиторий счетов на время сессии.
///
/// Загружается из `AccountStore` при старте и целиком сохраняется обратно.
/// Счета никогда не удаляются.
#[derive(Clone, Debug, Default)]
pub struct AccountBook {
    accounts: AccountMap,
}

impl AccountBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_accounts(accounts: AccountMap) -> Self {
        Self { accounts }
    }

    /// Найти счёт или завести новый.
    pub fn login(&mut self, username: &str) -> LoginOutcome {
        if self.accounts.contains_key(username) {
            return LoginOutcome::Existing;
        }
        self.accounts
            .insert(username.to_string(), Account::new(username));
        LoginOutcome::Created
    }

    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    pub fn accounts(&self) -> &AccountMap {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
