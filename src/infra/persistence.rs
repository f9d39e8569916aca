use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{Account, Username};
use crate::infra::mapping::{account_from_record, account_to_record, AccountRecord};

/// Все счета, по имени пользователя.
pub type AccountMap = BTreeMap<Username, Account>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Ошибка ввода-вывода для {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Битый JSON со счетами: {0}")]
    Json(#[from] serde_json::Error),
}

/// Абстракция хранилища счетов.
///
/// Сессия получает его снаружи (в игре JSON-файл, в тестах память).
pub trait AccountStore {
    /// Загрузить все счета. Отсутствие данных: не ошибка, а пустой набор.
    fn load_accounts(&self) -> Result<AccountMap, StorageError>;

    /// Сохранить все счета целиком.
    fn save_accounts(&mut self, accounts: &AccountMap) -> Result<(), StorageError>;
}

/// Загрузка "без падений": любая ошибка превращается в пустой набор счетов.
pub fn load_or_empty<S: AccountStore + ?Sized>(store: &S) -> AccountMap {
    match store.load_accounts() {
        Ok(accounts) => {
            debug!(count = accounts.len(), "счета загружены");
            accounts
        }
        Err(e) => {
            warn!(error = %e, "не удалось прочитать счета, начинаем с пустого набора");
            AccountMap::new()
        }
    }
}

fn records_from_accounts(accounts: &AccountMap) -> BTreeMap<Username, AccountRecord> {
    accounts
        .iter()
        .map(|(name, acc)| (name.clone(), account_to_record(acc)))
        .collect()
}

fn accounts_from_records(records: BTreeMap<Username, AccountRecord>) -> AccountMap {
    records
        .into_iter()
        .map(|(name, rec)| {
            let account = account_from_record(&name, rec);
            (name, account)
        })
        .collect()
}

/// Хранилище в JSON-файле: `{ "имя": { "balance": ..., ... }, ... }`.
#[derive(Clone, Debug)]
pub struct JsonFileAccountStore {
    path: PathBuf,
}

impl JsonFileAccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl AccountStore for JsonFileAccountStore {
    fn load_accounts(&self) -> Result<AccountMap, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AccountMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        let records: BTreeMap<Username, AccountRecord> = serde_json::from_str(&raw)?;
        Ok(accounts_from_records(records))
    }

    fn save_accounts(&mut self, accounts: &AccountMap) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&records_from_accounts(accounts))?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), count = accounts.len(), "счета сохранены");
        Ok(())
    }
}

/// Простая in-memory реализация для тестов и локального запуска.
/// Хранит те же записи, что и файл, чтобы маппинг проходил полный круг.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    records: BTreeMap<Username, AccountRecord>,
    saves: usize,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище с уже "сохранёнными" записями.
    pub fn with_records(records: BTreeMap<Username, AccountRecord>) -> Self {
        Self { records, saves: 0 }
    }

    pub fn records(&self) -> &BTreeMap<Username, AccountRecord> {
        &self.records
    }

    /// Сколько раз вызывалось сохранение.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl AccountStore for InMemoryAccountStore {
    fn load_accounts(&self) -> Result<AccountMap, StorageError> {
        Ok(accounts_from_records(self.records.clone()))
    }

    fn save_accounts(&mut self, accounts: &AccountMap) -> Result<(), StorageError> {
        self.records = records_from_accounts(accounts);
        self.saves += 1;
        Ok(())
    }
}
