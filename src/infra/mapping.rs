//! Маппинг между доменным `Account` и записью в файле.
//!
//! Запись имеет фиксированную схему; отсутствующие поля получают значения
//! по умолчанию, лишние поля игнорируются.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, Money};

/// Формат `created_date`: ISO-8601 с микросекундами, локальное время.
pub const CREATED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Плоская запись счёта в JSON-файле.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccountRecord {
    pub username: String,
    pub balance: Money,
    pub total_deposited: Money,
    pub total_bet: Money,
    pub total_won: Money,
    pub games_played: u32,
    pub games_won: u32,
    pub created_date: String,
}

pub fn account_to_record(account: &Account) -> AccountRecord {
    AccountRecord {
        username: account.username().to_string(),
        balance: account.balance(),
        total_deposited: account.total_deposited(),
        total_bet: account.total_bet(),
        total_won: account.total_won(),
        games_played: account.games_played(),
        games_won: account.games_won(),
        created_date: account.created().format(CREATED_DATE_FORMAT).to_string(),
    }
}

/// Восстановить счёт. Имя берётся из ключа словаря: он главный.
/// Битая или пустая дата создания заменяется текущим временем.
pub fn account_from_record(key: &str, record: AccountRecord) -> Account {
    let created_at = parse_created_date(&record.created_date)
        .unwrap_or_else(|| Local::now().naive_local());

    Account::restore(
        key,
        record.balance,
        record.total_deposited,
        record.total_bet,
        record.total_won,
        record.games_played,
        record.games_won,
        created_at,
    )
}

pub fn parse_created_date(raw: &str) -> Option<NaiveDateTime> {
    raw.trim().parse::<NaiveDateTime>().ok()
}
