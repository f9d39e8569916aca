//! Доменная модель блэкджека: карты, колоды, руки, деньги, счета игроков.

pub mod account;
pub mod card;
pub mod deck;
pub mod hand;
pub mod money;

/// Ключ счёта: имя пользователя.
pub type Username = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use account::*;
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use money::*;
