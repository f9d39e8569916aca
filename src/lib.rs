//! Консольное казино: блэкджек с сохраняемым балансом и крестики-нолики.
//!
//! Слои:
//! - `domain`: карты, руки, деньги, счета;
//! - `engine`: шуз, раунд блэкджека как конечный автомат, расчёт выплат;
//! - `infra`: RNG и хранилище счетов;
//! - `api`: read-only представления для отображения;
//! - `session`: логин, пополнения, раунды, сохранение;
//! - `console`: ASCII-рендер и построчный ввод;
//! - `tictactoe`: отдельная игра на двоих.

pub mod api;
pub mod config;
pub mod console;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod session;
pub mod tictactoe;
