//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - хранение счетов (JSON-файл / память);
//! - маппинги между записями в файле и domain.

pub mod mapping;
pub mod persistence;
pub mod rng;

pub use mapping::*;
pub use persistence::*;
pub use rng::*;
