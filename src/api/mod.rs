//! Read-only представления для внешнего слоя (консоль, тесты).
//!
//! - DTO (dto.rs): удобные структуры для отображения;
//! - запросы (queries.rs): сборка DTO из domain/engine.

pub mod dto;
pub mod queries;

pub use dto::*;
pub use queries::*;
