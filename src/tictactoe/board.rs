use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{validate_board_size, ConfigError};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Отказ в ходе. Доска при этом не меняется.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Введите числа: «{0}» не число")]
    NotANumber(String),

    #[error("Клетка {row},{col} вне доски")]
    OutOfBounds { row: i64, col: i64 },

    #[error("Клетка {row},{col} уже занята")]
    Occupied { row: usize, col: usize },
}

/// Квадратная доска N×N.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        validate_board_size(size)?;
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Клетка по 0-based координатам.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col]
        } else {
            None
        }
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled() == self.cells.len()
    }

    /// Разобрать сырой ввод (1-based) в 0-based координаты свободной клетки.
    pub fn parse_move(&self, row: &str, col: &str) -> Result<(usize, usize), MoveError> {
        let parse = |raw: &str| {
            raw.trim()
                .parse::<i64>()
                .map_err(|_| MoveError::NotANumber(raw.trim().to_string()))
        };
        let (r, c) = (parse(row)?, parse(col)?);

        let size = self.size as i64;
        if !(1..=size).contains(&r) || !(1..=size).contains(&c) {
            return Err(MoveError::OutOfBounds { row: r, col: c });
        }

        let (r, c) = (r as usize - 1, c as usize - 1);
        if self.get(r, c).is_some() {
            return Err(MoveError::Occupied { row: r + 1, col: c + 1 });
        }
        Ok((r, c))
    }

    /// Поставить знак по сырому вводу.
    pub fn play(&mut self, row: &str, col: &str, mark: Mark) -> Result<(), MoveError> {
        let (r, c) = self.parse_move(row, col)?;
        self.cells[r * self.size + c] = Some(mark);
        Ok(())
    }

    fn line_owner(&self, mut cells: impl Iterator<Item = Option<Mark>>) -> Option<Mark> {
        let first = cells.next()??;
        cells.all(|c| c == Some(first)).then_some(first)
    }

    /// Победитель: полная строка, столбец или одна из диагоналей.
    pub fn winner(&self) -> Option<Mark> {
        let n = self.size;

        for i in 0..n {
            if let Some(m) = self.line_owner((0..n).map(|j| self.get(i, j))) {
                return Some(m);
            }
            if let Some(m) = self.line_owner((0..n).map(|j| self.get(j, i))) {
                return Some(m);
            }
        }

        self.line_owner((0..n).map(|i| self.get(i, i)))
            .or_else(|| self.line_owner((0..n).map(|i| self.get(i, n - 1 - i))))
    }
}

impl fmt::Display for Board {
    /// ```text
    ///   1 2 3
    /// 1 X|O|
    ///   -+-+-
    /// 2  |X|
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;
        let header: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
        let separator = vec!["-"; n].join("+");

        write!(f, "  {}", header.join(" "))?;
        for row in 0..n {
            if row > 0 {
                write!(f, "\n  {separator}")?;
            }
            let cells: Vec<String> = (0..n)
                .map(|col| self.get(row, col).map_or(' ', Mark::symbol).to_string())
                .collect();
            write!(f, "\n{} {}", row + 1, cells.join("|"))?;
        }
        Ok(())
    }
}
