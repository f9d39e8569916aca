use std::collections::VecDeque;

use tracing::{debug, info};

use crate::tictactoe::board::{Board, Mark, MoveError};

/// Исход партии.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(Mark),
    Draw,
    /// Ввод кончился до конца партии.
    Aborted,
}

/// Источник ходов: сырые строки «строка» и «столбец», 1-based.
pub trait MoveSource {
    /// `None`: ввод кончился.
    fn next_move(&mut self, mark: Mark, board: &Board) -> Option<(String, String)>;

    fn rejected(&mut self, _error: &MoveError) {}

    fn board_changed(&mut self, _board: &Board) {}
}

/// Заранее записанные ходы (тесты, реплеи).
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<(String, String)>,
    pub rejections: Vec<MoveError>,
}

impl ScriptedMoves {
    pub fn new<'a>(moves: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            moves: moves
                .into_iter()
                .map(|(r, c)| (r.to_string(), c.to_string()))
                .collect(),
            rejections: Vec::new(),
        }
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _mark: Mark, _board: &Board) -> Option<(String, String)> {
        self.moves.pop_front()
    }

    fn rejected(&mut self, error: &MoveError) {
        self.rejections.push(error.clone());
    }
}

/// Партия до победы, ничьей или конца ввода. Первым ходит `X`.
pub fn play_game<M: MoveSource>(board: &mut Board, source: &mut M) -> GameResult {
    let mut mark = Mark::X;
    source.board_changed(board);

    loop {
        let Some((row, col)) = source.next_move(mark, board) else {
            info!("ввод кончился, партия прервана");
            return GameResult::Aborted;
        };

        if let Err(e) = board.play(&row, &col, mark) {
            debug!(error = %e, "ход отклонён");
            source.rejected(&e);
            continue;
        }
        source.board_changed(board);

        if let Some(winner) = board.winner() {
            info!(%winner, "победа");
            return GameResult::Winner(winner);
        }
        if board.is_full() {
            info!("ничья");
            return GameResult::Draw;
        }
        mark = mark.other();
    }
}
