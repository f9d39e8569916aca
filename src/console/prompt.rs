use std::io::{BufRead, ErrorKind, Write};

use tracing::warn;

use crate::api::dto::RoundViewDto;
use crate::console::render::{render_hand, rule};
use crate::domain::money::Money;
use crate::engine::errors::EngineError;
use crate::session::DecisionProvider;
use crate::tictactoe::{Board, Mark, MoveError, MoveSource};

/// Построчная консоль поверх любых `BufRead`/`Write` (stdin/stdout или буферы в тестах).
///
/// Ошибки записи в вывод игнорируются, экран не источник истины.
pub struct Console<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }

    /// Вопрос без перевода строки. `None`: конец ввода или поток сломан.
    ///
    /// Строка не в UTF-8 уже вычитана из потока, поэтому вопрос просто
    /// задаётся заново.
    pub fn ask(&mut self, prompt: &str) -> Option<String> {
        loop {
            let _ = write!(self.output, "{prompt}");
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => return Some(line.trim().to_string()),
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.say("\n❌ Не удалось прочитать ввод (ожидается UTF-8), повторите.");
                }
                Err(e) => {
                    warn!(error = %e, "ввод недоступен");
                    return None;
                }
            }
        }
    }

    /// Спрашивать, пока не введут конечное число.
    pub fn ask_amount(&mut self, prompt: &str) -> Option<Money> {
        loop {
            let raw = self.ask(prompt)?;
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => return Some(Money(v)),
                _ => self.say("❌ Введите корректное число!"),
            }
        }
    }
}

impl<I: BufRead, O: Write> DecisionProvider for Console<I, O> {
    fn bet_amount(&mut self, balance: Money) -> Option<Money> {
        self.say(&format!("\nТекущий баланс: {balance}"));
        self.ask_amount("Ставка: $")
    }

    fn hit_or_stand(&mut self, view: &RoundViewDto) -> Option<String> {
        let mut screen = String::new();
        screen.push('\n');
        screen.push_str(&rule());
        screen.push_str("\nВаша рука:\n");
        screen.push_str(&render_hand(&view.player));
        screen.push_str("\nРука дилера:\n");
        screen.push_str(&render_hand(&view.dealer));
        screen.push_str(&format!("\nКарт в шузе: {}", view.cards_remaining));
        self.say(&screen);

        self.ask("\n(H)it или (S)tand? ")
    }

    fn deposit_amount(&mut self, _balance: Money) -> Option<Money> {
        self.ask_amount("\nСумма пополнения (0 — пропустить): $")
    }

    fn rejected(&mut self, error: &EngineError) {
        self.say(&format!("❌ {error}"));
    }
}

impl<I: BufRead, O: Write> MoveSource for Console<I, O> {
    fn next_move(&mut self, mark: Mark, _board: &Board) -> Option<(String, String)> {
        self.say(&format!("\nХодит {mark}:"));
        let row = self.ask("Строка: ")?;
        let col = self.ask("Столбец: ")?;
        Some((row, col))
    }

    fn rejected(&mut self, error: &MoveError) {
        self.say(&format!("❌ {error}. Попробуйте ещё раз."));
    }

    fn board_changed(&mut self, board: &Board) {
        self.say(&format!("\n{board}"));
    }
}
