use std::io::{BufRead, Write};

use crate::api::queries::build_stats_view;
use crate::console::prompt::Console;
use crate::console::render::{render_result, render_stats, rule};
use crate::engine::{RandomSource, Seat};
use crate::infra::persistence::AccountStore;
use crate::session::{LoginOutcome, RoundReport, Session, SessionError};

/// Пункт главного меню.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Stats,
    Deposit,
    Logout,
    Quit,
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::Play),
            "2" => Some(MenuChoice::Stats),
            "3" => Some(MenuChoice::Deposit),
            "4" => Some(MenuChoice::Logout),
            "5" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "🎰 BLACKJACK CASINO\n\
1. Играть\n\
2. Статистика\n\
3. Пополнить баланс\n\
4. Сменить пользователя\n\
5. Выход";

/// Главный цикл блэкджека: логин, меню, раунды.
///
/// Конец ввода в любом месте завершает сессию; счета сохраняются
/// после каждого раунда, пополнения и на выходе.
pub fn run_blackjack<S, R, I, O>(
    session: &mut Session<S, R>,
    console: &mut Console<I, O>,
) -> Result<(), SessionError>
where
    S: AccountStore,
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    console.say("🎰 Добро пожаловать в Blackjack Casino! 🎰");

    if login(session, console)? {
        if session
            .current_account()
            .is_some_and(|a| a.balance().is_zero())
        {
            deposit(session, console)?;
        }

        loop {
            console.say(&format!("\n{}\n{MENU}\n{}", rule(), rule()));
            let Some(raw) = console.ask("\nВыберите пункт (1-5): ") else {
                break;
            };

            match MenuChoice::parse(&raw) {
                Some(MenuChoice::Play) => {
                    if !play(session, console)? {
                        break;
                    }
                }
                Some(MenuChoice::Stats) => show_stats(session, console),
                Some(MenuChoice::Deposit) => deposit(session, console)?,
                Some(MenuChoice::Logout) => {
                    session.logout();
                    if !login(session, console)? {
                        break;
                    }
                }
                Some(MenuChoice::Quit) => {
                    console.say("\n👋 Спасибо за игру! До встречи!");
                    break;
                }
                None => console.say("❌ Неверный пункт! Выберите 1-5."),
            }
        }
    }

    if let Err(e) = session.save() {
        console.say(&format!("⚠️ Не удалось сохранить счета: {e}"));
    }
    Ok(())
}

/// Спросить имя и войти. `false`: ввод кончился.
fn login<S, R, I, O>(
    session: &mut Session<S, R>,
    console: &mut Console<I, O>,
) -> Result<bool, SessionError>
where
    S: AccountStore,
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    loop {
        let Some(name) = console.ask("Имя пользователя: ") else {
            return Ok(false);
        };
        match session.login(&name) {
            Ok(LoginOutcome::Existing) => {
                console.say(&format!("\nС возвращением, {}!", name.trim()));
            }
            Ok(LoginOutcome::Created) => {
                console.say(&format!("\nСоздан новый счёт для {}", name.trim()));
                save_quietly(session, console);
            }
            Err(SessionError::EmptyUsername) => {
                console.say(&format!("❌ {}", SessionError::EmptyUsername));
                continue;
            }
            Err(e) => return Err(e),
        }
        show_stats(session, console);
        return Ok(true);
    }
}

fn show_stats<S, R, I, O>(session: &Session<S, R>, console: &mut Console<I, O>)
where
    S: AccountStore,
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    if let Some(account) = session.current_account() {
        console.say(&format!("\n{}", render_stats(&build_stats_view(account))));
    }
}

fn deposit<S, R, I, O>(
    session: &mut Session<S, R>,
    console: &mut Console<I, O>,
) -> Result<(), SessionError>
where
    S: AccountStore,
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    if let Some(amount) = session.prompt_deposit(console)? {
        let balance = session
            .current_account()
            .map(|a| a.balance())
            .ok_or(SessionError::NotLoggedIn)?;
        console.say(&format!("✅ Внесено {amount}. Новый баланс: {balance}"));
        save_quietly(session, console);
    }
    Ok(())
}

/// Один раунд из меню. `false`: играть дальше нельзя (нет денег или ввода).
fn play<S, R, I, O>(
    session: &mut Session<S, R>,
    console: &mut Console<I, O>,
) -> Result<bool, SessionError>
where
    S: AccountStore,
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    let broke = session
        .current_account()
        .map(|a| !a.balance().is_positive())
        .ok_or(SessionError::NotLoggedIn)?;

    if broke {
        console.say("\n💸 Деньги закончились. Пополните баланс, чтобы продолжить.");
        deposit(session, console)?;
        let still_broke = session
            .current_account()
            .is_some_and(|a| !a.balance().is_positive());
        if still_broke {
            return Ok(false);
        }
    }

    match session.play_round(console)? {
        Some(report) => {
            show_report(&report, console);
            Ok(true)
        }
        None => Ok(false),
    }
}

fn show_report<I: BufRead, O: Write>(report: &RoundReport, console: &mut Console<I, O>) {
    let dealer_draws = report
        .summary
        .history
        .cards_dealt_to(Seat::Dealer)
        .saturating_sub(2);
    for _ in 0..dealer_draws {
        console.say("Дилер берёт карту...");
    }

    console.say(&format!("\n{}", render_result(&report.result)));

    if let Some(e) = &report.save_error {
        console.say(&format!("⚠️ Не удалось сохранить счета: {e}"));
    }
}

fn save_quietly<S, R, I, O>(session: &mut Session<S, R>, console: &mut Console<I, O>)
where
    S: AccountStore,
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    if let Err(e) = session.save() {
        console.say(&format!("⚠️ Не удалось сохранить счета: {e}"));
    }
}
