//! ASCII-рендеринг карт, рук и статистики.

use crate::api::dto::{AccountStatsDto, HandViewDto, RoundResultDto};
use crate::domain::card::Card;

/// Высота карты в строках.
pub const CARD_HEIGHT: usize = 7;
const RULE_WIDTH: usize = 50;

/// Карта лицом вверх.
pub fn card_art(card: &Card) -> [String; CARD_HEIGHT] {
    let rank = card.rank.label();
    let suit = card.suit.symbol();
    [
        "┌─────────┐".to_string(),
        format!("│{rank:<2}       │"),
        "│         │".to_string(),
        format!("│    {suit}    │"),
        "│         │".to_string(),
        format!("│       {rank:>2}│"),
        "└─────────┘".to_string(),
    ]
}

/// Карта рубашкой вверх.
pub fn hidden_card_art() -> [String; CARD_HEIGHT] {
    let mut lines: [String; CARD_HEIGHT] = Default::default();
    lines[0] = "┌─────────┐".to_string();
    for line in lines.iter_mut().take(CARD_HEIGHT - 1).skip(1) {
        *line = "│░░░░░░░░░│".to_string();
    }
    lines[CARD_HEIGHT - 1] = "└─────────┘".to_string();
    lines
}

/// Карты руки рядом друг с другом + строка с суммой.
pub fn render_hand(hand: &HandViewDto) -> String {
    if hand.cards.is_empty() {
        return String::new();
    }

    let arts: Vec<[String; CARD_HEIGHT]> = hand
        .cards
        .iter()
        .map(|c| match c {
            Some(card) => card_art(card),
            None => hidden_card_art(),
        })
        .collect();

    let mut out = String::new();
    for row in 0..CARD_HEIGHT {
        for art in &arts {
            out.push_str(&art[row]);
            out.push_str("  ");
        }
        out.push('\n');
    }

    match hand.value {
        Some(value) => out.push_str(&format!("Сумма: {value}\n")),
        None => out.push_str(&format!("Видимая сумма: {}\n", hand.visible_value)),
    }
    out
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn render_stats(stats: &AccountStatsDto) -> String {
    let mut out = String::new();
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!("📊 Статистика: {}\n", stats.username));
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!("💰 Баланс:          {}\n", stats.balance));
    out.push_str(&format!("📥 Всего внесено:   {}\n", stats.total_deposited));
    out.push_str(&format!("🎯 Всего ставок:    {}\n", stats.total_bet));
    out.push_str(&format!("🏆 Всего выиграно:  {}\n", stats.total_won));
    out.push_str(&format!("📈 Чистый итог:     {}\n", stats.net_earnings));
    out.push_str(&format!("📊 ROI:             {:.2}%\n", stats.roi));
    out.push_str(&format!("🎮 Сыграно игр:     {}\n", stats.games_played));
    out.push_str(&format!("🏅 Процент побед:   {:.1}%\n", stats.win_rate));
    out.push_str(&rule());
    out.push('\n');
    out
}

pub fn render_result(result: &RoundResultDto) -> String {
    let mut out = String::new();
    out.push_str(&rule());
    out.push_str("\nИТОГ РАУНДА\n");
    out.push_str(&rule());
    out.push_str("\nВаша рука:\n");
    out.push_str(&render_hand(&result.player));
    out.push_str("\nРука дилера:\n");
    out.push_str(&render_hand(&result.dealer));
    out.push('\n');
    out.push_str(&result.message);
    out.push_str(&format!("\nВыплата: {}\n", result.payout));
    out.push_str(&format!("Новый баланс: {}\n", result.balance_after));
    out
}
