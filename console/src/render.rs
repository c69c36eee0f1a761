use colored::{ColoredString, Colorize};
use uno_engine::card::{Card, Color, Rank};

/// Terminal form of a card: colored color name, underlined rank.
pub fn render(card: &Card) -> String {
    format!(
        "{} {}",
        render_color(card.color()),
        rank_label(card.rank()).underline()
    )
}

pub fn render_color(color: Color) -> ColoredString {
    match color {
        Color::Red => "Red".red(),
        Color::Green => "Green".green(),
        Color::Blue => "Blue".blue(),
        Color::Yellow => "Yellow".yellow(),
        Color::Wild => "?".yellow(),
    }
}

fn rank_label(rank: Rank) -> String {
    match rank {
        Rank::Number(number) => number.to_string(),
        Rank::DrawTwo => "DRAW 2".to_string(),
        Rank::Reverse => "REVERSE".to_string(),
        Rank::Skip => "SKIP".to_string(),
        Rank::WildDrawFour => "DRAW 4".to_string(),
        Rank::Wild => "WILD".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_text_without_color() {
        colored::control::set_override(false);

        assert_eq!(render(&Card::new(Color::Red, Rank::Number(3))), "Red 3");
        assert_eq!(render(&Card::new(Color::Blue, Rank::DrawTwo)), "Blue DRAW 2");
        assert_eq!(render(&Card::new(Color::Green, Rank::Skip)), "Green SKIP");
    }

    #[test]
    fn unbound_wild_shows_question_mark() {
        colored::control::set_override(false);

        assert_eq!(render(&Card::wild()), "? WILD");
        assert_eq!(render(&Card::wild_draw_four()), "? DRAW 4");
        assert_eq!(
            render(&Card::wild_draw_four().with_color(Color::Yellow)),
            "Yellow DRAW 4"
        );
    }
}
