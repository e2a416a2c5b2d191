//! Text layout for every screen of the game.
//!
//! All output is framed in an 80-column box of asterisks, indented to sit
//! roughly centred in a wide console. Functions here only build strings.

use super::Frame;
use crate::core::{GameStats, PlayerId, BOARD_SIDE};
use crate::input::{CardSlot, SelectorState};
use crate::rules::GameResult;

const INDENT: &str = "                      ";
const INNER_WIDTH: usize = 80;

/// Full-width row of asterisks.
#[must_use]
pub fn rule() -> String {
    format!("{INDENT}{}\n", "*".repeat(INNER_WIDTH + 2))
}

/// One boxed line with `text` centred.
#[must_use]
pub fn centered(text: &str) -> String {
    format!("{INDENT}*{text:^INNER_WIDTH$}*\n")
}

/// Start of an open line that input will complete.
fn open_line(text: &str) -> String {
    format!("{INDENT}*{:18}{text}", "")
}

fn glyph(letter: char) -> [&'static str; 5] {
    match letter {
        'A' => [" *** ", "*   *", "*****", "*   *", "*   *"],
        'E' => ["*****", "*    ", "**** ", "*    ", "*****"],
        'I' => ["*****", "  *  ", "  *  ", "  *  ", "*****"],
        'M' => ["**   **", "* * * *", "*  *  *", "*     *", "*     *"],
        'N' => ["*   *", "**  *", "* * *", "*  **", "*   *"],
        'O' => ["*****", "*   *", "*   *", "*   *", "*****"],
        'R' => ["**** ", "*   *", "**** ", "*  * ", "*   *"],
        'T' => ["*****", "  *  ", "  *  ", "  *  ", "  *  "],
        'W' => ["*     *", "*     *", "*  *  *", "* * * *", "**   **"],
        _ => ["     "; 5],
    }
}

/// Big block letters for `word`, framed top and bottom.
#[must_use]
pub fn block_letters(word: &str) -> String {
    let mut out = rule();
    out.push_str(&centered(""));
    for line in 0..5 {
        let row: Vec<&str> = word.chars().map(|c| glyph(c)[line]).collect();
        out.push_str(&centered(&row.join("  ")));
    }
    out.push_str(&centered(""));
    out.push_str(&rule());
    out
}

/// Game title.
#[must_use]
pub fn title_cover() -> String {
    block_letters("MEMORAMA")
}

/// Scores and whose turn it is.
#[must_use]
pub fn general_data(frame: &Frame<'_>) -> String {
    let mut out = centered(&format!(
        "{} : {} points   |   {} : {} points",
        frame.names[0], frame.points[0], frame.names[1], frame.points[1]
    ));
    out.push_str(&rule());
    out.push_str(&centered(&format!("Turn: {}", frame.active_name())));
    out.push_str(&rule());
    out
}

/// Column header and the six rows of visible cards.
#[must_use]
pub fn board(frame: &Frame<'_>) -> String {
    let header: Vec<String> = (0..BOARD_SIDE).map(|c| c.to_string()).collect();
    let mut out = centered(&format!("    {}", header.join(" ")));
    for (r, row) in frame.cells.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|cell| cell.glyph().to_string()).collect();
        out.push_str(&centered(&format!("{r}   {}", cells.join(" "))));
    }
    out
}

/// Title, scores and board together.
#[must_use]
pub fn game_screen(frame: &Frame<'_>) -> String {
    let mut out = title_cover();
    out.push_str(&general_data(frame));
    out.push_str(&board(frame));
    out
}

/// Prompt for the next coordinate of a card.
///
/// While the column is outstanding the accepted row is echoed above it.
#[must_use]
pub fn coordinate_prompt(slot: CardSlot, state: SelectorState) -> String {
    let mut out = rule();
    let row_prompt = format!("Choose the row of the {slot} card (0-5): ");
    match state {
        SelectorState::AwaitRow => out.push_str(&open_line(&row_prompt)),
        SelectorState::AwaitColumn { row } => {
            out.push_str(&format!("{}{row}\n", open_line(&row_prompt)));
            out.push_str(&rule());
            out.push_str(&open_line(&format!("Choose the column of the {slot} card (0-5): ")));
        }
    }
    out
}

/// Prompt for a player's name.
#[must_use]
pub fn name_prompt(player: PlayerId) -> String {
    let mut out = String::new();
    if player == PlayerId::FIRST {
        out.push_str(&rule());
    }
    out.push_str(&open_line(&format!("Enter the name of player {}: ", player.number())));
    out
}

/// Boxed "ERROR" banner around a message.
#[must_use]
pub fn error_banner(message: &str) -> String {
    let mut out = rule();
    out.push_str(&centered("ERROR"));
    out.push_str(&rule());
    out.push_str(&centered(&sentence(message)));
    out.push_str(&rule());
    out
}

/// Banner shown once a pair has been compared.
#[must_use]
pub fn pair_banner(is_match: bool) -> String {
    let mut out = rule();
    out.push_str(&centered(if is_match { "Pair found!" } else { "Not a match." }));
    out.push_str(&rule());
    out
}

/// Final statistics box.
#[must_use]
pub fn final_results(names: [&str; 2], points: [u8; 2], stats: &GameStats) -> String {
    let rows = [
        format!("{} : {} points", names[0], points[0]),
        format!("{} : {} points", names[1], points[1]),
        format!("Total moves : {}", stats.moves),
        format!("Errors      : {}", stats.errors),
        format!("Time played : {} min, {} sec", stats.minutes(), stats.seconds()),
    ];

    let mut out = rule();
    out.push_str(&centered("Game over!"));
    out.push_str(&rule());
    for row in &rows {
        out.push_str(&centered(row));
    }
    out.push_str(&rule());
    out
}

/// Winner or tie announcement.
#[must_use]
pub fn winner(result: GameResult, names: [&str; 2]) -> String {
    let (mut out, line) = match result {
        GameResult::Winner(player) => (
            block_letters("WINNER"),
            format!("{} wins!", names[player.index()]),
        ),
        GameResult::Draw => (block_letters("TIE"), "It's a tie!".to_string()),
    };
    out.push_str(&centered(&line));
    out.push_str(&rule());
    out
}

#[must_use]
pub fn press_enter() -> String {
    format!("{INDENT}Press Enter to continue...")
}

/// Capitalise the first letter of an error message.
fn sentence(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
