//! Command parsing and the free-text movement scanner.

use darwin_core::Direction;

/// Verbs that signal movement intent in free text and commands.
const MOVE_VERBS: &[&str] = &["go", "move", "walk", "travel", "head", "proceed"];
/// Connectors that may sit between a movement verb and its direction.
const CONNECTORS: &[&str] = &["to", "towards", "into"];

const ENTER_VERBS: &[&str] = &["enter", "board"];
const EXIT_VERBS: &[&str] = &["exit", "leave", "disembark", "out"];
const LOOK_VERBS: &[&str] = &["look", "l", "examine"];
const WHERE_VERBS: &[&str] = &["where", "position"];
const MAP_VERBS: &[&str] = &["map", "locations"];
const DIRECTION_VERBS: &[&str] = &["directions", "exits"];
const HELP_VERBS: &[&str] = &["help", "h", "?"];
const QUIT_VERBS: &[&str] = &["quit", "q"];

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Step in a compass direction.
    Move(Direction),
    /// Go to a named target: a cell id outside, a room id inside.
    Goto(String),
    /// Enter a named interior.
    Enter(String),
    /// Leave the current interior.
    Exit,
    /// Describe the current location.
    Look,
    /// Report position and mode.
    Where,
    /// Show the location table.
    Map,
    /// List the directions usable from here.
    Directions,
    /// Show help.
    Help,
    /// Quit the game.
    Quit,
    /// Anything else; candidates for the free-text scanner.
    FreeText(String),
}

/// Parse one line of player input into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Look;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]);

    // A bare direction is a move.
    if let Some(dir) = Direction::parse(&verb) {
        return Command::Move(dir);
    }

    if MOVE_VERBS.contains(&verb.as_str()) {
        return parse_move(rest);
    }
    if ENTER_VERBS.contains(&verb.as_str()) {
        return parse_enter(rest);
    }
    // "exit" is the leave-interior verb; quitting is "quit"/"q".
    if EXIT_VERBS.contains(&verb.as_str()) {
        return Command::Exit;
    }
    if LOOK_VERBS.contains(&verb.as_str()) {
        return Command::Look;
    }
    if WHERE_VERBS.contains(&verb.as_str()) {
        return Command::Where;
    }
    if MAP_VERBS.contains(&verb.as_str()) {
        return Command::Map;
    }
    if DIRECTION_VERBS.contains(&verb.as_str()) {
        return Command::Directions;
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb.as_str()) {
        return Command::Quit;
    }

    Command::FreeText(input.to_string())
}

fn parse_move(rest: &[&str]) -> Command {
    if rest.is_empty() {
        return Command::Look;
    }

    // Skip a connector if present.
    let rest = if CONNECTORS.contains(&rest[0].to_lowercase().as_str()) {
        &rest[1..]
    } else {
        rest
    };

    if rest.is_empty() {
        return Command::Look;
    }
    if let Some(dir) = Direction::parse(rest[0]) {
        return Command::Move(dir);
    }

    Command::Goto(rest.join(" "))
}

fn parse_enter(rest: &[&str]) -> Command {
    if rest.is_empty() {
        return Command::FreeText("enter".to_string());
    }
    Command::Enter(rest.join(" "))
}

/// Scan free text for an explicit movement intent.
///
/// Matches a movement verb, optionally followed by a single connector,
/// immediately followed by a direction token — and nothing looser. A
/// direction word appearing without a preceding verb ("the north wind
/// rose") never triggers.
pub fn scan_movement(text: &str) -> Option<Direction> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_ascii_alphanumeric())
                .to_lowercase()
        })
        .collect();

    for (i, word) in words.iter().enumerate() {
        if !MOVE_VERBS.contains(&word.as_str()) {
            continue;
        }
        let mut next = i + 1;
        if words
            .get(next)
            .is_some_and(|w| CONNECTORS.contains(&w.as_str()))
        {
            next += 1;
        }
        if let Some(dir) = words.get(next).and_then(|w| Direction::parse(w)) {
            return Some(dir);
        }
    }
    None
}
