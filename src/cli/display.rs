//! Terminal display utilities for the keittio CLI.
//!
//! Plain ANSI colors, nothing fancy: score and match-type coloring for the
//! search table, dimmed secondary text elsewhere. Respects `NO_COLOR` and
//! falls back to plain text when stdout is not a TTY, so piping to other
//! tools stays clean.

use keittio::MatchType;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const GRAY: &str = "\x1b[90m";

/// Check if colors should be used (TTY detection).
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text.
pub fn paint(code: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// Color-coded match type label, padded to a fixed width.
pub fn match_type_label(match_type: MatchType) -> String {
    let label = format!("{:<7}", match_type.as_str());
    let code = match match_type {
        MatchType::Name => GREEN,
        MatchType::Partial => YELLOW,
        MatchType::Info => GRAY,
    };
    paint(code, &label)
}

/// Color-coded relevance score (green=strong, yellow=partial, gray=weak).
pub fn score_value(score: f64) -> String {
    let text = format!("{:.1}", score);
    let code = if score >= 0.7 {
        GREEN
    } else if score >= 0.5 {
        YELLOW
    } else {
        GRAY
    };
    paint(code, &text)
}
