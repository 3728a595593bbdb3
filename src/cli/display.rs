// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the docrank CLI.
//!
//! Plain ids on stdout by default so the output pipes cleanly. With
//! `--scores` each id gets its score and a relative bar. `NO_COLOR` and
//! non-TTY stdout turn colors off.

use docrank::RankedDocument;

/// Width of the relevance bar at full score.
pub const BAR_WIDTH: usize = 24;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Accent color for ids.
pub fn accent() -> String {
    rgb((97, 175, 239)) // #61afef
}

/// Color for score bars.
pub fn bar_color() -> String {
    rgb((152, 195, 121)) // #98c379
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles when colors are on, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Bar of `BAR_WIDTH` cells scaled to `score / max`.
pub fn score_bar(score: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((score / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let filled = filled.clamp(1, BAR_WIDTH);
    format!("{}{}", "━".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

/// Render ranked documents one per line as `rank  id  score  bar`.
pub fn render_scored(ranked: &[RankedDocument]) -> Vec<String> {
    let max = ranked.first().map(|r| r.score).unwrap_or(0.0);
    let id_width = ranked.iter().map(|r| r.id.chars().count()).max().unwrap_or(0);

    ranked
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let accent = accent();
            let bar = bar_color();
            let id = styled(&[BOLD, accent.as_str()], &r.id);
            let pad = " ".repeat(id_width.saturating_sub(visible_len(&id)));
            format!(
                "{:>3}  {}{}  {:>9.4}  {}",
                i + 1,
                id,
                pad,
                r.score,
                styled(&[bar.as_str()], &score_bar(r.score, max))
            )
        })
        .collect()
}

/// Message shown on stderr when nothing matched.
pub fn no_results(query: &str) -> String {
    styled(&[DIM], &format!("no documents match '{}'", query))
}
