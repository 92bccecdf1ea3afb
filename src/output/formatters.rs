//! Formatting utilities for terminal output

use crate::core::{Color, Feedback, Guess};
use colored::{ColoredString, Colorize};

/// Format feedback as peg glyphs: red pegs, then white pegs, then empty holes
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback) -> String {
    let red = usize::from(feedback.red);
    let white = usize::from(feedback.white);
    let empty = 5_usize.saturating_sub(red + white);

    format!("{}{}{}", "●".repeat(red), "○".repeat(white), "·".repeat(empty))
}

/// Terminal swatch for one color
#[must_use]
pub fn color_swatch(color: Color) -> ColoredString {
    let symbol = color.symbol().to_string();
    match color {
        Color::Beige => symbol.on_truecolor(222, 203, 164).black(),
        Color::DarkBlue => symbol.on_blue().white(),
        Color::Green => symbol.on_green().black(),
        Color::Orange => symbol.on_truecolor(255, 140, 0).black(),
        Color::Red => symbol.on_red().white(),
        Color::Black => symbol.on_black().white(),
        Color::Violet => symbol.on_magenta().white(),
        Color::White => symbol.on_white().black(),
    }
}

/// Format a guess as colored swatches
#[must_use]
pub fn guess_to_swatches(guess: &Guess) -> String {
    guess
        .colors()
        .iter()
        .map(|&c| color_swatch(c).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Colored histogram bar; any non-zero count gets at least one cell
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let filled = if max_count > 0 {
        (count * width / max_count).max(usize::from(count > 0))
    } else {
        0
    };

    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width.saturating_sub(filled)).bright_black()
    )
}
