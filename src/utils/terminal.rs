//! Terminal utilities for title setting and progress output

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use crate::core::{SPINNER_TEMPLATE, SPINNER_TICK_MILLIS};

/// Sets the terminal title to the specified text
pub fn set_terminal_title(title: &str) {
    // ANSI escape sequence to set terminal title
    eprint!("\x1b]0;{}\x07", title);
}

/// Sets the terminal title and ensures it's flushed to the terminal
pub fn set_terminal_title_and_flush(title: &str) {
    set_terminal_title(title);
    // Title updates are cosmetic
    let _ = std::io::stderr().flush();
}

/// Creates a ticking spinner on stderr
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template(SPINNER_TEMPLATE)?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MILLIS));
    Ok(spinner)
}
