use std::fmt::Display;

use colored::*;

/// One-line fatal diagnostic on stderr, naming the failed stage.
pub fn fatal(err: &impl Display) {
    eprintln!("{} {err}", "xx".red().bold());
}
