//! Terminal output. Colors are applied here and nowhere else.

use std::io::Write;

use colored::Colorize;

use crate::error::StatusError;
use crate::status::StatusResult;

/// Colors used by the CLI.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    /// Failures
    Red,
    /// Success
    Green,
    /// Details
    Yellow,
}

impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => colored::Color::Red,
            Color::Green => colored::Color::Green,
            Color::Yellow => colored::Color::Yellow,
        }
    }
}

/// Writes `text` in `color` followed by a newline. Whether escapes are
/// emitted at all is up to `colored`'s global override, see
/// [`crate::cli::ColorMode::apply`].
pub fn line(out: &mut dyn Write, color: Color, text: &str) -> std::io::Result<()> {
    writeln!(out, "{}", text.color(colored::Color::from(color)))
}

/// Renders the outcome of a status check.
pub fn status(out: &mut dyn Write, result: &StatusResult) -> std::io::Result<()> {
    let subject = format!("{} at {}", result.service.label(), result.url);
    match &result.error {
        None => line(out, Color::Green, &format!("{subject} is ready")),
        Some(err) => {
            line(out, Color::Red, &format!("{subject} is not ready"))?;
            let detail = match err {
                StatusError::Unready { status, .. } => format!("Status {status}"),
                other => other.to_string(),
            };
            line(out, Color::Yellow, &detail)
        }
    }
}

/// Renders an error which stopped the command before anything was checked.
pub fn error(out: &mut dyn Write, err: &StatusError) -> std::io::Result<()> {
    line(out, Color::Red, &format!("Error: {err}"))
}
