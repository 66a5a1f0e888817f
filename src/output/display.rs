//! Display functions for the text front ends

use super::formatters::{guessed_letters, lives_bar, outcome_message, spaced};
use super::gallows::Gallows;
use crate::core::{GameSession, Outcome};
use crate::wordlists::WordRepository;
use colored::Colorize;
use std::io::{self, Write};

/// Print the loaded categories and how many words each holds
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_categories<W: Write>(out: &mut W, repository: &WordRepository) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {} ", "CATEGORIES".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;

    for category in repository.categories() {
        let count = repository.words(category).map_or(0, <[String]>::len);
        writeln!(out, "   {category:<24} {count:>4} words")?;
    }

    writeln!(
        out,
        "\n   {} categories, {} words",
        repository.category_count(),
        repository.word_count()
    )
}

/// Print the gallows, category, masked word and guessed letters
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(
    out: &mut W,
    session: &GameSession,
    gallows: &Gallows,
) -> io::Result<()> {
    writeln!(out, "\n{}", gallows.frame(session.mistakes()))?;
    writeln!(
        out,
        "\nCategory: {}",
        session.challenge().category().bright_yellow().bold()
    )?;
    writeln!(out, "Word:     {}", spaced(&session.masked_word()).bold())?;
    writeln!(
        out,
        "Lives:    {} ({} mistakes left)",
        lives_bar(session.mistakes()).red(),
        session.remaining_mistakes()
    )?;
    writeln!(out, "Guessed:  {}", guessed_letters(session))
}

/// Print the result summary once the game is won or lost
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_result<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let message = outcome_message(session.outcome());
    let headline = match session.outcome() {
        Outcome::Won => message.green().bold(),
        Outcome::Lost => message.red().bold(),
        Outcome::InProgress => return Ok(()),
    };

    writeln!(out, "\n{headline}")?;
    writeln!(out, "Word: {}", session.challenge().word())
}
