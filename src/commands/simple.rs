//! Simple interactive CLI mode
//!
//! Line-based Hangman without the TUI. Reads one command per line.

use crate::core::{GameSession, Letter, Outcome, Verdict};
use crate::output::{Gallows, print_board, print_result};
use crate::wordlists::WordRepository;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Games finished during a simple-mode run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimpleSummary {
    pub games: usize,
    pub wins: usize,
}

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng + ?Sized>(
    repository: &WordRepository,
    gallows: &Gallows,
    rng: &mut R,
) -> io::Result<SimpleSummary> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(repository, gallows, rng, stdin.lock(), &mut stdout)
}

/// Run the simple mode against arbitrary input and output streams
///
/// End of input quits, like the `quit` command.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R, I, W>(
    repository: &WordRepository,
    gallows: &Gallows,
    rng: &mut R,
    mut input: I,
    out: &mut W,
) -> io::Result<SimpleSummary>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║         Hangman - Simple Mode          ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(out, "Type a letter to guess it.")?;
    writeln!(out, "Commands: 'new' to start over, 'quit' to exit")?;

    let mut summary = SimpleSummary::default();
    let mut session = GameSession::new(repository, rng);

    loop {
        print_board(out, &session, gallows)?;

        let Some(line) = prompt(&mut input, out, "Guess")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "new" | "reset" => {
                session.reset(repository, rng);
                writeln!(out, "\n🔄 New game started!")?;
                continue;
            }
            _ => {}
        }

        let letter = match Letter::parse(&line) {
            Ok(letter) => letter,
            Err(err) => {
                writeln!(out, "{}", err.to_string().red())?;
                continue;
            }
        };

        let report = session.guess_letter(letter);
        match report.verdict {
            Verdict::Hit { revealed } => {
                writeln!(out, "{}", format!("✓ {letter} appears {revealed} time(s)").green())?;
            }
            Verdict::Miss => writeln!(out, "{}", format!("✗ No {letter}").red())?,
            Verdict::AlreadyGuessed => writeln!(out, "You already tried {letter}")?,
            Verdict::GameOver => {}
        }

        if report.outcome.is_terminal() {
            summary.games += 1;
            if report.outcome == Outcome::Won {
                summary.wins += 1;
            }
            print_board(out, &session, gallows)?;
            print_result(out, &session)?;

            match prompt(&mut input, out, "Play again? (y/n)")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    session.reset(repository, rng);
                }
                _ => break,
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!")?;
    Ok(summary)
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "\n{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(data: &str, script: &str) -> (SimpleSummary, String) {
        colored::control::set_override(false);
        let repository = WordRepository::parse(data).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut out = Vec::new();

        let summary = run_simple_with(
            &repository,
            &Gallows::embedded(),
            &mut rng,
            Cursor::new(script.to_string()),
            &mut out,
        )
        .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game_reports_word() {
        let (summary, output) = play("animals,cat", "c\na\nt\nn\n");

        assert_eq!(summary, SimpleSummary { games: 1, wins: 1 });
        assert!(output.contains("Congrats, You got it right!"));
        assert!(output.contains("Word: CAT"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn losing_game_reports_word() {
        let (summary, output) = play("animals,dog", "x\ny\nz\nq\nv\nb\nn\n");

        assert_eq!(summary, SimpleSummary { games: 1, wins: 0 });
        assert!(output.contains("You couldn't find the word, Try Again?"));
        assert!(output.contains("Word: DOG"));
    }

    #[test]
    fn play_again_starts_new_game() {
        let (summary, _) = play("animals,ox", "o\nx\ny\no\nx\nquit\n");
        assert_eq!(summary, SimpleSummary { games: 2, wins: 2 });
    }

    #[test]
    fn invalid_and_repeated_input_is_reported() {
        let (summary, output) = play("animals,cat", "7\nc\nc\nquit\n");

        assert_eq!(summary.games, 0);
        assert!(output.contains("'7' is not a letter"));
        assert!(output.contains("You already tried C"));
    }

    #[test]
    fn end_of_input_quits() {
        let (summary, output) = play("animals,cat", "c\n");
        assert_eq!(summary.games, 0);
        assert!(output.contains("C * *"));
        assert!(output.contains("Thanks for playing"));
    }
}
