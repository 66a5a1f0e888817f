//! Formatting utilities shared by the terminal front ends

use crate::core::{GameSession, MAX_MISTAKES, Outcome};

/// Put a space between characters so the mask reads as separate slots
///
/// Word gaps become three spaces to stay visible.
#[must_use]
pub fn spaced(masked_word: &str) -> String {
    masked_word
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remaining lives as hearts, e.g. `♥♥♥♡♡♡`
#[must_use]
pub fn lives_bar(mistakes: u8) -> String {
    let lost = usize::from(mistakes.min(MAX_MISTAKES));
    let left = usize::from(MAX_MISTAKES) - lost;
    "♥".repeat(left) + &"♡".repeat(lost)
}

/// Headline shown in the result dialog
#[must_use]
pub const fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "Congrats, You got it right!",
        Outcome::Lost => "You couldn't find the word, Try Again?",
        Outcome::InProgress => "",
    }
}

/// Letters guessed so far, e.g. `A C T`
#[must_use]
pub fn guessed_letters(session: &GameSession) -> String {
    session
        .guessed()
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Challenge, Letter};

    #[test]
    fn spaced_separates_letters() {
        assert_eq!(spaced("C**"), "C * *");
        assert_eq!(spaced("** *"), "* *   *");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn lives_bar_counts_down() {
        assert_eq!(lives_bar(0), "♥♥♥♥♥♥");
        assert_eq!(lives_bar(2), "♥♥♥♥♡♡");
        assert_eq!(lives_bar(6), "♡♡♡♡♡♡");
        assert_eq!(lives_bar(9), "♡♡♡♡♡♡");
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(outcome_message(Outcome::Won), "Congrats, You got it right!");
        assert!(outcome_message(Outcome::Lost).contains("Try Again"));
        assert!(outcome_message(Outcome::InProgress).is_empty());
    }

    #[test]
    fn guessed_letters_sorted() {
        let mut session = GameSession::with_challenge(Challenge::new("animals", "cat").unwrap());
        for c in ['t', 'a', 'x'] {
            session.guess_letter(Letter::new(c).unwrap());
        }
        assert_eq!(guessed_letters(&session), "A T X");
    }
}
