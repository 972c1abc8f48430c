//! Interactive accept/reject loop.
//!
//! The user is shown one passphrase at a time and asked to accept it;
//! rejected passphrases are discarded and a new one is generated. End of
//! input (or Ctrl-C, handled by the binary) cancels cleanly.

mod prompt;

pub use prompt::{Prompt, ScriptedPrompt, TerminalPrompt};

use crate::selection::SelectionError;
use std::io;
use thiserror::Error;

/// Errors from the interactive session.
#[derive(Debug, Error)]
pub enum InteractiveError {
    /// Input ended before an answer was given.
    #[error("cancelled by user")]
    Cancelled,
    /// Word count answer was not a positive integer.
    #[error("Please enter a positive integer (got {0:?})")]
    InvalidWordCount(String),
    /// Generation failed mid-session.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// Reading or writing the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Asks how many words to use; an empty answer keeps `default`.
///
/// Anything other than a positive integer is an error; there is no retry.
pub fn prompt_word_count<P: Prompt + ?Sized>(
    prompt: &mut P,
    default: usize,
) -> Result<usize, InteractiveError> {
    let answer = prompt
        .ask(&format!("Enter number of words (default {default}):\n"))?
        .ok_or(InteractiveError::Cancelled)?;
    let answer = answer.trim();

    if answer.is_empty() {
        return Ok(default);
    }

    match answer.parse::<usize>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(InteractiveError::InvalidWordCount(answer.to_string())),
    }
}

/// Generates passphrases until the user accepts one, and returns it.
pub fn accept_loop<P, F>(prompt: &mut P, mut generate: F) -> Result<String, InteractiveError>
where
    P: Prompt + ?Sized,
    F: FnMut() -> Result<String, SelectionError>,
{
    loop {
        let passphrase = generate()?;
        let answer = prompt
            .ask(&format!("Generated: {passphrase}\nAccept? [yN] "))?
            .ok_or(InteractiveError::Cancelled)?;

        if is_affirmative(&answer) {
            return Ok(passphrase);
        }
        tracing::debug!("Passphrase rejected, generating another");
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_default_on_empty() {
        let mut prompt = ScriptedPrompt::new(["\n"]);
        assert_eq!(prompt_word_count(&mut prompt, 3).unwrap(), 3);
    }

    #[test]
    fn test_word_count_parsed() {
        let mut prompt = ScriptedPrompt::new([" 6 \n"]);
        assert_eq!(prompt_word_count(&mut prompt, 3).unwrap(), 6);
        assert_eq!(prompt.questions(), &["Enter number of words (default 3):\n"]);
    }

    #[test]
    fn test_word_count_rejects_non_positive() {
        for bad in ["0", "-2", "three", "2.5"] {
            let mut prompt = ScriptedPrompt::new([bad]);
            assert!(matches!(
                prompt_word_count(&mut prompt, 3),
                Err(InteractiveError::InvalidWordCount(_))
            ));
        }
    }

    #[test]
    fn test_word_count_cancelled() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        assert!(matches!(
            prompt_word_count(&mut prompt, 3),
            Err(InteractiveError::Cancelled)
        ));
    }

    #[test]
    fn test_accept_loop_returns_first_accepted() {
        let mut prompt = ScriptedPrompt::new(["n", "", "YES"]);
        let mut counter = 0;
        let accepted = accept_loop(&mut prompt, || {
            counter += 1;
            Ok(format!("pass{counter}"))
        })
        .unwrap();

        assert_eq!(accepted, "pass3");
        assert_eq!(prompt.questions().len(), 3);
        assert_eq!(prompt.questions()[0], "Generated: pass1\nAccept? [yN] ");
    }

    #[test]
    fn test_accept_loop_cancelled_on_eof() {
        let mut prompt = ScriptedPrompt::new(["no"]);
        let result = accept_loop(&mut prompt, || Ok("pass".to_string()));
        assert!(matches!(result, Err(InteractiveError::Cancelled)));
    }

    #[test]
    fn test_accept_loop_propagates_generation_error() {
        let mut prompt = ScriptedPrompt::new(["y"]);
        let result = accept_loop(&mut prompt, || Err(SelectionError::EmptyWordList));
        assert!(matches!(
            result,
            Err(InteractiveError::Selection(SelectionError::EmptyWordList))
        ));
        assert!(prompt.questions().is_empty());
    }
}
