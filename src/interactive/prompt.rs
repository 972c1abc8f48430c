//! Question/answer abstraction over the terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of user answers.
pub trait Prompt {
    /// Shows `question` and reads one line.
    ///
    /// Returns `Ok(None)` when input has ended.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// Prompt reading answers from `input` and writing questions to `output`.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Wraps an input reader and an output writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt over standard input and standard output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the shell prompt off the question line.
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Prompt answering from a fixed script, recording every question.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl ScriptedPrompt {
    /// Answers questions with `answers` in order, then reports end of input.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_terminal_prompt_reads_lines() {
        let mut output = Vec::new();
        let mut prompt = TerminalPrompt::new(Cursor::new("yes\r\nno\n"), &mut output);

        assert_eq!(prompt.ask("first? ").unwrap().as_deref(), Some("yes"));
        assert_eq!(prompt.ask("second? ").unwrap().as_deref(), Some("no"));
        assert_eq!(prompt.ask("third? ").unwrap(), None);

        assert_eq!(String::from_utf8(output).unwrap(), "first? second? third? \n");
    }
}
