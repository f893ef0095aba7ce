//! Mood input sources and the validation gate

use crate::domain::Mood;
use crate::error::{MoodlogError, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub const MOOD_PROMPT: &str = "Enter your mood: ";

/// Somewhere a raw mood label can be asked for
pub trait MoodSource {
    /// Show `prompt` and return the raw answer, or None once input is exhausted
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompt on a writer and read answers line by line from a reader
pub struct TerminalPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        TerminalPrompt { reader, writer }
    }
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin
    pub fn stdio() -> Self {
        TerminalPrompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> MoodSource for TerminalPrompt<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Fixed list of answers; records how often it was asked
#[derive(Debug, Default)]
pub struct ScriptedSource {
    answers: VecDeque<String>,
    asked: usize,
}

impl ScriptedSource {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedSource {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: 0,
        }
    }

    /// Number of prompts shown so far
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl MoodSource for ScriptedSource {
    fn ask(&mut self, _prompt: &str) -> Result<Option<String>> {
        self.asked += 1;
        Ok(self.answers.pop_front())
    }
}

/// Keep asking until a recognised mood label arrives.
///
/// Unrecognised labels are never returned to the caller; they only cause another
/// prompt. With `max_attempts` unset the gate asks forever, so it only ends on a
/// valid label or on end of input.
pub fn acquire_mood(source: &mut dyn MoodSource, max_attempts: Option<u32>) -> Result<Mood> {
    let mut attempts: u32 = 0;
    loop {
        if let Some(limit) = max_attempts {
            if attempts >= limit {
                return Err(MoodlogError::AttemptsExhausted(limit));
            }
        }
        attempts = attempts.saturating_add(1);

        let answer = source.ask(MOOD_PROMPT)?.ok_or(MoodlogError::InputClosed)?;
        match answer.parse::<Mood>() {
            Ok(mood) => return Ok(mood),
            Err(_) => {
                tracing::warn!(answer = answer.trim(), attempt = attempts, "unrecognised mood");
            }
        }
    }
}
