//! Interactive acceptance of suggestions.
//!
//! [`display_suggestions`] walks the tokens of a text and, for every token
//! with suggestions, asks a [`Prompt`] which option to take. Index `0` keeps
//! the original token; index `N` picks the `N`-th suggestion.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::debug;

use crate::error::Result;
use crate::review::suggestion::SuggestionMap;

/// Source of menu choices.
pub trait Prompt {
    /// Ask which option should replace `token`.
    ///
    /// Returns `0` to keep the original, or a 1-based index into `options`.
    fn ask(&mut self, token: &str, options: &[String]) -> Result<usize>;
}

/// Prompt on a line-oriented console.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Create a prompt reading choices from `input` and writing menus to `output`.
    pub fn new(input: R, output: W) -> Self {
        ConsolePrompt { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn ask(&mut self, token: &str, options: &[String]) -> Result<usize> {
        writeln!(self.output, "Suggestions for '{token}':")?;
        writeln!(self.output, "  0: Keep original")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}: {}", i + 1, option)?;
        }
        write!(self.output, "Choose an option (0-{}): ", options.len())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF
            return Ok(0);
        }

        Ok(line.trim().parse().unwrap_or(0))
    }
}

/// Prompt answering from a fixed list of choices, then `0` once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    choices: VecDeque<usize>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    /// Create a prompt that answers with `choices` in order.
    pub fn new<I: IntoIterator<Item = usize>>(choices: I) -> Self {
        ScriptedPrompt {
            choices: choices.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Tokens the prompt was asked about, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, token: &str, _options: &[String]) -> Result<usize> {
        self.asked.push(token.to_string());
        Ok(self.choices.pop_front().unwrap_or(0))
    }
}

/// Let the prompt pick a replacement for every token with suggestions.
///
/// Tokens are rejoined with single spaces, so the original spacing is not
/// preserved. Choices outside `0..=options.len()` keep the original token.
pub fn display_suggestions<P: Prompt + ?Sized>(
    text: &str,
    suggestions: &SuggestionMap,
    prompt: &mut P,
) -> Result<String> {
    let mut words = Vec::new();
    let mut replaced = 0;

    for token in text.split_whitespace() {
        let Some(options) = suggestions.get(token) else {
            words.push(token.to_string());
            continue;
        };

        let choice = prompt.ask(token, options)?;
        match choice.checked_sub(1).and_then(|i| options.get(i)) {
            Some(option) => {
                words.push(option.clone());
                replaced += 1;
            }
            None => words.push(token.to_string()),
        }
    }

    debug!("Replaced {replaced} of {} tokens", words.len());
    Ok(words.join(" "))
}
