/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of answers for interactive questions.
pub trait Prompt {
    /// One line of input with surrounding whitespace removed.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{} [y/N]", question))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

#[derive(Debug, Default)]
pub struct Terminal;

impl Prompt for Terminal {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut inp = String::new();
        if io::stdin().lock().read_line(&mut inp)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(inp.trim().to_string())
    }
}

/// Answers from a fixed list, for non-interactive runs.
#[derive(Debug, Default)]
pub struct Scripted {
    answers: VecDeque<String>,
}

impl Scripted {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompt for Scripted {
    fn ask(&mut self, _prompt: &str) -> io::Result<String> {
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more answers"))
    }
}

/// Splits a comma separated list, dropping blank entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
