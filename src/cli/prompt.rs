//! Line-based prompting with re-prompt on invalid input
//!
//! End of input surfaces as an `UnexpectedEof` error so a session can stop
//! cleanly instead of looping forever on a closed stdin.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Prompts on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over a reader and a writer
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for output between prompts
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one line without its line terminator
    ///
    /// # Errors
    /// Returns `UnexpectedEof` when the input is exhausted
    pub fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Print `message` and read the answer
    pub fn ask(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.read_line()
    }

    /// Ask until the trimmed answer is not empty
    pub fn ask_non_empty(&mut self, message: &str) -> io::Result<String> {
        loop {
            let answer = self.ask(message)?;
            let trimmed = answer.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            writeln!(self.output, "A value is required.")?;
        }
    }

    /// Ask until the answer parses as `T`
    pub fn ask_number<T: FromStr>(&mut self, message: &str) -> io::Result<T> {
        loop {
            let answer = self.ask(message)?;
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "You have entered an invalid number.")?,
            }
        }
    }

    /// Ask until the answer is an integer inside `range`
    pub fn ask_in_range(&mut self, message: &str, range: RangeInclusive<u8>) -> io::Result<u8> {
        loop {
            let value = self.ask_number::<u8>(message)?;
            if range.contains(&value) {
                return Ok(value);
            }
            writeln!(
                self.output,
                "The number must be from {} to {}.",
                range.start(),
                range.end()
            )?;
        }
    }

    /// Ask a yes/no question; only `y` or `yes` (any case) count as yes
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.ask(message)?;
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    /// Print `message` and wait for enter
    pub fn pause(&mut self, message: &str) -> io::Result<()> {
        self.ask(message).map(|_| ())
    }
}
