use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Asks for values one line at a time.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where prompts go; results are written here too.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Returns `value` if it was given on the command line, or asks for it.
    pub fn or_ask<T>(&mut self, value: Option<T>, message: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match value {
            Some(value) => Ok(value),
            None => self.ask(message),
        }
    }

    /// Writes `message` and parses the next line of input.
    pub fn ask<T>(&mut self, message: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input ended before a value was entered");
        }
        let line = line.trim();
        line.parse()
            .with_context(|| format!("`{line}` is not a valid number"))
    }
}
