//! Line-oriented console I/O.
//!
//! The prompt flow only ever needs "give me the next line" and "print this
//! line", so both sides are traits and the session can run against stdin and
//! stdout or against in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::tty::IsTty;

use super::output::{RED, RESET};

/// Source of raw input lines.
pub trait LineInput {
    /// Next line with its line ending intact, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Sink for prompts and messages.
pub trait LineOutput {
    /// Print text without a newline and flush it so it shows before a read.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn write_error(&mut self, line: &str) -> io::Result<()> {
        self.write_line(line)
    }
}

// ============================================================================
// Reader
// ============================================================================

pub struct LineReader<R> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl LineReader<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineInput for LineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.inner.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

// ============================================================================
// Writer
// ============================================================================

pub struct LineWriter<W> {
    inner: W,
    color: bool,
}

impl<W: Write> LineWriter<W> {
    /// Plain writer, no ANSI styling.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            color: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl LineWriter<Stdout> {
    /// Stdout writer; error lines are red when stdout is a terminal.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let color = out.is_tty();
        Self { inner: out, color }
    }
}

impl<W: Write> LineOutput for LineWriter<W> {
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())?;
        self.inner.flush()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{line}")?;
        self.inner.flush()
    }

    fn write_error(&mut self, line: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.inner, "{RED}{line}{RESET}")?;
            self.inner.flush()
        } else {
            self.write_line(line)
        }
    }
}
