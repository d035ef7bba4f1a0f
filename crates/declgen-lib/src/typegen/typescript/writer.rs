//! Indentation-aware text writer.

use crate::{Error, Result};

const INDENT: &str = "  ";

/// Incremental writer owning the cursor state of one generation run.
///
/// Indentation is written lazily at the first write of each line, so blank
/// lines carry no trailing whitespace.
#[derive(Debug)]
pub(crate) struct Writer {
    out: String,
    depth: usize,
    start_of_line: bool,
}

impl Writer {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
            start_of_line: true,
        }
    }

    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.start_of_line {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.start_of_line = false;
        }
        self.out.push_str(text);
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
        self.start_of_line = true;
    }

    /// Write `text` followed by a line break.
    pub fn line(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) -> Result<()> {
        self.depth = self.depth.checked_sub(1).ok_or(Error::IndentUnderflow)?;
        Ok(())
    }

    /// Write `header` and open an indented block.
    pub fn open(&mut self, header: &str) {
        self.line(header);
        self.indent();
    }

    /// Close the innermost block with `footer`.
    pub fn close(&mut self, footer: &str) -> Result<()> {
        self.dedent()?;
        self.line(footer);
        Ok(())
    }

    /// Consume the writer. Fails unless every block was closed.
    pub fn finish(self) -> Result<String> {
        if self.depth != 0 {
            return Err(Error::UnbalancedIndent(self.depth));
        }
        Ok(self.out)
    }
}
