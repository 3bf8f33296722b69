use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::Write;

/// Writes each line to an `io::Write`, e.g. stdout.
#[derive(Debug)]
pub struct WriterConsole<W: Write> {
    writer: W,
}

impl<W: Write> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterConsole<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every printed line in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Vec<String>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for MemoryConsole {
    fn line(&mut self, text: &str) -> Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }
}
