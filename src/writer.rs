use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Writes rendered statements as one newline-separated block
pub struct StatementWriter<W: Write> {
    writer: W,
}

impl StatementWriter<std::fs::File> {
    /// Create (or truncate) the output file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(StatementWriter::new(file))
    }
}

impl<W: Write> StatementWriter<W> {
    pub fn new(writer: W) -> Self {
        StatementWriter { writer }
    }

    /// Write all statements separated by `\n`, with no trailing newline,
    /// then flush.
    pub fn write_all(&mut self, statements: &[String]) -> Result<()> {
        self.writer.write_all(statements.join("\n").as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
