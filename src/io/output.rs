use crate::core::Diagnostic;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

pub trait OutputWriter {
    fn write_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(diagnostics)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Human-readable report, grouped by file:
///
/// ```text
/// src/app.js
///   3:15  no-callback-in-promise  Avoid calling back inside of a promise.
/// ```
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
        if diagnostics.is_empty() {
            writeln!(self.writer, "{}", "No promise anti-patterns found.".green())?;
            return Ok(());
        }

        let mut current_file = None;
        for diagnostic in diagnostics {
            if current_file != Some(&diagnostic.file) {
                if current_file.is_some() {
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "{}", diagnostic.file.display().to_string().bold())?;
                current_file = Some(&diagnostic.file);
            }

            let position = format!(
                "{}:{}",
                diagnostic.line,
                diagnostic.column.map(|c| c + 1).unwrap_or(1)
            );
            writeln!(
                self.writer,
                "  {}  {}  {}",
                position.dimmed(),
                diagnostic.rule.id().yellow(),
                diagnostic.message
            )?;
        }

        let count = diagnostics.len();
        let summary = format!(
            "\n{} problem{} found",
            count,
            if count == 1 { "" } else { "s" }
        );
        writeln!(self.writer, "{}", summary.bright_red())?;
        Ok(())
    }
}
