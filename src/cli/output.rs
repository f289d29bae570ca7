// Output formatting for the CLI

use std::io::Write;

use clap::ValueEnum;

use crate::field_mapping::StandardField;
use crate::TagSet;

/// Output format options
#[derive(Debug, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned human-readable listing
    #[default]
    Pretty,
    /// JSON object per file
    Json,
    /// One `field: value` line per tag
    KeyValue,
}

/// Format and output tag data and status messages
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Render one file's tags
    pub fn output_tags(
        &self,
        path: &str,
        tags: &TagSet,
        writer: &mut impl Write,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Pretty => self.output_pretty(path, tags, writer)?,
            OutputFormat::Json => {
                writeln!(writer, "{}", serde_json::to_string_pretty(tags)?)?;
            }
            OutputFormat::KeyValue => {
                for field in StandardField::ALL {
                    if let Some(value) = tags.get(field) {
                        writeln!(writer, "{}: {}", field.as_str(), value)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn output_pretty(
        &self,
        path: &str,
        tags: &TagSet,
        writer: &mut impl Write,
    ) -> anyhow::Result<()> {
        writeln!(writer, "{}", "-".repeat(60))?;
        writeln!(writer, "{}", path)?;
        writeln!(writer, "{}", "-".repeat(60))?;
        for field in StandardField::ALL {
            writeln!(
                writer,
                "{:<10}: {}",
                field.as_str(),
                tags.get(field).unwrap_or("(not set)")
            )?;
        }
        Ok(())
    }

    /// Print success message
    pub fn print_success(&self, message: &str) {
        if !self.quiet {
            println!("✓ {}", message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if !self.quiet {
            println!("  {}", message);
        }
    }
}
