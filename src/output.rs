//! Rendering of mapping lines and where they are written.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::generator::MappingLine;

pub const DEFAULT_FUNCTION_NAME: &str = "mid_to_country";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare `match` arms, one per MID, for pasting into an existing `match`
    #[default]
    Entries,
    /// A complete lookup function wrapping the arms
    Function,
}

/// Writes mapping lines in the chosen format.
pub struct Emitter<W: Write> {
    writer: W,
    format: OutputFormat,
    function_name: String,
}

impl<W: Write> Emitter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn begin(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Function {
            writeln!(
                self.writer,
                "/// Decode ISO 3166 country code from the MID part of an MMSI."
            )?;
            writeln!(
                self.writer,
                "pub fn {}(mid: u32) -> Option<&'static str> {{",
                self.function_name
            )?;
            writeln!(self.writer, "    match mid {{")?;
        }
        Ok(())
    }

    pub fn write_line(&mut self, line: &MappingLine) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    pub fn finish(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Function {
            writeln!(self.writer, "        _ => None,")?;
            writeln!(self.writer, "    }}")?;
            writeln!(self.writer, "}}")?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Destination for the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }

    /// Open a buffered writer, creating or truncating the file target.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
            OutputTarget::File(path) => {
                debug!("writing generated code to {}", path.display());
                let file = File::create(path)?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(mid: &str, alpha2: &str, country: &str, suppressed: bool) -> MappingLine {
        MappingLine {
            mid: mid.to_string(),
            alpha2: alpha2.to_string(),
            country_name: country.to_string(),
            suppressed,
        }
    }

    #[test]
    fn test_entries_format_has_no_wrapper() {
        let mut emitter = Emitter::new(Vec::new(), OutputFormat::Entries);
        emitter.begin().unwrap();
        emitter.write_line(&line("201", "AL", "Albania", false)).unwrap();
        emitter.finish().unwrap();
        assert_eq!(
            String::from_utf8(emitter.into_inner()).unwrap(),
            "            201 => Some(\"AL\"), // Albania\n"
        );
    }

    #[test]
    fn test_function_format_wraps_entries() {
        let mut emitter =
            Emitter::new(Vec::new(), OutputFormat::Function).with_function_name("country_of");
        emitter.begin().unwrap();
        emitter.write_line(&line("306", "CW", "Curaçao", false)).unwrap();
        emitter.write_line(&line("306", "SX", "Sint Maarten", true)).unwrap();
        emitter.finish().unwrap();

        let text = String::from_utf8(emitter.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "pub fn country_of(mid: u32) -> Option<&'static str> {");
        assert_eq!(lines[2], "    match mid {");
        assert_eq!(lines[3], "            306 => Some(\"CW\"), // Curaçao");
        assert_eq!(lines[4], "//            306 => Some(\"SX\"), // Sint Maarten");
        assert_eq!(&lines[5..], &["        _ => None,", "    }", "}"]);
    }

    #[test]
    fn test_file_target_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mid.rs");
        std::fs::write(&path, "stale contents that should disappear\n").unwrap();

        let target = OutputTarget::from_option(Some(path.clone()));
        {
            let mut writer = target.open().unwrap();
            writeln!(writer, "fresh").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_format_from_config_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"function\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Function);
        assert_eq!(OutputFormat::default(), OutputFormat::Entries);
    }
}
