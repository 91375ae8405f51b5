//! Joins the MID table against the ISO lookup and streams mapping lines.

use std::fmt;
use std::io::Write;

use tracing::{error, info};

use crate::error::{MidToIsoError, Result};
use crate::metrics::GeneratorMetrics;
use crate::normalize::normalize_tables;
use crate::output::Emitter;
use crate::parser::{parse_mid_table, IsoLookup, MidRecord, ParseIssue};
use crate::tables::RawTables;

/// Indentation that lines the entries up with the `match` arms they are pasted into.
const ENTRY_INDENT: &str = "            ";

/// One generated `match` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingLine {
    pub mid: String,
    pub alpha2: String,
    pub country_name: String,
    /// Same MID as the line before it; emitted commented out.
    pub suppressed: bool,
}

impl fmt::Display for MappingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suppressed {
            f.write_str("//")?;
        }
        write!(
            f,
            "{}{} => Some(\"{}\"), // {}",
            ENTRY_INDENT, self.mid, self.alpha2, self.country_name
        )
    }
}

/// Resolves MID records one at a time, in order.
///
/// A record whose MID equals the MID of the record right before it is marked
/// suppressed. The first record with no ISO entry yields
/// [`MidToIsoError::UnmatchedCountry`] and ends the iteration.
pub struct Joiner<'a, I> {
    records: I,
    lookup: &'a IsoLookup,
    prev_mid: Option<String>,
    failed: bool,
}

impl<'a, I> Joiner<'a, I>
where
    I: Iterator<Item = MidRecord>,
{
    pub fn new<R>(records: R, lookup: &'a IsoLookup) -> Self
    where
        R: IntoIterator<IntoIter = I>,
    {
        Self {
            records: records.into_iter(),
            lookup,
            prev_mid: None,
            failed: false,
        }
    }
}

impl<'a, I> Iterator for Joiner<'a, I>
where
    I: Iterator<Item = MidRecord>,
{
    type Item = Result<MappingLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let record = self.records.next()?;

        let Some(alpha2) = self.lookup.alpha2(&record.country_name) else {
            self.failed = true;
            GeneratorMetrics::unmatched_country();
            error!(mid = %record.mid, "no ISO 3166 entry for {}", record.country_name);
            return Some(Err(MidToIsoError::UnmatchedCountry {
                mid: record.mid,
                country: record.country_name,
            }));
        };

        let suppressed = self.prev_mid.as_deref() == Some(record.mid.as_str());
        let line = MappingLine {
            mid: record.mid.clone(),
            alpha2: alpha2.to_string(),
            country_name: record.country_name,
            suppressed,
        };
        self.prev_mid = Some(record.mid);
        Some(Ok(line))
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub active: usize,
    pub suppressed: usize,
    pub iso_issues: Vec<ParseIssue>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.active + self.suppressed
    }
}

pub struct Generator<'a> {
    tables: RawTables<'a>,
}

impl Generator<'static> {
    pub fn embedded() -> Self {
        Self::new(RawTables::embedded())
    }
}

impl<'a> Generator<'a> {
    pub fn new(tables: RawTables<'a>) -> Self {
        Self { tables }
    }

    /// Normalize, parse and join the tables, streaming each mapping line to
    /// `emitter` as soon as it is resolved. ISO lines that fail to parse are
    /// reported on `diagnostics` and skipped.
    ///
    /// On an unmatched country the lines already written stay written.
    pub fn run<W, D>(&self, emitter: &mut Emitter<W>, diagnostics: &mut D) -> Result<GenerationReport>
    where
        W: Write,
        D: Write,
    {
        let normalized = normalize_tables(&self.tables);

        let (lookup, iso_issues) = IsoLookup::from_table(&normalized.iso);
        for issue in &iso_issues {
            writeln!(diagnostics, "{}", issue)?;
        }

        let records = parse_mid_table(&normalized.mid);
        info!(
            "joining {} MID records against {} ISO 3166 entries",
            records.len(),
            lookup.len()
        );

        let mut report = GenerationReport {
            iso_issues,
            ..Default::default()
        };

        emitter.begin()?;
        for line in Joiner::new(records, &lookup) {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    emitter.flush()?;
                    return Err(e);
                }
            };
            emitter.write_line(&line)?;
            GeneratorMetrics::line_emitted(line.suppressed);
            if line.suppressed {
                report.suppressed += 1;
            } else {
                report.active += 1;
            }
        }
        emitter.finish()?;

        info!(
            "generated {} mapping lines ({} suppressed)",
            report.total(),
            report.suppressed
        );
        Ok(report)
    }
}
