//! Line parsers for the normalized tables and the name -> alpha-2 lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::metrics::GeneratorMetrics;

static ISO_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*?)\s+([A-Z][A-Z])\s+([A-Z][A-Z][A-Z])\s+([0-9]+)\s*$").unwrap()
});

static MID_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d\d\d)\s+(.*)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoRecord {
    pub country_name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub numeric: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidRecord {
    pub mid: String,
    pub country_name: String,
}

/// Outcome of parsing one ISO table line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsoLine {
    Blank,
    Record(IsoRecord),
    Malformed,
}

/// A non-empty ISO line that did not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// 1-based line number within the normalized table text.
    pub line_number: usize,
    pub line: String,
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse: {}", self.line)
    }
}

pub fn parse_iso_line(line: &str) -> IsoLine {
    if line.is_empty() {
        return IsoLine::Blank;
    }
    match ISO_LINE.captures(line) {
        Some(caps) => IsoLine::Record(IsoRecord {
            country_name: caps[1].to_string(),
            alpha2: caps[2].to_string(),
            alpha3: caps[3].to_string(),
            numeric: caps[4].to_string(),
        }),
        None => IsoLine::Malformed,
    }
}

/// Parse one MID table line. Anything that is not `<3 digits><whitespace><name>`
/// is treated as a separator and skipped without a diagnostic.
pub fn parse_mid_line(line: &str) -> Option<MidRecord> {
    MID_LINE.captures(line).map(|caps| MidRecord {
        mid: caps[1].to_string(),
        country_name: caps[2].to_string(),
    })
}

/// All MID records in table order.
pub fn parse_mid_table(text: &str) -> Vec<MidRecord> {
    let records: Vec<MidRecord> = text.split('\n').filter_map(parse_mid_line).collect();
    debug!("parsed MID table: records={}", records.len());
    records
}

/// Country name -> ISO record, keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct IsoLookup {
    by_name: HashMap<String, IsoRecord>,
}

impl IsoLookup {
    /// Build the lookup from normalized ISO table text. Malformed lines are
    /// reported and skipped; a repeated name overwrites the earlier entry.
    pub fn from_table(text: &str) -> (Self, Vec<ParseIssue>) {
        let mut lookup = Self::default();
        let mut issues = Vec::new();

        for (idx, line) in text.split('\n').enumerate() {
            match parse_iso_line(line) {
                IsoLine::Blank => {}
                IsoLine::Record(record) => lookup.insert(record),
                IsoLine::Malformed => {
                    warn!(line_number = idx + 1, "failed to parse ISO 3166 line: {}", line);
                    GeneratorMetrics::iso_parse_failure();
                    issues.push(ParseIssue {
                        line_number: idx + 1,
                        line: line.to_string(),
                    });
                }
            }
        }

        debug!(
            "built ISO 3166 lookup: entries={} issues={}",
            lookup.len(),
            issues.len()
        );
        (lookup, issues)
    }

    pub fn insert(&mut self, record: IsoRecord) {
        if let Some(previous) = self.by_name.get(&record.country_name) {
            debug!(
                country = %record.country_name,
                "replacing {} with {}", previous.alpha2, record.alpha2
            );
        }
        self.by_name.insert(record.country_name.clone(), record);
    }

    pub fn get(&self, country_name: &str) -> Option<&IsoRecord> {
        self.by_name.get(country_name)
    }

    pub fn alpha2(&self, country_name: &str) -> Option<&str> {
        self.get(country_name).map(|record| record.alpha2.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_line() {
        let parsed = parse_iso_line("Testland  TL TST 999");
        assert_eq!(
            parsed,
            IsoLine::Record(IsoRecord {
                country_name: "Testland".to_string(),
                alpha2: "TL".to_string(),
                alpha3: "TST".to_string(),
                numeric: "999".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_iso_line_with_tabs_and_trailing_space() {
        match parse_iso_line("Saint Kitts and Nevis \tKN \tKNA \t659 ") {
            IsoLine::Record(record) => {
                assert_eq!(record.country_name, "Saint Kitts and Nevis");
                assert_eq!(record.alpha2, "KN");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_iso_line_missing_numeric() {
        assert_eq!(parse_iso_line("Testland TL TST"), IsoLine::Malformed);
        assert_eq!(parse_iso_line(""), IsoLine::Blank);
    }

    #[test]
    fn test_lookup_reports_malformed_lines() {
        let (lookup, issues) = IsoLookup::from_table("\nTestland  TL TST 999\nTestland TL TST\n");
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.alpha2("Testland"), Some("TL"));
        assert_eq!(
            issues,
            vec![ParseIssue {
                line_number: 3,
                line: "Testland TL TST".to_string(),
            }]
        );
        assert_eq!(issues[0].to_string(), "Failed to parse: Testland TL TST");
    }

    #[test]
    fn test_lookup_last_write_wins() {
        let (lookup, issues) = IsoLookup::from_table("Congo \tCD \tCOD \t180\nCongo \tCG \tCOG \t178");
        assert!(issues.is_empty());
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.alpha2("Congo"), Some("CG"));
        assert_eq!(lookup.get("Congo").unwrap().numeric, "178");
    }

    #[test]
    fn test_parse_mid_line() {
        assert_eq!(
            parse_mid_line("201\tTestland"),
            Some(MidRecord {
                mid: "201".to_string(),
                country_name: "Testland".to_string(),
            })
        );
        assert_eq!(parse_mid_line(""), None);
        assert_eq!(parse_mid_line("20\tShort"), None);
        assert_eq!(parse_mid_line("Testland"), None);
    }

    #[test]
    fn test_parse_mid_table_keeps_order() {
        let records = parse_mid_table("\n306\tCuraçao\n\n306\tSint Maarten\n307\tAruba\n");
        let mids: Vec<&str> = records.iter().map(|r| r.mid.as_str()).collect();
        assert_eq!(mids, vec!["306", "306", "307"]);
        assert_eq!(records[0].country_name, "Curaçao");
    }
}
