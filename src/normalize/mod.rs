//! Country name normalization.
//!
//! The ITU and ISO tables spell many countries differently. Each table gets
//! its own ordered [`RuleSet`] that rewrites names into a shared form so the
//! two can be joined on name.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::tables::RawTables;

pub mod rules;

pub use rules::{ISO_RULES, ISO_SUPPLEMENT, MID_RULES};

/// Matches a space followed by a parenthesized qualifier, e.g. ` (Republic of)`.
static QUALIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r" \(.*?\)").unwrap());

/// A single text rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Remove every parenthesized qualifier suffix.
    StripQualifiers,
    /// Replace every occurrence of `from` with `to`.
    Replace { from: &'static str, to: &'static str },
}

impl Rule {
    pub const fn replace(from: &'static str, to: &'static str) -> Self {
        Rule::Replace { from, to }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Rule::StripQualifiers => QUALIFIER.replace_all(text, "").into_owned(),
            Rule::Replace { from, to } => replace_unapplied(text, from, to),
        }
    }
}

/// Like [`str::replace`], but an occurrence of `from` that already sits inside
/// an occurrence of `to` is left alone. Expanding rules such as
/// `Tanzania` -> `Tanzania, United Republic of` stay stable on a second pass.
fn replace_unapplied(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }
    let offsets: Vec<usize> = to.match_indices(from).map(|(i, _)| i).collect();
    if offsets.is_empty() {
        return text.replace(from, to);
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (pos, _) in text.match_indices(from) {
        let already_applied = offsets.iter().any(|&k| {
            pos >= k
                && text
                    .get(pos - k..)
                    .map_or(false, |rest| rest.starts_with(to))
        });
        out.push_str(&text[last..pos]);
        out.push_str(if already_applied { from } else { to });
        last = pos + from.len();
    }
    out.push_str(&text[last..]);
    out
}

/// An ordered list of rules. Order matters: a generic rule such as
/// `"France - " -> ""` must come after the specific `"France - X"` rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    name: &'static str,
    rules: &'static [Rule],
}

impl RuleSet {
    pub const fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Apply every rule in order to the whole text. Line structure is kept.
    pub fn apply(&self, text: &str) -> String {
        let out = self
            .rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc));
        debug!(
            rule_set = self.name,
            rules = self.rules.len(),
            "normalized table text"
        );
        out
    }
}

/// Both tables after normalization, ready for parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTables {
    pub mid: String,
    pub iso: String,
}

/// Run the shipped rule sets over both tables and append the ISO supplement
/// rows for countries the ISO list does not carry.
pub fn normalize_tables(tables: &RawTables<'_>) -> NormalizedTables {
    let mid = MID_RULES.apply(tables.mid);
    let mut iso = ISO_RULES.apply(tables.iso);
    for line in ISO_SUPPLEMENT {
        iso.push('\n');
        iso.push_str(line);
    }
    NormalizedTables { mid, iso }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_qualifiers() {
        let rule = Rule::StripQualifiers;
        assert_eq!(rule.apply("Bolivia (Plurinational State of)"), "Bolivia");
        assert_eq!(
            rule.apply("Cocos (Keeling) Islands (the)\tCC"),
            "Cocos Islands\tCC"
        );
        // No leading space, no strip
        assert_eq!(rule.apply("Sint(Maarten)"), "Sint(Maarten)");
    }

    #[test]
    fn test_strip_qualifiers_is_line_bound() {
        let rule = Rule::StripQualifiers;
        assert_eq!(rule.apply("A (b\nc) d"), "A (b\nc) d");
    }

    #[test]
    fn test_replace_all_occurrences() {
        let rule = Rule::replace("France - ", "");
        assert_eq!(
            rule.apply("226\tFrance - Guadeloupe\n347\tFrance - Martinique"),
            "226\tGuadeloupe\n347\tMartinique"
        );
    }

    #[test]
    fn test_expanding_replace_is_stable() {
        let rule = Rule::replace("Tanzania", "Tanzania, United Republic of");
        let once = rule.apply("674\tTanzania");
        assert_eq!(once, "674\tTanzania, United Republic of");
        assert_eq!(rule.apply(&once), once);

        let rule = Rule::replace("North Macedonia", "Republic of North Macedonia");
        let once = rule.apply("274\tNorth Macedonia");
        assert_eq!(once, "274\tRepublic of North Macedonia");
        assert_eq!(rule.apply(&once), once);
    }

    #[test]
    fn test_rule_order_matters() {
        static SPECIFIC_FIRST: &[Rule] = &[
            Rule::replace("France - Guiana", "French Guiana"),
            Rule::replace("France - ", ""),
        ];
        static GENERIC_FIRST: &[Rule] = &[
            Rule::replace("France - ", ""),
            Rule::replace("France - Guiana", "French Guiana"),
        ];
        let text = "745\tFrance - Guiana";
        assert_eq!(
            RuleSet::new("specific", SPECIFIC_FIRST).apply(text),
            "745\tFrench Guiana"
        );
        assert_eq!(RuleSet::new("generic", GENERIC_FIRST).apply(text), "745\tGuiana");
    }

    #[test]
    fn test_normalize_tables_appends_supplement() {
        let tables = RawTables::new("201\tAlbania (Republic of)\n", "Albania \tAL \tALB \t008\n");
        let normalized = normalize_tables(&tables);
        assert_eq!(normalized.mid, "201\tAlbania\n");
        assert!(normalized.iso.starts_with("Albania \tAL \tALB \t008\n"));
        assert!(normalized.iso.ends_with("Vatican City State  VA ZZZ 000"));
    }

    #[test]
    fn test_normalization_is_idempotent_on_embedded_tables() {
        let normalized = normalize_tables(&RawTables::embedded());
        assert_eq!(MID_RULES.apply(&normalized.mid), normalized.mid);

        let iso = ISO_RULES.apply(RawTables::embedded().iso);
        assert_eq!(ISO_RULES.apply(&iso), iso);
    }
}
