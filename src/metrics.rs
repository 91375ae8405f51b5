//! Generation run counters.
//!
//! No exporter is installed by the binary; the counters are recorded through
//! the `metrics` facade and only land somewhere if the embedding process has
//! a recorder set up.

pub const LINES_EMITTED: &str = "mid_to_iso3166_lines_emitted_total";
pub const ISO_PARSE_FAILURES: &str = "mid_to_iso3166_iso_parse_failures_total";
pub const UNMATCHED_COUNTRIES: &str = "mid_to_iso3166_unmatched_countries_total";

/// Metrics for the normalize/parse/join run
pub struct GeneratorMetrics;

impl GeneratorMetrics {
    pub fn line_emitted(suppressed: bool) {
        let kind = if suppressed { "suppressed" } else { "active" };
        ::metrics::counter!(LINES_EMITTED, "kind" => kind).increment(1);
    }

    pub fn iso_parse_failure() {
        ::metrics::counter!(ISO_PARSE_FAILURES).increment(1);
    }

    pub fn unmatched_country() {
        ::metrics::counter!(UNMATCHED_COUNTRIES).increment(1);
    }
}
