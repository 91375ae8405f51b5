//! Embedded reference tables.
//!
//! Both tables are kept exactly as published; reconciling their naming
//! conventions is the job of [`crate::normalize`].

pub mod iso3166;
pub mod mid;

pub use iso3166::ISO_3166_TABLE;
pub use mid::MID_TABLE;

/// The two raw tables the generator reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTables<'a> {
    pub mid: &'a str,
    pub iso: &'a str,
}

impl RawTables<'static> {
    /// The tables compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            mid: MID_TABLE,
            iso: ISO_3166_TABLE,
        }
    }
}

impl<'a> RawTables<'a> {
    pub fn new(mid: &'a str, iso: &'a str) -> Self {
        Self { mid, iso }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_are_line_oriented() {
        let tables = RawTables::embedded();
        assert!(tables.mid.lines().any(|l| l.starts_with("201\t")));
        assert!(tables.iso.lines().any(|l| l.starts_with("Afghanistan ")));
        // Blank separator lines at both ends
        assert!(tables.mid.starts_with('\n'));
        assert!(tables.iso.ends_with('\n'));
    }

    #[test]
    fn test_embedded_mid_rows_are_tab_separated() {
        let rows: Vec<&str> = MID_TABLE.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(rows.len(), 294);
        assert!(rows.iter().all(|row| row.as_bytes().get(3) == Some(&b'\t')));
    }
}
