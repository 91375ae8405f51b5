//! Shipped rule sets for the embedded tables.

use super::{Rule, RuleSet};

/// Rewrites ITU names into ISO short names.
pub static MID_RULES: RuleSet = RuleSet::new("mid", MID_RULE_LIST);

/// Rewrites ISO names that the qualifier strip alone would break.
pub static ISO_RULES: RuleSet = RuleSet::new("iso3166", ISO_RULE_LIST);

/// Rows appended to the normalized ISO table for names only the ITU list uses.
/// The alpha-3 and numeric fields are placeholders.
pub static ISO_SUPPLEMENT: &[&str] = &[
    "France - Reunion  RE ZZZ 000",
    "Vatican City State  VA ZZZ 000",
];

const MID_RULE_LIST: &[Rule] = &[
    Rule::StripQualifiers,
    // French overseas territories
    Rule::replace("France - Guiana", "French Guiana"),
    Rule::replace("France - Wallis and Futuna Islands", "Wallis and Futuna"),
    Rule::replace(
        "France - Saint Paul and Amsterdam Islands",
        "French Southern Territories",
    ),
    Rule::replace("France - Kerguelen Islands", "French Southern Territories"),
    Rule::replace("France - Crozet Archipelago", "French Southern Territories"),
    Rule::replace("France - Reunion", "French Southern Territories"),
    Rule::replace("France - Adelie Land", "French Southern Territories"),
    Rule::replace("France - ", ""),
    Rule::replace("Australia - ", ""),
    Rule::replace("New Zealand - ", ""),
    Rule::replace("China - ", ""),
    Rule::replace("Denmark - ", ""),
    Rule::replace("Netherlands - ", ""),
    Rule::replace(
        "United States of America - Alaska",
        "United States of America",
    ),
    Rule::replace("United States of America - ", ""),
    // British overseas territories
    Rule::replace(
        "United Kingdom of Great Britain and Northern Ireland - Pitcairn Island",
        "Pitcairn",
    ),
    Rule::replace(
        "United Kingdom of Great Britain and Northern Ireland - Falkland Islands",
        "Falkland Islands [Malvinas]",
    ),
    Rule::replace(
        "United Kingdom of Great Britain and Northern Ireland - Saint Helena",
        "Saint Helena, Ascension and Tristan da Cunha",
    ),
    Rule::replace(
        "United Kingdom of Great Britain and Northern Ireland - Ascension Island",
        "Saint Helena, Ascension and Tristan da Cunha",
    ),
    Rule::replace("United Kingdom of Great Britain and Northern Ireland - ", ""),
    // Long-form state names
    Rule::replace("Argentine Republic", "Argentina"),
    Rule::replace("Democratic Republic of the Congo", "Congo"),
    Rule::replace("Togolese Republic", "Togo"),
    Rule::replace("Gabonese Republic", "Gabon"),
    Rule::replace("Kyrgyz Republic", "Kyrgyzstan"),
    Rule::replace("Democratic People's Republic of Korea", "Korea"),
    Rule::replace("State of Palestine", "Palestine, State of"),
    Rule::replace("Czech Republic", "Czechia"),
    Rule::replace("Slovak Republic", "Slovakia"),
    Rule::replace("Portugal - Madeira", "Portugal"),
    Rule::replace("Portugal - Azores", "Portugal"),
    Rule::replace("Tanzania", "Tanzania, United Republic of"),
    Rule::replace("North Macedonia", "Republic of North Macedonia"),
];

const ISO_RULE_LIST: &[Rule] = &[
    Rule::replace("Virgin Islands (U.S.)", "United States Virgin Islands"),
    Rule::replace("Virgin Islands (British)", "British Virgin Islands"),
    Rule::StripQualifiers,
];

#[cfg(test)]
mod tests {
    use super::*;

    const UK: &str = "United Kingdom of Great Britain and Northern Ireland";

    #[test]
    fn test_mid_rules_strip_qualifiers_first() {
        assert_eq!(MID_RULES.rules()[0], Rule::StripQualifiers);
    }

    #[test]
    fn test_uk_rules_share_prefix() {
        let uk_rules = MID_RULES
            .rules()
            .iter()
            .filter(|rule| matches!(rule, Rule::Replace { from, .. } if from.starts_with(UK)))
            .count();
        assert_eq!(uk_rules, 5);
    }

    #[test]
    fn test_generic_prefix_rules_follow_specific_ones() {
        let position = |pattern: &str| {
            MID_RULES
                .rules()
                .iter()
                .position(|rule| matches!(rule, Rule::Replace { from, .. } if *from == pattern))
                .unwrap()
        };
        assert!(position("France - Guiana") < position("France - "));
        assert!(position("France - Reunion") < position("France - "));
        assert!(
            position("United States of America - Alaska")
                < position("United States of America - ")
        );
        assert!(position(&format!("{} - Pitcairn Island", UK)) < position(&format!("{} - ", UK)));
    }

    #[test]
    fn test_mid_rules_on_territories() {
        let text = "329\tFrance - Guadeloupe (French Department of)\n\
                    303\tUnited States of America - Alaska (State of)\n\
                    740\tUnited Kingdom of Great Britain and Northern Ireland - Falkland Islands (Malvinas)\n\
                    306\tNetherlands (Kingdom of the) - Curaçao\n\
                    443\tState of Palestine (In accordance with Resolution 99 Rev. Dubai, 2018)";
        assert_eq!(
            MID_RULES.apply(text),
            "329\tGuadeloupe\n\
             303\tUnited States of America\n\
             740\tFalkland Islands [Malvinas]\n\
             306\tCuraçao\n\
             443\tPalestine, State of"
        );
    }

    #[test]
    fn test_iso_rules_keep_virgin_islands_apart() {
        let text = "Virgin Islands (British) \tVG \tVGB \t092\n\
                    Virgin Islands (U.S.) \tVI \tVIR \t850\n\
                    Bahamas (the) \tBS \tBHS \t044";
        assert_eq!(
            ISO_RULES.apply(text),
            "British Virgin Islands \tVG \tVGB \t092\n\
             United States Virgin Islands \tVI \tVIR \t850\n\
             Bahamas \tBS \tBHS \t044"
        );
    }
}
