use std::sync::LazyLock;

use regex::{RegexSet, RegexSetBuilder};

const PATTERNS: &[&str] = &[
    r"(?:came|got|returned?|back|arrived)\s+(?:from|back from)\s+\w+.*(?:sick|ill|fever|diarr|vomit|infected|hospital)",
    r"(?:sick|ill|fever|diarr|vomit|infected)\s+(?:after|since|from)\s+(?:my |our |a )?(?:trip|travel|vacation|holiday|visit)",
    r"(?:travel|trip|vacation|holiday)\s+(?:to|in)\s+\w+.*(?:sick|ill|fever|diarr|outbreak|warning|alert)",
    r"(?:don'?t |do not )?(?:travel|go|visit)\s+(?:to )?\w+.*(?:outbreak|disease|infection|epidemic|cases)",
    r"(?:outbreak|epidemic|cases|deaths?|infections?)\s+(?:in|reported in|confirmed in|spreading in)",
    r"(?:WHO|CDC|health authority|ministry of health).*(?:warn|alert|declare|confirm|report)",
    r"(?:traveler|tourist|visitor|passenger)s?\s+(?:sick|ill|infected|diagnosed|hospitalized|quarantine)",
    r"(?:airport|border|flight|cruise)\s+(?:screen|check|quarantine|ban|restrict)",
];

static TRAVELER_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSetBuilder::new(PATTERNS)
        .case_insensitive(true)
        .build()
        .expect("traveler patterns are valid regexes")
});

/// True when any pattern matches.
pub fn is_traveler_signal(text: &str) -> bool {
    TRAVELER_PATTERNS.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symptom_after_trip() {
        assert!(is_traveler_signal("Got really sick after my trip, fever for days"));
    }

    #[test]
    fn returned_then_symptom() {
        assert!(is_traveler_signal("My brother came back from Bali and ended up in hospital"));
    }

    #[test]
    fn authority_alert_is_case_insensitive() {
        assert!(is_traveler_signal("cdc issues alert for measles"));
        assert!(is_traveler_signal("The Ministry of Health confirmed two cases"));
    }

    #[test]
    fn chokepoint_screening() {
        assert!(is_traveler_signal("Airport screening resumes for arrivals"));
    }

    #[test]
    fn plain_statement_is_not_travel_linked() {
        assert!(!is_traveler_signal("Dengue vaccine approved for adults"));
        assert!(!is_traveler_signal(""));
    }
}
