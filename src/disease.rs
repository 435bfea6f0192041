use std::collections::HashSet;
use std::sync::LazyLock;

use crate::gazetteer::{DiseaseEntry, DISEASES};
use crate::models::DiseaseMatch;

/// Dictionary terms ordered longest first; ties keep declaration order.
static TERMS_BY_LENGTH: LazyLock<Vec<&'static DiseaseEntry>> = LazyLock::new(|| {
    let mut terms: Vec<&'static DiseaseEntry> = DISEASES.iter().collect();
    terms.sort_by(|a, b| b.term.len().cmp(&a.term.len()));
    terms
});

/// All diseases mentioned in `text`, at most one per category, most severe first.
///
/// Longer terms are tried first so "yellow fever" claims the match before the generic
/// "fever" entry is considered for its own category.
pub fn classify(text: &str) -> Vec<DiseaseMatch> {
    let folded = text.to_lowercase();
    let mut seen_categories: HashSet<&str> = HashSet::new();
    let mut found: Vec<DiseaseMatch> = Vec::new();

    for entry in TERMS_BY_LENGTH.iter() {
        if !folded.contains(entry.term) || !seen_categories.insert(entry.category) {
            continue;
        }
        found.push(DiseaseMatch {
            name: entry.term.trim().to_string(),
            category: entry.category.to_string(),
            base_severity: entry.severity,
            glyph: entry.glyph.to_string(),
        });
    }

    // stable: equal severities keep longest-first order
    found.sort_by(|a, b| b.base_severity.cmp(&a.base_severity));
    found
}

pub fn primary(text: &str) -> Option<DiseaseMatch> {
    classify(text).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_term_wins_over_generic_fever() {
        let top = primary("Traveler with fever diagnosed with yellow fever").unwrap();
        assert_eq!(top.name, "yellow fever");
        assert_eq!(top.base_severity, 8);
    }

    #[test]
    fn matches_are_sorted_by_severity() {
        let matches = classify("cholera and dengue reported alongside ebola");
        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ebola", "cholera", "dengue"]);
    }

    #[test]
    fn one_match_per_category() {
        // "lassa fever" and "lassa" are both hemorrhagic; the longer one wins
        let matches = classify("lassa fever cases confirmed");
        let hemorrhagic: Vec<&DiseaseMatch> = matches
            .iter()
            .filter(|m| m.category == "hemorrhagic")
            .collect();
        assert_eq!(hemorrhagic.len(), 1);
        assert_eq!(hemorrhagic[0].name, "lassa fever");
    }

    #[test]
    fn padded_terms_report_trimmed_names() {
        let top = primary("new tb cases in the district").unwrap();
        assert_eq!(top.name, "tb");
        assert_eq!(top.category, "respiratory");
    }

    #[test]
    fn equal_severity_keeps_longest_first_order() {
        // both waterborne/viral at severity 5: hepatitis a is longer than mpox
        let matches = classify("mpox and hepatitis a");
        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["hepatitis a", "mpox"]);
    }

    #[test]
    fn no_disease_terms_yields_nothing() {
        assert!(classify("beautiful beaches and sunsets").is_empty());
        assert!(primary("").is_none());
    }
}
