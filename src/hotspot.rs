use std::collections::{BTreeSet, HashMap};

use crate::models::{Hotspot, Signal, SourceKind, ThreatLevel};

struct CountryRollup {
    hotspot: Hotspot,
    diseases: BTreeSet<String>,
    sources: BTreeSet<SourceKind>,
}

/// One hotspot per ISO country code, most severe first.
///
/// Coordinates, country name and region come from the first signal seen for the country.
/// Countries with equal max severity keep the order in which they were first seen. Disease
/// and source lists are sorted by name.
pub fn aggregate(signals: &[Signal]) -> Vec<Hotspot> {
    let mut order: Vec<CountryRollup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for signal in signals {
        let iso = signal.location.iso_code.as_str();
        let slot = *index.entry(iso).or_insert_with(|| {
            order.push(CountryRollup {
                hotspot: Hotspot {
                    iso_code: iso.to_string(),
                    country: signal.location.country.clone(),
                    lat: signal.location.lat,
                    lng: signal.location.lng,
                    region: signal.location.region.clone(),
                    signal_count: 0,
                    max_severity: 0,
                    threat_level: ThreatLevel::Low,
                    diseases: Vec::new(),
                    sources: Vec::new(),
                    has_traveler_signals: false,
                    has_anomaly: false,
                },
                diseases: BTreeSet::new(),
                sources: BTreeSet::new(),
            });
            order.len() - 1
        });

        let rollup = &mut order[slot];
        rollup.hotspot.signal_count += 1;
        rollup.hotspot.max_severity = rollup.hotspot.max_severity.max(signal.severity);
        rollup.hotspot.has_traveler_signals |= signal.is_traveler;
        rollup.hotspot.has_anomaly |= signal.anomaly;
        rollup.diseases.insert(signal.disease.clone());
        rollup.sources.insert(signal.source);
    }

    let mut hotspots: Vec<Hotspot> = order
        .into_iter()
        .map(|rollup| {
            let mut hotspot = rollup.hotspot;
            hotspot.threat_level = ThreatLevel::from_severity(hotspot.max_severity);
            hotspot.diseases = rollup.diseases.into_iter().collect();
            hotspot.sources = rollup.sources.into_iter().collect();
            hotspot.sources.sort_by_key(|source| source.as_str());
            hotspot
        })
        .collect();

    hotspots.sort_by(|a, b| b.max_severity.cmp(&a.max_severity));
    hotspots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::signal;

    #[test]
    fn max_severity_sets_the_threat_level() {
        let hotspots = aggregate(&[
            signal("KE", "malaria", SourceKind::News, 3),
            signal("KE", "cholera", SourceKind::News, 9),
            signal("KE", "dengue", SourceKind::Social, 6),
        ]);
        assert_eq!(hotspots.len(), 1);
        assert_eq!(hotspots[0].max_severity, 9);
        assert_eq!(hotspots[0].threat_level, ThreatLevel::Critical);
        assert_eq!(hotspots[0].signal_count, 3);
    }

    #[test]
    fn sets_are_sorted_and_distinct() {
        let hotspots = aggregate(&[
            signal("TH", "zika", SourceKind::Social, 5),
            signal("TH", "dengue", SourceKind::News, 6),
            signal("TH", "dengue", SourceKind::Community, 6),
        ]);
        assert_eq!(hotspots[0].diseases, vec!["dengue", "zika"]);
        assert_eq!(
            hotspots[0].sources,
            vec![SourceKind::Community, SourceKind::News, SourceKind::Social]
        );
    }

    #[test]
    fn flags_roll_up() {
        let mut traveler = signal("PE", "dengue", SourceKind::Social, 6);
        traveler.is_traveler = true;
        let mut anomalous = signal("PE", "dengue", SourceKind::News, 6);
        anomalous.anomaly = true;

        let hotspots = aggregate(&[traveler, anomalous, signal("MX", "zika", SourceKind::News, 5)]);
        let peru = hotspots.iter().find(|h| h.iso_code == "PE").unwrap();
        let mexico = hotspots.iter().find(|h| h.iso_code == "MX").unwrap();
        assert!(peru.has_traveler_signals && peru.has_anomaly);
        assert!(!mexico.has_traveler_signals && !mexico.has_anomaly);
    }

    #[test]
    fn sorted_by_severity_with_stable_ties() {
        let hotspots = aggregate(&[
            signal("VN", "dengue", SourceKind::News, 6),
            signal("CD", "ebola", SourceKind::Official, 10),
            signal("KH", "dengue", SourceKind::News, 6),
            signal("FJ", "typhoid", SourceKind::News, 2),
        ]);
        let order: Vec<&str> = hotspots.iter().map(|h| h.iso_code.as_str()).collect();
        assert_eq!(order, vec!["CD", "VN", "KH", "FJ"]);
        assert_eq!(hotspots[1].threat_level, ThreatLevel::High);
        assert_eq!(hotspots[3].threat_level, ThreatLevel::Low);
    }
}
