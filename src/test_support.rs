use chrono::Utc;

use crate::gazetteer::GAZETTEER;
use crate::models::{Location, Signal, SignalType, SourceKind};

/// A signal placed at the first gazetteer entry for `iso`.
pub fn signal(iso: &str, disease: &str, source: SourceKind, severity: u8) -> Signal {
    let entry = GAZETTEER
        .iter()
        .find(|entry| entry.iso == iso)
        .unwrap_or_else(|| panic!("no gazetteer entry for {iso}"));

    Signal {
        id: format!("{iso}-{disease}-{severity}"),
        source,
        signal_type: SignalType::OutbreakReport,
        disease: disease.to_string(),
        category: "unknown".to_string(),
        glyph: "🦠".to_string(),
        severity,
        location: Location {
            lat: entry.lat,
            lng: entry.lng,
            display_name: entry.name.to_string(),
            country: entry.country.to_string(),
            iso_code: iso.to_string(),
            region: entry.region.to_string(),
        },
        confidence: 0.7,
        summary: format!("{disease} reported in {}", entry.name),
        url: String::new(),
        published_at: String::new(),
        observed_at: Utc::now(),
        is_traveler: false,
        anomaly: false,
        anomaly_factor: None,
        trend_score: None,
    }
}
