use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A resolved place. Always copied out of the static gazetteer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
    pub country: String,
    pub iso_code: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseMatch {
    pub name: String,
    pub category: String,
    pub base_severity: u8,
    pub glyph: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Official,
    News,
    Social,
    Community,
    Trend,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Official => "official",
            SourceKind::News => "news",
            SourceKind::Social => "social",
            SourceKind::Community => "community",
            SourceKind::Trend => "trend",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    OfficialAlert,
    OutbreakReport,
    TravelerReport,
    SymptomReport,
    CommunityReport,
    SearchSpike,
}

impl SignalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::OfficialAlert => "official_alert",
            SignalType::OutbreakReport => "outbreak_report",
            SignalType::TravelerReport => "traveler_report",
            SignalType::SymptomReport => "symptom_report",
            SignalType::CommunityReport => "community_report",
            SignalType::SearchSpike => "search_spike",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: String,
    pub source: SourceKind,
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    pub disease: String,
    pub category: String,
    pub glyph: String,
    pub severity: u8,
    pub location: Location,
    pub confidence: f64,
    pub summary: String,
    pub url: String,
    pub published_at: String,
    pub observed_at: DateTime<Utc>,
    pub is_traveler: bool,
    pub anomaly: bool,
    pub anomaly_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_score: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl ThreatLevel {
    pub fn from_severity(severity: u8) -> Self {
        match severity {
            8.. => ThreatLevel::Critical,
            6..=7 => ThreatLevel::High,
            4..=5 => ThreatLevel::Moderate,
            _ => ThreatLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Critical => "CRITICAL",
            ThreatLevel::High => "HIGH",
            ThreatLevel::Moderate => "MODERATE",
            ThreatLevel::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub iso_code: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub region: String,
    pub signal_count: usize,
    pub max_severity: u8,
    pub threat_level: ThreatLevel,
    pub diseases: Vec<String>,
    pub sources: Vec<SourceKind>,
    pub has_traveler_signals: bool,
    pub has_anomaly: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOrigin {
    pub city: String,
    pub iata: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDestination {
    pub iata: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRoute {
    pub from: RouteOrigin,
    pub to: RouteDestination,
    pub threat_level: ThreatLevel,
    pub diseases: Vec<String>,
    pub severity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineEntry {
    pub average_weekly: f64,
    pub sample_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub signal_count: usize,
    pub hotspot_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityTiers {
    pub critical: usize,
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub total_signals: usize,
    pub by_source: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
    pub by_severity: SeverityTiers,
    pub by_region: BTreeMap<String, usize>,
    pub countries_affected: usize,
    pub traveler_signals: usize,
    pub anomalies_detected: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub version: String,
    pub scan_timestamp: DateTime<Utc>,
    pub scan_duration_seconds: f64,
    pub signals: Vec<Signal>,
    pub hotspots: Vec<Hotspot>,
    pub flight_routes: Vec<FlightRoute>,
    pub stats: ScanStats,
}

// Raw records as handed over by the source fetchers.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialAlert {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub permalink_slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebResult {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published_age: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub text: String,
    #[serde(default)]
    pub author_handle: String,
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInterest {
    pub keyword: String,
    pub region_label: String,
    pub score: u8,
}

/// Raw records pooled from one or more sources, kept per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBatch {
    #[serde(default)]
    pub official: Vec<OfficialAlert>,
    #[serde(default)]
    pub news: Vec<WebResult>,
    #[serde(default)]
    pub social: Vec<SocialPost>,
    #[serde(default)]
    pub community: Vec<WebResult>,
    #[serde(default)]
    pub trends: Vec<SearchInterest>,
}

impl RawBatch {
    pub fn extend(&mut self, other: RawBatch) {
        self.official.extend(other.official);
        self.news.extend(other.news);
        self.social.extend(other.social);
        self.community.extend(other.community);
        self.trends.extend(other.trends);
    }

    pub fn len(&self) -> usize {
        self.official.len()
            + self.news.len()
            + self.social.len()
            + self.community.len()
            + self.trends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
