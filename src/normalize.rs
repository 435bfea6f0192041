use chrono::{DateTime, Utc};
use reqwest::Url;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::disease;
use crate::geo;
use crate::models::{
    DiseaseMatch, Location, OfficialAlert, RawBatch, SearchInterest, Signal, SignalType,
    SocialPost, SourceKind, WebResult,
};
use crate::traveler;

pub const MAX_SEVERITY: u8 = 10;
const SUMMARY_CHARS: usize = 300;
const SOCIAL_SUMMARY_CHARS: usize = 280;
const OFFICIAL_DESCRIPTION_CHARS: usize = 500;
const OFFICIAL_CONFIDENCE: f64 = 0.95;
const TREND_CONFIDENCE: f64 = 0.50;
const OFFICIAL_PERMALINK_BASE: &str =
    "https://www.who.int/emergencies/disease-outbreak-news/item/";
const TREND_EXPLORE_URL: &str = "https://trends.google.com/trends/explore";

pub fn normalize_batch(batch: &RawBatch, observed_at: DateTime<Utc>) -> Vec<Signal> {
    let mut signals = Vec::new();
    signals.extend(batch.official.iter().filter_map(|r| from_official(r, observed_at)));
    signals.extend(batch.news.iter().filter_map(|r| from_news(r, observed_at)));
    signals.extend(batch.social.iter().filter_map(|r| from_social(r, observed_at)));
    signals.extend(batch.community.iter().filter_map(|r| from_community(r, observed_at)));
    signals.extend(batch.trends.iter().filter_map(|r| from_search_interest(r, observed_at)));

    debug!(
        records = batch.len(),
        signals = signals.len(),
        "Normalized raw records"
    );
    signals
}

pub fn from_official(record: &OfficialAlert, observed_at: DateTime<Utc>) -> Option<Signal> {
    let text = format!(
        "{} {}",
        record.title,
        truncate_chars(&record.description, OFFICIAL_DESCRIPTION_CHARS)
    );
    let location = resolve_location(&text)?;
    let disease = disease::primary(&text).unwrap_or_else(|| placeholder("unknown", 5, "🦠"));
    let cues = Cues::scan(&text);
    let severity = clamp_severity(i32::from(disease.base_severity) + i32::from(cues.death));

    Some(Signal {
        id: content_id(&record.title),
        source: SourceKind::Official,
        signal_type: SignalType::OfficialAlert,
        severity,
        location,
        confidence: OFFICIAL_CONFIDENCE,
        summary: truncate_chars(&record.title, SUMMARY_CHARS),
        url: format!("{OFFICIAL_PERMALINK_BASE}{}", record.permalink_slug),
        published_at: record.published_date.chars().take(10).collect(),
        is_traveler: false,
        ..blank_signal(disease, observed_at)
    })
}

pub fn from_news(record: &WebResult, observed_at: DateTime<Utc>) -> Option<Signal> {
    let text = web_text(record);
    let location = resolve_location(&text)?;
    let disease = disease::primary(&text)?;
    let cues = Cues::scan(&text);
    let traveler = traveler::is_traveler_signal(&text);
    let severity = clamp_severity(
        i32::from(disease.base_severity) + i32::from(cues.outbreak) + i32::from(cues.death),
    );

    Some(Signal {
        id: content_id(&text),
        source: SourceKind::News,
        signal_type: if traveler {
            SignalType::TravelerReport
        } else {
            SignalType::OutbreakReport
        },
        severity,
        location,
        confidence: if traveler { 0.75 } else { 0.70 },
        summary: truncate_chars(&text, SUMMARY_CHARS),
        url: record.url.clone(),
        published_at: record.published_age.clone(),
        is_traveler: traveler,
        ..blank_signal(disease, observed_at)
    })
}

pub fn from_social(record: &SocialPost, observed_at: DateTime<Utc>) -> Option<Signal> {
    let text = record.text.trim();
    let location = resolve_location(text)?;
    let disease = disease::primary(text)?;
    let traveler = traveler::is_traveler_signal(text);
    let severity = clamp_severity(i32::from(disease.base_severity) + i32::from(traveler));
    let url = if record.author_handle.is_empty() {
        String::new()
    } else {
        format!("https://x.com/{}/status/{}", record.author_handle, record.post_id)
    };

    Some(Signal {
        id: content_id(text),
        source: SourceKind::Social,
        signal_type: if traveler {
            SignalType::TravelerReport
        } else {
            SignalType::SymptomReport
        },
        severity,
        location,
        confidence: if traveler { 0.55 } else { 0.45 },
        summary: truncate_chars(text, SOCIAL_SUMMARY_CHARS),
        url,
        published_at: record.created_at.clone(),
        is_traveler: traveler,
        ..blank_signal(disease, observed_at)
    })
}

pub fn from_community(record: &WebResult, observed_at: DateTime<Utc>) -> Option<Signal> {
    let text = web_text(record);
    let location = resolve_location(&text)?;
    let traveler = traveler::is_traveler_signal(&text);
    let disease = match disease::primary(&text) {
        Some(disease) => disease,
        None if traveler => placeholder("unknown illness", 4, "🌡️"),
        None => {
            debug!(text = %truncate_chars(&text, 80), "Community post names no disease");
            return None;
        }
    };
    let severity = clamp_severity(i32::from(disease.base_severity) + i32::from(traveler));

    Some(Signal {
        id: content_id(&text),
        source: SourceKind::Community,
        signal_type: if traveler {
            SignalType::TravelerReport
        } else {
            SignalType::CommunityReport
        },
        severity,
        location,
        confidence: if traveler { 0.50 } else { 0.40 },
        summary: truncate_chars(&text, SUMMARY_CHARS),
        url: record.url.clone(),
        published_at: record.published_age.clone(),
        is_traveler: traveler,
        ..blank_signal(disease, observed_at)
    })
}

pub fn from_search_interest(
    record: &SearchInterest,
    observed_at: DateTime<Utc>,
) -> Option<Signal> {
    let location = resolve_location(&record.region_label)?;
    let score = record.score.min(100);
    let disease = match disease::primary(&record.keyword) {
        Some(disease) => disease,
        None => {
            let Some(token) = record.keyword.split_whitespace().next() else {
                debug!(region = %record.region_label, "Dropping search interest with a blank keyword");
                return None;
            };
            placeholder(token, 0, "📈")
        }
    };
    let url = Url::parse_with_params(TREND_EXPLORE_URL, &[("q", record.keyword.as_str())])
        .map(String::from)
        .unwrap_or_default();

    Some(Signal {
        id: content_id(&format!("{}{}", record.keyword, record.region_label)),
        source: SourceKind::Trend,
        signal_type: SignalType::SearchSpike,
        severity: trend_severity(score),
        location,
        confidence: TREND_CONFIDENCE,
        summary: format!(
            "Search interest for '{}' at {}/100 in {}",
            record.keyword, score, record.region_label
        ),
        url,
        published_at: "last 7 days".to_string(),
        is_traveler: record.keyword.to_lowercase().contains("travel"),
        trend_score: Some(score),
        ..blank_signal(disease, observed_at)
    })
}

/// Severity for a 0-100 interest score: 4 at the floor, one step per quartile.
pub fn trend_severity(score: u8) -> u8 {
    clamp_severity(4 + i32::from(score.min(100)) / 25)
}

pub fn clamp_severity(raw: i32) -> u8 {
    raw.clamp(0, i32::from(MAX_SEVERITY)) as u8
}

pub fn content_id(text: &str) -> String {
    let digest = hex::encode(Sha256::digest(text.as_bytes()));
    digest[..12].to_string()
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

struct Cues {
    outbreak: bool,
    death: bool,
}

impl Cues {
    fn scan(text: &str) -> Self {
        let folded = text.to_lowercase();
        Self {
            outbreak: folded.contains("outbreak"),
            death: folded.contains("death"),
        }
    }
}

fn resolve_location(text: &str) -> Option<Location> {
    let location = geo::resolve(text);
    if location.is_none() {
        debug!(text = %truncate_chars(text, 80), "No location in text");
    }
    location
}

fn web_text(record: &WebResult) -> String {
    format!("{} {}", record.title, record.description)
        .trim()
        .to_string()
}

fn placeholder(name: &str, severity: u8, glyph: &str) -> DiseaseMatch {
    DiseaseMatch {
        name: name.to_string(),
        category: "unknown".to_string(),
        base_severity: severity,
        glyph: glyph.to_string(),
    }
}

/// Fields every constructor shares; callers override the source-specific ones.
fn blank_signal(disease: DiseaseMatch, observed_at: DateTime<Utc>) -> Signal {
    Signal {
        id: String::new(),
        source: SourceKind::Official,
        signal_type: SignalType::OfficialAlert,
        disease: disease.name,
        category: disease.category,
        glyph: disease.glyph,
        severity: disease.base_severity,
        location: Location {
            lat: 0.0,
            lng: 0.0,
            display_name: String::new(),
            country: String::new(),
            iso_code: String::new(),
            region: String::new(),
        },
        confidence: 0.0,
        summary: String::new(),
        url: String::new(),
        published_at: String::new(),
        observed_at,
        is_traveler: false,
        anomaly: false,
        anomaly_factor: None,
        trend_score: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn official_alert_without_disease_uses_placeholder() {
        let record = OfficialAlert {
            title: "Acute illness of unexplained origin - Nigeria".to_string(),
            description: "Lagos state authorities are investigating.".to_string(),
            published_date: "2026-02-03T10:00:00Z".to_string(),
            permalink_slug: "2026-DON600".to_string(),
        };
        let signal = from_official(&record, now()).unwrap();
        assert_eq!(signal.disease, "unknown");
        assert_eq!(signal.severity, 5);
        assert_eq!(signal.location.iso_code, "NG");
        assert_eq!(signal.signal_type, SignalType::OfficialAlert);
        assert_eq!(signal.published_at, "2026-02-03");
        assert!(signal.url.ends_with("2026-DON600"));
        assert!(!signal.is_traveler);
    }

    #[test]
    fn official_alert_death_cue_is_capped() {
        let record = OfficialAlert {
            title: "Ebola virus disease - Kinshasa".to_string(),
            description: "Twelve deaths reported.".to_string(),
            ..OfficialAlert::default()
        };
        let signal = from_official(&record, now()).unwrap();
        assert_eq!(signal.disease, "ebola");
        assert_eq!(signal.severity, 10);
    }

    #[test]
    fn official_alert_without_location_is_dropped() {
        let record = OfficialAlert {
            title: "Ebola virus disease".to_string(),
            ..OfficialAlert::default()
        };
        assert!(from_official(&record, now()).is_none());
    }

    #[test]
    fn news_cues_stack() {
        let record = WebResult {
            title: "Dengue outbreak in Dhaka".to_string(),
            description: "Hospitals report a death toll of 40".to_string(),
            url: "https://news.example/dhaka".to_string(),
            published_age: "2 days ago".to_string(),
        };
        let signal = from_news(&record, now()).unwrap();
        assert_eq!(signal.disease, "dengue");
        assert_eq!(signal.severity, 8);
        assert_eq!(signal.location.iso_code, "BD");
        assert_eq!(signal.published_at, "2 days ago");
    }

    #[test]
    fn news_requires_a_disease() {
        let record = WebResult {
            title: "Flooding in Dhaka".to_string(),
            ..WebResult::default()
        };
        assert!(from_news(&record, now()).is_none());
    }

    #[test]
    fn traveler_news_becomes_traveler_report() {
        let record = WebResult {
            title: "Tourists sick with dengue after holiday in Bali".to_string(),
            ..WebResult::default()
        };
        let signal = from_news(&record, now()).unwrap();
        assert!(signal.is_traveler);
        assert_eq!(signal.signal_type, SignalType::TravelerReport);
    }

    #[test]
    fn social_traveler_bump_and_permalink() {
        let record = SocialPost {
            text: "Got dengue fever after my trip to Bali, now in hospital".to_string(),
            author_handle: "nomad".to_string(),
            post_id: "42".to_string(),
            created_at: "Mon Feb 02".to_string(),
        };
        let signal = from_social(&record, now()).unwrap();
        assert_eq!(signal.signal_type, SignalType::TravelerReport);
        assert_eq!(signal.severity, 7);
        assert_eq!(signal.url, "https://x.com/nomad/status/42");
        assert_eq!(signal.location.iso_code, "ID");
    }

    #[test]
    fn social_post_without_handle_has_no_url() {
        let record = SocialPost {
            text: "measles in Manila schools".to_string(),
            ..SocialPost::default()
        };
        let signal = from_social(&record, now()).unwrap();
        assert_eq!(signal.signal_type, SignalType::SymptomReport);
        assert!(signal.url.is_empty());
    }

    #[test]
    fn community_traveler_post_without_disease_is_kept() {
        let record = WebResult {
            title: "Got sick after my trip to Cusco".to_string(),
            description: "Anyone else?".to_string(),
            ..WebResult::default()
        };
        let signal = from_community(&record, now()).unwrap();
        assert_eq!(signal.disease, "unknown illness");
        assert_eq!(signal.severity, 5);
        assert_eq!(signal.signal_type, SignalType::TravelerReport);
    }

    #[test]
    fn community_post_without_disease_or_travel_is_dropped() {
        let record = WebResult {
            title: "Best street food in Hanoi".to_string(),
            ..WebResult::default()
        };
        assert!(from_community(&record, now()).is_none());
    }

    #[test]
    fn search_interest_uses_keyword_disease() {
        let record = SearchInterest {
            keyword: "malaria travel".to_string(),
            region_label: "Kenya".to_string(),
            score: 80,
        };
        let signal = from_search_interest(&record, now()).unwrap();
        assert_eq!(signal.disease, "malaria");
        assert_eq!(signal.severity, 7);
        assert_eq!(signal.trend_score, Some(80));
        assert!(signal.is_traveler);
        assert_eq!(
            signal.url,
            "https://trends.google.com/trends/explore?q=malaria+travel"
        );
    }

    #[test]
    fn search_interest_falls_back_to_first_token() {
        let record = SearchInterest {
            keyword: "sick after travel".to_string(),
            region_label: "India".to_string(),
            score: 100,
        };
        let signal = from_search_interest(&record, now()).unwrap();
        assert_eq!(signal.disease, "sick");
        assert_eq!(signal.category, "unknown");
        assert_eq!(signal.severity, 8);
    }

    #[test]
    fn search_interest_with_blank_keyword_is_dropped() {
        for keyword in ["", "   "] {
            let record = SearchInterest {
                keyword: keyword.to_string(),
                region_label: "Kenya".to_string(),
                score: 80,
            };
            assert!(from_search_interest(&record, now()).is_none());
        }
    }

    #[test]
    fn trend_severity_is_monotonic_and_bounded() {
        assert_eq!(trend_severity(0), 4);
        assert_eq!(trend_severity(24), 4);
        assert_eq!(trend_severity(25), 5);
        assert_eq!(trend_severity(99), 7);
        assert_eq!(trend_severity(255), 8);
    }

    #[test]
    fn content_ids_are_stable() {
        assert_eq!(content_id("abc"), content_id("abc"));
        assert_ne!(content_id("abc"), content_id("abd"));
        assert_eq!(content_id("abc").len(), 12);
    }

    #[test]
    fn summaries_truncate_on_char_boundaries() {
        let text = "é".repeat(400);
        assert_eq!(truncate_chars(&text, SUMMARY_CHARS).chars().count(), 300);
    }

    #[test]
    fn batch_drops_unresolvable_records() {
        let batch = RawBatch {
            news: vec![
                WebResult {
                    title: "Cholera outbreak in Lagos".to_string(),
                    ..WebResult::default()
                },
                WebResult {
                    title: "Cholera outbreak somewhere".to_string(),
                    ..WebResult::default()
                },
            ],
            ..RawBatch::default()
        };
        let signals = normalize_batch(&batch, now());
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].location.iso_code, "NG");
    }
}
