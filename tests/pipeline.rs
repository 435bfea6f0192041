use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use outbreak_radar::error::SourceError;
use outbreak_radar::history::{split_baseline_key, Baselines, FileHistoryStore, History};
use outbreak_radar::models::{
    OfficialAlert, RawBatch, SearchInterest, SocialPost, ThreatLevel, WebResult,
};
use outbreak_radar::sources::RecordSource;
use outbreak_radar::{aggregate, run_scan};

struct Fixed(RawBatch);

#[async_trait]
impl RecordSource for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch(&self) -> Result<RawBatch, SourceError> {
        Ok(self.0.clone())
    }
}

struct Unreachable;

#[async_trait]
impl RecordSource for Unreachable {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn fetch(&self) -> Result<RawBatch, SourceError> {
        Err(SourceError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }
}

fn ebola_alert() -> RawBatch {
    RawBatch {
        official: vec![OfficialAlert {
            title: "Ebola virus disease - Kinshasa".to_string(),
            description: "Twelve deaths reported.".to_string(),
            published_date: "2026-02-03T00:00:00Z".to_string(),
            permalink_slug: "2026-DON600".to_string(),
        }],
        ..RawBatch::default()
    }
}

fn ebola_surge() -> RawBatch {
    let mut batch = ebola_alert();
    batch.news.push(WebResult {
        title: "Ebola cases climb in Kinshasa".to_string(),
        description: "Health teams deployed".to_string(),
        url: "https://news.test/ebola".to_string(),
        published_age: "1 day ago".to_string(),
    });
    batch.social.push(SocialPost {
        text: "ebola in kinshasa, clinics overwhelmed".to_string(),
        author_handle: "reporter".to_string(),
        post_id: "42".to_string(),
        created_at: "2026-02-04".to_string(),
    });
    batch
}

#[test]
fn official_alert_becomes_critical_hotspot_with_routes() {
    let mut baselines = Baselines::new();
    let observed_at = Utc.with_ymd_and_hms(2026, 2, 5, 12, 0, 0).unwrap();

    let outcome = aggregate(&ebola_alert(), &mut baselines, observed_at);

    assert_eq!(outcome.signals.len(), 1);
    let signal = &outcome.signals[0];
    assert_eq!(signal.disease, "ebola");
    assert_eq!(signal.severity, 10);
    assert_eq!(signal.confidence, 1.0);
    assert_eq!(signal.location.iso_code, "CD");
    assert!(signal.anomaly);

    assert_eq!(outcome.hotspots.len(), 1);
    assert_eq!(outcome.hotspots[0].threat_level, ThreatLevel::Critical);
    assert!(!outcome.flight_routes.is_empty());
    assert!(outcome.flight_routes.iter().all(|r| r.severity == 10));
    assert_eq!(baselines["CD:ebola"].sample_count, 1);
}

#[test]
fn aggregation_is_deterministic_for_the_same_inputs() {
    let baselines = Baselines::new();
    let observed_at = Utc.with_ymd_and_hms(2026, 2, 5, 12, 0, 0).unwrap();

    let first = aggregate(&ebola_surge(), &mut baselines.clone(), observed_at);
    let second = aggregate(&ebola_surge(), &mut baselines.clone(), observed_at);

    assert_eq!(first, second);
}

#[test]
fn blank_trend_keywords_never_reach_the_baselines() {
    let mut batch = ebola_alert();
    batch.trends = vec![
        SearchInterest {
            keyword: "   ".to_string(),
            region_label: "Kenya".to_string(),
            score: 80,
        },
        SearchInterest {
            keyword: "malaria symptoms".to_string(),
            region_label: "Kenya".to_string(),
            score: 70,
        },
    ];
    let mut baselines = Baselines::new();
    let observed_at = Utc.with_ymd_and_hms(2026, 2, 5, 12, 0, 0).unwrap();

    let outcome = aggregate(&batch, &mut baselines, observed_at);

    assert_eq!(outcome.signals.len(), 2);
    assert!(outcome.signals.iter().all(|s| !s.disease.is_empty()));
    let keys: Vec<&str> = baselines.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["CD:ebola", "KE:malaria"]);
    assert!(keys.iter().all(|key| split_baseline_key(key).is_ok()));
}

#[tokio::test]
async fn failing_source_still_produces_a_persisted_scan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = FileHistoryStore::new(&path);
    let sources: Vec<Box<dyn RecordSource>> =
        vec![Box::new(Unreachable), Box::new(Fixed(ebola_alert()))];

    let report = run_scan(&sources, &store, Duration::from_secs(5)).await;

    assert_eq!(report.version, "2.0");
    assert_eq!(report.stats.total_signals, 1);
    assert_eq!(report.stats.by_severity.critical, 1);

    let history: History = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(history.scans.len(), 1);
    assert_eq!(history.scans[0].signal_count, 1);
    assert_eq!(history.baselines["CD:ebola"].average_weekly, 1.0);
}

#[tokio::test]
async fn surge_against_baseline_is_flagged_as_spike() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path().join("history.json"));

    let quiet: Vec<Box<dyn RecordSource>> = vec![Box::new(Fixed(ebola_alert()))];
    run_scan(&quiet, &store, Duration::from_secs(5)).await;

    let surge: Vec<Box<dyn RecordSource>> = vec![Box::new(Fixed(ebola_surge()))];
    let report = run_scan(&surge, &store, Duration::from_secs(5)).await;

    assert_eq!(report.signals.len(), 3);
    assert!(report.signals.iter().all(|s| s.anomaly));
    assert!(report
        .signals
        .iter()
        .all(|s| s.anomaly_factor == Some(3.0)));
    assert_eq!(report.stats.anomalies_detected, 3);

    let history = store.load().await;
    assert_eq!(history.scans.len(), 2);
    assert_eq!(history.baselines["CD:ebola"].average_weekly, 2.0);
    assert_eq!(history.baselines["CD:ebola"].sample_count, 2);
}
