use std::cmp::Ordering;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::history::{Baselines, EphemeralSession, HistorySession, HistoryStore};
use crate::models::{FlightRoute, Hotspot, RawBatch, ScanRecord, ScanReport, Signal};
use crate::sources::{self, RecordSource};
use crate::{anomaly, confidence, dedup, flight, hotspot, normalize, report};

pub const REPORT_VERSION: &str = "2.0";

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub signals: Vec<Signal>,
    pub hotspots: Vec<Hotspot>,
    pub flight_routes: Vec<FlightRoute>,
    pub anomalies: usize,
}

/// Run the post-fetch pipeline over a pooled batch, folding counts into `baselines`.
pub fn aggregate(
    batch: &RawBatch,
    baselines: &mut Baselines,
    observed_at: DateTime<Utc>,
) -> Aggregation {
    let mut signals = normalize::normalize_batch(batch, observed_at);
    confidence::score_all(&mut signals);

    let before = signals.len();
    let mut signals = dedup::deduplicate(signals);
    info!(before, after = signals.len(), "Deduplicated signals");

    sort_by_priority(&mut signals);

    let anomalies = anomaly::detect(&mut signals, baselines);
    let hotspots = hotspot::aggregate(&signals);
    let flight_routes = flight::project_routes(&hotspots);
    info!(
        anomalies,
        hotspots = hotspots.len(),
        routes = flight_routes.len(),
        "Aggregated signals"
    );

    Aggregation {
        signals,
        hotspots,
        flight_routes,
        anomalies,
    }
}

/// Severity x confidence, descending. Stable, so equal products keep pool order.
pub fn sort_by_priority(signals: &mut [Signal]) {
    signals.sort_by(|a, b| {
        priority(b)
            .partial_cmp(&priority(a))
            .unwrap_or(Ordering::Equal)
    });
}

fn priority(signal: &Signal) -> f64 {
    f64::from(signal.severity) * signal.confidence
}

/// Fetch every source, then aggregate and persist.
pub async fn run_scan(
    sources: &[Box<dyn RecordSource>],
    store: &dyn HistoryStore,
    fetch_timeout: Duration,
) -> ScanReport {
    let started = Instant::now();
    let scan_timestamp = Utc::now();
    info!(sources = sources.len(), "Starting scan");

    let batch = sources::gather(sources, fetch_timeout).await;
    scan_batch(&batch, store, scan_timestamp, started).await
}

/// Aggregate an already-pooled batch inside one history session.
///
/// A store that cannot be opened or committed degrades to an unpersisted history for this
/// scan; the report is still produced.
pub async fn scan_batch(
    batch: &RawBatch,
    store: &dyn HistoryStore,
    scan_timestamp: DateTime<Utc>,
    started: Instant,
) -> ScanReport {
    let mut session: Box<dyn HistorySession + '_> = match store.begin().await {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "History store unavailable, scanning without baselines");
            Box::new(EphemeralSession::new())
        }
    };

    let outcome = aggregate(batch, &mut session.history().baselines, Utc::now());

    session.history().push_scan(ScanRecord {
        id: Uuid::new_v4(),
        timestamp: scan_timestamp,
        signal_count: outcome.signals.len(),
        hotspot_count: outcome.hotspots.len(),
    });
    if let Err(e) = session.commit().await {
        warn!(error = %e, "Failed to persist scan history");
    }

    let stats = report::compute_stats(&outcome.signals, &outcome.hotspots);
    let scan_duration_seconds = (started.elapsed().as_secs_f64() * 10.0).round() / 10.0;
    info!(
        signals = stats.total_signals,
        hotspots = stats.countries_affected,
        routes = outcome.flight_routes.len(),
        duration_secs = scan_duration_seconds,
        "Scan complete"
    );

    ScanReport {
        version: REPORT_VERSION.to_string(),
        scan_timestamp,
        scan_duration_seconds,
        signals: outcome.signals,
        hotspots: outcome.hotspots,
        flight_routes: outcome.flight_routes,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::history::History;
    use crate::models::{BaselineEntry, OfficialAlert, SourceKind};
    use crate::test_support::signal;
    use async_trait::async_trait;

    struct UnreachableStore;

    #[async_trait]
    impl HistoryStore for UnreachableStore {
        async fn begin<'a>(&'a self) -> Result<Box<dyn HistorySession + 'a>, StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "history store offline",
            )))
        }
    }

    struct ReadOnlyStore {
        history: History,
    }

    struct ReadOnlySession {
        history: History,
    }

    #[async_trait]
    impl HistoryStore for ReadOnlyStore {
        async fn begin<'a>(&'a self) -> Result<Box<dyn HistorySession + 'a>, StoreError> {
            Ok(Box::new(ReadOnlySession {
                history: self.history.clone(),
            }))
        }
    }

    #[async_trait]
    impl HistorySession for ReadOnlySession {
        fn history(&mut self) -> &mut History {
            &mut self.history
        }

        async fn commit(self: Box<Self>) -> Result<(), StoreError> {
            Err(StoreError::MalformedKey("read-only".to_string()))
        }
    }

    fn two_alerts() -> RawBatch {
        RawBatch {
            official: vec![
                OfficialAlert {
                    title: "Ebola virus disease - Kinshasa".to_string(),
                    description: "Twelve deaths reported.".to_string(),
                    ..OfficialAlert::default()
                },
                OfficialAlert {
                    title: "Cholera - Lagos".to_string(),
                    ..OfficialAlert::default()
                },
            ],
            ..RawBatch::default()
        }
    }

    #[tokio::test]
    async fn unavailable_store_scans_against_empty_history() {
        let store = UnreachableStore;
        let report = scan_batch(&two_alerts(), &store, Utc::now(), Instant::now()).await;

        assert_eq!(report.version, REPORT_VERSION);
        assert_eq!(report.signals.len(), 2);
        assert_eq!(report.hotspots.len(), 2);
        assert!(!report.flight_routes.is_empty());
        assert!(report
            .signals
            .iter()
            .all(|s| s.anomaly && s.anomaly_factor.is_none()));
        assert_eq!(report.stats.anomalies_detected, 2);
    }

    #[tokio::test]
    async fn failed_commit_still_returns_the_report() {
        let mut history = History::default();
        history.baselines.insert(
            "CD:ebola".to_string(),
            BaselineEntry {
                average_weekly: 1.0,
                sample_count: 4,
            },
        );
        let store = ReadOnlyStore { history };

        let report = scan_batch(&two_alerts(), &store, Utc::now(), Instant::now()).await;

        assert_eq!(report.signals.len(), 2);
        assert_eq!(report.stats.total_signals, 2);
        let ebola = report.signals.iter().find(|s| s.disease == "ebola").unwrap();
        assert!(!ebola.anomaly);
        let cholera = report.signals.iter().find(|s| s.disease == "cholera").unwrap();
        assert!(cholera.anomaly);
        assert_eq!(report.stats.anomalies_detected, 1);
    }

    #[test]
    fn priority_sort_is_descending_and_stable() {
        let mut a = signal("TH", "dengue", SourceKind::News, 6);
        a.confidence = 0.5;
        a.id = "a".to_string();
        let mut b = signal("CD", "ebola", SourceKind::Official, 10);
        b.confidence = 1.0;
        b.id = "b".to_string();
        let mut c = signal("KE", "malaria", SourceKind::News, 3);
        c.confidence = 1.0;
        c.id = "c".to_string();

        let mut signals = vec![a, b, c];
        sort_by_priority(&mut signals);

        let ids: Vec<&str> = signals.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
