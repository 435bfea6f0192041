use std::fmt::Write;

use crate::models::{Hotspot, ScanReport, ScanStats, Signal, ThreatLevel};

/// Breakdowns of the final signal set.
pub fn compute_stats(signals: &[Signal], hotspots: &[Hotspot]) -> ScanStats {
    let mut stats = ScanStats {
        total_signals: signals.len(),
        countries_affected: hotspots.len(),
        ..ScanStats::default()
    };

    for signal in signals {
        *stats
            .by_source
            .entry(signal.source.as_str().to_string())
            .or_insert(0) += 1;
        *stats.by_category.entry(signal.category.clone()).or_insert(0) += 1;
        *stats
            .by_type
            .entry(signal.signal_type.as_str().to_string())
            .or_insert(0) += 1;
        let region = if signal.location.region.is_empty() {
            "Unknown"
        } else {
            signal.location.region.as_str()
        };
        *stats.by_region.entry(region.to_string()).or_insert(0) += 1;

        match ThreatLevel::from_severity(signal.severity) {
            ThreatLevel::Critical => stats.by_severity.critical += 1,
            ThreatLevel::High => stats.by_severity.high += 1,
            ThreatLevel::Moderate => stats.by_severity.moderate += 1,
            ThreatLevel::Low => stats.by_severity.low += 1,
        }
        if signal.is_traveler {
            stats.traveler_signals += 1;
        }
        if signal.anomaly {
            stats.anomalies_detected += 1;
        }
    }

    stats
}

pub fn render_markdown(report: &ScanReport) -> String {
    let mut output = String::new();
    let stats = &report.stats;

    let _ = writeln!(output, "# Outbreak Radar Scan");
    let _ = writeln!(
        output,
        "Scanned {} in {:.1}s: {} signals, {} hotspots, {} flight routes",
        report.scan_timestamp.format("%Y-%m-%d %H:%M UTC"),
        report.scan_duration_seconds,
        stats.total_signals,
        stats.countries_affected,
        report.flight_routes.len()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Threat Mix");
    let _ = writeln!(
        output,
        "- Critical: {} | High: {} | Moderate: {} | Low: {}",
        stats.by_severity.critical,
        stats.by_severity.high,
        stats.by_severity.moderate,
        stats.by_severity.low
    );
    let _ = writeln!(
        output,
        "- Traveler signals: {} | Anomalies: {}",
        stats.traveler_signals, stats.anomalies_detected
    );
    if !stats.by_source.is_empty() {
        let sources: Vec<String> = stats
            .by_source
            .iter()
            .map(|(source, count)| format!("{source} ({count})"))
            .collect();
        let _ = writeln!(output, "- Sources: {}", sources.join(", "));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Hotspots");

    if report.hotspots.is_empty() {
        let _ = writeln!(output, "No hotspots in this scan.");
    } else {
        for hotspot in report.hotspots.iter().take(10) {
            let mut flags = Vec::new();
            if hotspot.has_anomaly {
                flags.push("anomaly");
            }
            if hotspot.has_traveler_signals {
                flags.push("travelers");
            }
            let _ = writeln!(
                output,
                "- {} {} ({}): max severity {} across {} signals [{}]{}",
                hotspot.threat_level.as_str(),
                hotspot.country,
                hotspot.iso_code,
                hotspot.max_severity,
                hotspot.signal_count,
                hotspot.diseases.join(", "),
                if flags.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", flags.join(", "))
                }
            );
        }
    }

    let anomalies: Vec<&Signal> = report.signals.iter().filter(|s| s.anomaly).collect();
    let _ = writeln!(output);
    let _ = writeln!(output, "## Anomalies");

    if anomalies.is_empty() {
        let _ = writeln!(output, "No anomalies against the baseline.");
    } else {
        for signal in anomalies.iter().take(10) {
            let factor = signal
                .anomaly_factor
                .map(|f| format!("x{f:.1}"))
                .unwrap_or_else(|| "new".to_string());
            let _ = writeln!(
                output,
                "- {} {} in {} ({}): {}",
                signal.glyph, signal.disease, signal.location.display_name, factor, signal.summary
            );
        }
    }

    output
}
