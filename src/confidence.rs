use crate::models::{Signal, SignalType, SourceKind};

pub fn base_confidence(source: SourceKind) -> f64 {
    match source {
        SourceKind::Official => 0.95,
        SourceKind::News => 0.70,
        SourceKind::Social => 0.45,
        SourceKind::Community => 0.40,
        SourceKind::Trend => 0.50,
    }
}

pub fn score(signal: &Signal) -> f64 {
    let summary = signal.summary.to_lowercase();
    let mut confidence = base_confidence(signal.source);

    if signal.is_traveler {
        confidence += 0.10;
    }
    if signal.signal_type == SignalType::OfficialAlert {
        confidence += 0.10;
    }
    if summary.contains("outbreak") {
        confidence += 0.05;
    }
    if summary.contains("death") {
        confidence += 0.05;
    }

    round2(confidence.min(1.0))
}

/// Rescore every signal in place. Must run before dedup, which compares confidences.
pub fn score_all(signals: &mut [Signal]) {
    for signal in signals.iter_mut() {
        signal.confidence = score(signal);
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
