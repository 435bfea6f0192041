use std::collections::HashMap;

use tracing::debug;

use crate::history::{baseline_key, Baselines};
use crate::models::{BaselineEntry, Signal};
use crate::normalize::MAX_SEVERITY;

const SPIKE_MULTIPLIER: f64 = 2.0;
const MIN_DIVISOR: f64 = 0.1;

/// Annotate `signals` against `baselines`, then fold this scan's counts into them.
pub fn detect(signals: &mut [Signal], baselines: &mut Baselines) -> usize {
    let counts = current_counts(signals);
    let mut flagged = 0;

    for signal in signals.iter_mut() {
        let key = baseline_key(&signal.location.iso_code, &signal.disease);
        let current = counts.get(&key).copied().unwrap_or(0) as f64;
        let previous = baselines.get(&key).map_or(0.0, |b| b.average_weekly);

        if previous > 0.0 && current > previous * SPIKE_MULTIPLIER {
            signal.anomaly = true;
            signal.anomaly_factor = Some(round1(current / previous.max(MIN_DIVISOR)));
            signal.severity = (signal.severity + 1).min(MAX_SEVERITY);
        } else {
            signal.anomaly = current > 0.0 && previous == 0.0;
            signal.anomaly_factor = None;
        }

        if signal.anomaly {
            flagged += 1;
            debug!(
                key = %key,
                current,
                previous,
                factor = ?signal.anomaly_factor,
                "Anomalous signal"
            );
        }
    }

    update_baselines(baselines, &counts);
    flagged
}

fn current_counts(signals: &[Signal]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for signal in signals {
        *counts
            .entry(baseline_key(&signal.location.iso_code, &signal.disease))
            .or_insert(0) += 1;
    }
    counts
}

/// Incremental mean per observed key. Keys absent from this scan are left as they are.
fn update_baselines(baselines: &mut Baselines, counts: &HashMap<String, usize>) {
    for (key, &count) in counts {
        let count = count as f64;
        baselines
            .entry(key.clone())
            .and_modify(|entry| {
                let n = f64::from(entry.sample_count);
                entry.average_weekly = (entry.average_weekly * n + count) / (n + 1.0);
                entry.sample_count += 1;
            })
            .or_insert(BaselineEntry {
                average_weekly: count,
                sample_count: 1,
            });
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
