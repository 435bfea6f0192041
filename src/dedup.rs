//! Greedy collapse of same-country, same-disease, same-source signals.

use std::collections::HashMap;

use crate::models::{Signal, SourceKind};

type DedupKey = (String, String, SourceKind);

fn dedup_key(signal: &Signal) -> DedupKey {
    (
        signal.location.iso_code.clone(),
        signal.disease.clone(),
        signal.source,
    )
}

/// Keep one representative per `(iso, disease, source)`.
///
/// A later signal displaces the held one only with strictly higher severity or strictly
/// higher confidence, and then takes the tail position of the output. Nothing is merged.
pub fn deduplicate(signals: Vec<Signal>) -> Vec<Signal> {
    let mut slots: Vec<Option<Signal>> = Vec::with_capacity(signals.len());
    let mut held: HashMap<DedupKey, usize> = HashMap::new();

    for signal in signals {
        let key = dedup_key(&signal);
        match held.get(&key).copied() {
            Some(index) => {
                let replaces = slots[index].as_ref().is_some_and(|existing| {
                    signal.severity > existing.severity || signal.confidence > existing.confidence
                });
                if replaces {
                    slots[index] = None;
                    held.insert(key, slots.len());
                    slots.push(Some(signal));
                }
            }
            None => {
                held.insert(key, slots.len());
                slots.push(Some(signal));
            }
        }
    }

    slots.into_iter().flatten().collect()
}
