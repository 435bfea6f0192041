use crate::gazetteer::{GeoEntry, GAZETTEER};
use crate::models::Location;

/// First gazetteer entry with an alias inside `text`.
pub fn resolve(text: &str) -> Option<Location> {
    let folded = text.to_lowercase();
    GAZETTEER
        .iter()
        .find(|entry| entry.keys.iter().any(|key| folded.contains(key)))
        .map(to_location)
}

fn to_location(entry: &GeoEntry) -> Location {
    Location {
        lat: entry.lat,
        lng: entry.lng,
        display_name: entry.name.to_string(),
        country: entry.country.to_string(),
        iso_code: entry.iso.to_string(),
        region: entry.region.to_string(),
    }
}
