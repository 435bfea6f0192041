use crate::gazetteer;
use crate::models::{FlightRoute, Hotspot, RouteDestination, RouteOrigin};

pub fn project_routes(hotspots: &[Hotspot]) -> Vec<FlightRoute> {
    let mut routes = Vec::new();

    for hotspot in hotspots {
        for hub in gazetteer::hubs_for(&hotspot.iso_code) {
            for dest_iata in hub.routes {
                let Some(dest) = gazetteer::airport(dest_iata) else {
                    continue;
                };
                routes.push(FlightRoute {
                    from: RouteOrigin {
                        city: hub.city.to_string(),
                        iata: hub.iata.to_string(),
                        lat: hub.lat,
                        lng: hub.lng,
                    },
                    to: RouteDestination {
                        iata: dest.iata.to_string(),
                        lat: dest.lat,
                        lng: dest.lng,
                    },
                    threat_level: hotspot.threat_level,
                    diseases: hotspot.diseases.clone(),
                    severity: hotspot.max_severity,
                });
            }
        }
    }

    routes
}
