//! Coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate pair. Immutable value type with no identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points in kilometers (Haversine).
///
/// Pure and total; non-finite inputs produce NaN, which callers must
/// guard against.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Look up coordinates for a known city. Names are matched lowercase.
///
/// Covers the cities the rate drill-down tables reference; unknown names
/// return `None` and callers degrade to an empty result.
pub fn city_coordinates(name: &str) -> Option<Coordinates> {
    let (lat, lon) = match name.to_lowercase().trim() {
        // Punjab
        "amritsar" => (31.634, 74.8723),
        "ludhiana" => (30.901, 75.8573),
        "jalandhar" => (31.326, 75.5762),
        "patiala" => (30.3398, 76.3869),
        "bathinda" => (30.211, 74.9455),
        // Haryana
        "gurgaon" => (28.4595, 77.0266),
        "faridabad" => (28.4089, 77.3178),
        "panipat" => (29.3909, 76.9635),
        "ambala" => (30.3782, 76.7767),
        "karnal" => (29.6857, 76.9905),
        // Uttar Pradesh
        "lucknow" => (26.8467, 80.9462),
        "kanpur" => (26.4499, 80.3319),
        "agra" => (27.1767, 78.0081),
        "varanasi" => (25.3176, 82.9739),
        "meerut" => (28.9845, 77.7064),
        // Rajasthan
        "jaipur" => (26.9124, 75.7873),
        "jodhpur" => (26.2389, 73.0243),
        "udaipur" => (24.5854, 73.7125),
        "kota" => (25.2138, 75.8648),
        "bikaner" => (28.0229, 73.3119),
        // Gujarat
        "ahmedabad" => (23.0225, 72.5714),
        "surat" => (21.1702, 72.8311),
        "vadodara" => (22.3072, 73.1812),
        "rajkot" => (22.3039, 70.8022),
        "bhavnagar" => (21.7645, 72.1519),
        // Maharashtra
        "mumbai" => (19.076, 72.8777),
        "pune" => (18.5204, 73.8567),
        "nagpur" => (21.1458, 79.0882),
        "nashik" => (19.9975, 73.7898),
        "aurangabad" => (19.8762, 75.3433),
        _ => return None,
    };
    Some(Coordinates::new(lat, lon))
}
