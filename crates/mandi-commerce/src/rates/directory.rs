//! Static region directory: states, cities, and mandis.
//!
//! Real mandi entries carry a backing market code used to fetch live
//! listings. Cities with no curated entry get synthesized placeholder
//! names so the drill-down never dead-ends; those render a "coming soon"
//! state instead of live rates.

use serde::{Deserialize, Serialize};

/// States offered at the top of the drill-down.
pub const INDIAN_STATES: [&str; 16] = [
    "Punjab",
    "Haryana",
    "Uttar Pradesh",
    "Rajasthan",
    "Gujarat",
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
    "Andhra Pradesh",
    "Telangana",
    "West Bengal",
    "Bihar",
    "Odisha",
    "Madhya Pradesh",
    "Chhattisgarh",
    "Jharkhand",
];

/// Cities for a state. Unknown states yield an empty list, never an error.
pub fn cities_in(state: &str) -> &'static [&'static str] {
    match state {
        "Punjab" => &["Amritsar", "Ludhiana", "Jalandhar", "Patiala", "Bathinda"],
        "Haryana" => &["Gurgaon", "Faridabad", "Panipat", "Ambala", "Karnal"],
        "Uttar Pradesh" => &["Lucknow", "Kanpur", "Agra", "Varanasi", "Meerut"],
        "Rajasthan" => &["Jaipur", "Jodhpur", "Udaipur", "Kota", "Bikaner"],
        "Gujarat" => &["Ahmedabad", "Surat", "Vadodara", "Rajkot", "Bhavnagar"],
        "Maharashtra" => &["Mumbai", "Pune", "Nagpur", "Nashik", "Aurangabad"],
        _ => &[],
    }
}

/// A mandi under a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandiInfo {
    /// Display name.
    pub name: String,
    /// Backing market code for live rate fetches; `None` for synthesized
    /// placeholder entries.
    pub market_code: Option<String>,
}

impl MandiInfo {
    fn real(name: &str, market_code: &str) -> Self {
        Self {
            name: name.to_string(),
            market_code: Some(market_code.to_string()),
        }
    }

    fn placeholder(name: String) -> Self {
        Self {
            name,
            market_code: None,
        }
    }

    /// Whether this mandi has a live data source behind it.
    pub fn has_live_data(&self) -> bool {
        self.market_code.is_some()
    }
}

/// Mandis for a city. Curated entries when available, else a synthesized
/// placeholder list so every city is navigable.
pub fn mandis_in(city: &str) -> Vec<MandiInfo> {
    match city {
        "Amritsar" => vec![
            MandiInfo::real("Amritsar Main Mandi", "PB-ASR-01"),
            MandiInfo::real("Beas Agricultural Market", "PB-ASR-02"),
            MandiInfo::real("Tarn Taran Wholesale Market", "PB-ASR-03"),
        ],
        "Ludhiana" => vec![
            MandiInfo::real("Ludhiana Grain Market", "PB-LDH-01"),
            MandiInfo::real("Khanna Mandi", "PB-LDH-02"),
            MandiInfo::real("Samrala Agricultural Market", "PB-LDH-03"),
        ],
        "Jalandhar" => vec![
            MandiInfo::real("Jalandhar Central Mandi", "PB-JAL-01"),
            MandiInfo::real("Phagwara Market", "PB-JAL-02"),
            MandiInfo::real("Nakodar Agricultural Market", "PB-JAL-03"),
        ],
        "Jodhpur" => vec![
            MandiInfo::real("Jodhpur Main Mandi", "RJ-JDH-01"),
            MandiInfo::real("Jodhpur Vegetable Market", "RJ-JDH-02"),
            MandiInfo::real("Jodhpur Wholesale Market", "RJ-JDH-03"),
        ],
        "Gurgaon" => vec![
            MandiInfo::real("Gurgaon Wholesale Market", "HR-GGN-01"),
            MandiInfo::real("Sector 14 Mandi", "HR-GGN-02"),
            MandiInfo::real("IMT Manesar Market", "HR-GGN-03"),
        ],
        "Faridabad" => vec![
            MandiInfo::real("Faridabad Main Mandi", "HR-FBD-01"),
            MandiInfo::real("Ballabhgarh Market", "HR-FBD-02"),
            MandiInfo::real("NIT Faridabad Market", "HR-FBD-03"),
        ],
        _ => vec![
            MandiInfo::placeholder(format!("{city} Main Mandi")),
            MandiInfo::placeholder(format!("{city} Vegetable Market")),
            MandiInfo::placeholder(format!("{city} Wholesale Market")),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_catalog_size() {
        assert_eq!(INDIAN_STATES.len(), 16);
    }

    #[test]
    fn test_unknown_state_has_no_cities() {
        assert!(cities_in("Narnia").is_empty());
        assert_eq!(cities_in("Punjab").len(), 5);
    }

    #[test]
    fn test_curated_mandis_have_codes() {
        let mandis = mandis_in("Amritsar");
        assert_eq!(mandis.len(), 3);
        assert!(mandis.iter().all(|m| m.has_live_data()));
    }

    #[test]
    fn test_uncurated_city_gets_placeholders() {
        let mandis = mandis_in("Patiala");
        assert_eq!(mandis.len(), 3);
        assert!(mandis.iter().all(|m| !m.has_live_data()));
        assert_eq!(mandis[0].name, "Patiala Main Mandi");
    }
}
