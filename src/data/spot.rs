//! Static surf spot catalogue for the Portuguese coast
//!
//! Spots run north to south, each with coordinates and the break profile used
//! to score it.

use serde::Serialize;

use super::Location;
use crate::quality::{BreakProfile, BreakType, OptimalTidePhase};

/// Break profile stored in the static catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotProfile {
    pub break_type: BreakType,
    pub facing_direction: &'static str,
    pub optimal_swell_direction: &'static str,
    pub optimal_tide_phase: OptimalTidePhase,
    pub optimal_wind_direction: &'static str,
}

impl SpotProfile {
    const fn new(
        break_type: BreakType,
        facing_direction: &'static str,
        optimal_swell_direction: &'static str,
        optimal_tide_phase: OptimalTidePhase,
        optimal_wind_direction: &'static str,
    ) -> Self {
        Self {
            break_type,
            facing_direction,
            optimal_swell_direction,
            optimal_tide_phase,
            optimal_wind_direction,
        }
    }
}

/// A surf spot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    /// Unique identifier for the spot
    pub id: &'static str,
    /// Human-readable name of the spot
    pub name: &'static str,
    /// Coastal region
    pub region: &'static str,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
    pub profile: SpotProfile,
}

impl Spot {
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }

    /// Owned break profile for the scorer.
    pub fn break_profile(&self) -> BreakProfile {
        BreakProfile {
            break_type: self.profile.break_type,
            facing_direction: self.profile.facing_direction.to_string(),
            optimal_swell_direction: self.profile.optimal_swell_direction.to_string(),
            optimal_tide_phase: self.profile.optimal_tide_phase,
            optimal_wind_direction: self.profile.optimal_wind_direction.to_string(),
        }
    }
}

/// Static array of all catalogued spots
pub static SPOTS: [Spot; 29] = [
    Spot {
        id: "viana-do-castelo",
        name: "Viana do Castelo",
        region: "Minho / Viana",
        latitude: 41.6913,
        longitude: -8.8365,
        profile: SpotProfile::new(BreakType::Beach, "W", "W-NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "vila-praia-de-ancora",
        name: "Vila Praia de Âncora",
        region: "Minho / Viana",
        latitude: 41.8052,
        longitude: -8.8605,
        profile: SpotProfile::new(BreakType::Beach, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "afife",
        name: "Afife",
        region: "Minho / Viana",
        latitude: 41.7669,
        longitude: -8.8665,
        profile: SpotProfile::new(BreakType::Beach, "W", "W-NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "moledo",
        name: "Moledo",
        region: "Minho / Viana",
        latitude: 41.8448,
        longitude: -8.8721,
        profile: SpotProfile::new(BreakType::Beach, "W", "NW", OptimalTidePhase::Low, "E"),
    },
    Spot {
        id: "matosinhos",
        name: "Matosinhos",
        region: "Porto",
        latitude: 41.1831,
        longitude: -8.7017,
        profile: SpotProfile::new(BreakType::Beach, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "espinho",
        name: "Espinho",
        region: "Porto",
        latitude: 40.9987,
        longitude: -8.6440,
        profile: SpotProfile::new(BreakType::Beach, "W", "W-NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "figueira-da-foz",
        name: "Figueira da Foz",
        region: "Centro / Oeste",
        latitude: 40.1508,
        longitude: -8.8609,
        profile: SpotProfile::new(BreakType::Point, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "peniche",
        name: "Peniche",
        region: "Centro / Oeste",
        latitude: 39.3557,
        longitude: -9.3788,
        profile: SpotProfile::new(BreakType::Beach, "W", "W-NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "supertubos",
        name: "Supertubos",
        region: "Centro / Oeste",
        latitude: 39.3441,
        longitude: -9.3885,
        profile: SpotProfile::new(BreakType::Beach, "SW", "SW-W", OptimalTidePhase::Mid, "NE"),
    },
    Spot {
        id: "baleal",
        name: "Baleal",
        region: "Centro / Oeste",
        latitude: 39.3760,
        longitude: -9.3453,
        profile: SpotProfile::new(BreakType::Beach, "N", "NW-N", OptimalTidePhase::Mid, "S"),
    },
    Spot {
        id: "ribeira-dilhas",
        name: "Ribeira d'Ilhas",
        region: "Centro / Oeste",
        latitude: 39.4226,
        longitude: -9.4164,
        profile: SpotProfile::new(BreakType::Point, "W", "NW-W", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "sao-lourenco",
        name: "São Lourenço",
        region: "Centro / Oeste",
        latitude: 39.4450,
        longitude: -9.4215,
        profile: SpotProfile::new(BreakType::Reef, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "nazare",
        name: "Nazaré",
        region: "Centro / Oeste",
        latitude: 39.6029,
        longitude: -9.0700,
        profile: SpotProfile::new(BreakType::Beach, "W", "W-NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "sao-pedro-de-moel",
        name: "São Pedro de Moel",
        region: "Centro / Oeste",
        latitude: 39.7571,
        longitude: -9.0320,
        profile: SpotProfile::new(BreakType::Beach, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "carcavelos",
        name: "Carcavelos",
        region: "Lisboa / Cascais / Estoril",
        latitude: 38.6793,
        longitude: -9.3281,
        profile: SpotProfile::new(BreakType::Beach, "S", "SW-W", OptimalTidePhase::Low, "N"),
    },
    Spot {
        id: "guincho",
        name: "Guincho",
        region: "Lisboa / Cascais / Estoril",
        latitude: 38.7293,
        longitude: -9.4731,
        profile: SpotProfile::new(BreakType::Beach, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "costa-da-caparica",
        name: "Costa da Caparica",
        region: "Lisboa / Cascais / Estoril",
        latitude: 38.6505,
        longitude: -9.2370,
        profile: SpotProfile::new(BreakType::Beach, "W", "W-SW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "sesimbra",
        name: "Sesimbra",
        region: "Lisboa / Cascais / Estoril",
        latitude: 38.4441,
        longitude: -9.1013,
        profile: SpotProfile::new(BreakType::Beach, "S", "SW", OptimalTidePhase::High, "N"),
    },
    Spot {
        id: "portinho-da-arrabida",
        name: "Portinho da Arrábida",
        region: "Lisboa / Cascais / Estoril",
        latitude: 38.4904,
        longitude: -8.9722,
        profile: SpotProfile::new(BreakType::Beach, "S", "SW", OptimalTidePhase::Mid, "N"),
    },
    Spot {
        id: "comporta",
        name: "Comporta",
        region: "Alentejo",
        latitude: 38.3790,
        longitude: -8.7773,
        profile: SpotProfile::new(BreakType::Beach, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "melides",
        name: "Melides",
        region: "Alentejo",
        latitude: 38.2125,
        longitude: -8.7286,
        profile: SpotProfile::new(BreakType::Beach, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "porto-covo",
        name: "Porto Covo",
        region: "Alentejo",
        latitude: 37.8485,
        longitude: -8.7855,
        profile: SpotProfile::new(BreakType::Reef, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "zambujeira-do-mar",
        name: "Zambujeira do Mar",
        region: "Alentejo",
        latitude: 37.5251,
        longitude: -8.7861,
        profile: SpotProfile::new(BreakType::Beach, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "amado",
        name: "Praia do Amado",
        region: "Sagres / Algarve",
        latitude: 37.2082,
        longitude: -8.8131,
        profile: SpotProfile::new(BreakType::Beach, "W", "W-NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "castelejo",
        name: "Praia do Castelejo",
        region: "Sagres / Algarve",
        latitude: 37.1246,
        longitude: -8.8497,
        profile: SpotProfile::new(BreakType::Beach, "W", "NW", OptimalTidePhase::Low, "E"),
    },
    Spot {
        id: "cordoama",
        name: "Praia da Cordoama",
        region: "Sagres / Algarve",
        latitude: 37.1140,
        longitude: -8.8671,
        profile: SpotProfile::new(BreakType::Beach, "W", "NW", OptimalTidePhase::Mid, "E"),
    },
    Spot {
        id: "tonel",
        name: "Praia do Tonel",
        region: "Sagres / Algarve",
        latitude: 37.0077,
        longitude: -8.9409,
        profile: SpotProfile::new(BreakType::Beach, "SW", "W-SW", OptimalTidePhase::Mid, "NE"),
    },
    Spot {
        id: "beliche",
        name: "Praia do Beliche",
        region: "Sagres / Algarve",
        latitude: 37.0215,
        longitude: -8.9558,
        profile: SpotProfile::new(BreakType::Beach, "SW", "W-SW", OptimalTidePhase::Mid, "NE"),
    },
    Spot {
        id: "sagres",
        name: "Sagres",
        region: "Sagres / Algarve",
        latitude: 37.0146,
        longitude: -8.9371,
        profile: SpotProfile::new(BreakType::Point, "S", "SW", OptimalTidePhase::Mid, "N"),
    },
];

/// Get a spot by its ID
///
/// Matching is exact and case sensitive.
///
/// # Example
///
/// ```
/// use swellscore::data::spot::get_spot_by_id;
///
/// if let Some(spot) = get_spot_by_id("supertubos") {
///     println!("Found: {}", spot.name);
/// }
/// ```
pub fn get_spot_by_id(id: &str) -> Option<&'static Spot> {
    SPOTS.iter().find(|spot| spot.id == id)
}

/// Get all catalogued spots, north to south
pub fn all_spots() -> &'static [Spot] {
    &SPOTS
}
