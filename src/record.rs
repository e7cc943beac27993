//! Structured plant description produced by the parser.

use serde::{Deserialize, Serialize};

/// Sentinel for fields the model response never populated.
pub const UNAVAILABLE: &str = "No disponible";

/// Care instructions, the `Cuidados:` section of a model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareRecord {
    /// Watering guidance (`Regado:`).
    pub watering: String,
    /// Sunlight guidance (`Luz:`).
    pub sunlight: String,
    /// Soil guidance (`Tierra:`).
    pub soil: String,
}

/// Fully populated plant description.
///
/// Every field is always present: lines the model omitted (or left empty)
/// come back as [`UNAVAILABLE`]. Field names serialize in camelCase to match
/// the shape the UI consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    /// Common name (`Nombre Comun:`).
    pub common_name: String,
    /// Scientific name (`Nombre Cientifico:`).
    pub scientific_name: String,
    /// Brief description (`Descripción:`).
    pub description: String,
    /// Care instructions.
    pub care: CareRecord,
    /// Time to bear fruit (`Tiempo que tarda en dar frutos:`).
    pub fruit_bearing_time: String,
    /// Seed germination time (`Tiempo que tarda en germinar semillas:`).
    pub seed_germination_time: String,
    /// Suitable climate (`Clima adecuado para la planta:`).
    pub suitable_climate: String,
}

impl PlantRecord {
    /// A record with every field set to the sentinel, what parsing an
    /// unusable response yields.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            common_name: UNAVAILABLE.to_owned(),
            scientific_name: UNAVAILABLE.to_owned(),
            description: UNAVAILABLE.to_owned(),
            care: CareRecord {
                watering: UNAVAILABLE.to_owned(),
                sunlight: UNAVAILABLE.to_owned(),
                soil: UNAVAILABLE.to_owned(),
            },
            fruit_bearing_time: UNAVAILABLE.to_owned(),
            seed_germination_time: UNAVAILABLE.to_owned(),
            suitable_climate: UNAVAILABLE.to_owned(),
        }
    }
}
