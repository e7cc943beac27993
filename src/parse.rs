//! Field extraction from free-form model text.
//!
//! The image-understanding model is asked for a fixed list of labeled lines
//! but answers in loosely formatted prose: extra whitespace, `-` separators,
//! reordered or missing sections. [`parse`] runs a single left-to-right scan
//! over the lines with one piece of state, the current [`Section`], and is
//! total: any input, including an empty string or garbage, yields a fully
//! populated [`PlantRecord`].

use crate::record::{CareRecord, PlantRecord, UNAVAILABLE};

const COMMON_NAME: &str = "Nombre Comun:";
const SCIENTIFIC_NAME: &str = "Nombre Cientifico:";
const DESCRIPTION: &str = "Descripción:";
const CARE_HEADER: &str = "Cuidados:";
const FRUIT_TIME: &str = "Tiempo que tarda en dar frutos:";
const GERMINATION_TIME: &str = "Tiempo que tarda en germinar semillas:";
const CLIMATE: &str = "Clima adecuado para la planta:";
const WATERING: &str = "Regado:";
const SUNLIGHT: &str = "Luz:";
const SOIL: &str = "Tierra:";

/// Parser section state.
///
/// Entering `Care` is sticky: the section never closes, so a `Regado:` line
/// anywhere below a `Cuidados:` header is captured even when unrelated lines
/// sit in between. A `Regado:` line above the header is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Care,
}

/// Working state for a scan; fields stay `None` until a label assigns them.
#[derive(Debug, Default)]
struct Draft {
    common_name: Option<String>,
    scientific_name: Option<String>,
    description: Option<String>,
    watering: Option<String>,
    sunlight: Option<String>,
    soil: Option<String>,
    fruit_bearing_time: Option<String>,
    seed_germination_time: Option<String>,
    suitable_climate: Option<String>,
}

/// Parse a raw model response into a [`PlantRecord`].
///
/// Never fails: unknown lines are skipped, missing or empty fields fall back
/// to [`UNAVAILABLE`], and a repeated label overwrites the earlier value.
#[must_use]
pub fn parse(text: &str) -> PlantRecord {
    let mut draft = Draft::default();
    let mut section = Section::None;

    for line in text.lines() {
        if let Some(value) = value_after(line, COMMON_NAME) {
            draft.common_name = Some(value);
        } else if let Some(value) = value_after(line, SCIENTIFIC_NAME) {
            draft.scientific_name = Some(value);
        } else if let Some(value) = value_after(line, DESCRIPTION) {
            draft.description = Some(value);
        } else if line.starts_with(CARE_HEADER) {
            section = Section::Care;
        } else if let Some(value) = value_after(line, FRUIT_TIME) {
            draft.fruit_bearing_time = Some(value);
        } else if let Some(value) = value_after(line, GERMINATION_TIME) {
            draft.seed_germination_time = Some(value);
        } else if let Some(value) = value_after(line, CLIMATE) {
            draft.suitable_climate = Some(value);
        } else if section == Section::Care {
            if let Some(value) = value_after(line, WATERING) {
                draft.watering = Some(value);
            } else if let Some(value) = value_after(line, SUNLIGHT) {
                draft.sunlight = Some(value);
            } else if let Some(value) = value_after(line, SOIL) {
                draft.soil = Some(value);
            }
        }
    }

    PlantRecord {
        common_name: finish(draft.common_name),
        scientific_name: finish(draft.scientific_name),
        description: finish(draft.description),
        care: CareRecord {
            watering: finish(draft.watering),
            sunlight: finish(draft.sunlight),
            soil: finish(draft.soil),
        },
        fruit_bearing_time: finish(draft.fruit_bearing_time),
        seed_germination_time: finish(draft.seed_germination_time),
        suitable_climate: finish(draft.suitable_climate),
    }
}

/// Extract the trimmed value of a labeled line, or `None` if the line does
/// not start with `label`.
///
/// Every label ends with its only colon, so stripping the label splits the
/// line at the first colon only; colons inside the value survive intact.
fn value_after(line: &str, label: &str) -> Option<String> {
    line.strip_prefix(label).map(|rest| rest.trim().to_owned())
}

/// An unassigned or empty field becomes the sentinel.
fn finish(value: Option<String>) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => UNAVAILABLE.to_owned(),
    }
}
