//! Identify orchestration: image in, model call, parsed record out.
//!
//! The network transport to the model endpoint lives behind [`PlantModel`];
//! this crate only owns the prompt, the sequencing, and the parse step.

use crate::parse::parse;
use crate::record::PlantRecord;
use crate::traits::CapturedImage;

/// Instruction text sent to the model along with the image. The parser's
/// label vocabulary matches the lines this prompt asks for.
pub const IDENTIFY_PROMPT: &str = "\
Identify this plant and provide the following information in spanish with no other format than listing the following information:
Nombre Comun: Common name
Nombre Cientifico: Scientific name
-
Descripción: Brief description
-
Cuidados: Care instructions (Regado: watering, Luz: sunlight, Tierra: soil)
-
Tiempo que tarda en dar frutos: Time to bear fruit o Fruit-bearing time.
Tiempo que tarda en germinar semillas: Seed germination time or Time for seed germination.
Clima adecuado para la planta: Suitable climate for the plant or Optimal climate conditions for the plant.
";

/// Error type for identification.
#[derive(Debug)]
pub enum IdentifyError {
    /// The model call failed (transport, quota, rejected input).
    Model(String),
}

impl std::fmt::Display for IdentifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model(msg) => write!(f, "Model request failed: {msg}"),
        }
    }
}

impl std::error::Error for IdentifyError {}

/// Result type for identification.
pub type Result<T> = std::result::Result<T, IdentifyError>;

/// Seam to the external image-understanding model.
pub trait PlantModel {
    /// Ask the model for a plant description of `image`, following `prompt`.
    fn describe(&self, image: &CapturedImage, prompt: &str) -> Result<String>;
}

/// Sequences one identification: model call, then field extraction.
#[derive(Debug)]
pub struct Identifier<M> {
    model: M,
}

impl<M: PlantModel> Identifier<M> {
    /// Create an identifier over `model`.
    pub const fn new(model: M) -> Self {
        Self { model }
    }

    /// Identify the plant in `image`.
    ///
    /// Only the model call can fail; whatever text comes back, parsing is
    /// total and yields a fully populated record.
    pub fn identify(&self, image: &CapturedImage) -> Result<PlantRecord> {
        let text = self.model.describe(image, IDENTIFY_PROMPT)?;
        Ok(parse(&text))
    }
}
