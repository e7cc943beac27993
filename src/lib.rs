//! GreenTale core: plant identification building blocks.
//!
//! Two pieces carry the real invariants. The field extraction parser turns
//! the loosely formatted text an image-understanding model returns into a
//! fully populated [`PlantRecord`], and never fails. The camera session
//! acquires a rear-facing video device, hands out one JPEG still, and
//! guarantees the device is released on capture, stop, or drop.
//!
//! Hardware access sits behind the capability traits in [`traits`], so the
//! session lifecycle is testable with the mock source instead of a camera.

pub mod capture;
pub mod device;
pub mod identify;
pub mod parse;
pub mod record;
pub mod session;
pub mod traits;

#[cfg(test)]
pub mod mock;

pub use capture::capture;
pub use device::{V4lCamera, V4lSource};
pub use identify::{Identifier, IdentifyError, PlantModel, IDENTIFY_PROMPT};
pub use parse::parse;
pub use record::{CareRecord, PlantRecord, UNAVAILABLE};
pub use session::{DeviceSession, SessionState};
pub use traits::{
    CameraError, CapturedImage, Constraints, Facing, Format, FourCC, Frame, VideoDevice,
    VideoSource,
};
