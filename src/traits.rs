//! Capability traits and shared types for camera acquisition and capture.
//!
//! The session state machine in [`crate::session`] only talks to hardware
//! through [`VideoSource`] and [`VideoDevice`], so the lifecycle can be
//! exercised in tests with a mock source instead of a real device.

/// Camera orientation requested by a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Rear (environment-facing) camera.
    Rear,
    /// Front (user-facing) camera.
    Front,
}

/// Acquisition constraints. Matching is exact: if no device satisfies the
/// constraints, acquisition fails rather than falling back to any camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Required camera orientation.
    pub facing: Facing,
}

impl Constraints {
    /// Constraints for the rear-facing camera, the default for plant shots.
    #[must_use]
    pub const fn rear() -> Self {
        Self {
            facing: Facing::Rear,
        }
    }
}

/// Pixel format representation (e.g., YUYV, MJPG).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// Create a new `FourCC` from a 4-byte array.
    #[must_use]
    pub const fn new(code: &[u8; 4]) -> Self {
        Self(*code)
    }

    /// YUYV pixel format (4:2:2 packed), the format frames are read in.
    pub const YUYV: Self = Self::new(b"YUYV");
}

impl From<v4l::FourCC> for FourCC {
    fn from(fourcc: v4l::FourCC) -> Self {
        Self(fourcc.repr)
    }
}

impl From<FourCC> for v4l::FourCC {
    fn from(fourcc: FourCC) -> Self {
        Self::new(&fourcc.0)
    }
}

/// Video format of a live frame source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel format.
    pub fourcc: FourCC,
}

impl Format {
    /// Create a new format specification.
    #[must_use]
    pub const fn new(width: u32, height: u32, fourcc: FourCC) -> Self {
        Self {
            width,
            height,
            fourcc,
        }
    }
}

/// A single live frame at the source's native resolution.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw YUYV frame data (2 bytes per pixel).
    pub data: Vec<u8>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

/// An encoded still image, the output of a successful capture.
///
/// Ownership transfers to the caller; the image keeps no relation to the
/// session that produced it. The same shape carries user-uploaded files on
/// the upload path.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// MIME type of the encoded bytes.
    pub mime: String,
    /// Synthetic file name (`photo.jpg` for camera captures).
    pub file_name: String,
}

impl CapturedImage {
    /// Wrap a user-supplied file buffer for the upload path.
    #[must_use]
    pub fn from_upload(
        bytes: Vec<u8>,
        mime: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            mime: mime.into(),
            file_name: file_name.into(),
        }
    }
}

/// Error type for camera operations.
#[derive(Debug)]
pub enum CameraError {
    /// No device satisfies the requested constraints, or the matching device
    /// could not be opened (missing, busy, permission denied).
    DeviceUnavailable(String),
    /// Capture or frame access was attempted while the session is not active.
    SessionInactive,
    /// Error while reading from the live frame source.
    StreamError(String),
    /// Still-image encoding failed.
    EncodeFailed(String),
    /// I/O error.
    Io(std::io::Error),
}

impl std::fmt::Display for CameraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeviceUnavailable(msg) => write!(f, "Device unavailable: {msg}"),
            Self::SessionInactive => write!(f, "Session is not active"),
            Self::StreamError(msg) => write!(f, "Stream error: {msg}"),
            Self::EncodeFailed(msg) => write!(f, "Encoding failed: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result type for camera operations.
pub type Result<T> = std::result::Result<T, CameraError>;

/// Abstraction over video device acquisition.
pub trait VideoSource {
    /// The device type handed out by `acquire`.
    type Device: VideoDevice;

    /// Acquire a device matching `constraints` exactly.
    ///
    /// Returns [`CameraError::DeviceUnavailable`] when no exact match exists;
    /// implementations must not substitute another camera.
    fn acquire(&mut self, constraints: &Constraints) -> Result<Self::Device>;
}

/// Abstraction over an acquired live frame source.
///
/// The handle is owned exclusively by one [`crate::session::DeviceSession`];
/// dropping it releases the underlying device.
pub trait VideoDevice {
    /// Get the device's current format (native resolution).
    fn format(&self) -> Result<Format>;

    /// Read the current live frame.
    fn read_frame(&mut self) -> Result<Frame>;
}
