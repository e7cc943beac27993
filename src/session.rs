//! Camera device session: acquisition, single ownership, guaranteed release.

use log::{debug, warn};

use crate::traits::{CameraError, Constraints, Frame, Result, VideoDevice, VideoSource};

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No device held.
    Idle,
    /// Acquisition in flight.
    Starting,
    /// Device held, live frames available.
    Active,
}

/// Owner of at most one acquired video device.
///
/// The session is the only owner of the device handle: [`start`](Self::start)
/// while already active is a guarded no-op, so a second handle can never be
/// acquired, and [`stop`](Self::stop) is idempotent from any state. Dropping
/// the session releases the device even if the consumer never captured.
pub struct DeviceSession<S: VideoSource> {
    source: S,
    constraints: Constraints,
    state: SessionState,
    device: Option<S::Device>,
    last_frame_size: Option<(u32, u32)>,
}

impl<S: VideoSource> DeviceSession<S> {
    /// Create an idle session over `source` with fixed constraints.
    pub fn new(source: S, constraints: Constraints) -> Self {
        Self {
            source,
            constraints,
            state: SessionState::Idle,
            device: None,
            last_frame_size: None,
        }
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a device is currently held.
    pub const fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active)
    }

    /// Dimensions of the last frame read, if any.
    pub const fn last_frame_size(&self) -> Option<(u32, u32)> {
        self.last_frame_size
    }

    /// Acquire the device and transition to `Active`.
    ///
    /// Only acts from `Idle`; calling while `Starting` or `Active` is a
    /// no-op (the state guard is what prevents leaking a second handle).
    /// On acquisition failure the session returns to `Idle` and the error is
    /// surfaced as a retryable, non-fatal condition.
    pub fn start(&mut self) -> Result<()> {
        if self.state != SessionState::Idle {
            debug!("start ignored: session already {:?}", self.state);
            return Ok(());
        }

        self.state = SessionState::Starting;
        match self.source.acquire(&self.constraints) {
            Ok(device) => {
                if let Ok(format) = device.format() {
                    debug!(
                        "camera session active at {}x{}",
                        format.width, format.height
                    );
                }
                self.device = Some(device);
                self.state = SessionState::Active;
                Ok(())
            }
            Err(err) => {
                self.state = SessionState::Idle;
                warn!("camera acquisition failed: {err}");
                Err(err)
            }
        }
    }

    /// Release the device and return to `Idle`.
    ///
    /// Allowed from any state and idempotent; a no-op when already idle.
    pub fn stop(&mut self) {
        if self.device.take().is_some() {
            debug!("camera device released");
        }
        self.state = SessionState::Idle;
    }

    /// Read the current live frame. Only valid while `Active`.
    pub fn read_frame(&mut self) -> Result<Frame> {
        let device = match self.device.as_mut() {
            Some(device) if self.state == SessionState::Active => device,
            _ => return Err(CameraError::SessionInactive),
        };

        let frame = device.read_frame()?;
        self.last_frame_size = Some((frame.width, frame.height));
        Ok(frame)
    }
}

impl<S: VideoSource> Drop for DeviceSession<S> {
    // Release-on-teardown: an abandoned session must not leak the device,
    // even when acquisition finished after the consumer lost interest.
    fn drop(&mut self) {
        self.stop();
    }
}
