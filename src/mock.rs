//! Mock video source for testing the session lifecycle without hardware.

use std::cell::Cell;
use std::rc::Rc;

use crate::traits::{
    CameraError, Constraints, Facing, Format, FourCC, Frame, Result, VideoDevice, VideoSource,
};

/// Shared acquisition/release counters, for asserting that a session never
/// holds two handles and never leaks one.
#[derive(Debug, Clone, Default)]
pub struct HandleTracker {
    acquired: Rc<Cell<u32>>,
    released: Rc<Cell<u32>>,
}

impl HandleTracker {
    /// Total handles ever acquired.
    #[must_use]
    pub fn acquired(&self) -> u32 {
        self.acquired.get()
    }

    /// Handles currently held (acquired minus released).
    #[must_use]
    pub fn live_handles(&self) -> u32 {
        self.acquired.get() - self.released.get()
    }
}

/// Mock source producing gradient-pattern YUYV devices.
#[derive(Debug)]
pub struct MockSource {
    tracker: HandleTracker,
    width: u32,
    height: u32,
    facings: Vec<Facing>,
    fail_next: bool,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create a mock source with a rear and a front camera at 640x480.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: HandleTracker::default(),
            width: 640,
            height: 480,
            facings: vec![Facing::Rear, Facing::Front],
            fail_next: false,
        }
    }

    /// Set the native resolution of acquired devices.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Only offer a rear-facing camera.
    #[must_use]
    pub fn rear_only(mut self) -> Self {
        self.facings = vec![Facing::Rear];
        self
    }

    /// Make the next acquisition fail (hardware busy, permission denied).
    #[must_use]
    pub const fn fail_next_acquire(mut self) -> Self {
        self.fail_next = true;
        self
    }

    /// Handle to the acquisition counters.
    #[must_use]
    pub fn tracker(&self) -> HandleTracker {
        self.tracker.clone()
    }
}

impl VideoSource for MockSource {
    type Device = MockDevice;

    fn acquire(&mut self, constraints: &Constraints) -> Result<Self::Device> {
        if self.fail_next {
            self.fail_next = false;
            return Err(CameraError::DeviceUnavailable(
                "mock device is busy".to_owned(),
            ));
        }
        if !self.facings.contains(&constraints.facing) {
            return Err(CameraError::DeviceUnavailable(format!(
                "no {:?}-facing device",
                constraints.facing
            )));
        }

        self.tracker.acquired.set(self.tracker.acquired.get() + 1);
        Ok(MockDevice {
            tracker: self.tracker.clone(),
            format: Format::new(self.width, self.height, FourCC::YUYV),
            frame_count: 0,
        })
    }
}

/// Mock device generating a horizontal gradient test pattern.
#[derive(Debug)]
pub struct MockDevice {
    tracker: HandleTracker,
    format: Format,
    frame_count: u32,
}

impl VideoDevice for MockDevice {
    fn format(&self) -> Result<Format> {
        Ok(self.format.clone())
    }

    fn read_frame(&mut self) -> Result<Frame> {
        self.frame_count += 1;
        Ok(Frame {
            data: generate_gradient(self.format.width, self.format.height),
            width: self.format.width,
            height: self.format.height,
        })
    }
}

impl Drop for MockDevice {
    fn drop(&mut self) {
        self.tracker.released.set(self.tracker.released.get() + 1);
    }
}

/// Generate a YUYV frame with a left-to-right luminance gradient.
fn generate_gradient(width: u32, height: u32) -> Vec<u8> {
    let size = (width * height * 2) as usize;
    let mut data = vec![0u8; size];

    for y in 0..height {
        for x in (0..width).step_by(2) {
            #[allow(clippy::cast_possible_truncation)]
            let y_val = ((x * 255) / width.max(1)) as u8;
            let offset = ((y * width + x) * 2) as usize;

            if let Some(quad) = data.get_mut(offset..offset + 4) {
                quad.copy_from_slice(&[y_val, 128, y_val, 128]);
            }
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_acquire_and_release() {
        let mut source = MockSource::new();
        let tracker = source.tracker();

        let device = source
            .acquire(&Constraints::rear())
            .expect("acquire should succeed");
        assert_eq!(tracker.live_handles(), 1);

        drop(device);
        assert_eq!(tracker.acquired(), 1);
        assert_eq!(tracker.live_handles(), 0);
    }

    #[test]
    fn test_mock_gradient_frame() {
        let mut source = MockSource::new().with_size(64, 32);
        let mut device = source
            .acquire(&Constraints::rear())
            .expect("acquire should succeed");

        let frame = device.read_frame().expect("read should succeed");
        assert_eq!(frame.data.len(), 64 * 32 * 2);

        // Left edge dark, right edge bright.
        assert!(frame.data.first().is_some_and(|y| *y < 10));
        assert!(frame.data.get(62 * 2).is_some_and(|y| *y > 200));
    }

    #[test]
    fn test_mock_exact_facing_match() {
        let mut source = MockSource::new().rear_only();
        let err = source
            .acquire(&Constraints {
                facing: Facing::Front,
            })
            .expect_err("front camera should not exist");
        assert!(matches!(err, CameraError::DeviceUnavailable(_)));
    }
}
