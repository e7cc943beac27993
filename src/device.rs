//! V4L2 backend for the capture capability traits, using the v4l crate.

use log::debug;
use v4l::buffer::Type;
use v4l::io::mmap::Stream;
use v4l::io::traits::CaptureStream as V4lCaptureStream;
use v4l::video::Capture;
use v4l::Device;

use crate::traits::{
    CameraError, Constraints, Facing, Format, FourCC, Frame, Result, VideoDevice, VideoSource,
};

/// Video source backed by V4L2 device nodes.
///
/// Facing is mapped to a fixed device index, the way cameras enumerate on
/// the target hardware (the rear module is typically /dev/video0). Matching
/// is exact: when no index is mapped for the requested facing, acquisition
/// fails instead of scanning for a substitute camera.
#[derive(Debug, Clone)]
pub struct V4lSource {
    rear_index: u32,
    front_index: Option<u32>,
}

impl V4lSource {
    /// Create a source with only a rear-facing camera at `rear_index`.
    #[must_use]
    pub const fn new(rear_index: u32) -> Self {
        Self {
            rear_index,
            front_index: None,
        }
    }

    /// Also map a front-facing camera.
    #[must_use]
    pub const fn with_front(mut self, front_index: u32) -> Self {
        self.front_index = Some(front_index);
        self
    }
}

impl VideoSource for V4lSource {
    type Device = V4lCamera;

    fn acquire(&mut self, constraints: &Constraints) -> Result<Self::Device> {
        let index = match constraints.facing {
            Facing::Rear => Some(self.rear_index),
            Facing::Front => self.front_index,
        }
        .ok_or_else(|| {
            CameraError::DeviceUnavailable(format!(
                "no {:?}-facing device is mapped",
                constraints.facing
            ))
        })?;

        V4lCamera::open(index)
    }
}

/// An open V4L2 capture device configured for YUYV frames.
pub struct V4lCamera {
    device: Device,
    format: Format,
}

impl V4lCamera {
    /// Open a V4L2 device by index (e.g., 0 for /dev/video0) and switch it
    /// to YUYV at the driver's current resolution.
    pub fn open(index: u32) -> Result<Self> {
        let device = Device::new(index as usize)
            .map_err(|err| CameraError::DeviceUnavailable(err.to_string()))?;

        let caps = device
            .query_caps()
            .map_err(|err| CameraError::DeviceUnavailable(err.to_string()))?;

        if !caps.capabilities.contains(v4l::capability::Flags::VIDEO_CAPTURE)
            || !caps.capabilities.contains(v4l::capability::Flags::STREAMING)
        {
            return Err(CameraError::DeviceUnavailable(format!(
                "{} cannot stream video capture",
                caps.card
            )));
        }

        let mut fmt = device
            .format()
            .map_err(|err| CameraError::DeviceUnavailable(err.to_string()))?;
        fmt.fourcc = FourCC::YUYV.into();
        let fmt = device
            .set_format(&fmt)
            .map_err(|err| CameraError::DeviceUnavailable(err.to_string()))?;

        if FourCC::from(fmt.fourcc) != FourCC::YUYV {
            return Err(CameraError::DeviceUnavailable(format!(
                "{} does not support YUYV",
                caps.card
            )));
        }

        debug!("opened {} at {}x{}", caps.card, fmt.width, fmt.height);

        Ok(Self {
            device,
            format: Format::new(fmt.width, fmt.height, FourCC::YUYV),
        })
    }
}

impl VideoDevice for V4lCamera {
    fn format(&self) -> Result<Format> {
        Ok(self.format.clone())
    }

    fn read_frame(&mut self) -> Result<Frame> {
        let mut stream = Stream::with_buffers(&self.device, Type::VideoCapture, 2)
            .map_err(|err| CameraError::StreamError(err.to_string()))?;

        let (buf, _meta) = stream
            .next()
            .map_err(|err| CameraError::StreamError(err.to_string()))?;

        Ok(Frame {
            data: buf.to_vec(),
            width: self.format.width,
            height: self.format.height,
        })
    }
}
