//! Single-shot still capture: live frame → RGB raster → encoded JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::session::DeviceSession;
use crate::traits::{CameraError, CapturedImage, Frame, Result, VideoSource};

/// Synthetic name given to every camera capture.
pub const CAPTURE_FILE_NAME: &str = "photo.jpg";

/// MIME type of encoded captures.
pub const CAPTURE_MIME: &str = "image/jpeg";

const JPEG_QUALITY: u8 = 92;

/// Capture one still image from an active session.
///
/// The raster is sized to the live frame's native resolution, never a fixed
/// size, so the still is not distorted. After a successful capture the
/// session is stopped: a session is single-shot from the consumer's
/// perspective, and the device must not stay held once the photo exists.
///
/// Returns [`CameraError::SessionInactive`] when the session holds no
/// device, so a misplaced capture request is reported instead of silently
/// dropped.
pub fn capture<S: VideoSource>(session: &mut DeviceSession<S>) -> Result<CapturedImage> {
    let frame = session.read_frame()?;
    let raster = frame_to_rgb(&frame)?;
    let bytes = encode_jpeg(&raster)?;
    session.stop();

    Ok(CapturedImage {
        bytes,
        mime: CAPTURE_MIME.to_owned(),
        file_name: CAPTURE_FILE_NAME.to_owned(),
    })
}

/// Convert a packed YUYV frame into an RGB raster at native resolution.
fn frame_to_rgb(frame: &Frame) -> Result<RgbImage> {
    let expected = frame.width as usize * frame.height as usize * 2;
    let data = frame.data.get(..expected).ok_or_else(|| {
        CameraError::StreamError(format!(
            "frame truncated: {} bytes, expected {expected}",
            frame.data.len()
        ))
    })?;

    let mut rgb = Vec::with_capacity(frame.width as usize * frame.height as usize * 3);
    // YUYV packs two pixels per 4 bytes, sharing one U/V pair.
    for quad in data.chunks_exact(4) {
        let &[y0, u, y1, v] = quad else { continue };
        let (r, g, b) = yuv_to_rgb(y0, u, v);
        rgb.extend_from_slice(&[r, g, b]);
        let (r, g, b) = yuv_to_rgb(y1, u, v);
        rgb.extend_from_slice(&[r, g, b]);
    }

    RgbImage::from_raw(frame.width, frame.height, rgb)
        .ok_or_else(|| CameraError::EncodeFailed("raster size mismatch".to_owned()))
}

/// Encode an RGB raster as JPEG bytes.
fn encode_jpeg(raster: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    encoder
        .write_image(
            raster.as_raw(),
            raster.width(),
            raster.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|err| CameraError::EncodeFailed(err.to_string()))?;
    Ok(bytes)
}

/// Convert YUV values to RGB.
///
/// Uses the ITU-R BT.601 conversion formula with values clamped to 0-255.
#[allow(clippy::many_single_char_names)]
fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let y_f = f32::from(y);
    let u_f = f32::from(u) - 128.0;
    let v_f = f32::from(v) - 128.0;

    let r = 1.402f32.mul_add(v_f, y_f);
    let g = 0.714_14f32.mul_add(-v_f, 0.344_14f32.mul_add(-u_f, y_f));
    let b = 1.772f32.mul_add(u_f, y_f);

    let clamp = |val: f32| -> u8 {
        if val < 0.0 {
            0
        } else if val > 255.0 {
            255
        } else {
            #[allow(clippy::cast_possible_truncation)]
            #[allow(clippy::cast_sign_loss)]
            {
                val as u8
            }
        }
    };

    (clamp(r), clamp(g), clamp(b))
}
