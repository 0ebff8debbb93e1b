//! Client-side avatar downsizing.
//!
//! Uploaded avatars are decoded, scaled so the largest edge fits
//! [`MAX_AVATAR_DIM`] (never upscaled), and re-encoded as JPEG into a
//! self-contained data URL before the record is posted. When decoding
//! fails the caller falls back to [`raw_data_url`], an unresized inline
//! encoding of the original bytes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::ApiError;

/// Largest edge an uploaded avatar keeps after resizing.
pub const MAX_AVATAR_DIM: u32 = 400;

/// Matches the 0.8 canvas-encoding quality of the original page.
const JPEG_QUALITY: u8 = 80;

/// Decode `bytes`, scale the largest edge down to `max_dim`, and re-encode
/// as an inline JPEG data URL. Images already within bounds keep their
/// dimensions.
pub fn resize_to_data_url(bytes: &[u8], max_dim: u32) -> Result<String, ApiError> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = (img.width(), img.height());

    let largest = width.max(height).max(1);
    let img = if largest > max_dim {
        let scale = max_dim as f64 / largest as f64;
        let w = ((width as f64 * scale).round() as u32).max(1);
        let h = ((height as f64 * scale).round() as u32).max(1);
        img.resize_exact(w, h, FilterType::Triangle)
    } else {
        img
    };

    // JPEG has no alpha channel.
    let rgb = img.to_rgb8();
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;

    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(buf)))
}

/// Unresized inline encoding of the original file, with a MIME type guessed
/// from the filename.
pub fn raw_data_url(bytes: &[u8], filename: &str) -> String {
    format!(
        "data:{};base64,{}",
        mime_from_name(filename),
        BASE64.encode(bytes)
    )
}

fn mime_from_name(name: &str) -> &'static str {
    let ext = name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
