//! Receipt image normalizer: downscale and re-encode before upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uploaded receipt photos routinely come straight off a phone camera at
//! several megabytes. The submission POST carries the image inline as
//! base64, so the page rescales the photo to a bounded size and re-encodes
//! it as JPEG before the payload is assembled.
//!
//! The scaling math lives in [`scaled_dimensions`] so it can be tested
//! natively; the decode/draw/encode path needs a browser and only compiles
//! under `hydrate`.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

#[cfg(feature = "hydrate")]
use crate::error::ImageError;
#[cfg(feature = "hydrate")]
use crate::net::types::FilePayload;

/// Longest edge allowed for an uploaded receipt image, in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 1200;

/// JPEG encoder quality on the 0.0-1.0 scale.
pub const JPEG_QUALITY: f64 = 0.7;

/// MIME type of every normalized payload.
pub const JPEG_MIME: &str = "image/jpeg";

/// Compute the output dimensions for a source image.
///
/// Landscape images wider than `max` clamp the width and scale the height;
/// otherwise any image taller than `max` clamps the height and scales the
/// width. Images already within bounds keep their exact dimensions; the
/// normalizer never upscales, though it always re-encodes.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scaled_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width > height && width > max {
        let scaled = (f64::from(height) * f64::from(max) / f64::from(width)).round() as u32;
        (max, scaled)
    } else if height > max {
        let scaled = (f64::from(width) * f64::from(max) / f64::from(height)).round() as u32;
        (scaled, max)
    } else {
        (width, height)
    }
}

/// Extract the base64 section of a `data:` URL produced by canvas encoding.
#[must_use]
pub fn strip_data_url_prefix(data_url: &str) -> Option<&str> {
    let (prefix, base64) = data_url.split_once(',')?;
    prefix.starts_with("data:").then_some(base64)
}

/// Decode a user-selected file, rescale it within `max`, and re-encode it as
/// a base64 JPEG payload ready for submission.
///
/// # Errors
///
/// [`ImageError::Decode`] when the browser cannot decode the file as an
/// image; [`ImageError::RenderSurface`] when a canvas, its 2d context, or
/// the JPEG encoder is unavailable. Both are terminal for this submission
/// attempt; the caller re-prompts the user instead of retrying.
#[cfg(feature = "hydrate")]
pub async fn compress_to_jpeg_base64(
    file: &web_sys::File,
    max: u32,
) -> Result<FilePayload, ImageError> {
    let url = web_sys::Url::create_object_url_with_blob(file)
        .map_err(|_| ImageError::RenderSurface("object URL creation failed".to_owned()))?;
    let result = decode_and_encode(&url, &file.name(), max).await;
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}

#[cfg(feature = "hydrate")]
async fn decode_and_encode(
    object_url: &str,
    file_name: &str,
    max: u32,
) -> Result<FilePayload, ImageError> {
    use wasm_bindgen::JsCast;

    let img = web_sys::HtmlImageElement::new()
        .map_err(|_| ImageError::RenderSurface("image element creation failed".to_owned()))?;
    img.set_src(object_url);
    wasm_bindgen_futures::JsFuture::from(img.decode())
        .await
        .map_err(|_| ImageError::Decode)?;

    let (width, height) = scaled_dimensions(img.natural_width(), img.natural_height(), max);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ImageError::RenderSurface("no document".to_owned()))?;
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| ImageError::RenderSurface("canvas creation failed".to_owned()))?
        .dyn_into()
        .map_err(|_| ImageError::RenderSurface("canvas element type".to_owned()))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or_else(|| ImageError::RenderSurface("no 2d context".to_owned()))?
        .dyn_into()
        .map_err(|_| ImageError::RenderSurface("2d context type".to_owned()))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &img,
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    )
    .map_err(|_| ImageError::RenderSurface("draw failed".to_owned()))?;

    let data_url = canvas
        .to_data_url_with_type_and_encoder_options(
            JPEG_MIME,
            &wasm_bindgen::JsValue::from_f64(JPEG_QUALITY),
        )
        .map_err(|_| ImageError::RenderSurface("jpeg encode failed".to_owned()))?;
    let base64 = strip_data_url_prefix(&data_url)
        .ok_or_else(|| ImageError::RenderSurface("unexpected data URL shape".to_owned()))?;

    Ok(FilePayload {
        name: file_name.to_owned(),
        mime_type: JPEG_MIME.to_owned(),
        data: base64.to_owned(),
    })
}
