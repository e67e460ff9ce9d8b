use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    assets::outfit::PreparedImage,
    foundation::error::{FitroomError, FitroomResult},
};

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> FitroomResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Rasterize SVG bytes at intrinsic size.
///
/// Used for the body-silhouette base layer; the pixmap comes back
/// premultiplied already.
pub fn rasterize_svg(bytes: &[u8]) -> FitroomResult<PreparedImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FitroomError::render("svg raster size must be non-zero"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.take()),
    })
}

/// Load a base image from disk: `.svg` files are rasterized, anything else
/// goes through the raster decoder.
pub fn load_base_image(path: &Path) -> FitroomResult<PreparedImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read base image '{}'", path.display()))?;
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        rasterize_svg(&bytes)
    } else {
        decode_image(&bytes)
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
