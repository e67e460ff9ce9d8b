use kurbo::Rect;

use crate::{assets::outfit::PreparedImage, tryon::compositor::FrameRGBA};

/// Premultiplied source-over for a single pixel.
pub fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - sa;
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Copy `src` onto the frame origin at 1:1 scale.
///
/// Used for the base layer, which defines the canvas size; any excess is
/// clipped.
pub fn blit_full(frame: &mut FrameRGBA, src: &PreparedImage) {
    let copy_w = (src.width.min(frame.width)) as usize;
    let copy_h = (src.height.min(frame.height)) as usize;
    let src_stride = src.width as usize * 4;
    let dst_stride = frame.width as usize * 4;
    for row in 0..copy_h {
        let src_off = row * src_stride;
        let dst_off = row * dst_stride;
        frame.data[dst_off..dst_off + copy_w * 4]
            .copy_from_slice(&src.rgba8_premul[src_off..src_off + copy_w * 4]);
    }
}

/// Scale `src` into `rect` (bilinear) and source-over the result onto the
/// frame, clipped to the canvas.
pub fn blit_scaled(frame: &mut FrameRGBA, src: &PreparedImage, rect: Rect) {
    let target_w = rect.width().round() as i64;
    let target_h = rect.height().round() as i64;
    if target_w <= 0 || target_h <= 0 || src.width == 0 || src.height == 0 {
        return;
    }

    let Some(src_image) = image::RgbaImage::from_raw(
        src.width,
        src.height,
        src.rgba8_premul.as_ref().clone(),
    ) else {
        return;
    };
    // Resizing premultiplied pixels keeps edge colors from bleeding.
    let scaled = image::imageops::resize(
        &src_image,
        target_w as u32,
        target_h as u32,
        image::imageops::FilterType::Triangle,
    );

    let origin_x = rect.x0.round() as i64;
    let origin_y = rect.y0.round() as i64;
    let frame_w = i64::from(frame.width);
    let frame_h = i64::from(frame.height);
    let dst_stride = frame.width as usize * 4;

    for (sy, row) in scaled.rows().enumerate() {
        let dy = origin_y + sy as i64;
        if dy < 0 || dy >= frame_h {
            continue;
        }
        for (sx, px) in row.enumerate() {
            let dx = origin_x + sx as i64;
            if dx < 0 || dx >= frame_w {
                continue;
            }
            let off = dy as usize * dst_stride + dx as usize * 4;
            let dst_px = [
                frame.data[off],
                frame.data[off + 1],
                frame.data[off + 2],
                frame.data[off + 3],
            ];
            let out = over(dst_px, px.0);
            frame.data[off..off + 4].copy_from_slice(&out);
        }
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
