use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    assets::decode,
    closet::model::{GarmentCategory, OutfitSelection},
    closet::store::Closet,
    foundation::error::{FitroomError, FitroomResult},
};

/// Prepared raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Intrinsic width/height ratio used by placement sizing.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }
}

/// All garment images for one render, loaded and decoded up-front.
///
/// Preparation is the only IO stage of a render: compositing takes this
/// store and never touches the filesystem, so a slow or missing garment
/// file fails the pass before any pixel is drawn instead of racing the
/// canvas.
#[derive(Clone, Debug, Default)]
pub struct PreparedOutfit {
    top: Option<PreparedImage>,
    bottom: Option<PreparedImage>,
    one_piece: Option<PreparedImage>,
}

impl PreparedOutfit {
    /// Load and decode every selected garment image from the closet.
    pub fn prepare(closet: &Closet, selection: &OutfitSelection) -> FitroomResult<Self> {
        let mut out = Self::default();
        for category in GarmentCategory::ALL {
            let Some(id) = selection.selected(category) else {
                continue;
            };
            let item = closet.get(id).ok_or_else(|| {
                FitroomError::validation(format!(
                    "selection references unknown {category} item {id}"
                ))
            })?;
            let image = load_garment(Path::new(&item.source))?;
            out.set(category, Some(image));
        }
        Ok(out)
    }

    /// Build a prepared outfit from already-decoded images.
    pub fn from_images(
        top: Option<PreparedImage>,
        bottom: Option<PreparedImage>,
        one_piece: Option<PreparedImage>,
    ) -> Self {
        Self {
            top,
            bottom,
            one_piece,
        }
    }

    /// Prepared image for `category`, if one was selected.
    pub fn get(&self, category: GarmentCategory) -> Option<&PreparedImage> {
        match category {
            GarmentCategory::Top => self.top.as_ref(),
            GarmentCategory::Bottom => self.bottom.as_ref(),
            GarmentCategory::OnePiece => self.one_piece.as_ref(),
        }
    }

    /// `true` when no garment was prepared.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.one_piece.is_none()
    }

    fn set(&mut self, category: GarmentCategory, image: Option<PreparedImage>) {
        match category {
            GarmentCategory::Top => self.top = image,
            GarmentCategory::Bottom => self.bottom = image,
            GarmentCategory::OnePiece => self.one_piece = image,
        }
    }
}

fn load_garment(path: &Path) -> FitroomResult<PreparedImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read garment image '{}'", path.display()))?;
    decode::decode_image(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/outfit.rs"]
mod tests;
