use std::path::Path;

use uuid::Uuid;

use crate::{
    closet::model::{ClothingItem, GarmentCategory, OutfitSelection, SavedOutfit},
    foundation::error::{FitroomError, FitroomResult},
};

/// Image extensions accepted at intake, matching the decoders the engine
/// carries.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Append-only in-memory collection of clothing items and saved outfits.
///
/// Items are identified by random ids and reference local image files; the
/// store holds no pixels itself and nothing is persisted.
#[derive(Clone, Debug, Default)]
pub struct Closet {
    items: Vec<ClothingItem>,
    outfits: Vec<SavedOutfit>,
}

impl Closet {
    /// Empty closet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intake an image file as a new item in `category`.
    ///
    /// The file must carry a known image extension; the item name is the
    /// file stem. The file is not read here: pixels are loaded when an
    /// outfit is prepared.
    pub fn add_from_path(
        &mut self,
        path: &Path,
        category: GarmentCategory,
    ) -> FitroomResult<&ClothingItem> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return Err(FitroomError::validation(format!(
                "closet intake accepts image files ({}), got '{}'",
                IMAGE_EXTENSIONS.join(", "),
                path.display()
            )));
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        Ok(self.add(ClothingItem {
            id: Uuid::new_v4(),
            source: path.display().to_string(),
            category,
            name,
            color: None,
            season: None,
            occasion: None,
        }))
    }

    /// Append a fully built item.
    pub fn add(&mut self, item: ClothingItem) -> &ClothingItem {
        self.items.push(item);
        let idx = self.items.len() - 1;
        &self.items[idx]
    }

    /// Item by id.
    pub fn get(&self, id: Uuid) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in `category`, in intake order.
    pub fn items_in(&self, category: GarmentCategory) -> impl Iterator<Item = &ClothingItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// All items in intake order.
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    /// Number of items across all categories.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the closet holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Save the current selection as a named outfit.
    ///
    /// Every referenced item must exist in the closet.
    pub fn save_outfit(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        selection: &OutfitSelection,
    ) -> FitroomResult<&SavedOutfit> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FitroomError::validation("outfit name must be non-empty"));
        }
        for category in GarmentCategory::ALL {
            if let Some(id) = selection.selected(category)
                && self.get(id).is_none()
            {
                return Err(FitroomError::validation(format!(
                    "outfit references unknown {category} item {id}"
                )));
            }
        }

        self.outfits.push(SavedOutfit {
            id: Uuid::new_v4(),
            name,
            description,
            top: selection.selected(GarmentCategory::Top),
            bottom: selection.selected(GarmentCategory::Bottom),
            one_piece: selection.selected(GarmentCategory::OnePiece),
        });
        let idx = self.outfits.len() - 1;
        Ok(&self.outfits[idx])
    }

    /// Saved outfits in save order.
    pub fn outfits(&self) -> &[SavedOutfit] {
        &self.outfits
    }
}

#[cfg(test)]
#[path = "../../tests/unit/closet/store.rs"]
mod tests;
