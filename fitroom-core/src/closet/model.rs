use uuid::Uuid;

use crate::foundation::error::{FitroomError, FitroomResult};

/// Authenticated account as returned by the identity API.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    /// Server-assigned account id.
    pub id: i64,
    /// Unique display name.
    pub username: String,
    /// Unique contact address.
    pub email: String,
}

/// Garment category; determines which landmarks and placement formula apply.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum GarmentCategory {
    /// Shirts, jackets, anything anchored at the shoulder line.
    Top,
    /// Trousers, skirts, anything anchored at the hip line.
    Bottom,
    /// Dresses and overalls spanning shoulders to ankles.
    OnePiece,
}

impl GarmentCategory {
    /// All categories in closet display order.
    pub const ALL: [GarmentCategory; 3] = [
        GarmentCategory::Top,
        GarmentCategory::Bottom,
        GarmentCategory::OnePiece,
    ];

    /// Canonical lowercase name (`top`, `bottom`, `one-piece`).
    pub fn as_str(self) -> &'static str {
        match self {
            GarmentCategory::Top => "top",
            GarmentCategory::Bottom => "bottom",
            GarmentCategory::OnePiece => "one-piece",
        }
    }
}

impl std::fmt::Display for GarmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GarmentCategory {
    type Err = FitroomError;

    fn from_str(s: &str) -> FitroomResult<Self> {
        match s {
            "top" => Ok(GarmentCategory::Top),
            "bottom" => Ok(GarmentCategory::Bottom),
            "one-piece" => Ok(GarmentCategory::OnePiece),
            other => Err(FitroomError::validation(format!(
                "unknown garment category '{other}' (expected top, bottom or one-piece)"
            ))),
        }
    }
}

/// A single garment in the closet.
///
/// `source` is a local, transient image reference; items live only for the
/// lifetime of the process.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClothingItem {
    /// Random id assigned at intake.
    pub id: Uuid,
    /// Local image reference (filesystem path).
    pub source: String,
    /// Placement category.
    pub category: GarmentCategory,
    /// Display name, usually the image file stem.
    pub name: String,
    /// Dominant color tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Season tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    /// Occasion tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
}

/// A named combination of closet items.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SavedOutfit {
    /// Random id assigned on save.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Selected top, if any.
    pub top: Option<Uuid>,
    /// Selected bottom, if any.
    pub bottom: Option<Uuid>,
    /// Selected one-piece, if any.
    pub one_piece: Option<Uuid>,
}

/// The three selection slots driving a try-on render.
///
/// Invariant: a one-piece never coexists with a top or bottom. Selecting a
/// one-piece clears both other slots; selecting a top or bottom clears the
/// one-piece.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutfitSelection {
    top: Option<Uuid>,
    bottom: Option<Uuid>,
    one_piece: Option<Uuid>,
}

impl OutfitSelection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` into the slot for `category`, enforcing the exclusivity
    /// invariant.
    pub fn select(&mut self, category: GarmentCategory, id: Uuid) {
        match category {
            GarmentCategory::Top => {
                self.top = Some(id);
                self.one_piece = None;
            }
            GarmentCategory::Bottom => {
                self.bottom = Some(id);
                self.one_piece = None;
            }
            GarmentCategory::OnePiece => {
                self.one_piece = Some(id);
                self.top = None;
                self.bottom = None;
            }
        }
    }

    /// Clear the slot for `category`.
    pub fn clear(&mut self, category: GarmentCategory) {
        match category {
            GarmentCategory::Top => self.top = None,
            GarmentCategory::Bottom => self.bottom = None,
            GarmentCategory::OnePiece => self.one_piece = None,
        }
    }

    /// Clear every slot.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Current selection for `category`.
    pub fn selected(&self, category: GarmentCategory) -> Option<Uuid> {
        match category {
            GarmentCategory::Top => self.top,
            GarmentCategory::Bottom => self.bottom,
            GarmentCategory::OnePiece => self.one_piece,
        }
    }

    /// `true` when no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.one_piece.is_none()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/closet/model.rs"]
mod tests;
