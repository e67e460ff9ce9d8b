use super::*;
use std::path::PathBuf;

#[test]
fn intake_accepts_images_and_names_from_stem() {
    let mut closet = Closet::new();
    let item = closet
        .add_from_path(&PathBuf::from("/wardrobe/blue-shirt.PNG"), GarmentCategory::Top)
        .unwrap()
        .clone();
    assert_eq!(item.name, "blue-shirt");
    assert_eq!(item.category, GarmentCategory::Top);
    assert_eq!(item.source, "/wardrobe/blue-shirt.PNG");
}

#[test]
fn intake_rejects_non_image_files() {
    let mut closet = Closet::new();
    let err = closet
        .add_from_path(&PathBuf::from("/wardrobe/notes.txt"), GarmentCategory::Top)
        .unwrap_err();
    assert!(matches!(err, crate::FitroomError::Validation(_)));
    assert!(closet.is_empty());
}

#[test]
fn items_in_filters_by_category() {
    let mut closet = Closet::new();
    closet
        .add_from_path(&PathBuf::from("a.png"), GarmentCategory::Top)
        .unwrap();
    closet
        .add_from_path(&PathBuf::from("b.png"), GarmentCategory::Bottom)
        .unwrap();
    closet
        .add_from_path(&PathBuf::from("c.png"), GarmentCategory::Top)
        .unwrap();

    let tops: Vec<_> = closet.items_in(GarmentCategory::Top).collect();
    assert_eq!(tops.len(), 2);
    assert_eq!(tops[0].name, "a");
    assert_eq!(tops[1].name, "c");
    assert_eq!(closet.items_in(GarmentCategory::OnePiece).count(), 0);
    assert_eq!(closet.len(), 3);
}

#[test]
fn save_outfit_records_the_selection() {
    let mut closet = Closet::new();
    let top_id = closet
        .add_from_path(&PathBuf::from("a.png"), GarmentCategory::Top)
        .unwrap()
        .id;
    let bottom_id = closet
        .add_from_path(&PathBuf::from("b.png"), GarmentCategory::Bottom)
        .unwrap()
        .id;

    let mut sel = OutfitSelection::new();
    sel.select(GarmentCategory::Top, top_id);
    sel.select(GarmentCategory::Bottom, bottom_id);

    let outfit = closet
        .save_outfit("work monday", None, &sel)
        .unwrap()
        .clone();
    assert_eq!(outfit.top, Some(top_id));
    assert_eq!(outfit.bottom, Some(bottom_id));
    assert_eq!(outfit.one_piece, None);
    assert_eq!(closet.outfits().len(), 1);
}

#[test]
fn save_outfit_rejects_unknown_items_and_empty_names() {
    let mut closet = Closet::new();
    let mut sel = OutfitSelection::new();
    sel.select(GarmentCategory::Top, uuid::Uuid::new_v4());

    assert!(closet.save_outfit("ghost", None, &sel).is_err());
    assert!(closet
        .save_outfit("  ", None, &OutfitSelection::new())
        .is_err());
    assert!(closet.outfits().is_empty());
}
