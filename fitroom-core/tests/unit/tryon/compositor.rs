use super::*;
use std::sync::Arc;

use crate::pose::landmarks::{Landmark, index};

fn solid(width: u32, height: u32, px: [u8; 4]) -> PreparedImage {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        data.extend_from_slice(&px);
    }
    PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(data),
    }
}

const BASE: [u8; 4] = [0, 0, 200, 255];
const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [40, 40, 255, 255];

fn landmarks_10x10() -> PoseLandmarks {
    let mut lm = PoseLandmarks::default();
    lm.set_point(index::LEFT_SHOULDER, Some(Landmark::new(0.3, 0.2)));
    lm.set_point(index::RIGHT_SHOULDER, Some(Landmark::new(0.7, 0.2)));
    lm.set_point(index::LEFT_HIP, Some(Landmark::new(0.35, 0.5)));
    lm.set_point(index::RIGHT_HIP, Some(Landmark::new(0.65, 0.5)));
    lm.set_point(index::LEFT_ANKLE, Some(Landmark::new(0.4, 0.9)));
    lm.set_point(index::RIGHT_ANKLE, Some(Landmark::new(0.6, 0.9)));
    lm
}

#[test]
fn empty_outfit_renders_the_base_only() {
    let base = solid(4, 4, BASE);
    let outfit = PreparedOutfit::default();
    let config = PlacementConfig::default();

    let first =
        compose_outfit(&base, Some(&landmarks_10x10()), &outfit, &config).unwrap();
    assert_eq!((first.width, first.height), (4, 4));
    assert_eq!(&first.data[..], &base.rgba8_premul[..]);

    // Re-rendering the same inputs changes nothing.
    let second =
        compose_outfit(&base, Some(&landmarks_10x10()), &outfit, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn no_landmarks_means_base_only_even_with_garments() {
    let base = solid(10, 10, BASE);
    let outfit =
        PreparedOutfit::from_images(Some(solid(2, 2, RED)), None, None);
    let frame = compose_outfit(&base, None, &outfit, &PlacementConfig::default()).unwrap();
    assert_eq!(&frame.data[..], &base.rgba8_premul[..]);
}

#[test]
fn top_is_drawn_inside_its_placement_rect() {
    let base = solid(10, 10, BASE);
    let outfit =
        PreparedOutfit::from_images(Some(solid(2, 2, RED)), None, None);
    let frame = compose_outfit(
        &base,
        Some(&landmarks_10x10()),
        &outfit,
        &PlacementConfig::default(),
    )
    .unwrap();

    // Center of the torso is covered, the canvas corner is not.
    assert_eq!(frame.pixel(5, 5), RED);
    assert_eq!(frame.pixel(0, 0), BASE);
}

#[test]
fn garment_with_missing_landmarks_is_skipped_without_error() {
    let base = solid(10, 10, BASE);
    let outfit =
        PreparedOutfit::from_images(Some(solid(2, 2, RED)), None, None);
    let mut lm = landmarks_10x10();
    lm.set_point(index::LEFT_HIP, None);

    let frame =
        compose_outfit(&base, Some(&lm), &outfit, &PlacementConfig::default()).unwrap();
    assert_eq!(&frame.data[..], &base.rgba8_premul[..]);
}

#[test]
fn top_layers_over_bottom_in_fixed_order() {
    let base = solid(10, 10, BASE);
    // Wide bottom (aspect 2) sticks out to the left of the top.
    let outfit = PreparedOutfit::from_images(
        Some(solid(2, 2, RED)),
        Some(solid(4, 2, BLUE)),
        None,
    );
    let frame = compose_outfit(
        &base,
        Some(&landmarks_10x10()),
        &outfit,
        &PlacementConfig::default(),
    )
    .unwrap();

    // Where both rects overlap the top wins; where only the bottom
    // reaches, the bottom shows.
    assert_eq!(frame.pixel(5, 6), RED);
    assert_eq!(frame.pixel(1, 6), BLUE);
}

#[test]
fn one_piece_supersedes_top_and_bottom() {
    let base = solid(10, 10, BASE);
    let outfit = PreparedOutfit::from_images(
        Some(solid(2, 2, RED)),
        Some(solid(2, 2, BLUE)),
        Some(solid(2, 2, GREEN)),
    );
    let frame = compose_outfit(
        &base,
        Some(&landmarks_10x10()),
        &outfit,
        &PlacementConfig::default(),
    )
    .unwrap();

    assert_eq!(frame.pixel(5, 5), GREEN);
    // Nothing outside the one-piece rect was touched by the ignored layers.
    assert_eq!(frame.pixel(0, 9), BASE);
}

#[test]
fn invalid_config_is_rejected_before_drawing() {
    let base = solid(4, 4, BASE);
    let mut config = PlacementConfig::default();
    config.one_piece_scale = f64::INFINITY;
    assert!(
        compose_outfit(&base, None, &PreparedOutfit::default(), &config).is_err()
    );
}
