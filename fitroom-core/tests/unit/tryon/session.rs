use super::*;
use std::io::Cursor;
use std::sync::Arc;

use crate::pose::detector::FixedPoseDetector;
use crate::pose::landmarks::{Landmark, index};

struct CountingDetector {
    inner: FixedPoseDetector,
    calls: usize,
}

impl CountingDetector {
    fn new(landmarks: Option<PoseLandmarks>) -> Self {
        Self {
            inner: FixedPoseDetector::new(landmarks),
            calls: 0,
        }
    }
}

impl PoseDetector for CountingDetector {
    fn detect(&mut self, image: &PreparedImage) -> FitroomResult<Option<PoseLandmarks>> {
        self.calls += 1;
        self.inner.detect(image)
    }
}

fn base_image() -> PreparedImage {
    PreparedImage {
        width: 10,
        height: 10,
        rgba8_premul: Arc::new(vec![255; 10 * 10 * 4]),
    }
}

fn full_landmarks() -> PoseLandmarks {
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
fn detection_runs_once_per_base_image() {
    let mut session = TryOnSession::new(CountingDetector::new(Some(full_landmarks())));
    session.set_base(base_image()).unwrap();

    let closet = Closet::new();
    let config = PlacementConfig::default();
    let pass = session.render_pass(&closet, &config).unwrap();
    session.commit(pass);
    let pass = session.render_pass(&closet, &config).unwrap();
    session.commit(pass);

    assert_eq!(session.detector.calls, 1);
    assert!(session.landmarks().is_some());
}

#[test]
fn stale_pass_is_discarded_on_commit() {
    let mut session = TryOnSession::new(FixedPoseDetector::new(Some(full_landmarks())));
    session.set_base(base_image()).unwrap();

    let closet = Closet::new();
    let config = PlacementConfig::default();
    let stale = session.render_pass(&closet, &config).unwrap();

    // Selection moves on while the pass is in flight.
    session.clear_selection();
    assert!(session.commit(stale).is_none());
    assert!(session.last_frame().is_none());

    let fresh = session.render_pass(&closet, &config).unwrap();
    assert!(session.commit(fresh).is_some());
    assert!(session.last_frame().is_some());
}

#[test]
fn every_state_change_bumps_the_generation() {
    let mut session = TryOnSession::new(FixedPoseDetector::default());
    let g0 = session.generation();
    session.set_base(base_image()).unwrap();
    let g1 = session.generation();
    assert!(g1 > g0);

    session.select(GarmentCategory::Top, uuid::Uuid::new_v4());
    let g2 = session.generation();
    assert!(g2 > g1);

    session.clear(GarmentCategory::Top);
    assert!(session.generation() > g2);
}

#[test]
fn selection_goes_through_the_exclusivity_invariant() {
    let mut session = TryOnSession::new(FixedPoseDetector::default());
    let top = uuid::Uuid::new_v4();
    let dress = uuid::Uuid::new_v4();

    session.select(GarmentCategory::Top, top);
    session.select(GarmentCategory::OnePiece, dress);
    assert_eq!(session.selection().selected(GarmentCategory::Top), None);
    assert_eq!(
        session.selection().selected(GarmentCategory::OnePiece),
        Some(dress)
    );
}

#[test]
fn render_without_a_base_image_is_an_error() {
    let session = TryOnSession::new(FixedPoseDetector::default());
    let err = session
        .render_pass(&Closet::new(), &PlacementConfig::default())
        .unwrap_err();
    assert!(matches!(err, FitroomError::Render(_)));
}

#[test]
fn render_end_to_end_from_a_closet_selection() {
    let tmp = std::env::temp_dir().join(format!(
        "fitroom_session_render_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&tmp).unwrap();
    let shirt = tmp.join("shirt.png");
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(&shirt, &buf).unwrap();

    let mut closet = Closet::new();
    let id = closet
        .add_from_path(&shirt, GarmentCategory::Top)
        .unwrap()
        .id;

    let mut session = TryOnSession::new(FixedPoseDetector::new(Some(full_landmarks())));
    session.set_base(base_image()).unwrap();
    session.select(GarmentCategory::Top, id);

    let pass = session.render_pass(&closet, &PlacementConfig::default()).unwrap();
    let frame = session.commit(pass).unwrap();
    assert_eq!(frame.pixel(5, 5), [255, 0, 0, 255]);

    std::fs::remove_dir_all(&tmp).ok();
}
