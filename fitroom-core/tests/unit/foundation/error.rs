use super::*;

#[test]
fn helper_constructors_map_to_variants() {
    assert!(matches!(FitroomError::auth("x"), FitroomError::Auth(_)));
    assert!(matches!(
        FitroomError::validation("x"),
        FitroomError::Validation(_)
    ));
    assert!(matches!(FitroomError::pose("x"), FitroomError::Pose(_)));
    assert!(matches!(FitroomError::render("x"), FitroomError::Render(_)));
    assert!(matches!(FitroomError::serde("x"), FitroomError::Serde(_)));
}

#[test]
fn display_carries_the_message() {
    let e = FitroomError::validation("outfit name must be non-empty");
    assert_eq!(e.to_string(), "validation error: outfit name must be non-empty");
}

#[test]
fn anyhow_errors_wrap_transparently() {
    let inner = anyhow::anyhow!("disk on fire");
    let e = FitroomError::from(inner);
    assert_eq!(e.to_string(), "disk on fire");
}
