use super::*;
use panel::{ApiError, CameraCard, CameraSettings};

fn snapshot_with_card() -> PanelSnapshot {
    let settings: CameraSettings = [("brightness".to_owned(), 150.0), ("gain".to_owned(), 5.5)].into_iter().collect();
    PanelSnapshot { cards: vec![CameraCard::new(2, "/api/camera/2/stream".into(), &settings)], ..PanelSnapshot::default() }
}

#[test]
fn readout_and_position_come_from_the_card() {
    let snapshot = snapshot_with_card();
    assert_eq!(control_readout(&snapshot, 2, "brightness").as_deref(), Some("150"));
    assert_eq!(control_position(&snapshot, 2, "brightness").as_deref(), Some("100"));
    assert_eq!(control_readout(&snapshot, 2, "gain").as_deref(), Some("5.5"));
}

#[test]
fn missing_card_or_control_has_no_readout() {
    let snapshot = snapshot_with_card();
    assert!(control_readout(&snapshot, 9, "brightness").is_none());
    assert!(control_position(&snapshot, 2, "exposure").is_none());
}

#[test]
fn error_text_is_user_facing() {
    let rejected = PanelError::Api(ApiError::status("/api/camera/1/connect", 400));
    let unreachable = PanelError::Api(ApiError::transport("/api/cameras", "refused"));
    assert_eq!(error_text(&rejected), "The camera server rejected the request.");
    assert_eq!(error_text(&unreachable), "Camera server unreachable.");
    assert_eq!(error_text(&PanelError::NoCard(4)), "Camera 4 has no card");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_actions_report_unavailable() {
    let ctx = PanelContext::new(BrowserApi::default());
    ctx.connect(1);
    assert_eq!(
        ctx.error.get_untracked().as_deref(),
        Some("Camera API is not available in this build")
    );
    assert_eq!(ctx.snapshot.get_untracked(), PanelSnapshot::default());
}

#[test]
fn background_success_keeps_the_last_error() {
    let previous = Some("Camera server unreachable.".to_owned());
    assert_eq!(settle_error(previous.clone(), &Ok(()), Origin::Background), previous);
    assert_eq!(settle_error(None, &Ok(()), Origin::Background), None);
}

#[test]
fn user_success_clears_the_last_error() {
    assert_eq!(settle_error(Some("Camera 4 has no card".to_owned()), &Ok(()), Origin::User), None);
}

#[test]
fn any_failure_replaces_the_last_error() {
    let failed = Err(PanelError::NoCard(4));
    for origin in [Origin::User, Origin::Background] {
        assert_eq!(
            settle_error(Some("older".to_owned()), &failed, origin).as_deref(),
            Some("Camera 4 has no card")
        );
    }
}
