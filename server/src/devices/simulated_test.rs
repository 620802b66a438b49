use super::*;

#[tokio::test]
async fn detect_lists_configured_ids_ascending() {
    let driver = SimulatedDriver::new(&[3, 0, 1], &[]);
    assert_eq!(driver.detect().await, vec![0, 1, 3]);
}

#[tokio::test]
async fn open_unknown_id_is_not_found() {
    let driver = SimulatedDriver::new(&[0], &[]);
    let err = driver.open(7).await.err().expect("unknown id");
    assert!(matches!(err, DeviceError::NotFound(7)));
}

#[tokio::test]
async fn faulty_id_is_detected_but_fails_to_open() {
    let driver = SimulatedDriver::new(&[0, 1], &[1]);
    assert_eq!(driver.detect().await, vec![0, 1]);
    let err = driver.open(1).await.err().expect("faulty id");
    assert!(matches!(err, DeviceError::OpenFailed(1)));
}

#[test]
fn profile_reports_every_setting() {
    let settings = default_profile(0);
    let names: Vec<&str> = settings.keys().map(String::as_str).collect();
    let mut expected = SETTING_NAMES.to_vec();
    expected.sort_unstable();
    assert_eq!(names, expected);
    assert!(is_unsupported(settings["hue"]));
}

#[test]
fn exposure_is_unsupported_on_odd_ids() {
    assert!(!is_unsupported(default_profile(2)["exposure"]));
    assert!(is_unsupported(default_profile(3)["exposure"]));
}

#[test]
fn set_setting_updates_reported_value() {
    let mut cam = SimulatedCamera::new(0);
    cam.set_setting("brightness", 42.0).unwrap();
    assert!((cam.settings()["brightness"] - 42.0).abs() < f64::EPSILON);
}

#[test]
fn set_setting_rejects_unknown_and_unsupported() {
    let mut cam = SimulatedCamera::new(1);
    assert!(matches!(cam.set_setting("zoom", 1.0), Err(DeviceError::UnknownSetting(_))));
    assert!(matches!(cam.set_setting("exposure", 1.0), Err(DeviceError::Unsupported(_))));
    assert!(matches!(cam.set_setting("gain", f64::NAN), Err(DeviceError::Unsupported(_))));
}

#[test]
fn frames_are_jpeg() {
    let mut cam = SimulatedCamera::new(0);
    let frame = cam.frame().expect("frame");
    assert_eq!(&frame[..2], &[0xFF, 0xD8]);
    assert_eq!(&frame[frame.len() - 2..], &[0xFF, 0xD9]);
}

#[test]
fn released_camera_stops_serving() {
    let mut cam = SimulatedCamera::new(0);
    cam.release();
    assert!(cam.frame().is_none());
    assert!(cam.settings().is_empty());
    assert!(matches!(cam.set_setting("gain", 1.0), Err(DeviceError::Released(0))));
}
