use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn config_defaults_when_env_is_empty() {
    let cfg = HttpConfig::from_lookup(lookup(&[]));
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
}

#[test]
fn config_reads_overrides() {
    let cfg = HttpConfig::from_lookup(lookup(&[
        ("CAMERA_API_URL", "http://cams.local:8080/"),
        ("CAMERA_API_TIMEOUT_SECS", "30"),
        ("CAMERA_API_CONNECT_TIMEOUT_SECS", "2"),
    ]));
    assert_eq!(cfg.base_url, "http://cams.local:8080");
    assert_eq!(cfg.request_timeout, Duration::from_secs(30));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(2));
}

#[test]
fn config_ignores_invalid_or_zero_timeouts() {
    let cfg = HttpConfig::from_lookup(lookup(&[
        ("CAMERA_API_URL", "  "),
        ("CAMERA_API_TIMEOUT_SECS", "soon"),
        ("CAMERA_API_CONNECT_TIMEOUT_SECS", "0"),
    ]));
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
}

#[test]
fn new_config_strips_trailing_slashes() {
    assert_eq!(HttpConfig::new("http://host:1//").base_url, "http://host:1");
}

#[test]
fn stream_url_is_absolute() {
    let api = HttpCameraApi::new(&HttpConfig::new("http://host:5001/")).expect("client");
    assert_eq!(api.base_url(), "http://host:5001");
    assert_eq!(api.stream_url(3), "http://host:5001/api/camera/3/stream");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let mut cfg = HttpConfig::new("http://127.0.0.1:9");
    cfg.connect_timeout = Duration::from_millis(200);
    cfg.request_timeout = Duration::from_millis(500);
    let api = HttpCameraApi::new(&cfg).expect("client");

    let err = api.list_cameras().await.expect_err("nothing listens on port 9");

    assert!(matches!(err, ApiError::Transport { ref endpoint, .. } if endpoint == "/api/cameras"));
}
