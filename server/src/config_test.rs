use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_env_is_empty() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, 5001);
    assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:5001");
    assert_eq!(cfg.cameras, vec![0, 1]);
    assert!(cfg.faulty_cameras.is_empty());
    assert_eq!(cfg.stream_fps, 30);
    assert!(cfg.static_dir.is_none());
}

#[test]
fn reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("SIM_CAMERAS", "4, 2,2"),
        ("SIM_FAULTY_CAMERAS", "4"),
        ("STREAM_FPS", "10"),
        ("STATIC_DIR", "web/dist"),
    ]))
    .unwrap();
    assert_eq!(cfg.listen_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.cameras, vec![2, 4]);
    assert_eq!(cfg.faulty_cameras, vec![4]);
    assert_eq!(cfg.frame_interval(), Duration::from_millis(100));
    assert_eq!(cfg.static_dir, Some(PathBuf::from("web/dist")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("SIM_CAMERAS", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.cameras, vec![0, 1]);
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
}

#[test]
fn rejects_zero_fps() {
    let err = ServerConfig::from_lookup(lookup(&[("STREAM_FPS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "STREAM_FPS", .. }));
}

#[test]
fn camera_ids_reject_negative_entries() {
    let err = parse_camera_ids("SIM_CAMERAS", "0,-1").unwrap_err();
    assert_eq!(err.to_string(), "invalid SIM_CAMERAS: \"0,-1\"");
}

#[test]
fn camera_ids_skip_empty_entries() {
    assert_eq!(parse_camera_ids("SIM_CAMERAS", "3,,1,").unwrap(), vec![1, 3]);
}
