//! Server configuration from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use wire::CameraId;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_STREAM_FPS: u32 = 30;
const DEFAULT_CAMERAS: &[CameraId] = &[0, 1];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Simulated device IDs reported by detection.
    pub cameras: Vec<CameraId>,
    /// Subset of `cameras` that fail to open.
    pub faulty_cameras: Vec<CameraId>,
    pub stream_fps: u32,
    /// Directory served at `/` (the built web front end), if any.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// - `PORT`: default 5001
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SIM_CAMERAS`: comma separated IDs, default `0,1`
    /// - `SIM_FAULTY_CAMERAS`: comma separated IDs, default empty
    /// - `STREAM_FPS`: default 30, minimum 1
    /// - `STATIC_DIR`: optional
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let bind_addr = env_parse(get("BIND_ADDR"), "BIND_ADDR", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = env_parse(get("PORT"), "PORT", DEFAULT_PORT)?;
        let stream_fps = env_parse(get("STREAM_FPS"), "STREAM_FPS", DEFAULT_STREAM_FPS)?;
        if stream_fps == 0 {
            return Err(ConfigError::Invalid { key: "STREAM_FPS", value: "0".into() });
        }

        let cameras = match get("SIM_CAMERAS") {
            Some(raw) => parse_camera_ids("SIM_CAMERAS", &raw)?,
            None => DEFAULT_CAMERAS.to_vec(),
        };
        let faulty_cameras = match get("SIM_FAULTY_CAMERAS") {
            Some(raw) => parse_camera_ids("SIM_FAULTY_CAMERAS", &raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            bind_addr,
            port,
            cameras,
            faulty_cameras,
            stream_fps,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Delay between two stream frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.stream_fps.max(1)
    }
}

fn env_parse<T: std::str::FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

/// Parse `"0, 2,4"` into sorted, deduplicated IDs.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if any entry is not a non-negative integer.
pub fn parse_camera_ids(key: &'static str, raw: &str) -> Result<Vec<CameraId>, ConfigError> {
    let mut ids = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let id = part
            .parse::<CameraId>()
            .map_err(|_| ConfigError::Invalid { key, value: raw.to_owned() })?;
        ids.push(id);
    }
    ids.sort_unstable();
    ids.dedup();
    Ok(ids)
}
