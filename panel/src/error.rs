//! Controller-level failures.

use wire::CameraId;

use crate::api::ApiError;

/// Why a controller operation did not take effect.
///
/// Every variant leaves controller state as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("camera {0} already has a card")]
    CardExists(CameraId),
    #[error("camera {0} has no card")]
    NoCard(CameraId),
    #[error("camera {camera} has no control for `{setting}`")]
    NoControl { camera: CameraId, setting: String },
    #[error("invalid setting value: {0:?}")]
    InvalidValue(String),
}
