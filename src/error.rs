//! Crate-level error types.

use std::fmt;

use crate::camera::CameraType;

/// Errors produced by the lookout crate.
///
/// Every variant except the I/O and options ones is a usage error: the
/// operation that produced it was aborted and left the camera state
/// untouched.
#[derive(Debug)]
pub enum LookoutError {
    /// A camera index outside `0..len` was requested.
    CameraIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of cameras in the manager.
        len: usize,
    },
    /// Removing the camera would leave the manager empty.
    LastCamera,
    /// A tracking mode was set on a camera that is not of tracking type.
    NotTrackingCamera(CameraType),
    /// An actor handle or name did not resolve against the scene.
    ActorNotFound(String),
    /// Switching cameras requires an interactor attached to the view.
    NoInteractor {
        /// The camera index that was requested.
        index: usize,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for LookoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CameraIndexOutOfRange { index, len } => {
                write!(f, "camera {index} does not exist ({len} cameras)")
            }
            Self::LastCamera => {
                write!(f, "the last remaining camera cannot be removed")
            }
            Self::NotTrackingCamera(kind) => write!(
                f,
                "cannot set a tracking mode on a {kind} camera; switch it to \
                 TRACKING first"
            ),
            Self::ActorNotFound(actor) => {
                write!(f, "actor {actor} does not exist")
            }
            Self::NoInteractor { index } => write!(
                f,
                "cannot switch to camera {index}: the view has no interactor"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for LookoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LookoutError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
