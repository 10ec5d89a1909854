use thiserror::Error;

use crate::model::BodyID;

/// Errors from the fallible edges of the game: launch parameters, body
/// sizes, arrangement and configuration. The physics itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid body size {0}, expected one of 3, 4, 5, 6 or 9")]
    InvalidSize(u8),

    #[error("launch speed {0} is outside 0-10")]
    InvalidSpeed(f64),

    #[error("launch angle {0} is outside 0-360 degrees")]
    InvalidAngle(f64),

    #[error("a {columns}x{lines} field is too small for two planets")]
    FieldTooSmall { columns: u32, lines: u32 },

    #[error("could not place planets without overlap after {attempts} attempts")]
    ArrangementFailed { attempts: usize },

    #[error("no body with id {0}")]
    UnknownBody(BodyID),

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
