use crate::object::ObjectId;

/// Result alias that carries the custom [`ProtonLifeError`] type.
pub type Result<T> = std::result::Result<T, ProtonLifeError>;

/// Common error type for the core crate.
///
/// Any failure inside a beat is treated as fatal: it aborts the current beat
/// and, through the sequencer, the whole phase. There is no retry policy.
#[derive(Debug, thiserror::Error)]
pub enum ProtonLifeError {
    /// An animation command referenced an object that is not on the stage.
    #[error("no object {0} on the stage")]
    UnknownObject(ObjectId),
    /// A play or wait command carried a duration the timeline cannot honour.
    #[error("invalid duration {seconds}s: {reason}")]
    InvalidDuration { seconds: f64, reason: &'static str },
    /// Free-form message for failures that do not warrant their own variant.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors (preset loading).
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON errors raised while parsing a preset file.
    #[error("{0}")]
    Preset(#[from] serde_json::Error),
}

impl ProtonLifeError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for ProtonLifeError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for ProtonLifeError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
