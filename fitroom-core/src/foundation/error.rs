/// Convenience result type used across fitroom.
pub type FitroomResult<T> = Result<T, FitroomError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum FitroomError {
    /// Failed authentication calls: invalid credentials or a network failure
    /// while talking to the identity API.
    #[error("auth error: {0}")]
    Auth(String),

    /// Invalid user-provided data: registration fields, placement
    /// configuration, closet intake.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed landmark data from the pose-detection capability.
    #[error("pose error: {0}")]
    Pose(String),

    /// Errors while compositing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FitroomError {
    /// Build a [`FitroomError::Auth`] value.
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Build a [`FitroomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FitroomError::Pose`] value.
    pub fn pose(msg: impl Into<String>) -> Self {
        Self::Pose(msg.into())
    }

    /// Build a [`FitroomError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FitroomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
