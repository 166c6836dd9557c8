/// Convenience result type used across deskpaint.
pub type DeskResult<T> = Result<T, DeskError>;

/// Top-level error taxonomy.
///
/// The frame loop never propagates these: each call site that can fail absorbs the error
/// into a safe visual default and logs it. They surface only from setup APIs (settings
/// loading, taskbar population) and from the collaborators themselves.
#[derive(thiserror::Error, Debug)]
pub enum DeskError {
    /// Wallpaper file missing, unreadable, or not a decodable image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Backing buffer or bitmap storage could not be reserved.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// A fixed-capacity collection is full.
    #[error("capacity error: {0}")]
    Capacity(String),

    /// Invalid desktop settings.
    #[error("settings error: {0}")]
    Settings(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failure reported by the program host (launch, restore).
    #[error("host error: {0}")]
    Host(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeskError {
    /// Build a [`DeskError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`DeskError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Build a [`DeskError::Capacity`] value.
    pub fn capacity(msg: impl Into<String>) -> Self {
        Self::Capacity(msg.into())
    }

    /// Build a [`DeskError::Settings`] value.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    /// Build a [`DeskError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`DeskError::Host`] value.
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
