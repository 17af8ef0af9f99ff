use thiserror::Error;

/// Failures raised by the HTTP gateway. Every variant is surfaced to the
/// reader as a single banner message; none are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("{detail}")]
    Status { status: u16, detail: String },
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a JSON error body, using `fallback` when the
    /// body is missing or carries no `detail` field.
    #[must_use]
    pub fn from_status_body(status: u16, body: &str, fallback: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
            })
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::Status { status, detail }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please enter a theme for your story")]
    EmptyTheme,
    #[error("A story request is already in progress")]
    Busy,
    #[error("There is no story to continue")]
    NoStory,
    #[error("This story has already reached its ending")]
    Finished,
    #[error("Request {0} is no longer current")]
    Stale(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Backend(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Age must be between {min} and {max}")]
    AgeOutOfRange { min: u8, max: u8 },
}

/// Any failure an initiating UI action can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl ClientError {
    /// Banner text for this failure. Validation problems are shown as-is;
    /// request failures get the retry hint.
    #[must_use]
    pub fn banner(&self) -> String {
        match self {
            Self::Session(SessionError::EmptyTheme) | Self::Profile(_) => self.to_string(),
            _ => banner_message(self),
        }
    }
}

/// Text shown in the dismissable error banner for a failed request.
#[must_use]
pub fn banner_message(err: &dyn std::error::Error) -> String {
    format!("Error: {err}. Please try again.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_detail_field() {
        let err = ApiError::from_status_body(
            400,
            r#"{"detail":"Theme must be at least 2 characters long"}"#,
            "Failed to generate story",
        );
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                detail: String::from("Theme must be at least 2 characters long")
            }
        );
    }

    #[test]
    fn status_error_falls_back_when_body_is_not_json() {
        let err = ApiError::from_status_body(502, "<html>bad gateway</html>", "Failed to continue story");
        assert_eq!(err.to_string(), "Failed to continue story");
    }

    #[test]
    fn banner_wraps_message() {
        let err = ApiError::Transport(String::from("Failed to fetch"));
        assert_eq!(banner_message(&err), "Error: Failed to fetch. Please try again.");
    }

    #[test]
    fn validation_errors_are_shown_verbatim() {
        let err = ClientError::from(SessionError::EmptyTheme);
        assert_eq!(err.banner(), "Please enter a theme for your story");
        let err = ClientError::from(ApiError::Status {
            status: 500,
            detail: String::from("Story generation failed"),
        });
        assert_eq!(err.banner(), "Error: Story generation failed. Please try again.");
    }
}
