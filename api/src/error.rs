/// What can go wrong talking to the backend.
///
/// Errors are surfaced to the caller unchanged; nothing is retried and nothing
/// is treated as fatal to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The backend answered with a non-success status. The message comes from
    /// a JSON `{"message": ...}` body when the backend sent one.
    Api { status: u16, message: String },
    /// The request never completed (connection, timeout, malformed body).
    Transport(String),
}

impl Error {
    /// Build the error for a non-success response from its status and body.
    pub fn from_response_parts(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("request failed with status {status}")
                } else {
                    trimmed.to_string()
                }
            });
        Error::Api { status, message }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Api { message, .. } => message,
            Error::Transport(message) => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport(_) => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_message_from_json_body() {
        let err = Error::from_response_parts(400, r#"{"message": "Email already in use"}"#);
        assert_eq!(err.message(), "Email already in use");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = Error::from_response_parts(500, "Internal Server Error");
        assert_eq!(err.message(), "Internal Server Error");
    }

    #[test]
    fn falls_back_to_status_when_body_is_empty() {
        let err = Error::from_response_parts(404, "   ");
        assert_eq!(err.message(), "request failed with status 404");
    }

    #[test]
    fn json_body_without_message_field_is_shown_raw() {
        let err = Error::from_response_parts(422, r#"{"errors": ["bad"]}"#);
        assert_eq!(err.message(), r#"{"errors": ["bad"]}"#);
    }
}
