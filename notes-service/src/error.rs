use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_types::ErrorBody;

pub const NOTE_NOT_FOUND: &str = "Note not found";
pub const SUMMARY_FIELDS_REQUIRED: &str = "userQuery and notesId are required";
pub const INVALID_MODEL_NAME: &str = "Invalid modelName. Use 'openai' or 'gemini'.";
pub const SUMMARIZATION_FAILED: &str = "Failed to summarize note";

/// Failure while talking to an LLM vendor.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{0} is not set")]
    MissingCredential(&'static str),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("Note not found")]
    NotFound,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Failed to summarize note: {0}")]
    SummarizationFailed(#[source] ProviderError),
}

impl IntoResponse for NotesError {
    fn into_response(self) -> Response {
        // Provider details stay in the logs; callers only see the generic message.
        let (status, message) = match self {
            NotesError::NotFound => (StatusCode::NOT_FOUND, NOTE_NOT_FOUND.to_string()),
            NotesError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            NotesError::SummarizationFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                SUMMARIZATION_FAILED.to_string(),
            ),
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            NotesError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            NotesError::InvalidRequest(SUMMARY_FIELDS_REQUIRED.into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            NotesError::SummarizationFailed(ProviderError::MissingCredential("OPENAI_API_KEY"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_keeps_provider_cause() {
        let err = NotesError::SummarizationFailed(ProviderError::MalformedResponse(
            "no candidates".into(),
        ));
        assert_eq!(
            err.to_string(),
            "Failed to summarize note: malformed response: no candidates"
        );
    }
}
