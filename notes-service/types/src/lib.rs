//! Shared wire types for the notes service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A user-authored text entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Millisecond creation timestamp, rendered as a string
    pub id: String,
    pub text: String,
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /api/notes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub text: String,
}

/// Body of `POST /api/notes/summary`
///
/// Every field is optional on the wire so that a missing field is reported
/// with the service's own 400 body instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[serde(default)]
    pub user_query: Option<String>,
    #[serde(default)]
    pub notes_id: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// `{"error": ...}` body used by the summary endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// `{"detail": ...}` body used by the delete endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailBody {
    pub detail: String,
}

impl DetailBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { detail: msg.into() }
    }
}
