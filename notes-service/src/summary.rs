//! SummaryGateway: turns a note plus a user query into an LLM summary.

use crate::error::{INVALID_MODEL_NAME, NotesError, Result, SUMMARY_FIELDS_REQUIRED};
use crate::providers::{ModelName, ProviderRegistry};
use crate::store::NoteStore;
use std::sync::Arc;

/// Returned when the provider answered with an empty string.
pub const EMPTY_SUMMARY: &str = "No summary generated";

pub struct SummaryGateway {
    store: Arc<NoteStore>,
    providers: ProviderRegistry,
    save_as_note: bool,
}

impl SummaryGateway {
    pub fn new(store: Arc<NoteStore>, providers: ProviderRegistry, save_as_note: bool) -> Self {
        Self {
            store,
            providers,
            save_as_note,
        }
    }

    /// Summarize `notes_id` according to `user_query` using `model_name`.
    ///
    /// Validation runs in a fixed order: required fields, then the note
    /// lookup, then the model name. A provider failure leaves the store as
    /// it was.
    pub async fn summarize(
        &self,
        notes_id: Option<&str>,
        user_query: Option<&str>,
        model_name: Option<&str>,
    ) -> Result<String> {
        let (notes_id, user_query) = match (non_empty(notes_id), non_empty(user_query)) {
            (Some(id), Some(query)) => (id, query),
            _ => return Err(NotesError::InvalidRequest(SUMMARY_FIELDS_REQUIRED.to_string())),
        };

        let note = self.store.get(notes_id)?;

        let model = model_name
            .unwrap_or_default()
            .parse::<ModelName>()
            .map_err(|_| NotesError::InvalidRequest(INVALID_MODEL_NAME.to_string()))?;

        let adapter = self.providers.get(model).ok_or_else(|| {
            log::warn!("[SUMMARY] No adapter registered for {}", model);
            NotesError::InvalidRequest(INVALID_MODEL_NAME.to_string())
        })?;

        let prompt = build_prompt(&note.text, user_query);
        log::debug!(
            "[SUMMARY] Dispatching note {} to {} ({} prompt chars)",
            note.id,
            model,
            prompt.len()
        );

        let generated = adapter.generate(&prompt).await.map_err(|e| {
            log::error!("[SUMMARY] {} failed for note {}: {}", model, note.id, e);
            NotesError::SummarizationFailed(e)
        })?;

        let summary = if generated.is_empty() {
            EMPTY_SUMMARY.to_string()
        } else {
            generated
        };

        if self.save_as_note {
            let saved = self.store.create(summary.clone());
            log::info!(
                "[SUMMARY] Saved summary of note {} as note {} ({} total)",
                note.id,
                saved.id,
                self.store.count()
            );
        }

        Ok(summary)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Single-shot prompt combining the note body and the caller's instruction.
pub fn build_prompt(note_text: &str, user_query: &str) -> String {
    format!(
        "You are a helpful assistant that summarizes notes.\n\n\
         Note:\n{}\n\n\
         Request:\n{}\n\n\
         Answer the request about the note in plain text.",
        note_text, user_query
    )
}
