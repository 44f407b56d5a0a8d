//! The note record and the fixed payload `addNote` submits.

use serde::Serialize;

/// Note type every imported card uses.
pub const MODEL_NAME: &str = "French Listening";

/// Tag applied to every imported note.
pub const IMPORT_TAG: &str = "AnkiMaker";

/// One flashcard-to-be, as produced by the parser.
///
/// A record only exists with a non-empty trimmed `expression`; the other
/// fields may be empty. Records are built in one batch, never mutated, and
/// submitted exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    /// The primary term or phrase.
    pub expression: String,
    /// Free text, possibly multi-line.
    pub translation: String,
    /// Free-text annotation.
    pub note: String,
    /// Reserved; always empty for now.
    pub alternative: String,
}

/// `addNote` parameters for one record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NotePayload {
    deck_name: String,
    model_name: &'static str,
    fields: NoteFields,
    options: NoteOptions,
    tags: [&'static str; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NoteOptions {
    allow_duplicate: bool,
}

/// The field map of the "French Listening" model. The model carries both a
/// Latin-script and a localized name for the expression, translation and
/// note fields; both spellings receive the same value.
#[derive(Debug, Serialize)]
struct NoteFields {
    #[serde(rename = "Expression")]
    expression: String,
    #[serde(rename = "法语表达")]
    expression_localized: String,
    #[serde(rename = "Translation")]
    translation: String,
    #[serde(rename = "翻译")]
    translation_localized: String,
    #[serde(rename = "Note")]
    note: String,
    #[serde(rename = "NOTE")]
    note_localized: String,
    #[serde(rename = "Alternative")]
    alternative: String,
    #[serde(rename = "Audio")]
    audio: String,
    #[serde(rename = "Image")]
    image: String,
    #[serde(rename = "Hint")]
    hint: String,
    #[serde(rename = "Extra")]
    extra: String,
}

impl NotePayload {
    pub(crate) fn new(deck_name: String, record: &NoteRecord) -> Self {
        let expression = record.expression.trim().to_string();
        Self {
            deck_name,
            model_name: MODEL_NAME,
            fields: NoteFields {
                expression: expression.clone(),
                expression_localized: expression,
                translation: record.translation.clone(),
                translation_localized: record.translation.clone(),
                note: record.note.clone(),
                note_localized: record.note.clone(),
                alternative: record.alternative.clone(),
                audio: String::new(),
                image: String::new(),
                hint: String::new(),
                extra: String::new(),
            },
            options: NoteOptions {
                allow_duplicate: false,
            },
            tags: [IMPORT_TAG],
        }
    }
}
