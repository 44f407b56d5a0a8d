//! Wire types for the AnkiConnect protocol.

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::note::NotePayload;

/// Protocol version sent with every request.
pub(crate) const PROTOCOL_VERSION: u8 = 6;

/// One request to AnkiConnect, one variant per action this crate uses.
///
/// Serializing a variant produces the `{"action", "version", "params"}`
/// envelope AnkiConnect expects; routing every action through this enum
/// keeps the envelope in a single encoder.
#[derive(Debug)]
pub(crate) enum Action<'a> {
    /// Probe the add-on; params are an empty object.
    Version,
    /// Create a deck. Idempotent on the Anki side.
    CreateDeck { deck: &'a str },
    /// Add a single note.
    AddNote { note: NotePayload },
}

impl Action<'_> {
    fn name(&self) -> &'static str {
        match self {
            Action::Version => "version",
            Action::CreateDeck { .. } => "createDeck",
            Action::AddNote { .. } => "addNote",
        }
    }
}

#[derive(Serialize)]
struct EmptyParams {}

#[derive(Serialize)]
struct CreateDeckParams<'a> {
    deck: &'a str,
}

#[derive(Serialize)]
struct AddNoteParams<'a> {
    note: &'a NotePayload,
}

impl Serialize for Action<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut envelope = serializer.serialize_struct("Action", 3)?;
        envelope.serialize_field("action", self.name())?;
        envelope.serialize_field("version", &PROTOCOL_VERSION)?;
        match self {
            Action::Version => envelope.serialize_field("params", &EmptyParams {})?,
            Action::CreateDeck { deck } => {
                envelope.serialize_field("params", &CreateDeckParams { deck: *deck })?;
            }
            Action::AddNote { note } => {
                envelope.serialize_field("params", &AddNoteParams { note })?;
            }
        }
        envelope.end()
    }
}

/// The response envelope AnkiConnect wraps every reply in.
#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse<T> {
    /// Payload on success; absent or null otherwise.
    pub result: Option<T>,
    /// Error message when the action failed.
    pub error: Option<String>,
}
