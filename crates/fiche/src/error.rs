//! Error types for AnkiConnect operations.
//!
//! Everything here stays recoverable: [`AnkiClient::is_alive`] and
//! [`AnkiClient::ensure_deck`] fold failures into `false` at the component
//! boundary, and the importer counts [`AnkiClient::submit_note`] errors
//! instead of propagating them.
//!
//! [`AnkiClient::is_alive`]: crate::AnkiClient::is_alive
//! [`AnkiClient::ensure_deck`]: crate::AnkiClient::ensure_deck
//! [`AnkiClient::submit_note`]: crate::AnkiClient::submit_note

use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network failure from reqwest, including an unparseable response
    /// body. For refused connections see [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection refused; Anki is likely not running, or the AnkiConnect
    /// add-on is not loaded.
    #[error("could not connect to Anki; is Anki running with AnkiConnect loaded?")]
    ConnectionRefused,

    /// AnkiConnect reported the note as a duplicate.
    #[error("note already exists in the collection")]
    Duplicate,

    /// AnkiConnect returned an error message other than a duplicate.
    #[error("AnkiConnect error: {0}")]
    Anki(String),

    /// Response carried neither a result nor an error.
    #[error("AnkiConnect returned an empty response")]
    EmptyResponse,

    /// The destination deck could not be created; the note submission was
    /// never attempted.
    #[error("could not create deck '{0}'")]
    DeckCreation(String),
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
