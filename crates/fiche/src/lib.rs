//! Typed client for the slice of the AnkiConnect API the fiche importer
//! uses: probing the add-on, creating the day's deck, and adding notes.
//!
//! # Quick Start
//!
//! ```no_run
//! use fiche::{AnkiClient, NoteRecord};
//!
//! # async fn example() -> fiche::Result<()> {
//! let client = AnkiClient::new();
//!
//! let record = NoteRecord {
//!     expression: "avoir le cafard".to_string(),
//!     translation: "to feel down".to_string(),
//!     note: String::new(),
//!     alternative: String::new(),
//! };
//! client.submit_note(&record).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! - Anki must be running with the [AnkiConnect](https://ankiweb.net/shared/info/2055492159) add-on installed
//! - By default, the client connects to `http://127.0.0.1:8765`

pub mod client;
pub mod deck;
pub mod error;
pub mod note;
mod request;

pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use note::{IMPORT_TAG, MODEL_NAME, NoteRecord};
