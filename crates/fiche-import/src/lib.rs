//! Text-to-Anki import workflows on top of the [`fiche`] client.
//!
//! [`parse_notes`] turns a capture file into [`NoteRecord`]s and
//! [`Importer`] submits them, one note per record, reporting aggregate
//! counts and optional progress events.
//!
//! # Example
//!
//! ```no_run
//! use fiche::AnkiClient;
//! use fiche_import::{Importer, parse_notes};
//!
//! # async fn example() {
//! let records = parse_notes("[Expression]:\nchat\n[Translation]:\ncat\n");
//! let report = Importer::new(AnkiClient::new()).import_all(records).await;
//! println!("{} imported, {} failed", report.succeeded, report.failed);
//! # }
//! ```

pub mod import;
pub mod parse;

pub use import::{ImportEvent, ImportFailure, ImportReport, Importer};
pub use parse::parse_notes;

// Re-export the client types front ends need alongside the workflows.
pub use fiche::{AnkiClient, ClientBuilder, Error, NoteRecord};
