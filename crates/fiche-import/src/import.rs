//! Batch submission of parsed records.
//!
//! The importer drives one [`AnkiClient::submit_note`] call per record and
//! tallies outcomes. A failed record never aborts the batch; failures are
//! counted and logged, and the aggregate report is the single user-facing
//! result.
//!
//! [`AnkiClient::submit_note`]: fiche::AnkiClient::submit_note

use fiche::{AnkiClient, Error, NoteRecord};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Outcome counts for one import batch.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Notes accepted by Anki.
    pub succeeded: usize,
    /// Notes that failed for any reason, duplicates included.
    pub failed: usize,
    /// Details about failed submissions, for diagnostics.
    pub failures: Vec<ImportFailure>,
}

/// Details about one failed submission.
#[derive(Debug, Clone)]
pub struct ImportFailure {
    /// Index of the record in the parsed batch.
    pub index: usize,
    /// Error message.
    pub error: String,
}

/// Progress notifications for a front end.
///
/// [`ImportEvent::Finished`] is sent exactly once, after every record has
/// reported; there is no other completion signal.
#[derive(Debug)]
pub enum ImportEvent {
    /// The batch was accepted; `total` submissions will follow.
    Started {
        /// Number of records in the batch.
        total: usize,
    },
    /// One record finished, in completion order.
    NoteFinished {
        /// Index of the record in the parsed batch.
        index: usize,
        /// Submission outcome for that record.
        outcome: Result<(), Error>,
    },
    /// Every record has reported.
    Finished {
        /// Final tally for the batch.
        report: ImportReport,
    },
}

/// Drives one submission per record and tallies outcomes.
#[derive(Debug)]
pub struct Importer {
    client: AnkiClient,
    events: Option<UnboundedSender<ImportEvent>>,
}

impl Importer {
    /// Create an importer without progress events.
    pub fn new(client: AnkiClient) -> Self {
        Self {
            client,
            events: None,
        }
    }

    /// Send progress events to `sender` while importing.
    pub fn with_events(mut self, sender: UnboundedSender<ImportEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Submit every record and report aggregate counts.
    ///
    /// Submissions run concurrently and independently: one failure never
    /// aborts the batch, and completion order is unspecified. Completions
    /// drain through this task alone, so the tally needs no lock.
    pub async fn import_all(&self, records: Vec<NoteRecord>) -> ImportReport {
        let total = records.len();
        debug!(total, "starting import");
        self.emit(ImportEvent::Started { total });

        let mut submissions = JoinSet::new();
        for (index, record) in records.into_iter().enumerate() {
            let client = self.client.clone();
            submissions.spawn(async move { (index, client.submit_note(&record).await) });
        }

        let mut report = ImportReport::default();
        while let Some(joined) = submissions.join_next().await {
            let Ok((index, outcome)) = joined else {
                // a panicked submission task still counts against the batch
                report.failed += 1;
                continue;
            };
            match &outcome {
                Ok(()) => report.succeeded += 1,
                Err(error) => {
                    warn!(index, %error, "note submission failed");
                    report.failed += 1;
                    report.failures.push(ImportFailure {
                        index,
                        error: error.to_string(),
                    });
                }
            }
            self.emit(ImportEvent::NoteFinished { index, outcome });
        }

        debug!(
            succeeded = report.succeeded,
            failed = report.failed,
            "import finished"
        );
        self.emit(ImportEvent::Finished {
            report: report.clone(),
        });
        report
    }

    fn emit(&self, event: ImportEvent) {
        // a hung-up receiver must not fail the import
        if let Some(events) = &self.events {
            let _ = events.send(event);
        }
    }
}
