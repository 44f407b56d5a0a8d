//! The AnkiConnect client and builder.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::deck;
use crate::error::{Error, Result};
use crate::note::{NotePayload, NoteRecord};
use crate::request::{Action, WireResponse};

/// Default URL for AnkiConnect.
const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the three AnkiConnect actions the importer needs.
///
/// # Example
///
/// ```no_run
/// use fiche::AnkiClient;
///
/// # async fn example() {
/// let client = AnkiClient::new();
///
/// if !client.is_alive().await {
///     eprintln!("start Anki with the AnkiConnect add-on first");
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnkiClient {
    /// Create a client with default settings.
    ///
    /// Connects to `http://127.0.0.1:8765` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Probe the AnkiConnect add-on.
    ///
    /// True only for an HTTP 200 with a non-empty body; any transport
    /// failure, other status, or empty body reads as "not running". Never
    /// errors.
    pub async fn is_alive(&self) -> bool {
        let response = match self.post(&Action::Version).await {
            Ok(response) => response,
            Err(_) => return false,
        };
        if response.status() != StatusCode::OK {
            return false;
        }
        matches!(response.bytes().await, Ok(body) if !body.is_empty())
    }

    /// Make sure a deck exists.
    ///
    /// AnkiConnect's `createDeck` is idempotent, so a deck that already
    /// exists still reads as success. Transport failures, malformed
    /// responses and error replies all fold into `false`.
    pub async fn ensure_deck(&self, deck: &str) -> bool {
        match self
            .roundtrip::<serde_json::Value>(&Action::CreateDeck { deck })
            .await
        {
            Ok(response) => response.error.is_none(),
            Err(_) => false,
        }
    }

    /// Submit one parsed record as a new note in today's deck.
    ///
    /// The destination deck is derived from the current date and created
    /// first; if that fails, the note is not sent and
    /// [`Error::DeckCreation`] is returned. A response whose error mentions
    /// a duplicate maps to [`Error::Duplicate`]; any other error message
    /// maps to [`Error::Anki`]. Success requires a non-null `result`.
    pub async fn submit_note(&self, record: &NoteRecord) -> Result<()> {
        let deck = deck::today();
        if !self.ensure_deck(&deck).await {
            return Err(Error::DeckCreation(deck));
        }

        let note = NotePayload::new(deck, record);
        let response = self
            .roundtrip::<serde_json::Value>(&Action::AddNote { note })
            .await?;

        match (response.result, response.error) {
            (_, Some(message)) if message.contains("duplicate") => Err(Error::Duplicate),
            (_, Some(message)) => Err(Error::Anki(message)),
            (Some(_), None) => Ok(()),
            (None, None) => Err(Error::EmptyResponse),
        }
    }

    /// POST one action, mapping refused connections to their own variant.
    async fn post(&self, action: &Action<'_>) -> Result<reqwest::Response> {
        self.http
            .post(&self.base_url)
            .json(action)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::ConnectionRefused
                } else {
                    Error::Http(e)
                }
            })
    }

    /// POST one action and decode the response envelope.
    async fn roundtrip<R>(&self, action: &Action<'_>) -> Result<WireResponse<R>>
    where
        R: DeserializeOwned,
    {
        let response = self.post(action).await?;
        Ok(response.json().await?)
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use fiche::AnkiClient;
///
/// let client = AnkiClient::builder()
///     .url("http://localhost:8765")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the AnkiConnect URL.
    ///
    /// Defaults to `http://127.0.0.1:8765`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> AnkiClient {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("failed to build HTTP client");

        AnkiClient {
            http,
            base_url: self.base_url,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
