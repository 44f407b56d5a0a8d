//! Destination deck naming.
//!
//! Imported notes land in a per-day deck under one fixed parent, e.g.
//! `French::2026-08-06`. The name is derived from the local date on every
//! call; across midnight two calls can legitimately disagree, so callers
//! take one name per submission and never cache it.

use chrono::{Local, NaiveDate};

/// Parent deck for all imported notes.
pub const DECK_PREFIX: &str = "French";

/// Deck name for the current local date.
pub fn today() -> String {
    for_date(Local::now().date_naive())
}

/// Deck name for an arbitrary date.
pub fn for_date(date: NaiveDate) -> String {
    format!("{}::{}", DECK_PREFIX, date.format("%Y-%m-%d"))
}
