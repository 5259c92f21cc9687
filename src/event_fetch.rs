use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::events::{EventRecord, parse_events_json};
use crate::http_cache::fetch_text_cached;
use crate::http_client::http_client;

pub const STATSBOMB_EVENTS_URL: &str =
    "https://raw.githubusercontent.com/statsbomb/open-data/master/data/events";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    Remote { base_url: String },
    File(PathBuf),
}

impl Default for EventSource {
    fn default() -> Self {
        Self::Remote {
            base_url: STATSBOMB_EVENTS_URL.to_string(),
        }
    }
}

pub fn events_url(base_url: &str, match_id: u64) -> String {
    format!("{}/{match_id}.json", base_url.trim_end_matches('/'))
}

pub fn load_match_events(source: &EventSource, match_id: u64) -> Result<Vec<EventRecord>> {
    match source {
        EventSource::Remote { base_url } => fetch_match_events(base_url, match_id),
        EventSource::File(path) => load_events_file(path),
    }
}

pub fn fetch_match_events(base_url: &str, match_id: u64) -> Result<Vec<EventRecord>> {
    let client = http_client()?;
    let url = events_url(base_url, match_id);
    info!(%url, "fetching match events");
    let body = fetch_text_cached(client, &url)
        .with_context(|| format!("fetch events for match {match_id}"))?;
    parse_events_json(&body).with_context(|| format!("parse events for match {match_id}"))
}

pub fn load_events_file(path: &Path) -> Result<Vec<EventRecord>> {
    info!(path = %path.display(), "reading match events");
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_events_json(&raw).with_context(|| format!("parse {}", path.display()))
}
