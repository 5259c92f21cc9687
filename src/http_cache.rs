use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ETAG, HeaderName, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const CACHE_VERSION: u32 = 1;
const CACHE_DIR: &str = "shotmap";
const CACHE_FILE: &str = "http_cache.json";

static CACHE: Mutex<Option<HttpCacheFile>> = Mutex::new(None);

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct HttpCacheFile {
    version: u32,
    entries: HashMap<String, CacheEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    body: String,
    etag: Option<String>,
    last_modified: Option<String>,
    fetched_at: i64,
}

/// GET with on-disk revalidation: a 304 answer returns the cached body.
pub fn fetch_text_cached(client: &Client, url: &str) -> Result<String> {
    let cached_entry = {
        let mut guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
        let cache = guard.get_or_insert_with(load_cache_file);
        cache.entries.get(url).cloned()
    };

    let mut req = client.get(url);
    if let Some(entry) = cached_entry.as_ref() {
        if let Some(etag) = entry.etag.as_ref() {
            req = req.header(IF_NONE_MATCH, etag);
        }
        if let Some(last_modified) = entry.last_modified.as_ref() {
            req = req.header(IF_MODIFIED_SINCE, last_modified);
        }
    }

    let resp = req.send().with_context(|| format!("request failed: {url}"))?;
    let status = resp.status();
    let headers = resp.headers().clone();
    if status == StatusCode::NOT_MODIFIED {
        if let Some(entry) = cached_entry {
            debug!(%url, "not modified, using cached body");
            refresh_cache_entry(url, entry.clone());
            return Ok(entry.body);
        }
        return Err(anyhow!("received 304 without cache body"));
    }

    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow!("http {} for {}", status, url));
    }

    let header_string = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    };
    let entry = CacheEntry {
        body: body.clone(),
        etag: header_string(ETAG),
        last_modified: header_string(LAST_MODIFIED),
        fetched_at: chrono::Utc::now().timestamp(),
    };
    refresh_cache_entry(url, entry);
    Ok(body)
}

fn refresh_cache_entry(key: &str, entry: CacheEntry) {
    let mut guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    let cache = guard.get_or_insert_with(load_cache_file);
    cache.version = CACHE_VERSION;
    cache.entries.insert(key.to_string(), entry);
    if let Err(err) = save_cache_file(cache) {
        warn!("http cache not saved: {err:#}");
    }
}

fn load_cache_file() -> HttpCacheFile {
    let Some(path) = cache_path() else {
        return HttpCacheFile::default();
    };
    let Ok(raw) = fs::read_to_string(path) else {
        return HttpCacheFile::default();
    };
    let cache = serde_json::from_str::<HttpCacheFile>(&raw).unwrap_or_default();
    if cache.version != CACHE_VERSION {
        return HttpCacheFile::default();
    }
    cache
}

fn save_cache_file(cache: &HttpCacheFile) -> Result<()> {
    let Some(path) = cache_path() else {
        return Ok(());
    };
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    fs::create_dir_all(dir).context("create cache dir")?;
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string(cache).context("serialize http cache")?;
    fs::write(&tmp, json).context("write http cache")?;
    fs::rename(&tmp, &path).context("swap http cache")?;
    Ok(())
}

fn app_cache_dir() -> Option<PathBuf> {
    cache_dir_from(
        std::env::var("XDG_CACHE_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

fn cache_dir_from(xdg_cache_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    if let Some(base) = xdg_cache_home.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(base).join(CACHE_DIR));
    }
    let home = home.filter(|v| !v.trim().is_empty())?;
    Some(PathBuf::from(home).join(".cache").join(CACHE_DIR))
}

fn cache_path() -> Option<PathBuf> {
    app_cache_dir().map(|dir| dir.join(CACHE_FILE))
}
