// src/fetch/mod.rs
//
// Raw source fetcher: resolve a table to raw ASCII text from a local copy
// or a remote URL. Several publishers sit behind CAPTCHA walls, so a local
// copy is always preferred when it exists.

use std::fs;
use std::path::Path;

use reqwest::blocking::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{Error, Result};

/// What to fetch and where to keep the raw text, if anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchSpec<'a> {
    /// Local copy, tried first when the file exists.
    pub local_path: Option<&'a Path>,
    /// Remote fallback (possibly proxy-prefixed by the caller).
    pub url: Option<&'a str>,
    /// If set, the raw fetched text is persisted here.
    pub save_raw_to: Option<&'a Path>,
}

/// Fetch raw ASCII per the spec: local path first if it exists, URL
/// otherwise. Fails with `Error::Fetch` listing everything that was tried.
pub fn fetch_ascii(client: &Client, spec: &FetchSpec) -> Result<String> {
    if spec.local_path.is_none() && spec.url.is_none() {
        return Err(Error::InvalidArgument(
            "fetch needs a local path or a URL".into(),
        ));
    }

    let mut attempts = Vec::new();
    let mut last_cause = String::new();

    if let Some(path) = spec.local_path {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(text) => {
                    debug!(path = %path.display(), bytes = text.len(), "read local copy");
                    save_raw(spec, &text)?;
                    return Ok(text);
                }
                Err(e) => {
                    last_cause = e.to_string();
                    attempts.push(path.display().to_string());
                    warn!(path = %path.display(), error = %e, "local copy unreadable");
                }
            }
        } else {
            attempts.push(path.display().to_string());
            last_cause = "file not found".into();
        }
    }

    if let Some(url) = spec.url {
        match fetch_url(client, url) {
            Ok(text) => {
                info!(url, bytes = text.len(), "downloaded");
                save_raw(spec, &text)?;
                return Ok(text);
            }
            Err(e) => {
                last_cause = e.to_string();
                attempts.push(url.to_string());
            }
        }
    }

    Err(Error::Fetch {
        attempts,
        cause: last_cause,
    })
}

fn fetch_url(client: &Client, url: &str) -> std::result::Result<String, String> {
    Url::parse(url).map_err(|e| format!("invalid URL {url}: {e}"))?;
    client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|e| e.to_string())
}

fn save_raw(spec: &FetchSpec, text: &str) -> Result<()> {
    if let Some(dest) = spec.save_raw_to {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(dest, text)?;
        debug!(path = %dest.display(), "saved raw source");
    }
    Ok(())
}

/// Try `url` through each proxy prefix in order, stopping at the first
/// success. Exhaustion surfaces as one aggregated `Error::Fetch` naming
/// every attempt and the last underlying cause; nothing is retried beyond
/// the configured list. Pure over its inputs: the actual transport is the
/// `attempt` closure.
pub fn try_proxies<F>(url: &str, proxies: &[String], mut attempt: F) -> Result<String>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut attempts = Vec::new();
    let mut last_cause = String::from("no proxies configured");

    for proxy in proxies {
        let full = format!("{proxy}{url}");
        match attempt(&full) {
            Ok(text) => return Ok(text),
            Err(e) => {
                warn!(attempt = %full, error = %e, "proxy attempt failed");
                last_cause = e.to_string();
                attempts.push(full);
            }
        }
    }

    Err(Error::Fetch {
        attempts,
        cause: last_cause,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn local_copy_is_preferred_over_url() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "local data").unwrap();

        let client = Client::new();
        let spec = FetchSpec {
            local_path: Some(tmp.path()),
            // would fail if attempted
            url: Some("http://127.0.0.1:9/nope.txt"),
            save_raw_to: None,
        };
        let text = fetch_ascii(&client, &spec).unwrap();
        assert_eq!(text, "local data\n");
    }

    #[test]
    fn missing_local_and_no_url_is_a_fetch_error() {
        let client = Client::new();
        let spec = FetchSpec {
            local_path: Some(Path::new("/definitely/not/here.txt")),
            url: None,
            save_raw_to: None,
        };
        let err = fetch_ascii(&client, &spec).unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
        assert!(err.to_string().contains("not/here.txt"));
    }

    #[test]
    fn no_source_at_all_is_rejected_before_io() {
        let client = Client::new();
        let err = fetch_ascii(&client, &FetchSpec::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn raw_text_is_persisted_when_requested() {
        let mut src = NamedTempFile::new().unwrap();
        write!(src, "raw table").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested").join("raw.txt");

        let client = Client::new();
        let spec = FetchSpec {
            local_path: Some(src.path()),
            url: None,
            save_raw_to: Some(&dest),
        };
        fetch_ascii(&client, &spec).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "raw table");
    }

    #[test]
    fn proxy_fallback_stops_at_first_success() {
        let calls = Cell::new(0usize);
        let proxies = vec!["p1:".to_string(), "p2:".to_string(), "p3:".to_string()];
        let out = try_proxies("u", &proxies, |full| {
            calls.set(calls.get() + 1);
            if full.starts_with("p2:") {
                Ok("hit".into())
            } else {
                Err(Error::InvalidArgument("down".into()))
            }
        })
        .unwrap();
        assert_eq!(out, "hit");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn proxy_exhaustion_aggregates_every_attempt() {
        let calls = Cell::new(0usize);
        let proxies = vec!["p1:".to_string(), "p2:".to_string()];
        let err = try_proxies("u", &proxies, |_| {
            calls.set(calls.get() + 1);
            Err(Error::InvalidArgument("down".into()))
        })
        .unwrap_err();

        // exactly two attempts, both named, no third
        assert_eq!(calls.get(), 2);
        match &err {
            Error::Fetch { attempts, cause } => {
                assert_eq!(attempts, &vec!["p1:u".to_string(), "p2:u".to_string()]);
                assert!(cause.contains("down"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
