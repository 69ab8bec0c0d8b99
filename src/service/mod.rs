// src/service/mod.rs
//
// Catalog facade: one preset getter per registered table, each wiring the
// static layout to its default fetch parameters and an explicit output
// filename. Callers that want their own paths/URLs go through `get`.

use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use tracing::info;

use crate::error::{Error, Result};
use crate::fetch::{self, FetchSpec};
use crate::layout::registry;
use crate::normalize::normalize;
use crate::parse::parse;
use crate::sink;
use crate::sources;
use crate::table::Table;

/// Where the process is running. A sandboxed browser runtime cannot reach
/// the publishers directly and goes through a CORS proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunContext {
    Local,
    Sandboxed,
}

const CORS_PROXY: &str = "https://api.allorigins.win/raw?url=";

/// Per-call overrides. Everything defaults to the curated source record.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetOptions<'a> {
    pub local_path: Option<&'a Path>,
    pub url: Option<&'a str>,
    /// Persist the raw fetched text here.
    pub save_raw_to: Option<&'a Path>,
    /// Write the normalized table as CSV under the session directory,
    /// with this filename.
    pub save_csv_as: Option<&'a str>,
}

pub struct Service {
    client: Client,
    proxies: Vec<String>,
    session_dir: PathBuf,
}

impl Service {
    pub fn new(ctx: RunContext) -> Self {
        match ctx {
            RunContext::Local => Self::with_config(vec![String::new()], "datafiles"),
            RunContext::Sandboxed => Self::with_config(vec![CORS_PROXY.to_string()], "user_data"),
        }
    }

    /// Explicit proxy list (ordered fallback) and session directory.
    pub fn with_config(proxies: Vec<String>, session_dir: impl Into<PathBuf>) -> Self {
        Service {
            client: Client::new(),
            proxies,
            session_dir: session_dir.into(),
        }
    }

    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }

    /// Fetch, parse and normalize one registered table.
    pub fn get(&self, source: &str, table: &str, options: &GetOptions) -> Result<Table> {
        let layout = registry::lookup(source, table)?;

        // destination is checked before any I/O happens
        let out_path = options
            .save_csv_as
            .map(|name| self.output_path(name))
            .transpose()?;

        let link = sources::data_link(source, table);
        let default_local = link.and_then(|l| l.local).map(Path::new);
        let local = options.local_path.or(default_local);
        let url = options.url.or(link.map(|l| l.url));

        let raw = self.fetch(local, url, options.save_raw_to)?;
        let rows = parse(&raw, layout);
        let normalized = normalize(rows, layout);
        info!(
            source,
            table,
            rows = normalized.num_rows(),
            "table normalized"
        );

        if let Some(path) = out_path {
            sink::write_csv(&normalized, &path)?;
        }
        Ok(normalized)
    }

    /// Local copy first; otherwise the URL through each proxy in order.
    fn fetch(
        &self,
        local: Option<&Path>,
        url: Option<&str>,
        save_raw_to: Option<&Path>,
    ) -> Result<String> {
        match (local, url) {
            (Some(path), _) if path.exists() => fetch::fetch_ascii(
                &self.client,
                &FetchSpec {
                    local_path: Some(path),
                    url: None,
                    save_raw_to,
                },
            ),
            (local, Some(url)) => {
                let result = fetch::try_proxies(url, &self.proxies, |full| {
                    fetch::fetch_ascii(
                        &self.client,
                        &FetchSpec {
                            local_path: None,
                            url: Some(full),
                            save_raw_to,
                        },
                    )
                });
                // a configured-but-absent local copy counts as an attempt
                match (result, local) {
                    (Err(Error::Fetch { mut attempts, cause }), Some(path)) => {
                        attempts.insert(0, path.display().to_string());
                        Err(Error::Fetch { attempts, cause })
                    }
                    (other, _) => other,
                }
            }
            (Some(path), None) => Err(Error::Fetch {
                attempts: vec![path.display().to_string()],
                cause: "file not found and no URL configured".into(),
            }),
            (None, None) => Err(Error::InvalidArgument(
                "no local path or URL for this table".into(),
            )),
        }
    }

    fn output_path(&self, name: &str) -> Result<PathBuf> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "output filename must not be empty".into(),
            ));
        }
        Ok(self.session_dir.join(name))
    }

    // ─── preset getters, one per registry entry ──────────────────────

    pub fn dotson2010_t1(&self) -> Result<Table> {
        self.preset("dotson2010", "t1", "dotson2010_t1.csv")
    }

    pub fn dotson2010_t2(&self) -> Result<Table> {
        self.preset("dotson2010", "t2", "dotson2010_t2.csv")
    }

    pub fn matthews2009_t6(&self) -> Result<Table> {
        self.preset("matthews2009", "t6", "matthews2009_t6.csv")
    }

    pub fn harris2018_t2(&self) -> Result<Table> {
        self.preset("harris2018", "t2", "harris2018_t2.csv")
    }

    pub fn harris2018_t3(&self) -> Result<Table> {
        self.preset("harris2018", "t3", "harris2018_t3.csv")
    }

    pub fn crutcher2010_t1(&self) -> Result<Table> {
        self.preset("crutcher2010", "t1", "crutcher2010_t1.csv")
    }

    pub fn jijina1999_t2(&self) -> Result<Table> {
        self.preset("jijina1999", "t2", "jijina1999_t2.csv")
    }

    pub fn liu2022_t1(&self) -> Result<Table> {
        self.preset("liu2022", "t1", "liu2022_t1.csv")
    }

    fn preset(&self, source: &str, table: &str, out: &str) -> Result<Table> {
        self.get(
            source,
            table,
            &GetOptions {
                save_csv_as: Some(out),
                ..Default::default()
            },
        )
    }

    /// Dispatch a getter by its catalog name, for the CLI.
    pub fn run(&self, getter: &str) -> Result<Table> {
        match getter {
            "dotson2010_t1" => self.dotson2010_t1(),
            "dotson2010_t2" => self.dotson2010_t2(),
            "matthews2009_t6" => self.matthews2009_t6(),
            "harris2018_t2" => self.harris2018_t2(),
            "harris2018_t3" => self.harris2018_t3(),
            "crutcher2010_t1" => self.crutcher2010_t1(),
            "jijina1999_t2" => self.jijina1999_t2(),
            "liu2022_t1" => self.liu2022_t1(),
            other => Err(Error::InvalidArgument(format!("unknown getter {other}"))),
        }
    }
}

/// Catalog names of all preset getters.
pub static GETTERS: &[&str] = &[
    "dotson2010_t1",
    "dotson2010_t2",
    "matthews2009_t6",
    "harris2018_t2",
    "harris2018_t3",
    "crutcher2010_t1",
    "jijina1999_t2",
    "liu2022_t1",
];
