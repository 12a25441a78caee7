//! Offline availability for the application's static assets
//!
//! This module mirrors the platform's service-worker lifecycle over a folder of named
//! caches: install populates a cache named after the running version, activation evicts
//! every cache belonging to another version, and fetches are answered cache-first with a
//! network fallback. Navigations that are both uncached and offline get the application
//! shell, so the application still loads without a network.
//!
//! The cache is populated at install time only; successful network responses are never
//! written back.

mod fetcher;
pub use fetcher::{AssetFetcher, HttpFetcher};

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::settings::{APP_SHELL, ASSET_MANIFEST, CACHE_NAME};

/// Catalogue file of one named cache, mapping request paths to entry file names
const INDEX_FILE: &str = "index.json";

/// How a request reached the cache manager
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestMode {
    /// A top-level page load; falls back to the application shell when offline
    Navigation,
    /// Everything else (scripts, styles, images, sounds); no fallback
    Subresource,
}

/// An intercepted request
#[derive(Clone, Debug)]
pub struct Request {
    pub path: String,
    pub mode: RequestMode,
}

impl Request {
    pub fn navigation(path: &str) -> Self {
        Self {
            path: path.to_string(),
            mode: RequestMode::Navigation,
        }
    }

    pub fn subresource(path: &str) -> Self {
        Self {
            path: path.to_string(),
            mode: RequestMode::Subresource,
        }
    }
}

/// On-disk catalogue of one named cache.
///
/// The index is written last during install: a cache directory without its index has not
/// finished installing and never serves anything.
#[derive(Default, Debug, Serialize, Deserialize)]
struct CacheIndex {
    entries: HashMap<String, String>,
}

/// The named asset caches below one root folder, one of which belongs to the running version
pub struct OfflineCache {
    root: PathBuf,
    cache_name: String,
}

impl OfflineCache {
    /// The cache manager for the running version (see [`settings::CACHE_NAME`](crate::settings::CACHE_NAME))
    pub fn new(root: &Path) -> Self {
        Self::with_cache_name(root, CACHE_NAME.as_str())
    }

    /// A cache manager pinned to an explicit cache name. Mostly useful to model what an
    /// older version of the application left behind.
    pub fn with_cache_name(root: &Path, cache_name: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            cache_name: cache_name.to_string(),
        }
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// Whether install has run to completion for this cache
    pub fn is_installed(&self) -> bool {
        self.load_index().is_some()
    }

    /// Install phase: fetch every asset of the manifest and pin it.
    ///
    /// All-or-nothing: every asset is fetched before anything is committed, and the index
    /// that makes the cache servable is only written once every body is on disk. Any
    /// failure leaves the cache uninstalled; the platform is expected to retry install on
    /// a later load, there is no retry logic here.
    pub async fn install(&self, fetcher: &dyn AssetFetcher) -> Result<(), Box<dyn Error>> {
        let mut bodies = Vec::with_capacity(ASSET_MANIFEST.len());
        for path in ASSET_MANIFEST {
            let body = fetcher.fetch(path).await?;
            bodies.push((*path, body));
        }

        let dir = self.cache_dir();
        fs::create_dir_all(&dir)?;
        let mut index = CacheIndex::default();
        for (path, body) in bodies {
            let file_name = entry_file_name(path);
            fs::write(dir.join(&file_name), &body)?;
            index.entries.insert(path.to_string(), file_name);
        }

        let file = fs::File::create(self.index_file())?;
        serde_json::to_writer(file, &index)?;
        log::debug!(
            "Installed {} assets into cache {}",
            index.entries.len(),
            self.cache_name
        );
        Ok(())
    }

    /// Activate phase: evict every cache that does not belong to this version.
    ///
    /// Bumping the version string in the source is all it takes to drop every previously
    /// cached asset on the next activation; no cache ever mixes entries from two versions.
    pub fn activate(&self) -> Result<(), Box<dyn Error>> {
        let entries = match fs::read_dir(&self.root) {
            // No cache was ever installed under this root; nothing to evict
            Err(_) => return Ok(()),
            Ok(entries) => entries,
        };
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if entry.file_name().to_string_lossy() != self.cache_name {
                log::debug!("Evicting stale cache {:?}", entry.file_name());
                fs::remove_dir_all(entry.path())?;
            }
        }
        Ok(())
    }

    /// Exact-path lookup in this cache. Returns nothing unless install has completed.
    pub fn lookup(&self, path: &str) -> Option<Vec<u8>> {
        let index = self.load_index()?;
        let file_name = index.entries.get(path)?;
        fs::read(self.cache_dir().join(file_name)).ok()
    }

    /// Fetch phase: cache first, then network. Navigations additionally fall back to the
    /// cached application shell when the network fails too.
    pub async fn handle_fetch(
        &self,
        request: &Request,
        fetcher: &dyn AssetFetcher,
    ) -> Result<Vec<u8>, Box<dyn Error>> {
        if let Some(body) = self.lookup(&request.path) {
            return Ok(body);
        }
        match fetcher.fetch(&request.path).await {
            Ok(body) => Ok(body),
            Err(err) => match request.mode {
                RequestMode::Navigation => self
                    .lookup(APP_SHELL)
                    .ok_or_else(|| -> Box<dyn Error> {
                        format!("Offline with no cached shell: {}", err).into()
                    }),
                RequestMode::Subresource => Err(err),
            },
        }
    }

    fn cache_dir(&self) -> PathBuf {
        self.root.join(&self.cache_name)
    }

    fn index_file(&self) -> PathBuf {
        self.cache_dir().join(INDEX_FILE)
    }

    fn load_index(&self) -> Option<CacheIndex> {
        let file = fs::File::open(self.index_file()).ok()?;
        match serde_json::from_reader(file) {
            Ok(index) => Some(index),
            Err(err) => {
                log::warn!("Unreadable index for cache {}: {}", self.cache_name, err);
                None
            }
        }
    }
}

/// Map a request path onto a file name that is safe inside the cache directory
fn entry_file_name(path: &str) -> String {
    sanitize_filename::sanitize_with_options(
        path,
        sanitize_filename::Options {
            replacement: "_",
            ..Default::default()
        },
    )
}
