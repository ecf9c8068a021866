//! Load-once memoization of parsed program collections.
//!
//! Keyed by the source's identity (canonical path, length, modification
//! time) plus a fingerprint of the loading configuration. Repeated loads
//! within a session return the already-parsed collection without
//! re-reading the file; any key change invalidates.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::GradmapConfig;
use crate::core::Program;
use crate::errors::GradmapError;
use crate::io::loader;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
    config_fingerprint: String,
}

impl SourceKey {
    fn for_source(path: &Path, config: &GradmapConfig) -> Result<Self, GradmapError> {
        let metadata = fs::metadata(path)
            .map_err(|e| GradmapError::load(path, format!("cannot stat file: {e}")))?;
        Ok(Self {
            path: fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
            len: metadata.len(),
            modified: metadata.modified().ok(),
            // Only the imputation section influences parsing.
            config_fingerprint: toml::to_string(&config.imputation).unwrap_or_default(),
        })
    }
}

/// Session-scoped cache of parsed program collections.
#[derive(Default)]
pub struct SourceCache {
    entries: HashMap<SourceKey, Vec<Program>>,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a source through the cache.
    pub fn load(&mut self, path: &Path, config: &GradmapConfig) -> Result<&[Program], GradmapError> {
        let key = SourceKey::for_source(path, config)?;
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                log::debug!("source cache hit for {}", path.display());
                Ok(entry.into_mut().as_slice())
            }
            Entry::Vacant(entry) => {
                let programs = loader::load_programs(path, config)?;
                log::debug!(
                    "cached {} program(s) from {}",
                    programs.len(),
                    path.display()
                );
                Ok(entry.insert(programs).as_slice())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
