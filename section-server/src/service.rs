//! Section lookup.
//!
//! Answers "where along the platform does wagon N of train T stop at
//! station S?" by scanning the station's data files in order until one has
//! a record for the wagon.

use std::path::PathBuf;

use crate::cache::{CacheConfig, SectionCache};
use crate::domain::{Query, SectionList, StationPrefix};
use crate::locator::{CandidateProvider, DirectoryLocator};
use crate::scanner::{ScanError, scan_file};

/// Errors from a section lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// No data file exists for the station
    #[error("no data files found for station {station}")]
    NoMatchingFiles { station: StationPrefix },

    /// A data file could not be read or parsed
    #[error("failed to scan {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: ScanError,
    },
}

/// Looks up wagon sections, caching results per query.
pub struct SectionService<P = DirectoryLocator> {
    provider: P,
    cache: SectionCache,
}

impl SectionService<DirectoryLocator> {
    /// Create a service reading data files from `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>, cache_config: &CacheConfig) -> Self {
        Self::new(DirectoryLocator::new(dir), cache_config)
    }
}

impl<P: CandidateProvider> SectionService<P> {
    /// Create a new service over the given candidate provider.
    pub fn new(provider: P, cache_config: &CacheConfig) -> Self {
        Self {
            provider,
            cache: SectionCache::new(cache_config),
        }
    }

    /// Look up the sections for a query, using the cache if possible.
    ///
    /// An empty list means the station has data files but none of them
    /// describe this train and wagon. Successful results, empty or not, are
    /// cached; errors are not.
    pub fn lookup(&self, query: &Query) -> Result<SectionList, LookupError> {
        if let Some(cached) = self.cache.get(query) {
            tracing::debug!(
                station = %query.station,
                train = %query.train,
                wagon = %query.wagon,
                "section cache hit"
            );
            return Ok(cached);
        }

        let sections = self.lookup_uncached(query)?;
        self.cache.insert(query.clone(), sections.clone());
        Ok(sections)
    }

    /// Look up the sections for a query without reading or writing the
    /// cache.
    pub fn lookup_uncached(&self, query: &Query) -> Result<SectionList, LookupError> {
        let files = self.provider.candidates(&query.station);
        if files.is_empty() {
            return Err(LookupError::NoMatchingFiles {
                station: query.station.clone(),
            });
        }

        for path in files {
            let sections = scan_file(&path, query.train, query.wagon).map_err(|source| {
                tracing::debug!(path = %path.display(), error = %source, "data file scan failed");
                LookupError::Scan {
                    path: path.clone(),
                    source,
                }
            })?;

            if !sections.is_empty() {
                tracing::debug!(
                    station = %query.station,
                    train = %query.train,
                    wagon = %query.wagon,
                    path = %path.display(),
                    count = sections.len(),
                    "sections found"
                );
                return Ok(sections.into());
            }
        }

        tracing::debug!(
            station = %query.station,
            train = %query.train,
            wagon = %query.wagon,
            "no record for wagon"
        );
        Ok(SectionList::from(Vec::new()))
    }

    /// The candidate provider in use.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
