//! In-memory cache of prepared annotators, keyed by catalog fingerprint.
//!
//! Rendering a recipe annotates each instruction against the same catalogs,
//! and an editor re-annotates on every change. Compiling the entity
//! alternation once per catalog version keeps that cheap.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use unit_catalog::UnitDefinition;

use crate::annotator::Annotator;
use crate::catalog::catalog_fingerprint;
use crate::config::AnnotatorConfig;
use crate::types::{Entity, Segment};

/// Cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

pub struct AnnotatorCache {
    config: AnnotatorConfig,
    annotators: DashMap<String, Arc<Annotator>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl AnnotatorCache {
    pub fn new(config: AnnotatorConfig) -> Self {
        Self {
            config,
            annotators: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Get the annotator for these catalogs, building it on first use.
    ///
    /// When the cache is full it is cleared before inserting; catalogs that
    /// are still in use are rebuilt on their next request.
    pub fn get(&self, entities: &[Entity], units: &[UnitDefinition]) -> Arc<Annotator> {
        let key = catalog_fingerprint(entities, units);

        if let Some(annotator) = self.annotators.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(annotator.value());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let annotator = Arc::new(Annotator::with_config(entities, units, &self.config));

        if self.annotators.len() >= self.config.cache_capacity.max(1) {
            tracing::debug!(
                "Annotator cache full ({} entries), clearing",
                self.annotators.len()
            );
            self.annotators.clear();
        }
        self.annotators.insert(key, Arc::clone(&annotator));

        annotator
    }

    pub fn annotate(
        &self,
        text: &str,
        entities: &[Entity],
        units: &[UnitDefinition],
    ) -> Vec<Segment> {
        self.get(entities, units).annotate(text)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.annotators.len(),
        }
    }
}

impl Default for AnnotatorCache {
    fn default() -> Self {
        Self::new(AnnotatorConfig::default())
    }
}
