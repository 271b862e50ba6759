//! AnalyzerCatalog: lazily loaded, process-shared list of external analyzers.
//!
//! The analyzers themselves come from a [`RuleSource`]; how they are discovered
//! is up to the source. The catalog guarantees a single load per cache
//! generation regardless of how many threads ask at once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use unilint_core::FxHashMap;

use super::category::{classify, RuleCategory};

/// Metadata of one diagnostic an analyzer can report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub default_severity: String,
    pub help_link: Option<String>,
}

/// An external analyzer and the diagnostics it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalAnalyzer {
    pub name: String,
    pub supported: Vec<RuleDescriptor>,
}

impl ExternalAnalyzer {
    pub fn rule_ids(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(|d| d.id.as_str())
    }
}

/// Provider of the currently available external analyzers.
pub trait RuleSource: Send + Sync {
    fn load(&self) -> Vec<ExternalAnalyzer>;
}

impl<F> RuleSource for F
where
    F: Fn() -> Vec<ExternalAnalyzer> + Send + Sync,
{
    fn load(&self) -> Vec<ExternalAnalyzer> {
        self()
    }
}

/// Cached view over a [`RuleSource`].
///
/// The cache lives in the instance. Use [`install_shared`] and [`shared`] for
/// the one catalog the whole process reads through.
pub struct AnalyzerCatalog<S> {
    source: S,
    cached: RwLock<Option<Arc<[ExternalAnalyzer]>>>,
    load_lock: Mutex<()>,
    loads: AtomicUsize,
}

/// Source type of the process-wide catalog.
pub type SharedSource = fn() -> Vec<ExternalAnalyzer>;

/// The process-wide catalog.
pub type SharedCatalog = AnalyzerCatalog<SharedSource>;

static SHARED: OnceLock<SharedCatalog> = OnceLock::new();

/// Install the process-wide catalog. Returns `false` if one was already
/// installed, in which case the existing catalog and its cache are kept.
pub fn install_shared(source: SharedSource) -> bool {
    let installed = SHARED.set(AnalyzerCatalog::new(source)).is_ok();
    if !installed {
        tracing::debug!("shared analyzer catalog already installed");
    }
    installed
}

/// The process-wide catalog, if installed.
pub fn shared() -> Option<&'static SharedCatalog> {
    SHARED.get()
}

impl<S: RuleSource> AnalyzerCatalog<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cached: RwLock::new(None),
            load_lock: Mutex::new(()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Cached analyzers, loading them on first use.
    ///
    /// Concurrent first callers block on one load and all observe its result.
    pub fn get_or_load(&self) -> Arc<[ExternalAnalyzer]> {
        if let Some(cached) = self.peek() {
            return cached;
        }

        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = self.peek() {
            return cached;
        }

        let loaded: Arc<[ExternalAnalyzer]> = self.source.load().into();
        self.loads.fetch_add(1, Ordering::Relaxed);
        if loaded.is_empty() {
            tracing::warn!("rule source returned no analyzers");
        } else {
            tracing::info!(analyzers = loaded.len(), "loaded external analyzers");
        }

        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&loaded));
        loaded
    }

    /// Analyzers supporting at least one diagnostic in `category`.
    pub fn analyzers_for(&self, category: RuleCategory) -> Vec<ExternalAnalyzer> {
        let all = self.get_or_load();
        if category == RuleCategory::All {
            return all.to_vec();
        }
        all.iter()
            .filter(|analyzer| analyzer.rule_ids().any(|id| classify(id, category)))
            .cloned()
            .collect()
    }

    /// Every supported diagnostic, first descriptor per id wins, sorted by id.
    pub fn available_diagnostics(&self) -> Vec<RuleDescriptor> {
        let all = self.get_or_load();
        let mut by_id: FxHashMap<&str, &RuleDescriptor> = FxHashMap::default();
        for descriptor in all.iter().flat_map(|a| a.supported.iter()) {
            by_id.entry(descriptor.id.as_str()).or_insert(descriptor);
        }
        let mut diagnostics: Vec<RuleDescriptor> = by_id.into_values().cloned().collect();
        diagnostics.sort_by(|a, b| a.id.cmp(&b.id));
        diagnostics
    }

    /// Drop the cached list. Waits for an in-flight load, so the next
    /// `get_or_load` always reloads from the source.
    pub fn clear_cache(&self) {
        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = None;
        tracing::debug!("analyzer cache cleared");
    }

    pub fn is_loaded(&self) -> bool {
        self.peek().is_some()
    }

    /// Number of times the source has been loaded.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    fn peek(&self) -> Option<Arc<[ExternalAnalyzer]>> {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
