//! Pattern compilation with a shared cache
//!
//! Locale word lists are reused for every sentence of every document, so
//! compiled patterns are memoized by the exact word-list value. The cache is
//! unbounded: word lists are small and finite per locale.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use regex::{Regex, RegexSet};

use crate::error::Result;
use crate::text::{add_word_boundary, boundary_class};

/// Compiled disjunction of two-part transition words
#[derive(Debug)]
pub struct TwoPartPattern {
    set: RegexSet,
    pairs: Vec<[String; 2]>,
}

impl TwoPartPattern {
    /// First pair, in list order, whose markers both occur in order
    pub fn find(&self, sentence: &str) -> Option<&[String; 2]> {
        self.set
            .matches(sentence)
            .iter()
            .next()
            .map(|index| &self.pairs[index])
    }

    /// Whether any pair matches
    pub fn is_match(&self, sentence: &str) -> bool {
        self.set.is_match(sentence)
    }

    /// Number of compiled pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the pattern was compiled from an empty list
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Compile two-part transition words into a single pattern
///
/// Each pair matches when its first marker occurs as a whole word and the
/// second occurs later in the sentence; matching is case-insensitive.
pub fn compile(pairs: &[[String; 2]]) -> Result<TwoPartPattern> {
    let boundary = boundary_class();
    let patterns = pairs.iter().map(|[first, second]| {
        format!(
            "(?i)(?:^|{boundary}){}{boundary}(?:.*{boundary})?{}(?:$|{boundary})",
            regex::escape(first),
            regex::escape(second)
        )
    });

    Ok(TwoPartPattern {
        set: RegexSet::new(patterns)?,
        pairs: pairs.to_vec(),
    })
}

/// Compile a single transition word into a case-insensitive whole-word pattern
pub fn compile_single(word: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("(?i){}", add_word_boundary(word)))?)
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

/// Memo table for compiled patterns
///
/// Read-mostly: lookups take a shared lock. Two threads missing on the same
/// key both compile, and the later insert wins; both results are identical.
#[derive(Debug, Default)]
pub struct PatternCache {
    two_part: RwLock<HashMap<Vec<[String; 2]>, Arc<TwoPartPattern>>>,
    single: RwLock<HashMap<String, Arc<Regex>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

static GLOBAL_CACHE: OnceLock<Arc<PatternCache>> = OnceLock::new();

impl PatternCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache used by [`PatternCompiler::default`]
    pub fn global() -> Arc<PatternCache> {
        Arc::clone(GLOBAL_CACHE.get_or_init(|| Arc::new(PatternCache::new())))
    }

    /// Current hit/miss counters and entry count
    pub fn stats(&self) -> CacheStats {
        let two_part = self.two_part.read().unwrap_or_else(PoisonError::into_inner).len();
        let single = self.single.read().unwrap_or_else(PoisonError::into_inner).len();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: two_part + single,
        }
    }

    fn two_part(&self, pairs: &[[String; 2]]) -> Result<Arc<TwoPartPattern>> {
        if let Some(pattern) = self
            .two_part
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pairs)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(pattern));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(pairs = pairs.len(), "compiling two-part transition pattern");
        let pattern = Arc::new(compile(pairs)?);
        self.two_part
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(pairs.to_vec(), Arc::clone(&pattern));
        Ok(pattern)
    }

    fn single(&self, word: &str) -> Result<Arc<Regex>> {
        if let Some(pattern) = self
            .single
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(word)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(pattern));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(word, "compiling transition word pattern");
        let pattern = Arc::new(compile_single(word)?);
        self.single
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(word.to_string(), Arc::clone(&pattern));
        Ok(pattern)
    }
}

/// Pattern compiler backed by a [`PatternCache`]
#[derive(Debug, Clone)]
pub struct PatternCompiler {
    cache: Arc<PatternCache>,
}

impl Default for PatternCompiler {
    fn default() -> Self {
        Self::with_cache(PatternCache::global())
    }
}

impl PatternCompiler {
    /// Compiler sharing the process-wide cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler with its own cache, e.g. for tests or per-worker caches
    pub fn with_cache(cache: Arc<PatternCache>) -> Self {
        Self { cache }
    }

    /// Cached two-part pattern for `pairs`
    pub fn two_part(&self, pairs: &[[String; 2]]) -> Result<Arc<TwoPartPattern>> {
        self.cache.two_part(pairs)
    }

    /// Cached whole-word pattern for `word`
    pub fn single_word(&self, word: &str) -> Result<Arc<Regex>> {
        self.cache.single(word)
    }

    /// The backing cache
    pub fn cache(&self) -> &Arc<PatternCache> {
        &self.cache
    }
}
