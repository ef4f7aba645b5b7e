//! Process-wide cache of compiled patterns
//!
//! Every engine instance resolves pattern source strings through this one
//! map, so a given pattern text is compiled at most once per process no
//! matter how many validators use it or from how many threads. Entries are
//! retained for the process lifetime; the key space is bounded by the
//! finite set of literal patterns authors write into code.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use regex::Regex;

static PATTERNS: LazyLock<Mutex<HashMap<String, Arc<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Looks up the compiled form of `source`, compiling on first use.
///
/// Compilation happens under the cache lock, so concurrent first-uses of
/// the same source cannot compile it twice or race on insertion.
///
/// # Panics
///
/// Panics if `source` is not a valid pattern. An unparseable pattern is a
/// bug in the calling code, not invalid input data.
pub(crate) fn compiled(source: &str) -> Arc<Regex> {
    let mut cache = PATTERNS.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(regex) = cache.get(source) {
        return Arc::clone(regex);
    }

    let regex = Arc::new(compile(source));
    cache.insert(source.to_owned(), Arc::clone(&regex));
    regex
}

/// Compiles `source` anchored on both ends: `matches` checks require the
/// whole input to match, not a substring.
fn compile(source: &str) -> Regex {
    let anchored = format!("^(?:{source})$");
    match Regex::new(&anchored) {
        Ok(regex) => regex,
        Err(error) => panic!("invalid regex pattern '{source}': {error}"),
    }
}

#[cfg(test)]
pub(crate) fn is_cached(source: &str) -> bool {
    PATTERNS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(source)
}

// ============================================================================
// TESTS
// ============================================================================
