//! Thread-safe string interner.
//!
//! Provides O(1) interning and lookup behind a single `RwLock`. The engine
//! interns identifiers and class names, not whole token streams, so one lock
//! is enough; readers only contend with the occasional new identifier.

use crate::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

struct InternerInner {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

/// String interner shared by reference across the scan and apply workers.
///
/// Interned strings are leaked; an interner lives for the duration of one
/// migration run and the process ends with it.
pub struct Interner {
    inner: RwLock<InternerInner>,
}

impl Interner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        let empty: &'static str = "";
        map.insert(empty, 0);
        Interner {
            inner: RwLock::new(InternerInner {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Intern a string, returning its [`Name`].
    ///
    /// Interning the same content twice returns the same name.
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: already interned.
        {
            let guard = self.inner.read();
            if let Some(&idx) = guard.map.get(s) {
                return Name::from_raw(idx);
            }
        }

        let mut guard = self.inner.write();
        // Double-check after acquiring the write lock.
        if let Some(&idx) = guard.map.get(s) {
            return Name::from_raw(idx);
        }

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        // Identifier counts in a migration run stay far below u32::MAX.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "string count is bounded by input size"
        )]
        let idx = guard.strings.len() as u32;
        guard.map.insert(leaked, idx);
        guard.strings.push(leaked);
        Name::from_raw(idx)
    }

    /// Look up the text of a name produced by this interner.
    pub fn resolve(&self, name: Name) -> &'static str {
        self.inner.read().strings[name.index()]
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Whether only the pre-interned empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
