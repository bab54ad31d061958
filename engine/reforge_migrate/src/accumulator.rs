//! Shared write-once accumulator.
//!
//! The single piece of run-wide mutable state. The scan phase populates it
//! with one [`Produced`] record per key; the apply phase reads it. Insertion
//! is the only mutation — the first scan occurrence of a key wins, and an
//! entry is never updated or removed for the rest of the run.

use crate::{ContextSensitivity, MaterializationKind};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use reforge_tree::{DeclaredType, Interner, Name, Symbol, TypeName};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Key for one synthesized (or inline-converted container) default.
///
/// Keys are stable (file, identity) tuples rather than pointers into the
/// tree, because the tree is rewritten after the store is read.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AccumulatorKey {
    /// Symbol anchor: one entry per (file, symbol, kind).
    Symbol {
        file: PathBuf,
        symbol: Symbol,
        kind: MaterializationKind,
    },
    /// Container-literal anchor: one entry per (file, literal text). Never
    /// merged across files.
    Literal { file: PathBuf, text: String },
}

impl AccumulatorKey {
    fn file(&self) -> &Path {
        match self {
            AccumulatorKey::Symbol { file, .. } | AccumulatorKey::Literal { file, .. } => file,
        }
    }
}

/// Declaration template for a synthesized field.
#[derive(Clone, PartialEq, Debug)]
pub struct FieldTemplate {
    /// Declared type of the synthesized field.
    pub field_ty: DeclaredType,
    /// Conversion call pattern; `{}` is replaced by the anchor text.
    pub conversion: &'static str,
}

impl FieldTemplate {
    /// Render the initializer for the given anchor expression text.
    pub fn instantiate(&self, anchor_text: &str) -> String {
        self.conversion.replace("{}", anchor_text)
    }
}

/// Anchor expression renderings captured at scan time.
#[derive(Clone, PartialEq, Debug)]
pub struct AnchorText {
    /// The expression as the author wrote it.
    pub written: String,
    /// Fully-qualified fallback, used when the anchor must be referenced
    /// from outside its declaring scope.
    pub qualified: String,
}

/// Record describing one synthesized field or inline container conversion.
///
/// Owned by the accumulator and immutable once inserted; the apply phase
/// reads entries by reference.
#[derive(Clone, PartialEq, Debug)]
pub struct Produced {
    /// Synthesized field identifier, unique within `target_scope`.
    pub field_name: Name,
    pub kind: MaterializationKind,
    /// `None` for container-literal entries, which convert inline and
    /// synthesize no field.
    pub template: Option<FieldTemplate>,
    pub context: ContextSensitivity,
    pub anchor: AnchorText,
    /// Scope the synthesized field is declared in.
    pub target_scope: TypeName,
}

/// Map of accumulator keys to produced records.
///
/// Created at scan start, read during apply, discarded after the run.
/// Inserts are atomic compute-if-absent operations, so scan workers for
/// different files need no further synchronization; contenders on the same
/// key are linearized by the map and all agree on the winning record.
#[derive(Default)]
pub struct Accumulator {
    entries: DashMap<AccumulatorKey, Arc<Produced>>,
    /// Count of literal-keyed entries per file, which numbers the
    /// `literalArgN` bases.
    literal_counts: DashMap<PathBuf, u32>,
}

impl Accumulator {
    pub fn new() -> Self {
        Accumulator::default()
    }

    /// Insert-if-absent for a symbol anchor. `produce` runs only when the
    /// key is vacant; the returned record is the one the map holds.
    pub fn record_symbol(
        &self,
        file: &Path,
        symbol: Symbol,
        kind: MaterializationKind,
        produce: impl FnOnce() -> Produced,
    ) -> Arc<Produced> {
        let key = AccumulatorKey::Symbol {
            file: file.to_path_buf(),
            symbol,
            kind,
        };
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                let produced = Arc::new(produce());
                entry.insert(Arc::clone(&produced));
                produced
            }
        }
    }

    /// Insert-if-absent for a container-literal anchor, keyed by raw literal
    /// text per file. Bumps the file's literal count on insertion.
    pub fn record_literal(
        &self,
        file: &Path,
        text: &str,
        produce: impl FnOnce() -> Produced,
    ) -> Arc<Produced> {
        let key = AccumulatorKey::Literal {
            file: file.to_path_buf(),
            text: text.to_owned(),
        };
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                let produced = Arc::new(produce());
                entry.insert(Arc::clone(&produced));
                *self.literal_counts.entry(file.to_path_buf()).or_insert(0) += 1;
                produced
            }
        }
    }

    /// Number of literal-keyed entries already recorded for `file`.
    pub fn literal_count(&self, file: &Path) -> u32 {
        self.literal_counts.get(file).map_or(0, |count| *count)
    }

    /// Resolve an entry by key.
    pub fn get(&self, key: &AccumulatorKey) -> Option<Arc<Produced>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// All entries recorded for `file` that target `scope`, sorted by
    /// resolved field name so synthesis order is deterministic.
    pub fn entries_for_scope(
        &self,
        file: &Path,
        scope: TypeName,
        interner: &Interner,
    ) -> Vec<Arc<Produced>> {
        let mut matching: Vec<Arc<Produced>> = self
            .entries
            .iter()
            .filter(|entry| entry.key().file() == file && entry.value().target_scope == scope)
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        matching.sort_by_key(|produced| interner.resolve(produced.field_name));
        matching
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scan recorded nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
