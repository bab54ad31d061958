//! Collision-free field-name generation.
//!
//! Names are derived from the anchor expression plus a kind suffix
//! (`Constants.SOME_BOOLEAN` + `AsBoolean` → `constants__some_booleanAsBoolean`)
//! and made unique within their target scope. For a fixed file and scan order
//! the same names come out every run.

use reforge_tree::{Interner, Name, TypeDecl, TypeName};
use rustc_hash::{FxHashMap, FxHashSet};

/// Per-run name generator.
///
/// Tracks, per target scope, both the field names already declared there and
/// the names generated earlier in the run, so two accumulator keys can never
/// share an identifier.
pub struct NameGenerator<'a> {
    interner: &'a Interner,
    taken: FxHashMap<TypeName, FxHashSet<String>>,
}

impl<'a> NameGenerator<'a> {
    pub fn new(interner: &'a Interner) -> Self {
        NameGenerator {
            interner,
            taken: FxHashMap::default(),
        }
    }

    /// Record the declared field names of `decl` so generated names avoid
    /// them. Call once per scope before generating into it.
    pub fn seed_scope(&mut self, decl: &TypeDecl) {
        let taken = self.taken.entry(decl.name).or_default();
        for field in decl.field_names() {
            taken.insert(self.interner.resolve(field).to_owned());
        }
    }

    /// Generate a unique name from anchor text plus a kind suffix.
    pub fn generate(&mut self, scope: TypeName, anchor_text: &str, suffix: &str) -> Name {
        let base = format!("{}{suffix}", flatten(anchor_text));
        self.unique(scope, &base)
    }

    /// Generate a unique name from the synthetic literal base (`literalArgN`)
    /// plus a kind suffix. `ordinal` is the count of literal-keyed entries
    /// already recorded for the file.
    pub fn generate_literal(&mut self, scope: TypeName, ordinal: u32, suffix: &str) -> Name {
        let base = format!("literalArg{ordinal}{suffix}");
        self.unique(scope, &base)
    }

    /// Append an incrementing numeric suffix until the candidate is unused
    /// in `scope`, then reserve and intern it.
    fn unique(&mut self, scope: TypeName, base: &str) -> Name {
        let taken = self.taken.entry(scope).or_default();
        let mut candidate = base.to_owned();
        let mut n = 1u32;
        while taken.contains(&candidate) {
            candidate = format!("{base}{n}");
            n += 1;
        }
        taken.insert(candidate.clone());
        self.interner.intern(&candidate)
    }
}

/// Qualified anchors flatten to a lower-case double-underscore form; bare
/// identifiers pass through unchanged.
fn flatten(text: &str) -> String {
    if text.contains('.') {
        text.replace('.', "__").to_lowercase()
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests;
