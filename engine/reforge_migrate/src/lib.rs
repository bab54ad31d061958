//! Two-phase default-value annotation migration.
//!
//! Migrates an annotation-encoded `defaultValue` attribute into a typed,
//! deduplicated synthesized field, rewriting the annotation to reference it.
//! Scalar literals skip the field and convert inline; `String` targets just
//! lose the attribute.
//!
//! # Pipeline Position
//!
//! ```text
//! parse/type-resolve → **scan → apply** → unparse/format
//! ```
//!
//! The parser front end supplies immutable, symbol-resolved trees
//! (`reforge_tree`); the unparser consumes the rewritten trees afterwards.
//!
//! # Phases
//!
//! 1. **Scan** walks every unit and populates the [`Accumulator`]: each
//!    occurrence is classified by target type ([`MaterializationKind`]) and
//!    expression shape ([`Anchor`]), and symbol or container-literal anchors
//!    get a write-once [`Produced`] record with a collision-free field name.
//! 2. **Apply** walks every unit again against the now-complete store:
//!    fields are synthesized per scope, then the marker annotation loses the
//!    attribute and gains a typed holder companion.
//!
//! Scan fully completes before apply begins. Within each phase units are
//! independent and processed in parallel; apply mutates only its own unit's
//! tree, all-or-nothing — a unit that cannot be rewritten is returned
//! unchanged.

mod accumulator;
mod anchor;
mod config;
mod error;
mod kind;
mod names;
mod rewrite;
mod scan;
mod synthesize;

pub use accumulator::{Accumulator, AccumulatorKey, AnchorText, FieldTemplate, Produced};
pub use anchor::{classify, Anchor, ContextSensitivity};
pub use config::MigrationConfig;
pub use error::ApplyError;
pub use kind::MaterializationKind;
pub use names::NameGenerator;

use config::MarkerSpec;
use rayon::prelude::*;
use reforge_tree::{Interner, SourceUnit};

/// One configured migration run over a set of source units.
pub struct Migration<'a> {
    spec: MarkerSpec,
    interner: &'a Interner,
}

impl<'a> Migration<'a> {
    /// Resolve the configured annotation names against `interner`.
    pub fn new(config: &MigrationConfig, interner: &'a Interner) -> Self {
        Migration {
            spec: MarkerSpec::resolve(config, interner),
            interner,
        }
    }

    /// Scan phase: analyze every unit and record what apply will need.
    ///
    /// Units are scanned in parallel; inserts into the returned store are
    /// atomic compute-if-absent, first occurrence wins.
    #[tracing::instrument(level = "debug", skip_all, fields(units = units.len()))]
    pub fn scan(&self, units: &[SourceUnit]) -> Accumulator {
        let acc = Accumulator::new();
        let scanner = scan::Scanner::new(&self.spec, self.interner, &acc);
        units.par_iter().for_each(|unit| scanner.scan_unit(unit));
        acc
    }

    /// Apply phase: synthesize fields and rewrite annotations from a
    /// complete accumulator.
    ///
    /// Reads the store, never writes it, and may run any number of times
    /// over the same store without duplicating output. A unit whose rewrite
    /// fails is returned unmodified.
    #[tracing::instrument(level = "debug", skip_all, fields(units = units.len()))]
    pub fn apply(&self, units: &[SourceUnit], acc: &Accumulator) -> Vec<SourceUnit> {
        units
            .par_iter()
            .map(|unit| match self.apply_unit(unit, acc) {
                Ok(rewritten) => rewritten,
                Err(err) => {
                    tracing::warn!(
                        file = %unit.path.display(),
                        %err,
                        "rewrite aborted, unit left unmodified"
                    );
                    unit.clone()
                }
            })
            .collect()
    }

    /// Run both phases in order.
    pub fn migrate(&self, units: &[SourceUnit]) -> Vec<SourceUnit> {
        let acc = self.scan(units);
        self.apply(units, &acc)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(file = %unit.path.display()))]
    fn apply_unit(&self, unit: &SourceUnit, acc: &Accumulator) -> Result<SourceUnit, ApplyError> {
        let mut rewritten = unit.clone();
        synthesize::synthesize_fields(&mut rewritten, acc, self.interner);
        rewrite::Rewriter::new(&self.spec, self.interner, acc).rewrite_unit(&mut rewritten)?;
        Ok(rewritten)
    }
}
