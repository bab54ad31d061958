//! Scan phase: classify occurrences and populate the accumulator.
//!
//! Walks every type declaration (nested included) and inspects the marker
//! annotation on field and method members. Symbol anchors and container
//! literals are recorded; scalar literals convert inline at rewrite time and
//! string/unsupported targets never touch the store.
//!
//! Per-unit analysis reads only the unit itself, so units scan in parallel;
//! the accumulator's compute-if-absent inserts are the only shared writes.

use crate::accumulator::{Accumulator, AnchorText, FieldTemplate, Produced};
use crate::anchor::{self, Anchor, ContextSensitivity};
use crate::config::MarkerSpec;
use crate::kind::MaterializationKind;
use crate::names::NameGenerator;
use reforge_tree::{DeclaredType, Expr, Interner, Literal, Member, SourceUnit, Symbol, TypeDecl, TypeName};

pub(crate) struct Scanner<'a> {
    spec: &'a MarkerSpec,
    interner: &'a Interner,
    acc: &'a Accumulator,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(spec: &'a MarkerSpec, interner: &'a Interner, acc: &'a Accumulator) -> Self {
        Scanner {
            spec,
            interner,
            acc,
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(file = %unit.path.display()))]
    pub(crate) fn scan_unit(&self, unit: &SourceUnit) {
        let mut names = NameGenerator::new(self.interner);
        for decl in &unit.types {
            self.scan_type(decl, unit, &mut names);
        }
    }

    fn scan_type(&self, decl: &TypeDecl, unit: &SourceUnit, names: &mut NameGenerator<'_>) {
        names.seed_scope(decl);
        for member in &decl.members {
            let (annotations, declared) = match member {
                Member::Field(field) => (&field.annotations, &field.ty),
                Member::Method(method) => (&method.annotations, &method.return_type),
            };
            for annotation in annotations {
                if annotation.ty != self.spec.marker {
                    continue;
                }
                let Some(position) = annotation.arg_position(self.spec.attribute) else {
                    continue;
                };
                self.scan_occurrence(
                    unit,
                    decl.name,
                    declared,
                    &annotation.args[position].value,
                    names,
                );
            }
        }
        for nested in &decl.nested {
            self.scan_type(nested, unit, names);
        }
    }

    fn scan_occurrence(
        &self,
        unit: &SourceUnit,
        scope: TypeName,
        declared: &DeclaredType,
        value: &Expr,
        names: &mut NameGenerator<'_>,
    ) {
        let kind = MaterializationKind::classify(declared, self.interner);
        match kind {
            MaterializationKind::Unsupported => {
                tracing::debug!(?declared, "unsupported target type, occurrence left as written");
                return;
            }
            // String targets drop the attribute at apply time with no field.
            MaterializationKind::PassThroughString => return,
            _ => {}
        }

        let Some(anchor) = anchor::classify(value) else {
            tracing::debug!("unsupported anchor shape, occurrence left as written");
            return;
        };

        match anchor {
            Anchor::Literal(lit) => {
                // Scalar literals convert inline during rewrite; only
                // container literals are keyed.
                if kind.is_container() {
                    let ordinal = self.acc.literal_count(&unit.path);
                    self.acc.record_literal(&unit.path, &lit.source, || {
                        self.produce_literal(scope, lit, kind, ordinal, names)
                    });
                }
            }
            Anchor::LocalSymbolRef(symbol) | Anchor::QualifiedSymbolRef(symbol, _) => {
                let context = anchor.sensitivity(scope, self.interner);
                let written = value.source_text(self.interner);
                self.acc.record_symbol(&unit.path, symbol, kind, || {
                    self.produce_symbol(scope, symbol, kind, context, written, names)
                });
            }
        }
    }

    fn produce_symbol(
        &self,
        scope: TypeName,
        symbol: Symbol,
        kind: MaterializationKind,
        context: ContextSensitivity,
        written: String,
        names: &mut NameGenerator<'_>,
    ) -> Produced {
        let suffix = kind.field_suffix().unwrap_or("");
        let field_name = names.generate(scope, &written, suffix);
        let qualified = format!(
            "{}.{}",
            symbol.owner.source_name(self.interner),
            self.interner.resolve(symbol.name)
        );
        tracing::trace!(
            field = self.interner.resolve(field_name),
            ?kind,
            "recorded symbol anchor"
        );
        Produced {
            field_name,
            kind,
            template: kind
                .conversion()
                .zip(kind.field_type(self.interner))
                .map(|(conversion, field_ty)| FieldTemplate {
                    field_ty,
                    conversion,
                }),
            context,
            anchor: AnchorText { written, qualified },
            target_scope: scope,
        }
    }

    /// Container literals get a record for rewrite-time lookup, but no
    /// template: their companions carry the parsed elements inline.
    fn produce_literal(
        &self,
        scope: TypeName,
        lit: &Literal,
        kind: MaterializationKind,
        ordinal: u32,
        names: &mut NameGenerator<'_>,
    ) -> Produced {
        let suffix = kind.field_suffix().unwrap_or("");
        let field_name = names.generate_literal(scope, ordinal, suffix);
        tracing::trace!(
            field = self.interner.resolve(field_name),
            ?kind,
            "recorded container literal anchor"
        );
        Produced {
            field_name,
            kind,
            template: None,
            context: ContextSensitivity::ResolvedLocally,
            anchor: AnchorText {
                written: lit.source.clone(),
                qualified: lit.source.clone(),
            },
            target_scope: scope,
        }
    }
}
