//! Annotation rewriting: the second apply-phase walk.
//!
//! Strips the migrated attribute from the marker annotation and attaches the
//! typed holder companion. Per occurrence the outcome is one of: rewritten,
//! or skipped with the attribute left exactly as written. Skips are local and
//! never fail the unit; only an accumulator inconsistency aborts it.

use crate::accumulator::{Accumulator, AccumulatorKey};
use crate::anchor::{self, Anchor};
use crate::config::MarkerSpec;
use crate::error::ApplyError;
use crate::kind::MaterializationKind;
use reforge_tree::{
    Annotation, AnnotationArg, DeclaredType, Expr, Interner, Literal, LiteralKind, Member,
    SourceUnit, Symbol, TypeDecl, TypeName,
};
use std::path::Path;

pub(crate) struct Rewriter<'a> {
    spec: &'a MarkerSpec,
    interner: &'a Interner,
    acc: &'a Accumulator,
}

impl<'a> Rewriter<'a> {
    pub(crate) fn new(spec: &'a MarkerSpec, interner: &'a Interner, acc: &'a Accumulator) -> Self {
        Rewriter {
            spec,
            interner,
            acc,
        }
    }

    pub(crate) fn rewrite_unit(&self, unit: &mut SourceUnit) -> Result<(), ApplyError> {
        let path = unit.path.clone();
        for decl in &mut unit.types {
            self.rewrite_type(decl, &path)?;
        }
        Ok(())
    }

    fn rewrite_type(&self, decl: &mut TypeDecl, path: &Path) -> Result<(), ApplyError> {
        for member in &mut decl.members {
            match member {
                Member::Field(field) => {
                    let declared = field.ty.clone();
                    self.rewrite_annotations(&mut field.annotations, &declared, path)?;
                }
                Member::Method(method) => {
                    let declared = method.return_type.clone();
                    self.rewrite_annotations(&mut method.annotations, &declared, path)?;
                }
            }
        }
        for nested in &mut decl.nested {
            self.rewrite_type(nested, path)?;
        }
        Ok(())
    }

    fn rewrite_annotations(
        &self,
        annotations: &mut Vec<Annotation>,
        declared: &DeclaredType,
        path: &Path,
    ) -> Result<(), ApplyError> {
        // One forward pass covers every marker occurrence on the member:
        // inserted companions never match the marker, and a processed marker
        // has already lost the attribute when insertion shifts it ahead.
        let mut index = 0;
        while index < annotations.len() {
            let occurrence = annotations[index].ty == self.spec.marker
                && annotations[index].arg_position(self.spec.attribute).is_some();
            if occurrence {
                self.rewrite_occurrence(annotations, index, declared, path)?;
            }
            index += 1;
        }
        Ok(())
    }

    fn rewrite_occurrence(
        &self,
        annotations: &mut Vec<Annotation>,
        marker_index: usize,
        declared: &DeclaredType,
        path: &Path,
    ) -> Result<(), ApplyError> {
        let kind = MaterializationKind::classify(declared, self.interner);
        if kind == MaterializationKind::Unsupported {
            tracing::debug!(?declared, "unsupported target type, occurrence left as written");
            return Ok(());
        }

        // The caller only dispatches markers that carry the attribute.
        let Some(arg_index) = annotations[marker_index].arg_position(self.spec.attribute) else {
            return Ok(());
        };
        let value = annotations[marker_index].args[arg_index].value.clone();

        // Decide the companion before touching the argument list, so a
        // skipped occurrence is left exactly as the author wrote it.
        let companion = if kind == MaterializationKind::PassThroughString {
            // String target: the attribute goes away, nothing replaces it.
            None
        } else {
            let Some(case) = kind.holder_case() else {
                return Ok(());
            };
            let Some(anchor) = anchor::classify(&value) else {
                tracing::debug!("unsupported anchor shape, occurrence left as written");
                return Ok(());
            };
            match anchor {
                Anchor::Literal(lit) if kind.is_container() => {
                    let key = AccumulatorKey::Literal {
                        file: path.to_path_buf(),
                        text: lit.source.clone(),
                    };
                    if self.acc.get(&key).is_none() {
                        return Err(self.missing_entry(path, &key));
                    }
                    Some(self.companion(case, split_literal_elements(lit)))
                }
                Anchor::Literal(lit) => match convert_scalar_literal(lit, kind) {
                    Some(converted) => Some(self.companion(case, converted)),
                    None => {
                        tracing::debug!(
                            literal = %lit.source,
                            ?kind,
                            "literal does not parse for target kind, occurrence left as written"
                        );
                        return Ok(());
                    }
                },
                Anchor::LocalSymbolRef(symbol) | Anchor::QualifiedSymbolRef(symbol, _) => {
                    let key = AccumulatorKey::Symbol {
                        file: path.to_path_buf(),
                        symbol,
                        kind,
                    };
                    let Some(produced) = self.acc.get(&key) else {
                        return Err(self.missing_entry(path, &key));
                    };
                    let reference = Expr::ident(
                        produced.field_name,
                        Some(Symbol::new(produced.target_scope, produced.field_name)),
                    );
                    Some(self.companion(case, reference))
                }
            }
        };

        // Strip the attribute; remaining arguments persist untouched, and an
        // emptied annotation is retained.
        annotations[marker_index].args.remove(arg_index);
        if let Some(companion) = companion {
            insert_companion(annotations, companion, self.interner);
        }
        Ok(())
    }

    /// Build the typed holder companion, e.g. `@DefaultValue.Boolean(ref)`.
    fn companion(&self, case: &str, value: Expr) -> Annotation {
        let path = self
            .interner
            .intern(&format!("{}.{case}", self.spec.holder_simple));
        let ty = TypeName::intern(
            &format!("{}${case}", self.spec.holder.binary_name(self.interner)),
            self.interner,
        );
        Annotation::with_args(path, ty, vec![AnnotationArg::positional(value)])
    }

    fn missing_entry(&self, path: &Path, key: &AccumulatorKey) -> ApplyError {
        ApplyError::MissingEntry {
            file: path.display().to_string(),
            key: format!("{key:?}"),
        }
    }
}

/// Companions sit among their siblings in annotation-name order: insert
/// before the first annotation whose as-written path compares greater.
fn insert_companion(annotations: &mut Vec<Annotation>, companion: Annotation, interner: &Interner) {
    let text = interner.resolve(companion.path);
    let position = annotations
        .iter()
        .position(|a| interner.resolve(a.path) > text)
        .unwrap_or(annotations.len());
    annotations.insert(position, companion);
}

/// Inline conversion of a scalar literal: quote-stripped and retyped.
/// `None` when the text does not parse as the target kind.
fn convert_scalar_literal(lit: &Literal, kind: MaterializationKind) -> Option<Expr> {
    let raw = lit.unquoted();
    let converted = match kind {
        MaterializationKind::Boolean => {
            raw.parse::<bool>().ok()?;
            Literal::new(raw, LiteralKind::Bool)
        }
        MaterializationKind::Byte => {
            raw.parse::<i8>().ok()?;
            Literal::new(raw, LiteralKind::Int)
        }
        MaterializationKind::Short => {
            raw.parse::<i16>().ok()?;
            Literal::new(raw, LiteralKind::Int)
        }
        MaterializationKind::Int => {
            raw.parse::<i32>().ok()?;
            Literal::new(raw, LiteralKind::Int)
        }
        MaterializationKind::Long => {
            raw.parse::<i64>().ok()?;
            Literal::new(raw, LiteralKind::Int)
        }
        MaterializationKind::Float => {
            raw.parse::<f32>().ok()?;
            Literal::new(raw, LiteralKind::Float)
        }
        MaterializationKind::Double => {
            raw.parse::<f64>().ok()?;
            Literal::new(raw, LiteralKind::Float)
        }
        // Double-quoted text becomes character notation.
        MaterializationKind::Char => Literal::new(format!("'{raw}'"), LiteralKind::Char),
        _ => return None,
    };
    Some(Expr::Literal(converted))
}

/// `"a,b"` → `{"a", "b"}`: the container literal parsed into its elements
/// at transform time.
fn split_literal_elements(lit: &Literal) -> Expr {
    let elements = lit
        .unquoted()
        .split(',')
        .map(|element| Expr::Literal(Literal::string(element)))
        .collect();
    Expr::ArrayInit(elements)
}
