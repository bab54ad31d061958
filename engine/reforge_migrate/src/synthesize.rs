//! Field synthesis: the first apply-phase walk.
//!
//! For each declaring scope, instantiates a field declaration from every
//! accumulator entry targeting it, in field-name order. A field whose exact
//! name is already present is skipped, so re-entering the apply phase never
//! duplicates declarations.

use crate::accumulator::Accumulator;
use crate::anchor::ContextSensitivity;
use reforge_tree::{Expr, FieldDecl, Interner, Member, SourceUnit, TypeDecl, Visibility};
use std::path::Path;

pub(crate) fn synthesize_fields(unit: &mut SourceUnit, acc: &Accumulator, interner: &Interner) {
    let path = unit.path.clone();
    for decl in &mut unit.types {
        synthesize_type(decl, &path, acc, interner);
    }
}

fn synthesize_type(decl: &mut TypeDecl, path: &Path, acc: &Accumulator, interner: &Interner) {
    for produced in acc.entries_for_scope(path, decl.name, interner) {
        // Container-literal entries convert inline and synthesize nothing.
        let Some(template) = &produced.template else {
            continue;
        };
        // Idempotence guard.
        if decl.field_names().any(|name| name == produced.field_name) {
            continue;
        }
        let anchor_text = match produced.context {
            ContextSensitivity::ResolvedLocally => &produced.anchor.written,
            ContextSensitivity::RequiresScopedTemplate => &produced.anchor.qualified,
        };
        let field = FieldDecl {
            name: produced.field_name,
            ty: template.field_ty.clone(),
            visibility: Visibility::Private,
            initializer: Some(Expr::Raw(template.instantiate(anchor_text))),
            annotations: Vec::new(),
        };
        insert_after_last_field(decl, field);
    }
    for nested in &mut decl.nested {
        synthesize_type(nested, path, acc, interner);
    }
}

/// New fields go after the last existing field declaration, or first when
/// the type body has none.
fn insert_after_last_field(decl: &mut TypeDecl, field: FieldDecl) {
    let position = decl
        .members
        .iter()
        .rposition(|member| matches!(member, Member::Field(_)))
        .map_or(0, |index| index + 1);
    decl.members.insert(position, Member::Field(field));
}
