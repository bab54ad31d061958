//! Anchor classification and scope sensitivity.
//!
//! An *anchor* is the classified shape of the expression assigned to the
//! migrated attribute. Only three shapes are supported; everything else is a
//! soft skip, never an error.

use reforge_tree::{Expr, Interner, Literal, Symbol, TypeName};

/// Classified shape of a default-value expression.
///
/// Borrows from the tree it was derived from; carries no ownership.
#[derive(Clone, Debug, PartialEq)]
pub enum Anchor<'a> {
    /// A literal token (string, char, number, boolean).
    Literal(&'a Literal),
    /// A bare identifier resolved to a field or variable.
    LocalSymbolRef(Symbol),
    /// A qualified member access (`Type.FIELD`), with the owning type.
    QualifiedSymbolRef(Symbol, TypeName),
}

/// Whether a synthesized initializer may reference its anchor as written, or
/// must fall back to an isolated, fully-qualified form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ContextSensitivity {
    /// The anchor's declaring scope is the transformation scope or one of
    /// its enclosing classes; a direct reference resolves.
    ResolvedLocally,
    /// Any other relationship, including ones that cannot be determined.
    RequiresScopedTemplate,
}

/// Classify an expression into an anchor.
///
/// Returns `None` for unsupported shapes and for symbol references the front
/// end failed to resolve; the caller skips the occurrence.
pub fn classify(expr: &Expr) -> Option<Anchor<'_>> {
    match expr {
        Expr::Literal(lit) => Some(Anchor::Literal(lit)),
        Expr::Ident { symbol, .. } => symbol.map(Anchor::LocalSymbolRef),
        Expr::FieldAccess { symbol, .. } => {
            symbol.map(|sym| Anchor::QualifiedSymbolRef(sym, sym.owner))
        }
        Expr::ArrayInit(_) | Expr::Raw(_) => None,
    }
}

impl Anchor<'_> {
    /// Context sensitivity of this anchor relative to the scope being
    /// transformed. Literals are always local.
    pub fn sensitivity(&self, current_scope: TypeName, interner: &Interner) -> ContextSensitivity {
        match self {
            Anchor::Literal(_) => ContextSensitivity::ResolvedLocally,
            Anchor::LocalSymbolRef(sym) | Anchor::QualifiedSymbolRef(sym, _) => {
                scope_sensitivity(sym.owner, current_scope, interner)
            }
        }
    }
}

/// `ResolvedLocally` when `declaring` is `current` or one of its enclosing
/// classes. A chain that ends without a match — including one that cannot be
/// compared further — falls back to the safe isolated form.
fn scope_sensitivity(
    declaring: TypeName,
    current: TypeName,
    interner: &Interner,
) -> ContextSensitivity {
    let mut scope = Some(current);
    while let Some(s) = scope {
        if s == declaring {
            return ContextSensitivity::ResolvedLocally;
        }
        scope = s.owner(interner);
    }
    ContextSensitivity::RequiresScopedTemplate
}
