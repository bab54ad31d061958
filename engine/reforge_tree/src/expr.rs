//! Expression forms.
//!
//! The engine only inspects the handful of shapes that can anchor a default
//! value: literals, bare identifiers, and qualified member accesses. Anything
//! else arrives as [`Expr::Raw`] and is carried through untouched.

use crate::{Interner, Name, Symbol};

/// Token class of a literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Str,
    Char,
    Int,
    Float,
    Bool,
}

/// A literal token, kept as written (string literals include their quotes).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Literal {
    /// Source text of the token, e.g. `"a,b"`, `3`, `true`.
    pub source: String,
    /// Token class.
    pub kind: LiteralKind,
}

impl Literal {
    /// Literal from source text and kind.
    pub fn new(source: impl Into<String>, kind: LiteralKind) -> Self {
        Literal {
            source: source.into(),
            kind,
        }
    }

    /// String literal from its unquoted content.
    pub fn string(content: &str) -> Self {
        Literal {
            source: format!("\"{content}\""),
            kind: LiteralKind::Str,
        }
    }

    /// Token text with surrounding double quotes removed.
    pub fn unquoted(&self) -> &str {
        self.source.trim_matches('"')
    }
}

/// An expression as the front end hands it over.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    /// A literal token.
    Literal(Literal),
    /// A bare identifier. `symbol` is `None` when resolution failed.
    Ident {
        name: Name,
        symbol: Option<Symbol>,
    },
    /// A qualified member access (`Constants.SOME_BOOLEAN`), with the
    /// qualifier segments as written.
    FieldAccess {
        qualifier: Vec<Name>,
        name: Name,
        symbol: Option<Symbol>,
    },
    /// `{ "a", "b" }` array initializer. Produced by the rewriter; never
    /// inspected on input.
    ArrayInit(Vec<Expr>),
    /// Any other expression shape, as written. Also used for rendered
    /// initializers on output.
    Raw(String),
}

impl Expr {
    /// Identifier expression.
    pub fn ident(name: Name, symbol: Option<Symbol>) -> Self {
        Expr::Ident { name, symbol }
    }

    /// Qualified member access.
    pub fn field_access(qualifier: Vec<Name>, name: Name, symbol: Option<Symbol>) -> Self {
        Expr::FieldAccess {
            qualifier,
            name,
            symbol,
        }
    }

    /// The resolved symbol, if this is a symbol-shaped expression.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Expr::Ident { symbol, .. } | Expr::FieldAccess { symbol, .. } => *symbol,
            Expr::Literal(_) | Expr::ArrayInit(_) | Expr::Raw(_) => None,
        }
    }

    /// As-written source text of the expression.
    pub fn source_text(&self, interner: &Interner) -> String {
        match self {
            Expr::Literal(lit) => lit.source.clone(),
            Expr::Ident { name, .. } => interner.resolve(*name).to_owned(),
            Expr::FieldAccess {
                qualifier, name, ..
            } => {
                let mut text = String::new();
                for segment in qualifier {
                    text.push_str(interner.resolve(*segment));
                    text.push('.');
                }
                text.push_str(interner.resolve(*name));
                text
            }
            Expr::ArrayInit(elements) => {
                let rendered: Vec<String> =
                    elements.iter().map(|e| e.source_text(interner)).collect();
                format!("{{{}}}", rendered.join(", "))
            }
            Expr::Raw(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
