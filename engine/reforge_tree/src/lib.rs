//! Typed, symbol-resolved source tree model for the Reforge migration engine.
//!
//! This crate defines the data the engine operates on: the immutable tree a
//! parser/type-resolution front end produces for each source unit, and the
//! rewritten tree an unparser/formatter consumes afterwards. The engine itself
//! lives in `reforge_migrate`.
//!
//! # Contract
//!
//! A front end handing trees to the engine must provide:
//!
//! - declarations with their leading annotations, argument lists intact;
//! - expressions whose field/variable references carry resolved [`Symbol`]
//!   identities, stable across occurrences within a unit;
//! - resolved declared types ([`DeclaredType`]) on fields and method returns;
//! - binary class names (`com.app.Outer$Inner`) so enclosing-scope navigation
//!   works through [`TypeName::owner`].
//!
//! All tree types are plain owned data, `Clone + PartialEq`, so a rewrite can
//! replace a whole unit atomically and tests can compare entire trees.

mod expr;
mod interner;
mod name;
mod symbol;
mod tree;
mod types;

pub use expr::{Expr, Literal, LiteralKind};
pub use interner::Interner;
pub use name::Name;
pub use symbol::Symbol;
pub use tree::{
    Annotation, AnnotationArg, FieldDecl, Member, MethodDecl, SourceUnit, TypeDecl, Visibility,
};
pub use types::{DeclaredType, Primitive, TypeName};
