//! Declarations: source units, types, members, annotations.

use crate::{DeclaredType, Expr, Name, TypeName};
use std::path::PathBuf;

/// Member visibility.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

/// One argument in an annotation's argument list.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AnnotationArg {
    /// Attribute name for named assignments; `None` for the positional
    /// `value` shorthand.
    pub name: Option<Name>,
    pub value: Expr,
}

impl AnnotationArg {
    /// Named assignment (`defaultValue = expr`).
    pub fn named(name: Name, value: Expr) -> Self {
        AnnotationArg {
            name: Some(name),
            value,
        }
    }

    /// Positional argument (`@Holder(expr)`).
    pub fn positional(value: Expr) -> Self {
        AnnotationArg { name: None, value }
    }
}

/// An annotation attached to a declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Annotation {
    /// The reference as written in source (`Property`, `DefaultValue.Boolean`).
    pub path: Name,
    /// Resolved binary name of the annotation type.
    pub ty: TypeName,
    pub args: Vec<AnnotationArg>,
}

impl Annotation {
    /// Annotation with no arguments.
    pub fn new(path: Name, ty: TypeName) -> Self {
        Annotation {
            path,
            ty,
            args: Vec::new(),
        }
    }

    /// Annotation with the given arguments.
    pub fn with_args(path: Name, ty: TypeName, args: Vec<AnnotationArg>) -> Self {
        Annotation { path, ty, args }
    }

    /// Position of the named attribute in the argument list.
    pub fn arg_position(&self, attribute: Name) -> Option<usize> {
        self.args.iter().position(|a| a.name == Some(attribute))
    }
}

/// A field declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FieldDecl {
    pub name: Name,
    pub ty: DeclaredType,
    pub visibility: Visibility,
    pub initializer: Option<Expr>,
    pub annotations: Vec<Annotation>,
}

/// A method declaration. Only the parts the engine reads are modeled.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MethodDecl {
    pub name: Name,
    pub return_type: DeclaredType,
    pub annotations: Vec<Annotation>,
}

/// A type body member.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
}

impl Member {
    /// The field declaration, if this member is a field.
    pub fn as_field(&self) -> Option<&FieldDecl> {
        match self {
            Member::Field(field) => Some(field),
            Member::Method(_) => None,
        }
    }
}

/// A class declaration, possibly with nested classes.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeDecl {
    /// Binary name of the class.
    pub name: TypeName,
    pub members: Vec<Member>,
    pub nested: Vec<TypeDecl>,
}

impl TypeDecl {
    /// Empty declaration.
    pub fn new(name: TypeName) -> Self {
        TypeDecl {
            name,
            members: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Names of the fields declared directly in this type.
    pub fn field_names(&self) -> impl Iterator<Item = Name> + '_ {
        self.members
            .iter()
            .filter_map(|m| m.as_field().map(|f| f.name))
    }
}

/// One parsed source file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SourceUnit {
    /// File identity; also the per-file component of accumulator keys.
    pub path: PathBuf,
    pub types: Vec<TypeDecl>,
}

impl SourceUnit {
    /// Unit with no declarations.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SourceUnit {
            path: path.into(),
            types: Vec::new(),
        }
    }
}
