//! Class identities and declared types.

use crate::{Interner, Name};

/// Interned binary class name (`com.app.Outer$Inner`).
///
/// Nesting is encoded with `$`, as in JVM binary names, so the owning class
/// chain can be walked textually without a symbol table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct TypeName(Name);

impl TypeName {
    /// Wrap an already-interned binary name.
    #[inline]
    pub const fn new(name: Name) -> Self {
        TypeName(name)
    }

    /// Intern a binary name.
    pub fn intern(binary: &str, interner: &Interner) -> Self {
        TypeName(interner.intern(binary))
    }

    /// The underlying interned name.
    #[inline]
    pub const fn name(self) -> Name {
        self.0
    }

    /// Binary name text (`com.app.Outer$Inner`).
    pub fn binary_name(self, interner: &Interner) -> &'static str {
        interner.resolve(self.0)
    }

    /// Immediately enclosing class, if this is a nested class.
    pub fn owner(self, interner: &Interner) -> Option<TypeName> {
        let text = interner.resolve(self.0);
        text.rfind('$')
            .map(|split| TypeName::intern(&text[..split], interner))
    }

    /// Source-form name: `$` separators rendered as `.`.
    pub fn source_name(self, interner: &Interner) -> String {
        interner.resolve(self.0).replace('$', ".")
    }

    /// Last segment of the name (`Inner` for `com.app.Outer$Inner`).
    pub fn simple_name(self, interner: &Interner) -> &'static str {
        let text = interner.resolve(self.0);
        let after_nest = text.rfind('$').map_or(text, |i| &text[i + 1..]);
        after_nest
            .rfind('.')
            .map_or(after_nest, |i| &after_nest[i + 1..])
    }
}

/// Primitive types of the host language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    /// Source keyword for the primitive (`boolean`, `int`, ...).
    pub const fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }
}

/// A resolved declared type, as attached to a field or method return.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DeclaredType {
    /// `boolean`, `int`, ...
    Primitive(Primitive),
    /// Any named reference type: `java.lang.String`, a boxed primitive,
    /// an enum, or anything else.
    Named(TypeName),
    /// Array type, e.g. `String[]`.
    Array(Box<DeclaredType>),
    /// Generic instantiation, e.g. `java.util.List<java.lang.String>`.
    Parameterized(TypeName, Vec<DeclaredType>),
}

impl DeclaredType {
    /// Named type from a binary name.
    pub fn named(binary: &str, interner: &Interner) -> Self {
        DeclaredType::Named(TypeName::intern(binary, interner))
    }
}
