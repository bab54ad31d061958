//! Declared-type classification.
//!
//! Maps a declared type to the [`MaterializationKind`] that decides how its
//! default value is carried over: which typed holder case the companion
//! annotation uses, whether a field is synthesized, and which runtime
//! conversion its initializer calls.

use reforge_tree::{DeclaredType, Interner, Primitive, TypeName};

/// Target runtime representation of a migrated default value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MaterializationKind {
    /// `String` target: the attribute is dropped with no conversion at all.
    PassThroughString,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    /// `List<String>` target.
    List,
    /// `String[]` target.
    Array,
    /// `Set<String>` target.
    Set,
    /// No materialization mapping (enums and every other type). The
    /// occurrence is left exactly as written.
    Unsupported,
}

impl MaterializationKind {
    /// Classify a declared type. Deterministic and side-effect free.
    pub fn classify(ty: &DeclaredType, interner: &Interner) -> MaterializationKind {
        match ty {
            DeclaredType::Primitive(p) => Self::from_primitive(*p),
            DeclaredType::Named(name) => Self::from_named(*name, interner),
            DeclaredType::Array(element) => {
                if is_string(element, interner) {
                    MaterializationKind::Array
                } else {
                    MaterializationKind::Unsupported
                }
            }
            DeclaredType::Parameterized(base, args) => {
                let [element] = args.as_slice() else {
                    return MaterializationKind::Unsupported;
                };
                if !is_string(element, interner) {
                    return MaterializationKind::Unsupported;
                }
                match base.binary_name(interner) {
                    "java.util.List" => MaterializationKind::List,
                    "java.util.Set" => MaterializationKind::Set,
                    _ => MaterializationKind::Unsupported,
                }
            }
        }
    }

    const fn from_primitive(p: Primitive) -> MaterializationKind {
        match p {
            Primitive::Boolean => MaterializationKind::Boolean,
            Primitive::Byte => MaterializationKind::Byte,
            Primitive::Char => MaterializationKind::Char,
            Primitive::Short => MaterializationKind::Short,
            Primitive::Int => MaterializationKind::Int,
            Primitive::Long => MaterializationKind::Long,
            Primitive::Float => MaterializationKind::Float,
            Primitive::Double => MaterializationKind::Double,
        }
    }

    /// Boxed wrappers map to their primitive kind; `String` passes through.
    fn from_named(name: TypeName, interner: &Interner) -> MaterializationKind {
        match name.binary_name(interner) {
            "java.lang.String" => MaterializationKind::PassThroughString,
            "java.lang.Boolean" => MaterializationKind::Boolean,
            "java.lang.Byte" => MaterializationKind::Byte,
            "java.lang.Character" => MaterializationKind::Char,
            "java.lang.Short" => MaterializationKind::Short,
            "java.lang.Integer" => MaterializationKind::Int,
            "java.lang.Long" => MaterializationKind::Long,
            "java.lang.Float" => MaterializationKind::Float,
            "java.lang.Double" => MaterializationKind::Double,
            _ => MaterializationKind::Unsupported,
        }
    }

    /// Whether this kind is a string-container target.
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            MaterializationKind::List | MaterializationKind::Array | MaterializationKind::Set
        )
    }

    /// Case name within the typed holder annotation family, `None` for the
    /// kinds that never get a companion.
    pub const fn holder_case(self) -> Option<&'static str> {
        match self {
            MaterializationKind::Boolean => Some("Boolean"),
            MaterializationKind::Byte => Some("DefaultByte"),
            MaterializationKind::Char => Some("DefaultChar"),
            MaterializationKind::Short => Some("DefaultShort"),
            MaterializationKind::Int => Some("Int"),
            MaterializationKind::Long => Some("Long"),
            MaterializationKind::Float => Some("Float"),
            MaterializationKind::Double => Some("Double"),
            MaterializationKind::List => Some("List"),
            MaterializationKind::Array => Some("Array"),
            MaterializationKind::Set => Some("Set"),
            MaterializationKind::PassThroughString | MaterializationKind::Unsupported => None,
        }
    }

    /// Suffix appended to synthesized field names. All three container kinds
    /// share `AsArray` because their fields are all `String[]`.
    pub const fn field_suffix(self) -> Option<&'static str> {
        match self {
            MaterializationKind::Boolean => Some("AsBoolean"),
            MaterializationKind::Byte => Some("AsByte"),
            MaterializationKind::Char => Some("AsChar"),
            MaterializationKind::Short => Some("AsShort"),
            MaterializationKind::Int => Some("AsInt"),
            MaterializationKind::Long => Some("AsLong"),
            MaterializationKind::Float => Some("AsFloat"),
            MaterializationKind::Double => Some("AsDouble"),
            MaterializationKind::List | MaterializationKind::Array | MaterializationKind::Set => {
                Some("AsArray")
            }
            MaterializationKind::PassThroughString | MaterializationKind::Unsupported => None,
        }
    }

    /// Runtime conversion call pattern for synthesized initializers; `{}` is
    /// replaced by the anchor expression text.
    pub const fn conversion(self) -> Option<&'static str> {
        match self {
            MaterializationKind::Boolean => Some("Boolean.parse({})"),
            MaterializationKind::Byte => Some("Byte.parse({})"),
            MaterializationKind::Char => Some("{}.charAt(0)"),
            MaterializationKind::Short => Some("Short.parse({})"),
            MaterializationKind::Int => Some("Integer.parse({})"),
            MaterializationKind::Long => Some("Long.parse({})"),
            MaterializationKind::Float => Some("Float.parse({})"),
            MaterializationKind::Double => Some("Double.parse({})"),
            MaterializationKind::List | MaterializationKind::Array | MaterializationKind::Set => {
                Some("{}.split(\",\")")
            }
            MaterializationKind::PassThroughString | MaterializationKind::Unsupported => None,
        }
    }

    /// Declared type of the synthesized field for this kind.
    pub fn field_type(self, interner: &Interner) -> Option<DeclaredType> {
        let ty = match self {
            MaterializationKind::Boolean => DeclaredType::Primitive(Primitive::Boolean),
            MaterializationKind::Byte => DeclaredType::Primitive(Primitive::Byte),
            MaterializationKind::Char => DeclaredType::Primitive(Primitive::Char),
            MaterializationKind::Short => DeclaredType::Primitive(Primitive::Short),
            MaterializationKind::Int => DeclaredType::Primitive(Primitive::Int),
            MaterializationKind::Long => DeclaredType::Primitive(Primitive::Long),
            MaterializationKind::Float => DeclaredType::Primitive(Primitive::Float),
            MaterializationKind::Double => DeclaredType::Primitive(Primitive::Double),
            MaterializationKind::List | MaterializationKind::Array | MaterializationKind::Set => {
                DeclaredType::Array(Box::new(DeclaredType::named("java.lang.String", interner)))
            }
            MaterializationKind::PassThroughString | MaterializationKind::Unsupported => {
                return None;
            }
        };
        Some(ty)
    }
}

fn is_string(ty: &DeclaredType, interner: &Interner) -> bool {
    matches!(ty, DeclaredType::Named(name) if name.binary_name(interner) == "java.lang.String")
}

#[cfg(test)]
mod tests;
