//! Field and variable identity.

use crate::{Name, TypeName};

/// Resolved identity of a field or variable.
///
/// Identity is the declaring type plus the member name, independent of where
/// in the text a reference occurs. Two references to the same member resolve
/// to equal symbols.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Symbol {
    /// Type declaring the member.
    pub owner: TypeName,
    /// Member name.
    pub name: Name,
}

impl Symbol {
    /// Create a symbol from its declaring type and member name.
    #[inline]
    pub const fn new(owner: TypeName, name: Name) -> Self {
        Symbol { owner, name }
    }
}
