//! Migration configuration.

use reforge_tree::{Interner, Name, TypeName};

/// Names of the externally-declared annotation schema the migration targets.
///
/// The marker annotation carries the attribute being migrated; the holder
/// annotation family supplies one typed case per materialization kind. Both
/// must be resolvable by the host type system for the rewritten sources to
/// type-check.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MigrationConfig {
    /// Fully-qualified marker annotation, e.g. `x.y.z.Property`.
    pub marker_annotation: String,
    /// Attribute being migrated, e.g. `defaultValue`.
    pub attribute: String,
    /// Fully-qualified typed holder family, e.g. `x.y.z.DefaultValue`.
    pub holder_annotation: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        MigrationConfig {
            marker_annotation: "x.y.z.Property".to_owned(),
            attribute: "defaultValue".to_owned(),
            holder_annotation: "x.y.z.DefaultValue".to_owned(),
        }
    }
}

/// Interned form of [`MigrationConfig`], resolved once per run.
pub(crate) struct MarkerSpec {
    pub(crate) marker: TypeName,
    pub(crate) attribute: Name,
    /// Binary name of the holder family (`x.y.z.DefaultValue`).
    pub(crate) holder: TypeName,
    /// Simple name used in companion references (`DefaultValue`).
    pub(crate) holder_simple: &'static str,
}

impl MarkerSpec {
    pub(crate) fn resolve(config: &MigrationConfig, interner: &Interner) -> Self {
        let holder = TypeName::intern(&config.holder_annotation, interner);
        MarkerSpec {
            marker: TypeName::intern(&config.marker_annotation, interner),
            attribute: interner.intern(&config.attribute),
            holder,
            holder_simple: holder.simple_name(interner),
        }
    }
}
