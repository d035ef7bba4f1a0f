//! Projection policy keyed by export classification and declaration kind.
//!
//! Two target-syntax workarounds live here instead of in the walker:
//! interfaces that must be declared by name, and the module shim that aliases
//! an ambient namespace before exporting it.

use declgen_core::Type;

/// Declaration shape chosen for a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Function,
    Class,
    Interface,
    Enum,
    /// Type alias recovered from the alias registry.
    Alias,
    Var,
}

impl DeclKind {
    pub fn keyword(self) -> &'static str {
        match self {
            DeclKind::Function => "function",
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
            DeclKind::Alias => "type",
            DeclKind::Var => "var",
        }
    }
}

/// How an interface-flavored symbol is projected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterfaceProjection {
    /// `interface Name { ... }`, plus a companion `var` for statics.
    #[default]
    Named,
    /// `type Name = { ... };`
    Inline,
}

/// How the module block re-exports the internal namespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModuleShim {
    /// `import alias = Root.x;` then `export default alias;` or `export = alias;`
    #[default]
    AliasThenExport,
    /// `export default Root.x;` or `export = Root.x;`
    DirectExport,
}

/// Per-(is_default, kind) projection table.
///
/// Only interfaces have a configurable row; every other kind has a single
/// projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyTable {
    default_interface: InterfaceProjection,
    namespaced_interface: InterfaceProjection,
    module_shim: ModuleShim,
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self {
            default_interface: InterfaceProjection::Named,
            namespaced_interface: InterfaceProjection::Named,
            module_shim: ModuleShim::AliasThenExport,
        }
    }
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interface projection for default or namespaced symbols.
    pub fn interface(mut self, is_default: bool, projection: InterfaceProjection) -> Self {
        if is_default {
            self.default_interface = projection;
        } else {
            self.namespaced_interface = projection;
        }
        self
    }

    pub fn module_shim(mut self, shim: ModuleShim) -> Self {
        self.module_shim = shim;
        self
    }

    /// Interface projection for the given key, `None` for non-interface kinds.
    pub fn lookup(&self, is_default: bool, kind: DeclKind) -> Option<InterfaceProjection> {
        match (is_default, kind) {
            (true, DeclKind::Interface) => Some(self.default_interface),
            (false, DeclKind::Interface) => Some(self.namespaced_interface),
            _ => None,
        }
    }

    pub fn shim(&self) -> ModuleShim {
        self.module_shim
    }
}

/// Whether an export occupies its namespace slot alone.
///
/// Non-objects, interfaces, enums, and functions are default exports; every
/// other object type is exported as a namespace of its children.
pub fn is_default_export(ty: &Type) -> bool {
    !ty.is_object() || ty.is_interface() || ty.is_enum() || ty.is_function()
}

#[cfg(test)]
mod tests {
    use super::*;
    use declgen_core::{ClassKind, ClassType, FunctionType};

    #[test]
    fn default_classification() {
        assert!(is_default_export(&Type::number()));
        assert!(is_default_export(&Type::Function(FunctionType::default())));
        assert!(is_default_export(&Type::Class(ClassType::new(
            "a.I",
            ClassKind::Interface
        ))));
        assert!(is_default_export(&Type::Class(ClassType::new(
            "a.C",
            ClassKind::Constructor
        ))));
        assert!(!is_default_export(&Type::record([("x", Type::number())])));
        assert!(!is_default_export(&Type::named("a.Foo")));
    }

    #[test]
    fn lookup_only_keys_interfaces() {
        let table = PolicyTable::new().interface(false, InterfaceProjection::Inline);
        assert_eq!(
            table.lookup(true, DeclKind::Interface),
            Some(InterfaceProjection::Named)
        );
        assert_eq!(
            table.lookup(false, DeclKind::Interface),
            Some(InterfaceProjection::Inline)
        );
        assert_eq!(table.lookup(true, DeclKind::Class), None);
    }
}
