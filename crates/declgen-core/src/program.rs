//! Query interface over a checked program, plus an in-memory implementation.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use crate::symbol::Symbol;
use crate::types::{Properties, Type};
use crate::ModelError;

/// Read-only view of a fully resolved, type-checked program.
///
/// The program must be frozen before projection starts. Enumeration order is
/// part of the contract: `children_of` yields symbols sorted by qualified name.
pub trait TypedProgram {
    /// Look up a symbol by qualified name.
    fn resolve(&self, qualified_name: &str) -> Option<&Symbol>;

    /// Own properties of an object-like owner, in declaration order.
    ///
    /// Records expose their properties, constructors and interfaces their
    /// statics. Returns `None` for types that are not objects.
    fn members_of<'a>(&'a self, owner: &'a Type) -> Option<&'a Properties> {
        match owner {
            Type::Record(props) => Some(props),
            Type::Class(class) => Some(&class.statics),
            _ => None,
        }
    }

    /// Every symbol strictly below `namespace`, sorted by qualified name.
    fn children_of(&self, namespace: &str) -> Vec<&Symbol>;

    /// Aliased type registered under `qualified_name`, for symbols that became
    /// type aliases and kept only the empty marker type.
    fn alias_target(&self, qualified_name: &str) -> Option<&Type>;
}

impl<T: TypedProgram + ?Sized> TypedProgram for &T {
    fn resolve(&self, qualified_name: &str) -> Option<&Symbol> {
        (*self).resolve(qualified_name)
    }
    fn members_of<'a>(&'a self, owner: &'a Type) -> Option<&'a Properties> {
        (*self).members_of(owner)
    }
    fn children_of(&self, namespace: &str) -> Vec<&Symbol> {
        (*self).children_of(namespace)
    }
    fn alias_target(&self, qualified_name: &str) -> Option<&Type> {
        (*self).alias_target(qualified_name)
    }
}

/// Symbol table of a checked program, ordered by qualified name.
#[derive(Debug, Clone, Default)]
pub struct ProgramGraph {
    symbols: BTreeMap<String, Symbol>,
    aliases: BTreeMap<String, Type>,
    exports: BTreeSet<String>,
}

impl ProgramGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a typed symbol. Later definitions replace earlier ones.
    pub fn define(mut self, name: impl Into<String>, ty: Type) -> Self {
        let sym = Symbol::new(name, ty);
        self.symbols.insert(sym.name().to_string(), sym);
        self
    }

    /// Add a symbol the checker could not type.
    pub fn define_untyped(mut self, name: impl Into<String>) -> Self {
        let sym = Symbol::untyped(name);
        self.symbols.insert(sym.name().to_string(), sym);
        self
    }

    /// Register the target of a type alias.
    pub fn alias(mut self, name: impl Into<String>, target: Type) -> Self {
        self.aliases.insert(name.into(), target);
        self
    }

    /// Mark a qualified name as part of the public surface.
    pub fn export(mut self, name: impl Into<String>) -> Self {
        self.exports.insert(name.into());
        self
    }

    /// Insert a symbol, rejecting duplicates.
    pub fn insert(&mut self, symbol: Symbol) -> Result<(), ModelError> {
        if self.symbols.contains_key(symbol.name()) {
            return Err(ModelError::DuplicateSymbol(symbol.name().to_string()));
        }
        self.symbols.insert(symbol.name().to_string(), symbol);
        Ok(())
    }

    pub fn insert_alias(&mut self, name: String, target: Type) {
        self.aliases.insert(name, target);
    }

    pub fn insert_export(&mut self, name: String) {
        self.exports.insert(name);
    }

    /// Exported identifiers, sorted.
    pub fn exports(&self) -> impl Iterator<Item = &str> {
        self.exports.iter().map(String::as_str)
    }

    /// All symbols, sorted by qualified name.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl TypedProgram for ProgramGraph {
    fn resolve(&self, qualified_name: &str) -> Option<&Symbol> {
        self.symbols.get(qualified_name)
    }

    fn members_of<'a>(&'a self, owner: &'a Type) -> Option<&'a Properties> {
        match owner {
            Type::Record(props) => Some(props),
            Type::Class(class) => Some(&class.statics),
            // A named instance type: follow one hop to the declaration.
            Type::Named(name) => match self.resolve(name)?.ty()? {
                Type::Record(props) => Some(props),
                Type::Class(class) => match class.instance.as_ref() {
                    Type::Record(props) => Some(props),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        }
    }

    fn children_of(&self, namespace: &str) -> Vec<&Symbol> {
        if namespace.is_empty() {
            return self.symbols.values().collect();
        }
        let prefix = format!("{namespace}.");
        self.symbols
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .take_while(|(name, _)| name.starts_with(&prefix))
            .map(|(_, sym)| sym)
            .collect()
    }

    fn alias_target(&self, qualified_name: &str) -> Option<&Type> {
        self.aliases.get(qualified_name)
    }
}
