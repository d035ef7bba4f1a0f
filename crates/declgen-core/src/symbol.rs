use crate::types::Type;
use crate::utils::{last_segment, parent_of};

/// A named slot of the checked program.
///
/// `ty` is `None` when the checker could not type the slot. Exported symbols
/// must always carry a type.
#[derive(Clone, PartialEq, Debug)]
pub struct Symbol {
    name: String,
    ty: Option<Type>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    /// Full dot-separated name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }

    /// Namespace the symbol is declared in (its name minus the last segment).
    #[inline]
    pub fn namespace(&self) -> &str {
        parent_of(&self.name)
    }

    /// Last segment of the name.
    #[inline]
    pub fn unqualified_name(&self) -> &str {
        last_segment(&self.name)
    }

    /// Whether this symbol is a method reached through a prototype.
    pub fn is_prototype_method(&self) -> bool {
        matches!(&self.ty, Some(Type::Function(f)) if f.has_bound_receiver())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FunctionType;

    #[test]
    fn namespace_and_unqualified_name() {
        let sym = Symbol::new("a.b.C", Type::number());
        assert_eq!(sym.namespace(), "a.b");
        assert_eq!(sym.unqualified_name(), "C");

        let top = Symbol::untyped("C");
        assert_eq!(top.namespace(), "");
        assert_eq!(top.ty(), None);
    }

    #[test]
    fn prototype_method_requires_known_receiver() {
        let bound = FunctionType::new(vec![], None).with_receiver(Type::named("a.Foo"));
        assert!(Symbol::new("a.Foo.prototype.m", Type::Function(bound)).is_prototype_method());

        let unknown = FunctionType::new(vec![], None).with_receiver(Type::unknown());
        assert!(!Symbol::new("a.f", Type::Function(unknown)).is_prototype_method());

        let free = FunctionType::new(vec![], None);
        assert!(!Symbol::new("a.g", Type::Function(free)).is_prototype_method());
    }
}
