//! Type values of a resolved, type-checked program.
//!
//! The variant set is closed: every consumer matches exhaustively, so a new
//! variant is a compile error in each projection rather than a silent
//! fall-through. Types are immutable once built and never cyclic at the value
//! level; cross references between declarations go through `Named` and friends,
//! which carry only a qualified name.

use indexmap::IndexMap;

/// Ordered property table of an object-like owner. Names are unique per owner.
pub type Properties = IndexMap<String, Type>;

/// Built-in type keywords and the catch-all markers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Primitive {
    Boolean,
    Number,
    String,
    Void,
    /// The `null` marker.
    Null,
    /// `?` - type not known to the checker.
    Unknown,
    /// `*` - every value.
    All,
    /// The empty type. Also left on symbols that became type aliases.
    None,
    /// Any object, no structure known.
    NoObject,
}

impl Primitive {
    /// Markers that have no counterpart in the target syntax and widen to `any`.
    pub fn is_any_like(self) -> bool {
        matches!(
            self,
            Self::Null | Self::Unknown | Self::All | Self::None | Self::NoObject
        )
    }

    /// Markers that express absence rather than a value (`null`, `void`).
    pub fn is_absence(self) -> bool {
        matches!(self, Self::Null | Self::Void)
    }
}

/// A type value.
#[derive(Clone, PartialEq, Debug)]
pub enum Type {
    Primitive(Primitive),
    /// Reference to another declaration's type by qualified name.
    Named(String),
    /// Alternatives in source order. May contain `null`/`void` markers.
    Union(Vec<Type>),
    /// Generic type parameter, scoped to the declaration that introduces it.
    TemplateVar(String),
    Templatized(TemplatizedType),
    /// Anonymous structural object type.
    Record(Properties),
    Enum(EnumType),
    /// The value type of an enum member; carries the enum's qualified name.
    EnumElement(String),
    /// Ordinary function, possibly bound to a receiver.
    Function(FunctionType),
    /// Constructor- or interface-flavored function.
    Class(ClassType),
    /// The `Owner.prototype` object; carries the owner's qualified name.
    FunctionPrototype(String),
}

impl Type {
    pub fn number() -> Self {
        Self::Primitive(Primitive::Number)
    }

    pub fn string() -> Self {
        Self::Primitive(Primitive::String)
    }

    pub fn boolean() -> Self {
        Self::Primitive(Primitive::Boolean)
    }

    pub fn void() -> Self {
        Self::Primitive(Primitive::Void)
    }

    pub fn null() -> Self {
        Self::Primitive(Primitive::Null)
    }

    pub fn unknown() -> Self {
        Self::Primitive(Primitive::Unknown)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn template(name: impl Into<String>) -> Self {
        Self::TemplateVar(name.into())
    }

    pub fn templatized(base: impl Into<String>, args: Vec<Type>) -> Self {
        Self::Templatized(TemplatizedType {
            base: base.into(),
            args,
        })
    }

    pub fn record<I, S>(props: I) -> Self
    where
        I: IntoIterator<Item = (S, Type)>,
        S: Into<String>,
    {
        Self::Record(props.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Whether values of this type are objects.
    ///
    /// A union is an object only when every alternative is.
    pub fn is_object(&self) -> bool {
        match self {
            Type::Primitive(Primitive::NoObject) => true,
            Type::Primitive(_) => false,
            Type::Named(_) => true,
            Type::Union(alts) => !alts.is_empty() && alts.iter().all(Type::is_object),
            Type::TemplateVar(_) => false,
            Type::Templatized(_) => true,
            Type::Record(_) => true,
            Type::Enum(_) => true,
            Type::EnumElement(_) => false,
            Type::Function(_) => true,
            Type::Class(_) => true,
            Type::FunctionPrototype(_) => true,
        }
    }

    /// Whether this is any function flavor (ordinary, constructor, interface).
    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function(_) | Type::Class(_))
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Type::Class(c) if c.kind == ClassKind::Interface)
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self, Type::Class(c) if c.kind == ClassKind::Constructor)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Type::Enum(_))
    }

    /// Whether the type is a catch-all (`any` after projection).
    pub fn is_any_like(&self) -> bool {
        matches!(self, Type::Primitive(p) if p.is_any_like())
    }

    /// Whether the type is the empty marker left behind by type aliases.
    pub fn is_none(&self) -> bool {
        matches!(self, Type::Primitive(Primitive::None))
    }
}

/// A generic base instantiated with type arguments, e.g. `Array<string>`.
#[derive(Clone, PartialEq, Debug)]
pub struct TemplatizedType {
    /// Qualified name of the generic base.
    pub base: String,
    pub args: Vec<Type>,
}

/// Value of an enum member as written in the source.
#[derive(Clone, PartialEq, Debug)]
pub enum EnumValue {
    Number(f64),
    String(String),
    Boolean(bool),
    /// Computed or otherwise not a literal.
    Opaque,
}

#[derive(Clone, PartialEq, Debug)]
pub struct EnumType {
    /// Qualified name the enum was declared under.
    pub name: String,
    /// Type shared by every member value.
    pub element: Box<Type>,
    /// Members in declaration order.
    pub members: IndexMap<String, EnumValue>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Param {
    /// Name from the declaration, if the checker kept it.
    pub name: Option<String>,
    /// Declared type; for a rest parameter, the element type.
    pub ty: Type,
    pub optional: bool,
    pub variadic: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            optional: false,
            variadic: false,
        }
    }

    pub fn unnamed(ty: Type) -> Self {
        Self {
            name: None,
            ty,
            optional: false,
            variadic: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FunctionType {
    /// Type parameters introduced by the function itself.
    pub type_params: Vec<String>,
    pub params: Vec<Param>,
    /// `None` means the function returns nothing.
    pub return_type: Option<Box<Type>>,
    /// Bound `this` type. Set for methods reachable through a prototype.
    pub receiver: Option<Box<Type>>,
}

impl FunctionType {
    pub fn new(params: Vec<Param>, return_type: Option<Type>) -> Self {
        Self {
            type_params: Vec::new(),
            params,
            return_type: return_type.map(Box::new),
            receiver: None,
        }
    }

    pub fn with_receiver(mut self, receiver: Type) -> Self {
        self.receiver = Some(Box::new(receiver));
        self
    }

    pub fn with_type_params(mut self, params: Vec<String>) -> Self {
        self.type_params = params;
        self
    }

    /// Whether the function is bound to a known receiver, i.e. it is a
    /// prototype method rather than a free function.
    pub fn has_bound_receiver(&self) -> bool {
        self.receiver.as_deref().is_some_and(|r| !matches!(r, Type::Primitive(Primitive::Unknown)))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ClassKind {
    Constructor,
    Interface,
}

/// A constructor or interface together with its three member tables.
#[derive(Clone, PartialEq, Debug)]
pub struct ClassType {
    /// Qualified name the class was declared under.
    pub name: String,
    pub kind: ClassKind,
    pub type_params: Vec<String>,
    /// Superclass reference (constructors only).
    pub superclass: Option<Box<Type>>,
    /// Implemented interfaces for constructors, extended interfaces for interfaces.
    pub interfaces: Vec<Type>,
    /// Constructor parameters. Always empty for interfaces.
    pub constructor: Vec<Param>,
    /// Type of `this` inside instance methods; holds the instance fields.
    pub instance: Box<Type>,
    /// Methods shared through the prototype.
    pub prototype: Properties,
    /// Own properties of the constructor function itself.
    pub statics: Properties,
}

impl ClassType {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_params: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            constructor: Vec::new(),
            instance: Box::new(Type::Record(Properties::new())),
            prototype: Properties::new(),
            statics: Properties::new(),
        }
    }
}
