//! Deserialization layer: 1:1 mapping of a JSON program dump.
//!
//! ```json
//! {
//!   "exports": ["ns.Foo"],
//!   "symbols": [{ "name": "ns.Foo", "type": { "kind": "number" } }],
//!   "aliases": { "ns.Id": { "kind": "string" } }
//! }
//! ```
//!
//! Property tables are arrays of `{ "name", "type" }` so that duplicate names
//! can be reported instead of silently merged.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::ModelError;
use crate::program::ProgramGraph;
use crate::symbol::Symbol;
use crate::types::{
    ClassKind, ClassType, EnumType, EnumValue, FunctionType, Param, Primitive, Properties, Type,
    TemplatizedType,
};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawProgram {
    #[serde(default)]
    pub exports: Vec<String>,
    #[serde(default)]
    pub symbols: Vec<RawSymbol>,
    #[serde(default)]
    pub aliases: IndexMap<String, RawType>,
}

/// A symbol slot. A missing `type` means the checker could not type it.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawSymbol {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: Option<RawType>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: RawType,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawEnumMember {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawParam {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: RawType,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub variadic: bool,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawType {
    Boolean,
    Number,
    String,
    Void,
    Null,
    Unknown,
    All,
    None,
    NoObject,
    Named {
        name: String,
    },
    Union {
        alternates: Vec<RawType>,
    },
    Template {
        name: String,
    },
    Templatized {
        base: String,
        #[serde(default)]
        args: Vec<RawType>,
    },
    Record {
        #[serde(default)]
        properties: Vec<RawProperty>,
    },
    Enum {
        name: String,
        element: Box<RawType>,
        #[serde(default)]
        members: Vec<RawEnumMember>,
    },
    EnumElement {
        name: String,
    },
    Function(RawFunction),
    Prototype {
        owner: String,
    },
}

/// Any function flavor. `constructor` and `interface` are mutually exclusive.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawFunction {
    pub name: Option<String>,
    pub constructor: bool,
    pub interface: bool,
    pub template_params: Vec<String>,
    pub params: Vec<RawParam>,
    pub returns: Option<Box<RawType>>,
    /// Receiver for plain functions, instance type for constructors and interfaces.
    #[serde(rename = "this")]
    pub receiver: Option<Box<RawType>>,
    pub superclass: Option<Box<RawType>>,
    /// Implemented interfaces (constructors) or extended interfaces (interfaces).
    pub implements: Vec<RawType>,
    pub prototype: Vec<RawProperty>,
    pub statics: Vec<RawProperty>,
}

/// Parse a JSON program dump into raw structs.
pub fn parse_program(json: &str) -> Result<RawProgram, ModelError> {
    Ok(serde_json::from_str(json)?)
}

impl ProgramGraph {
    /// Parse and convert a JSON program dump.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Self::try_from(parse_program(json)?)
    }
}

impl TryFrom<RawProgram> for ProgramGraph {
    type Error = ModelError;

    fn try_from(raw: RawProgram) -> Result<Self, Self::Error> {
        let mut program = ProgramGraph::new();
        for sym in raw.symbols {
            let symbol = match sym.ty {
                Some(ty) => Symbol::new(sym.name.clone(), convert(ty, &sym.name)?),
                None => Symbol::untyped(sym.name),
            };
            program.insert(symbol)?;
        }
        for (name, ty) in raw.aliases {
            let target = convert(ty, &name)?;
            program.insert_alias(name, target);
        }
        for name in raw.exports {
            program.insert_export(name);
        }
        Ok(program)
    }
}

/// Convert a raw type. `owner` names the enclosing symbol for error reports.
fn convert(raw: RawType, owner: &str) -> Result<Type, ModelError> {
    let ty = match raw {
        RawType::Boolean => Type::Primitive(Primitive::Boolean),
        RawType::Number => Type::Primitive(Primitive::Number),
        RawType::String => Type::Primitive(Primitive::String),
        RawType::Void => Type::Primitive(Primitive::Void),
        RawType::Null => Type::Primitive(Primitive::Null),
        RawType::Unknown => Type::Primitive(Primitive::Unknown),
        RawType::All => Type::Primitive(Primitive::All),
        RawType::None => Type::Primitive(Primitive::None),
        RawType::NoObject => Type::Primitive(Primitive::NoObject),
        RawType::Named { name } => Type::Named(name),
        RawType::Union { alternates } => Type::Union(convert_all(alternates, owner)?),
        RawType::Template { name } => Type::TemplateVar(name),
        RawType::Templatized { base, args } => Type::Templatized(TemplatizedType {
            base,
            args: convert_all(args, owner)?,
        }),
        RawType::Record { properties } => Type::Record(convert_properties(properties, owner)?),
        RawType::Enum {
            name,
            element,
            members,
        } => {
            let element = Box::new(convert(*element, owner)?);
            let mut table = IndexMap::with_capacity(members.len());
            for member in members {
                match table.entry(member.name) {
                    Entry::Occupied(e) => {
                        return Err(ModelError::DuplicateProperty {
                            owner: name,
                            name: e.key().clone(),
                        });
                    }
                    Entry::Vacant(e) => {
                        e.insert(enum_value(member.value));
                    }
                }
            }
            Type::Enum(EnumType {
                name,
                element,
                members: table,
            })
        }
        RawType::EnumElement { name } => Type::EnumElement(name),
        RawType::Function(func) => convert_function(func, owner)?,
        RawType::Prototype { owner } => Type::FunctionPrototype(owner),
    };
    Ok(ty)
}

fn convert_all(raw: Vec<RawType>, owner: &str) -> Result<Vec<Type>, ModelError> {
    raw.into_iter().map(|ty| convert(ty, owner)).collect()
}

fn convert_properties(raw: Vec<RawProperty>, owner: &str) -> Result<Properties, ModelError> {
    let mut props = Properties::with_capacity(raw.len());
    for prop in raw {
        let ty = convert(prop.ty, owner)?;
        match props.entry(prop.name) {
            Entry::Occupied(e) => {
                return Err(ModelError::DuplicateProperty {
                    owner: owner.to_string(),
                    name: e.key().clone(),
                });
            }
            Entry::Vacant(e) => {
                e.insert(ty);
            }
        }
    }
    Ok(props)
}

fn convert_params(raw: Vec<RawParam>, owner: &str) -> Result<Vec<Param>, ModelError> {
    raw.into_iter()
        .map(|p| {
            Ok(Param {
                name: p.name,
                ty: convert(p.ty, owner)?,
                optional: p.optional,
                variadic: p.variadic,
            })
        })
        .collect()
}

fn convert_function(raw: RawFunction, owner: &str) -> Result<Type, ModelError> {
    let kind = match (raw.constructor, raw.interface) {
        (false, false) => None,
        (true, false) => Some(ClassKind::Constructor),
        (false, true) => Some(ClassKind::Interface),
        (true, true) => {
            return Err(ModelError::AmbiguousFunctionKind {
                symbol: owner.to_string(),
            });
        }
    };

    let Some(kind) = kind else {
        return Ok(Type::Function(FunctionType {
            type_params: raw.template_params,
            params: convert_params(raw.params, owner)?,
            return_type: raw
                .returns
                .map(|ty| convert(*ty, owner).map(Box::new))
                .transpose()?,
            receiver: raw
                .receiver
                .map(|ty| convert(*ty, owner).map(Box::new))
                .transpose()?,
        }));
    };

    let name = raw.name.unwrap_or_else(|| owner.to_string());
    let mut class = ClassType::new(name, kind);
    class.type_params = raw.template_params;
    class.superclass = raw
        .superclass
        .map(|ty| convert(*ty, owner).map(Box::new))
        .transpose()?;
    class.interfaces = convert_all(raw.implements, owner)?;
    if kind == ClassKind::Constructor {
        class.constructor = convert_params(raw.params, owner)?;
    }
    if let Some(this) = raw.receiver {
        class.instance = Box::new(convert(*this, owner)?);
    }
    class.prototype = convert_properties(raw.prototype, &class.name)?;
    class.statics = convert_properties(raw.statics, &class.name)?;
    Ok(Type::Class(class))
}

fn enum_value(raw: Option<serde_json::Value>) -> EnumValue {
    match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64().map_or(EnumValue::Opaque, EnumValue::Number),
        Some(serde_json::Value::String(s)) => EnumValue::String(s),
        Some(serde_json::Value::Bool(b)) => EnumValue::Boolean(b),
        _ => EnumValue::Opaque,
    }
}
