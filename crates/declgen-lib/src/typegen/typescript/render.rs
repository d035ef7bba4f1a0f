//! Type value to TypeScript type syntax.

use std::borrow::Cow;

use declgen_core::{ClassKind, FunctionType, Param, Primitive, TemplatizedType, Type};

use super::naming::{property_key, relative_name, synthesized_param_name};

/// Built-in ordered-list base, rendered as `T[]`.
const ARRAY_BASE: &str = "Array";
/// Built-in generic object base, rendered as an index signature.
const OBJECT_BASE: &str = "Object";

/// Renders types relative to one namespace.
///
/// Rendering is pure: the same type always yields the same text, and named
/// references are printed by name without visiting their declarations.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TypeRenderer<'a> {
    namespace: &'a str,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(namespace: &'a str) -> Self {
        Self { namespace }
    }

    /// Name of `qualified` relative to the active namespace.
    pub fn relative<'n>(&self, qualified: &'n str) -> &'n str {
        relative_name(qualified, self.namespace)
    }

    pub fn render(&self, ty: &Type) -> String {
        match ty {
            Type::Primitive(p) => primitive_keyword(*p).to_string(),
            Type::Named(name) => self.relative(name).to_string(),
            Type::Union(alts) => self.render_union(alts),
            Type::TemplateVar(name) => name.clone(),
            Type::Templatized(t) => self.render_templatized(t),
            Type::Record(props) => {
                if props.is_empty() {
                    return "{}".to_string();
                }
                let fields: Vec<String> = props
                    .iter()
                    .map(|(name, ty)| format!("{}: {}", property_key(name), self.render(ty)))
                    .collect();
                format!("{{ {} }}", fields.join(", "))
            }
            Type::Enum(e) => format!("typeof {}", self.relative(&e.name)),
            Type::EnumElement(name) => self.relative(name).to_string(),
            Type::Function(f) => self.render_function_type(f),
            Type::Class(c) => match c.kind {
                ClassKind::Constructor => format!("typeof {}", self.relative(&c.name)),
                ClassKind::Interface => self.relative(&c.name).to_string(),
            },
            Type::FunctionPrototype(owner) => self.relative(owner).to_string(),
        }
    }

    fn render_union(&self, alts: &[Type]) -> String {
        let kept = union_alternates(alts);
        match kept.as_slice() {
            [] => "any".to_string(),
            [single] => self.render(single),
            _ => {
                let rendered: Vec<String> = kept.iter().map(|t| self.render(t)).collect();
                format!("({})", rendered.join(" | "))
            }
        }
    }

    fn render_templatized(&self, t: &TemplatizedType) -> String {
        match (t.base.as_str(), t.args.as_slice()) {
            (ARRAY_BASE, [elem]) => {
                let inner = self.render(elem);
                if needs_array_parens(elem) {
                    format!("({inner})[]")
                } else {
                    format!("{inner}[]")
                }
            }
            (OBJECT_BASE, [key, value]) => self.render_index_signature(key, value),
            (_, []) => self.relative(&t.base).to_string(),
            (_, args) => {
                let rendered: Vec<String> = args.iter().map(|a| self.render(a)).collect();
                format!("{}<{}>", self.relative(&t.base), rendered.join(", "))
            }
        }
    }

    fn render_index_signature(&self, key: &Type, value: &Type) -> String {
        let value = self.render(value);
        match key {
            Type::Primitive(Primitive::Number) => format!("{{ [key: number]: {value} }}"),
            Type::Primitive(Primitive::String) => format!("{{ [key: string]: {value} }}"),
            other => format!(
                "{{ [/* warning: coerced from {} */ key: string]: {value} }}",
                self.render(other)
            ),
        }
    }

    /// Arrow-style function type: `<T>(a: T) => T`.
    pub fn render_function_type(&self, f: &FunctionType) -> String {
        format!(
            "{}({}) => {}",
            type_params(&f.type_params),
            self.render_params(&f.params),
            self.render_return(f)
        )
    }

    /// Signature tail of a function declaration: `<T>(a: T): T`.
    pub fn render_signature(&self, f: &FunctionType) -> String {
        format!(
            "{}({}): {}",
            type_params(&f.type_params),
            self.render_params(&f.params),
            self.render_return(f)
        )
    }

    pub fn render_return(&self, f: &FunctionType) -> String {
        f.return_type
            .as_deref()
            .map_or_else(|| "void".to_string(), |ty| self.render(ty))
    }

    pub fn render_params(&self, params: &[Param]) -> String {
        let rendered: Vec<String> = params
            .iter()
            .enumerate()
            .map(|(i, p)| self.render_param(i, p))
            .collect();
        rendered.join(", ")
    }

    fn render_param(&self, index: usize, param: &Param) -> String {
        let name: Cow<'_, str> = match &param.name {
            Some(name) => Cow::Borrowed(name),
            None => synthesized_param_name(index),
        };
        // A rest parameter is already optional; `?` is not allowed on it.
        if param.variadic {
            let elem = self.render(&param.ty);
            let elem = if param.ty.is_any_like() || is_parenthesized(&param.ty) {
                elem
            } else {
                format!("({elem})")
            };
            return format!("...{name}: {elem}[]");
        }
        let optional = if param.optional { "?" } else { "" };
        format!("{name}{optional}: {}", self.render(&param.ty))
    }

    /// Reference to a class or interface in an `extends`/`implements` clause.
    pub fn render_heritage(&self, ty: &Type) -> String {
        match ty {
            Type::Class(c) => self.relative(&c.name).to_string(),
            other => self.render(other),
        }
    }
}

pub(crate) fn primitive_keyword(p: Primitive) -> &'static str {
    match p {
        Primitive::Boolean => "boolean",
        Primitive::Number => "number",
        Primitive::String => "string",
        Primitive::Void => "void",
        Primitive::Null
        | Primitive::Unknown
        | Primitive::All
        | Primitive::None
        | Primitive::NoObject => "any",
    }
}

/// Union alternatives that survive `null`/`void` filtering, in source order.
pub(crate) fn union_alternates(alts: &[Type]) -> Vec<&Type> {
    alts.iter()
        .filter(|t| !matches!(t, Type::Primitive(p) if p.is_absence()))
        .collect()
}

/// Whether `ty` renders as an arrow type, which would swallow a trailing `[]`.
fn needs_array_parens(ty: &Type) -> bool {
    match ty {
        Type::Function(_) => true,
        Type::Union(alts) => {
            matches!(union_alternates(alts).as_slice(), [single] if needs_array_parens(single))
        }
        _ => false,
    }
}

/// Whether rendering `ty` already yields a parenthesized union.
fn is_parenthesized(ty: &Type) -> bool {
    matches!(ty, Type::Union(alts) if union_alternates(alts).len() > 1)
}

/// `<T, U>`, or nothing for a non-generic declaration.
pub(crate) fn type_params(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("<{}>", params.join(", "))
    }
}
