//! Per-symbol declaration walker.
//!
//! Decides the declaration shape of one symbol and writes it. Nested type
//! references go through `TypeRenderer`.

use declgen_core::{
    ClassKind, ClassType, EnumType, FunctionType, Primitive, Properties, Symbol, Type,
    TypedProgram,
};
use tracing::{debug, trace};

use super::emitter::Emitter;
use super::naming::property_key;
use super::policy::{DeclKind, InterfaceProjection};
use super::render::{TypeRenderer, type_params};
use crate::{Error, Result};

/// Which member table a property comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MemberSlot {
    Instance,
    Prototype,
    Static,
}

impl<'a, P: TypedProgram + ?Sized> Emitter<'a, P> {
    /// Emit the declaration of `symbol` inside the block of `namespace`.
    #[tracing::instrument(level = "trace", skip(self, symbol), fields(symbol = symbol.name()))]
    pub(super) fn walk(
        &mut self,
        symbol: &'a Symbol,
        namespace: &'a str,
        is_default: bool,
    ) -> Result<()> {
        let ty = symbol
            .ty()
            .ok_or_else(|| Error::UntypedSymbol(symbol.name().to_string()))?;
        let r = TypeRenderer::new(namespace);
        let name = symbol.unqualified_name();

        match ty {
            Type::Function(f) => self.declare_function(symbol, f, &r),
            Type::Class(class) => match class.kind {
                ClassKind::Constructor => self.declare_class(symbol, class, &r),
                ClassKind::Interface => self.declare_interface(symbol, class, is_default, &r),
            },
            Type::Enum(e) => self.declare_enum(symbol, e, &r),
            // Symbols that became type aliases keep only the empty type.
            Type::Primitive(Primitive::None) => match self.program.alias_target(symbol.name()) {
                Some(target) => {
                    log_decl(symbol, DeclKind::Alias);
                    self.writer
                        .line(&format!("type {name} = {};", r.render(target)));
                    Ok(())
                }
                None => self.declare_var(symbol, ty, &r),
            },
            other => self.declare_var(symbol, other, &r),
        }
    }

    fn declare_var(&mut self, symbol: &Symbol, ty: &Type, r: &TypeRenderer<'_>) -> Result<()> {
        log_decl(symbol, DeclKind::Var);
        let name = symbol.unqualified_name();
        self.writer.line(&format!("var {name}: {};", r.render(ty)));
        Ok(())
    }

    fn declare_function(
        &mut self,
        symbol: &Symbol,
        f: &FunctionType,
        r: &TypeRenderer<'_>,
    ) -> Result<()> {
        log_decl(symbol, DeclKind::Function);
        let name = symbol.unqualified_name();
        self.writer
            .line(&format!("function {name}{};", r.render_signature(f)));
        Ok(())
    }

    fn declare_enum(&mut self, symbol: &Symbol, e: &EnumType, r: &TypeRenderer<'_>) -> Result<()> {
        log_decl(symbol, DeclKind::Enum);
        let name = symbol.unqualified_name();
        self.writer
            .line(&format!("type {name} = {};", r.render(&e.element)));

        let body = e
            .members
            .keys()
            .map(|member| format!("{}: {name},", property_key(member)))
            .collect();
        self.write_block(&format!("var {name}:"), body, ";")
    }

    fn declare_class(
        &mut self,
        symbol: &Symbol,
        class: &ClassType,
        r: &TypeRenderer<'_>,
    ) -> Result<()> {
        log_decl(symbol, DeclKind::Class);
        let mut header = format!(
            "class {}{}",
            symbol.unqualified_name(),
            type_params(&class.type_params)
        );
        if let Some(superclass) = class.superclass.as_deref().filter(|s| !is_root_object(s)) {
            header.push_str(" extends ");
            header.push_str(&r.render_heritage(superclass));
        }
        if !class.interfaces.is_empty() {
            header.push_str(" implements ");
            header.push_str(&heritage_list(&class.interfaces, r));
        }

        let mut body = Vec::new();
        if !class.constructor.is_empty() {
            body.push(format!("constructor({});", r.render_params(&class.constructor)));
        }
        self.instance_members(symbol, class, r, &mut body)?;
        for (prop, ty) in &class.statics {
            if !self.keep_member(symbol, MemberSlot::Static, prop) {
                continue;
            }
            if ty.is_enum() {
                trace!(owner = symbol.name(), member = %prop, "skipping static enum");
                body.push(format!("// skipped static enum {prop}"));
                continue;
            }
            body.push(format!("static {}", member_signature(prop, ty, r)));
        }

        self.write_block(&header, body, "")
    }

    fn declare_interface(
        &mut self,
        symbol: &Symbol,
        class: &ClassType,
        is_default: bool,
        r: &TypeRenderer<'_>,
    ) -> Result<()> {
        let projection = self
            .config
            .policy
            .lookup(is_default, DeclKind::Interface)
            .unwrap_or_default();
        log_decl(symbol, DeclKind::Interface);

        let name = symbol.unqualified_name();
        let params = type_params(&class.type_params);
        let mut body = Vec::new();
        self.instance_members(symbol, class, r, &mut body)?;

        match projection {
            InterfaceProjection::Named => {
                let mut header = format!("interface {name}{params}");
                if !class.interfaces.is_empty() {
                    header.push_str(" extends ");
                    header.push_str(&heritage_list(&class.interfaces, r));
                }
                self.write_block(&header, body, "")?;
            }
            InterfaceProjection::Inline => {
                let mut header = format!("type {name}{params} =");
                for parent in &class.interfaces {
                    header.push(' ');
                    header.push_str(&r.render_heritage(parent));
                    header.push_str(" &");
                }
                self.write_block(&header, body, ";")?;
            }
        }

        // Interface bodies cannot hold statics; list them on a companion var.
        let mut statics = Vec::new();
        for (prop, ty) in &class.statics {
            if !self.keep_member(symbol, MemberSlot::Static, prop) {
                continue;
            }
            if ty.is_enum() {
                trace!(owner = symbol.name(), member = %prop, "skipping static enum");
                statics.push(format!("// skipped static enum {prop}"));
                continue;
            }
            statics.push(format!("{}: {},", property_key(prop), r.render(ty)));
        }
        if !statics.is_empty() {
            self.write_block(&format!("var {name}:"), statics, ";")?;
        }
        Ok(())
    }

    /// Instance fields followed by prototype methods.
    fn instance_members(
        &self,
        symbol: &Symbol,
        class: &ClassType,
        r: &TypeRenderer<'_>,
        body: &mut Vec<String>,
    ) -> Result<()> {
        if !class.instance.is_object() {
            return Err(Error::ThisNotObject {
                symbol: symbol.name().to_string(),
                found: r.render(&class.instance),
            });
        }
        if let Some(fields) = self.program.members_of(&class.instance) {
            self.push_members(symbol, MemberSlot::Instance, fields, r, body);
        }
        self.push_members(symbol, MemberSlot::Prototype, &class.prototype, r, body);
        Ok(())
    }

    fn push_members(
        &self,
        symbol: &Symbol,
        slot: MemberSlot,
        props: &Properties,
        r: &TypeRenderer<'_>,
        body: &mut Vec<String>,
    ) {
        for (prop, ty) in props {
            if self.keep_member(symbol, slot, prop) {
                body.push(member_signature(prop, ty, r));
            }
        }
    }

    /// Drop the prototype slot, excluded meta members, and members that are
    /// exported on their own.
    fn keep_member(&self, owner: &Symbol, slot: MemberSlot, prop: &str) -> bool {
        if self.config.is_excluded_member(prop) {
            trace!(owner = owner.name(), member = prop, "excluded member");
            return false;
        }
        let qualified = match slot {
            MemberSlot::Static => format!("{}.{prop}", owner.name()),
            MemberSlot::Instance | MemberSlot::Prototype => {
                format!("{}.prototype.{prop}", owner.name())
            }
        };
        if self.exported.contains(qualified.as_str()) {
            trace!(owner = owner.name(), member = prop, ?slot, "member exported separately");
            return false;
        }
        true
    }

    /// Write `header {`, one indented line per entry, then `}` + `terminator`.
    fn write_block(&mut self, header: &str, body: Vec<String>, terminator: &str) -> Result<()> {
        if body.is_empty() {
            self.writer.line(&format!("{header} {{}}{terminator}"));
            return Ok(());
        }
        self.writer.open(&format!("{header} {{"));
        for line in &body {
            self.writer.line(line);
        }
        self.writer.close(&format!("}}{terminator}"))
    }
}

fn log_decl(symbol: &Symbol, kind: DeclKind) {
    debug!(symbol = symbol.name(), kind = kind.keyword(), "emitting declaration");
}

/// `name(a: T): R;` for function members, `name: T;` otherwise.
fn member_signature(prop: &str, ty: &Type, r: &TypeRenderer<'_>) -> String {
    let key = property_key(prop);
    match ty {
        Type::Function(f) => format!("{key}{};", r.render_signature(f)),
        other => format!("{key}: {};", r.render(other)),
    }
}

fn heritage_list(types: &[Type], r: &TypeRenderer<'_>) -> String {
    let names: Vec<String> = types.iter().map(|t| r.render_heritage(t)).collect();
    names.join(", ")
}

/// The implicit root superclass, never written in an `extends` clause.
fn is_root_object(ty: &Type) -> bool {
    match ty {
        Type::Named(name) => name == "Object",
        Type::Class(class) => class.name == "Object",
        _ => false,
    }
}
