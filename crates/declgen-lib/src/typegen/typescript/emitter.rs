//! Core emitter struct and main emit logic.

use std::collections::BTreeSet;

use declgen_core::utils::is_direct_child;
use declgen_core::{Symbol, Type, TypedProgram};
use tracing::{debug, trace};

use super::Config;
use super::policy::{ModuleShim, is_default_export};
use super::writer::Writer;
use crate::{Error, Result};

/// TypeScript declaration emitter over a typed program.
pub struct Emitter<'a, P: ?Sized> {
    pub(super) program: &'a P,
    pub(super) config: Config,

    /// Exports that get their own namespace block, sorted
    pub(super) exported: BTreeSet<&'a str>,
    /// Output buffer
    pub(super) writer: Writer,
}

impl<'a, P: TypedProgram + ?Sized> Emitter<'a, P> {
    pub fn new<I>(program: &'a P, exports: I, config: Config) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let exported = exports
            .into_iter()
            .filter(|name| {
                let keep = config.emits(name);
                if !keep {
                    trace!(export = name, "not an entry point");
                }
                keep
            })
            .collect();
        Self {
            program,
            config,
            exported,
            writer: Writer::new(),
        }
    }

    /// Emit one namespace block and one module block per export.
    pub fn emit(mut self) -> Result<String> {
        let program = self.program;
        let exports: Vec<&'a str> = self.exported.iter().copied().collect();

        for export in exports {
            let symbol = program
                .resolve(export)
                .ok_or_else(|| Error::UnresolvedExport(export.to_string()))?;
            let ty = symbol
                .ty()
                .ok_or_else(|| Error::UntypedSymbol(export.to_string()))?;

            let is_default = is_default_export(ty);
            // A namespace export is itself the namespace of its children.
            let namespace = if is_default {
                symbol.namespace()
            } else {
                symbol.name()
            };
            debug!(export, namespace, is_default, "declaring export");

            self.declare_namespace(symbol, namespace, is_default)?;
            self.declare_module(export, is_default)?;
        }

        self.writer.finish()
    }

    fn declare_namespace(
        &mut self,
        symbol: &'a Symbol,
        namespace: &'a str,
        is_default: bool,
    ) -> Result<()> {
        let root = &self.config.internal_root;
        let header = if namespace.is_empty() {
            format!("declare namespace {root} {{")
        } else {
            format!("declare namespace {root}.{namespace} {{")
        };
        self.writer.open(&header);

        if is_default {
            self.walk(symbol, namespace, true)?;
        } else {
            let program = self.program;
            for other in program.children_of(namespace) {
                if self.is_sibling(other, namespace) {
                    self.walk(other, namespace, false)?;
                }
            }
        }

        self.writer.close("}")
    }

    /// Whether `other` is declared inside the block of namespace export `namespace`.
    fn is_sibling(&self, other: &Symbol, namespace: &str) -> bool {
        let name = other.name();
        let skip = if !is_direct_child(name, namespace) {
            "nested below a child"
        } else if self.exported.contains(name) {
            "exported separately"
        } else {
            match other.ty() {
                None => "untyped",
                Some(Type::FunctionPrototype(_)) => "prototype object",
                Some(_) if other.is_prototype_method() => "prototype method",
                Some(_) => return true,
            }
        };
        trace!(symbol = name, reason = skip, "skipping sibling");
        false
    }

    fn declare_module(&mut self, export: &str, is_default: bool) -> Result<()> {
        let target = format!("{}.{export}", self.config.internal_root);
        let header = format!("declare module '{}:{export}' {{", self.config.module_prefix);
        self.writer.open(&header);

        match self.config.policy.shim() {
            ModuleShim::AliasThenExport => {
                self.writer.line(&format!("import alias = {target};"));
                self.writer.line(if is_default {
                    "export default alias;"
                } else {
                    "export = alias;"
                });
            }
            ModuleShim::DirectExport => {
                let line = if is_default {
                    format!("export default {target};")
                } else {
                    format!("export = {target};")
                };
                self.writer.line(&line);
            }
        }

        self.writer.close("}")
    }
}
