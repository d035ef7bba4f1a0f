//! TypeScript ambient declaration emitter.
//!
//! For every exported identifier, writes one `declare namespace` block under
//! the internal root, followed by a `declare module '<prefix>:<name>'` block
//! that re-exports it.

mod config;
mod emitter;
mod naming;
mod policy;
mod render;
mod walker;
mod writer;

#[cfg(test)]
mod walker_tests;

pub use config::{Config, DEFAULT_INTERNAL_ROOT, DEFAULT_MODULE_PREFIX};
pub use emitter::Emitter;
pub use policy::{DeclKind, InterfaceProjection, ModuleShim, PolicyTable, is_default_export};

use declgen_core::TypedProgram;

use crate::Result;

/// Emit declarations for `exports`.
pub fn emit<'a, P, I>(program: &'a P, exports: I) -> Result<String>
where
    P: TypedProgram + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    Emitter::new(program, exports, Config::default()).emit()
}

/// Emit declarations for `exports` with custom config.
pub fn emit_with_config<'a, P, I>(program: &'a P, exports: I, config: Config) -> Result<String>
where
    P: TypedProgram + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    Emitter::new(program, exports, config).emit()
}
