//! declgen: projects a typed program model into ambient TypeScript declarations.
//!
//! This crate provides the declaration engine:
//! - `typegen::typescript` - namespace blocks, module shims, and type rendering
//!
//! The program model itself lives in `declgen-core`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod typegen;

pub use declgen_core::{ProgramGraph, Symbol, Type, TypedProgram};

/// Errors that abort declaration generation.
///
/// All of them are input contract or internal invariant violations; no
/// partial document is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("exported symbol not defined: {0}")]
    UnresolvedExport(String),

    #[error("exported symbol has no type: {0}")]
    UntypedSymbol(String),

    /// The instance type of a class or interface is not an object.
    #[error("expected an object type for `this` of `{symbol}`, found {found}")]
    ThisNotObject { symbol: String, found: String },

    #[error("indentation level below zero")]
    IndentUnderflow,

    #[error("indentation must be zero after printing, but is {0}")]
    UnbalancedIndent(usize),
}

/// Result type for declaration generation.
pub type Result<T> = std::result::Result<T, Error>;
