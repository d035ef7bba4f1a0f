#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Typed program model consumed by the declgen emitter.
//!
//! Two layers:
//! - **Deserialization layer** (`raw`): 1:1 mapping to a JSON program dump
//! - **Analysis layer**: `Type`, `Symbol`, and the `TypedProgram` query trait
//!
//! The engine only sees the analysis layer. `ProgramGraph` is the in-memory
//! implementation, built either from a dump or with its builder methods.

pub mod program;
pub mod raw;
pub mod symbol;
pub mod types;
pub mod utils;


pub use program::{ProgramGraph, TypedProgram};
pub use symbol::Symbol;
pub use types::{
    ClassKind, ClassType, EnumType, EnumValue, FunctionType, Param, Primitive, Properties,
    TemplatizedType, Type,
};

/// Errors raised while loading a program model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid program dump: {0}")]
    Json(#[from] serde_json::Error),

    /// A function type flagged as both constructor and interface.
    #[error("function type of `{symbol}` is neither ordinary, constructor, nor interface")]
    AmbiguousFunctionKind { symbol: String },

    #[error("symbol defined twice: {0}")]
    DuplicateSymbol(String),

    #[error("property `{name}` defined twice on `{owner}`")]
    DuplicateProperty { owner: String, name: String },
}
