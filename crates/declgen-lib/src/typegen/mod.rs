//! Declaration generation from a typed program.
//!
//! Walks the exported surface of a `TypedProgram` and generates ambient type
//! declarations for target languages. Currently supports TypeScript `.d.ts`.
//!
//! # Example
//!
//! ```
//! use declgen_lib::typegen::typescript;
//! use declgen_lib::{ProgramGraph, Type};
//!
//! let program = ProgramGraph::new()
//!     .define("app.VERSION", Type::string())
//!     .export("app.VERSION");
//! let dts = typescript::emit(&program, program.exports()).unwrap();
//! assert!(dts.contains("var VERSION: string;"));
//! ```

pub mod typescript;
