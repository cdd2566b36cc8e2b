//! htmlembed Codegen
//!
//! Turns compacted HTML into source code.
//!
//! ## Modules
//!
//! - `escape` - quoted, null-terminated string literals
//! - `emit` - variable declarations and the generated source file

pub mod emit;
pub mod escape;

pub use emit::{declare, emit, render_source, write_source};
pub use escape::{from_literal, to_literal};

#[cfg(test)]
mod tests;
