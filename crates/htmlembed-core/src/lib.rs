//! htmlembed Core
//!
//! Shared types, errors and defaults for the htmlembed tools.

pub mod config;
pub mod error;
pub mod types;

pub use config::EmitConfig;
pub use error::{Error, Result};
pub use types::*;
