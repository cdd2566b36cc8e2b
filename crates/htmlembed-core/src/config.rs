//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Page compacted by `htmlembed emit`, relative to the tools directory
pub const DEFAULT_INPUT: &str = "../src/webserver/joysticks.html";

/// Generated source file written by `htmlembed emit`
pub const DEFAULT_OUTPUT: &str = "../src/webserver/html_string.cpp";

/// Name of the variable holding the page
pub const DEFAULT_VARIABLE: &str = "page";

/// Declared type of the variable
pub const DEFAULT_TYPE: &str = "String";

/// Include directive placed after the header
pub const DEFAULT_INCLUDE: &str = "#include <Arduino.h>";

/// First line of every generated file
pub const DEFAULT_HEADER: &str = "/* This file was automatically generated by htmlembed */";

/// Emitter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitConfig {
    /// HTML page to compact
    pub input: PathBuf,

    /// Source file to (over)write
    pub output: PathBuf,

    /// Variable name in the declaration
    pub variable_name: String,

    /// Variable type in the declaration
    pub type_name: String,

    /// Include directive line
    pub include: String,

    /// Generated-file header comment
    pub header: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            variable_name: DEFAULT_VARIABLE.into(),
            type_name: DEFAULT_TYPE.into(),
            include: DEFAULT_INCLUDE.into(),
            header: DEFAULT_HEADER.into(),
        }
    }
}

impl EmitConfig {
    /// Override the input page
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Override the output file
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Override the variable name
    pub fn with_variable_name(mut self, name: impl Into<String>) -> Self {
        self.variable_name = name.into();
        self
    }
}
