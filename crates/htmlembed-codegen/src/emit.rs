//! Declaration and source file generation

use crate::escape::to_literal;
use htmlembed_core::config::DEFAULT_TYPE;
use htmlembed_core::{is_c_identifier, Declaration, EmitConfig, Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Build the declaration for already compacted text
pub fn declare(type_name: &str, variable_name: &str, compacted: &str) -> Result<Declaration> {
    if !is_c_identifier(variable_name) {
        return Err(Error::InvalidIdentifier(variable_name.to_string()));
    }
    Ok(Declaration::new(type_name, variable_name, to_literal(compacted)))
}

/// Compact `html_path` and return `extern String <variable_name> = "...";`
pub fn emit(html_path: &Path, variable_name: &str) -> Result<String> {
    let compacted = htmlembed_compactor::compact_file(html_path)?;
    Ok(declare(DEFAULT_TYPE, variable_name, &compacted)?.to_string())
}

/// Contents of the generated file: header, include, blank line, declaration
pub fn render_source(config: &EmitConfig, declaration: &Declaration) -> String {
    format!("{}\n{}\n\n{}", config.header, config.include, declaration)
}

/// Compact `config.input` and overwrite `config.output` with the generated
/// source. The write is not atomic.
pub fn write_source(config: &EmitConfig) -> Result<Declaration> {
    let compacted = htmlembed_compactor::compact_file(&config.input)?;
    let declaration = declare(&config.type_name, &config.variable_name, &compacted)?;
    let source = render_source(config, &declaration);

    debug!("Writing {} bytes to {:?}", source.len(), config.output);
    std::fs::write(&config.output, source).map_err(|e| Error::file_access(&config.output, e))?;

    info!(
        "Generated {:?} from {:?} ({})",
        config.output, config.input, declaration.name
    );
    Ok(declaration)
}
