//! htmlembed CLI
//!
//! Build-time helpers that embed an HTML page into firmware sources.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use htmlembed_codegen::{from_literal, to_literal, write_source};
use htmlembed_compactor::compact_file_with_stats;
use htmlembed_core::config::{DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_VARIABLE};
use htmlembed_core::{EmitConfig, Error};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const COMPACT_USAGE: &str = "Usage: htmlembed compact <html_file>";

#[derive(Parser)]
#[command(name = "htmlembed")]
#[command(author, version, about = "Embed compacted HTML pages into firmware sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip comments and whitespace from an HTML file
    ///
    /// Prints only the compacted line, with no `Compressed HTML:` banner in
    /// front of it, so the output can be piped.
    Compact {
        /// HTML file to compact
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Quote a string as a null-terminated source literal
    Literal {
        /// Text to quote (or literal to decode with --decode)
        #[arg(value_name = "TEXT")]
        text: String,

        /// Turn a literal back into plain text
        #[arg(short, long)]
        decode: bool,
    },

    /// Generate the source file that embeds the web page
    Emit {
        /// HTML page to embed
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Source file to overwrite
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Variable name
        #[arg(short, long, default_value = DEFAULT_VARIABLE)]
        name: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compact { file, format } => {
            let Some(file) = file else {
                println!("{}", COMPACT_USAGE);
                std::process::exit(1);
            };
            cmd_compact(&file, &format)?;
        }
        Commands::Literal { text, decode } => {
            cmd_literal(&text, decode)?;
        }
        Commands::Emit {
            input,
            output,
            name,
        } => {
            let config = EmitConfig::default()
                .with_input(input)
                .with_output(output)
                .with_variable_name(name);
            cmd_emit(&config)?;
        }
    }

    Ok(())
}

fn cmd_compact(file: &Path, format: &str) -> Result<()> {
    let (compacted, stats) = compact_file_with_stats(file)?;

    match format {
        "text" => println!("{}", compacted),
        "json" => {
            let result = serde_json::json!({
                "file": file.to_string_lossy(),
                "compacted": compacted,
                "original_len": stats.original_len,
                "compacted_len": stats.compacted_len,
                "reduction_pct": stats.reduction_pct(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => bail!(Error::Argument(format!("unknown format: {}", format))),
    }

    Ok(())
}

fn cmd_literal(text: &str, decode: bool) -> Result<()> {
    if decode {
        match from_literal(text) {
            Some(plain) => println!("{}", plain),
            None => bail!("not a null-terminated literal: {}", text),
        }
    } else {
        println!("{}", to_literal(text));
    }
    Ok(())
}

fn cmd_emit(config: &EmitConfig) -> Result<()> {
    debug!("Emit config: {:?}", config);
    let declaration = write_source(config)?;
    println!(
        "Wrote {} (extern {} {})",
        config.output.display(),
        declaration.type_name,
        declaration.name
    );
    Ok(())
}
