//! FDSN WADL CLI
//!
//! Command-line interface for inspecting the query-parameter schema an
//! FDSN web service advertises through its WADL document.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use fdsn_wadl_common::ParamDescriptor;
use fdsn_wadl_parser::WadlParser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fdsn-wadl")]
#[command(version, about = "Inspect the query parameters of FDSN web services", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a WADL document and display the extracted parameter schema
    #[command(after_help = "EXAMPLES:\n  \
        # Display the parameter table\n  \
        fdsn-wadl parse --wadl dataselect.wadl\n\n  \
        # Emit the schema as JSON\n  \
        fdsn-wadl parse --wadl event.wadl --json")]
    Parse {
        /// Path to the WADL file
        #[arg(short, long)]
        wadl: PathBuf,

        /// Output the parameter mapping as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a WADL document against the canonical parameter set
    #[command(after_help = "EXAMPLES:\n  \
        # Exit non-zero when canonical parameters are missing\n  \
        fdsn-wadl check --wadl station.wadl")]
    Check {
        /// Path to the WADL file
        #[arg(short, long)]
        wadl: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { wadl, json } => parse_command(wadl.as_path(), json, cli.verbose)?,
        Commands::Check { wadl } => check_command(wadl.as_path())?,
    }

    Ok(())
}

fn parse_command(wadl_path: &Path, json: bool, verbose: bool) -> Result<()> {
    if !json {
        println!("{} Parsing WADL file: {}", "→".cyan(), wadl_path.display());
    }

    let parser = WadlParser::from_file(wadl_path)
        .with_context(|| format!("Failed to parse WADL file {}", wadl_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(parser.parameters())?);
        return Ok(());
    }

    println!("\n{}", "✓ Parse successful!".green().bold());
    match parser.resource_kind() {
        Some(kind) => println!("  Service: {}", kind.to_string().yellow()),
        None => println!("  Service: {}", "unknown".yellow()),
    }
    println!("  Parameters: {}", parser.parameters().len());

    println!("\n{}", "Parameters:".bold());
    for descriptor in parser.parameters().values() {
        print_descriptor(descriptor, verbose);
    }

    for diagnostic in parser.diagnostics() {
        println!("\n{} {}", "⚠".yellow(), diagnostic.message().yellow());
    }

    Ok(())
}

fn print_descriptor(descriptor: &ParamDescriptor, verbose: bool) {
    let mut notes = vec![descriptor.param_type.to_string()];
    if descriptor.required {
        notes.push("required".to_string());
    }
    if let Some(default) = &descriptor.default_value {
        notes.push(format!("default: {}", format_value(default)));
    }
    if !descriptor.options.is_empty() {
        notes.push(format!("one of: {}", descriptor.options.join("|")));
    }
    println!("  • {} ({})", descriptor.name.cyan(), notes.join(", "));

    if verbose {
        if let Some(title) = &descriptor.doc_title {
            println!("      {}", title);
        }
        if let Some(doc) = &descriptor.doc {
            println!("      {}", doc.dimmed());
        }
    }
}

fn format_value(value: &fdsn_wadl_common::ParamValue) -> String {
    use fdsn_wadl_common::ParamValue;
    match value {
        ParamValue::Timestamp(ts) => ts.to_rfc3339(),
        ParamValue::Text(s) => s.clone(),
        ParamValue::FloatingPoint(f) => f.to_string(),
        ParamValue::Boolean(b) => b.to_string(),
    }
}

fn check_command(wadl_path: &Path) -> Result<()> {
    let parser = WadlParser::from_file(wadl_path)
        .with_context(|| format!("Failed to parse WADL file {}", wadl_path.display()))?;

    let Some(kind) = parser.resource_kind() else {
        println!(
            "{} Unknown service kind, nothing to check against",
            "→".cyan()
        );
        return Ok(());
    };

    if parser.diagnostics().is_empty() {
        println!(
            "{} {} declares every canonical parameter",
            "✓".green().bold(),
            kind
        );
        return Ok(());
    }

    for diagnostic in parser.diagnostics() {
        eprintln!("{} {}", "✗".red().bold(), diagnostic.message());
    }
    std::process::exit(1);
}
