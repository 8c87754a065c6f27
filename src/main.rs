//! Pinsmith - Behavior DSL to Arduino sketch compiler.
//!
//! Compiles a YAML behavior description against a project snapshot and
//! prints the generated sketch to stdout.
//!
//! # Usage
//!
//! ```bash
//! pinsmith behavior.yaml --projects projects.json --project p1 > blink.ino
//! pinsmith --example simple-blink --projects projects.json --project p1
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pinsmith_core::dsl::{self, examples};
use pinsmith_core::project::InMemoryProjectStore;

/// Behavior DSL to Arduino sketch compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the behavior description file (.yaml)
    #[arg(value_name = "BEHAVIOR_FILE", required_unless_present = "example")]
    behavior_file: Option<PathBuf>,

    /// Compile a built-in example instead of a file
    /// (simple-blink, multi-led, complex)
    #[arg(long, value_name = "NAME", conflicts_with = "behavior_file")]
    example: Option<String>,

    /// Path to the project snapshot JSON ({"projects": [...]})
    #[arg(short = 'P', long, value_name = "SNAPSHOT")]
    projects: PathBuf,

    /// Project id to compile for
    #[arg(short, long, value_name = "ID")]
    project: String,

    /// Also print the IR as JSON on stderr
    #[arg(long)]
    emit_ir: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let behavior = match (&args.behavior_file, args.example.as_deref()) {
        (Some(path), _) => dsl::parse_file(path),
        (None, Some("simple-blink")) => dsl::parse(examples::SIMPLE_BLINK),
        (None, Some("multi-led")) => dsl::parse(examples::MULTI_LED_PATTERN),
        (None, Some("complex")) => dsl::parse(examples::COMPLEX_SEQUENCE),
        (None, Some(other)) => {
            return Err(format!(
                "unknown example '{other}' (expected simple-blink, multi-led, or complex)"
            ))
        }
        // clap enforces one of the two
        (None, None) => return Err("no behavior given".to_string()),
    }
    .map_err(|e| format!("error[{}]: {e}", e.kind().as_str()))?;

    let snapshot = std::fs::read_to_string(&args.projects)
        .map_err(|e| format!("failed to read {}: {e}", args.projects.display()))?;
    let store = InMemoryProjectStore::from_json(&snapshot)
        .map_err(|e| format!("invalid project snapshot: {e}"))?;

    let result = pinsmith_core::codegen::build(&behavior, &args.project, &store)
        .map_err(|e| format!("error[{}]: {e}", e.kind().as_str()))?;

    if args.emit_ir {
        let ir = serde_json::to_string_pretty(&result.ir)
            .map_err(|e| format!("failed to serialize IR: {e}"))?;
        eprintln!("{ir}");
    }

    print!("{}", result.code);
    Ok(())
}
