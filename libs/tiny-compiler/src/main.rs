//! `tinyc`: compile s-expression calls into C-style calls.
//!
//! ```text
//! tinyc program.lisp
//! tinyc -e '(add 2 (subtract 4 2))'
//! echo '(concat "foo" "bar")' | tinyc --emit ast
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::debug;
use serde::Serialize;
use thiserror::Error;
use tiny_compiler::{generate, parse, tokenize, transform, CompileError, OutputStyle};

#[derive(Debug, Parser)]
#[command(name = "tinyc", version, about = "Compile (call arg ...) into call(arg, ...);")]
struct Cli {
    /// Source file; stdin is read when omitted.
    input: Option<PathBuf>,

    /// Compile this source text instead of a file.
    #[arg(short, long, conflicts_with = "input")]
    expr: Option<String>,

    /// Stop after the given stage and print its result.
    #[arg(long, value_enum, default_value_t = Emit::Code)]
    emit: Emit,

    /// Log pipeline stages to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Token sequence as JSON.
    Tokens,
    /// Source AST as JSON.
    Ast,
    /// Target AST as JSON.
    Target,
    /// Generated code.
    Code,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("cannot serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let source = read_source(cli)?;
    debug!("emitting {:?}", cli.emit);

    let tokens = tokenize(&source).map_err(CompileError::from)?;
    if cli.emit == Emit::Tokens {
        return to_json(&tokens);
    }

    let ast = parse(tokens).map_err(CompileError::from)?;
    if cli.emit == Emit::Ast {
        return to_json(&ast);
    }

    let target = transform(&ast).map_err(CompileError::from)?;
    if cli.emit == Emit::Target {
        return to_json(&target);
    }

    Ok(generate(&target, &OutputStyle::default()).map_err(CompileError::from)?)
}

fn read_source(cli: &Cli) -> Result<String, CliError> {
    if let Some(expr) = &cli.expr {
        return Ok(expr.clone());
    }
    match &cli.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
