// FanC - A small statically typed language compiled to LLVM IR in one pass
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! FanC Compiler CLI
//!
//! Compiles a FanC source file to textual LLVM IR.

use clap::{Parser, ValueEnum};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fanc::error::{format_error, report_error, CompileError};

/// When to colour diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Colour when stderr is a terminal
    Auto,
    /// Always colour
    Always,
    /// Plain text diagnostics
    Never,
}

/// FanC - A single-pass compiler emitting LLVM IR
#[derive(Parser, Debug)]
#[command(name = "fanc")]
#[command(author = "FanC Team")]
#[command(version)]
#[command(about = "A single-pass compiler for the FanC language emitting LLVM IR")]
#[command(long_about = r#"
fanc checks a FanC source file and translates it to textual LLVM IR.
The first error stops compilation; nothing is written in that case.

Example usage:
  fanc hello.fanc -o hello.ll
  fanc hello.fanc | lli
  fanc --check hello.fanc
  fanc -vv hello.fanc -o hello.ll
"#)]
struct Cli {
    /// Source file to compile (.fanc)
    source: PathBuf,

    /// Output file for the IR (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only run the checks, print nothing on success
    #[arg(long)]
    check: bool,

    /// Colour diagnostics
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

/// Install the stderr log subscriber; `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Print a compile error to stderr in the requested style.
fn print_error(error: &CompileError, source: &str, filename: &str, color: ColorChoice) {
    let colored = match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    if colored && report_error(error, source, true, io::stderr()).is_ok() {
        return;
    }
    eprint!("{}", format_error(error, source, Some(filename)));
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("FanC Compiler v{}", fanc::VERSION);
    debug!(source = %cli.source.display(), check = cli.check, "starting");

    let source = match std::fs::read_to_string(&cli.source) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", cli.source.display(), e);
            return ExitCode::from(3);
        }
    };

    let filename = cli
        .source
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<input>");

    let ir = match fanc::compile(&source) {
        Ok(ir) => ir,
        Err(e) => {
            print_error(&e, &source, filename, cli.color);
            return ExitCode::from(1);
        }
    };

    if cli.check {
        info!("{}: no errors", filename);
        return ExitCode::SUCCESS;
    }

    match &cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &ir) {
                eprintln!("Error: Cannot write {}: {}", path.display(), e);
                return ExitCode::from(3);
            }
            println!("Compiled {} -> {}", filename, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(ir.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("Error: Cannot write output: {}", e);
                return ExitCode::from(3);
            }
        }
    }

    ExitCode::SUCCESS
}
