//! jbmc-cex: reconstruct concrete counterexample inputs from JBMC traces.
//!
//! Reads a JBMC `--xml-ui` trace (from a file, stdin, or by running JBMC
//! directly) and rebuilds the Java-level argument values of each failing
//! execution.
//!
//! Usage:
//!   jbmc-cex trace.xml
//!   jbmc-cex --run 'MyClass.test' --unwind 20
//!   jbmc --xml-ui --unwind 10 MyClass.test | jbmc-cex -

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use jbmc_cex::assemble;
use jbmc_cex_driver::config::{self, JbmcConfig};
use jbmc_cex_driver::runner::JbmcRunner;
use jbmc_cex_driver::{json_output, output};
use jbmc_cex_trace::parse_trace_doc;

#[derive(Parser)]
#[command(name = "jbmc-cex", version, about = "Reconstruct counterexample inputs from JBMC traces")]
struct Cli {
    /// Path to a JBMC --xml-ui trace file, or "-" for stdin.
    #[arg(conflicts_with = "run")]
    trace: Option<PathBuf>,

    /// Run JBMC against this entry point (e.g. 'MyClass.myMethod') instead of
    /// reading a trace file.
    #[arg(long, value_name = "ENTRY")]
    run: Option<String>,

    /// Path to the jbmc binary (auto-detected when omitted).
    #[arg(long, value_name = "PATH")]
    jbmc: Option<PathBuf>,

    /// Loop unwind limit passed to JBMC.
    #[arg(long, default_value_t = config::DEFAULT_UNWIND)]
    unwind: u32,

    /// Extra arguments passed through to JBMC (after --run ENTRY).
    #[arg(long = "jbmc-arg", value_name = "ARG")]
    jbmc_args: Vec<String>,

    /// Emit a machine-readable JSON report on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (source, xml) = match load_trace(&cli) {
        Ok(pair) => pair,
        Err(message) => {
            eprintln!("jbmc-cex: {message}");
            return ExitCode::FAILURE;
        }
    };

    let traces = match parse_trace_doc(&xml) {
        Ok(traces) => traces,
        Err(e) => {
            eprintln!("jbmc-cex: failed to parse trace: {e}");
            return ExitCode::FAILURE;
        }
    };

    let counterexamples = assemble(&traces);

    if cli.json {
        let report = json_output::JsonReport::build(&source, &counterexamples);
        json_output::print_json_report(&report);
    } else {
        output::print_header(&source);
        output::print_counterexamples(&counterexamples);
    }

    if counterexamples.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Resolve the trace XML from the CLI: run JBMC, read a file, or read stdin.
fn load_trace(cli: &Cli) -> Result<(String, String), String> {
    if let Some(entry) = &cli.run {
        let config = match &cli.jbmc {
            Some(path) => JbmcConfig::new(path.clone()),
            None => JbmcConfig::auto_detect().map_err(|e| e.to_string())?,
        };
        let config = config
            .with_unwind(cli.unwind)
            .with_extra_args(cli.jbmc_args.clone());
        let runner = JbmcRunner::new(config).map_err(|e| e.to_string())?;
        let xml = runner.trace_xml(entry).map_err(|e| e.to_string())?;
        return Ok((format!("jbmc {entry}"), xml));
    }

    match &cli.trace {
        Some(path) if path.as_os_str() == "-" => {
            let mut xml = String::new();
            std::io::stdin()
                .read_to_string(&mut xml)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            Ok(("<stdin>".to_string(), xml))
        }
        Some(path) => {
            let xml = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            Ok((path.display().to_string(), xml))
        }
        None => Err("no trace file given (pass a path, \"-\" for stdin, or --run ENTRY)".to_string()),
    }
}
