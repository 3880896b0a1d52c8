/// Colored counterexample output formatter.
///
/// Produces one block per failing execution:
///   [FAIL] assertion failed (red header)
///     arg0: int = -3
///     arg1: int[] = [1, 9]
use colored::Colorize;

use jbmc_cex::Counterexample;

/// Print reconstructed counterexamples with colored output.
///
/// Output format:
/// ```text
///   [FAIL] assertion at MyClass.java:12
///     arg0: int = -3
///     arg1: Point = Point { x: 1, y: 2 }
///     (skipped arg2: unsupported type: struct Unknown*)
///
/// Summary: 1 failing execution, 2 inputs reconstructed, 1 skipped
/// ```
pub fn print_counterexamples(counterexamples: &[Counterexample]) {
    if counterexamples.is_empty() {
        eprintln!("{}", "No failing executions found.".dimmed());
        return;
    }

    eprintln!();
    for cex in counterexamples {
        eprintln!("  {} {}", "[FAIL]".red().bold(), cex.reason);
        for (name, input) in &cex.inputs {
            eprintln!(
                "    {}: {} = {}",
                name.bold(),
                input.type_name,
                input.value.display()
            );
        }
        for skipped in &cex.skipped {
            eprintln!(
                "    {}",
                format!("(skipped {}: {})", skipped.name, skipped.error).yellow()
            );
        }
        eprintln!();
    }

    let input_count: usize = counterexamples.iter().map(|c| c.inputs.len()).sum();
    let skip_count: usize = counterexamples.iter().map(|c| c.skipped.len()).sum();

    let mut parts = vec![format!(
        "{} failing {}",
        counterexamples.len(),
        if counterexamples.len() == 1 {
            "execution"
        } else {
            "executions"
        }
    )];
    parts.push(format!("{} inputs reconstructed", input_count));
    if skip_count > 0 {
        parts.push(format!("{} {}", skip_count, "skipped".yellow()));
    }
    eprintln!("Summary: {}", parts.join(", "));
    eprintln!();
}

/// Print a header naming the trace source.
pub fn print_header(source: &str) {
    eprintln!(
        "{}",
        format!("Reconstructing counterexamples from {source}").bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use jbmc_cex::{CexError, InputValue, PrimitiveKind, SkippedInput, Value};
    use std::collections::BTreeMap;

    fn sample_cex() -> Counterexample {
        let mut inputs = BTreeMap::new();
        inputs.insert(
            "arg0".to_string(),
            InputValue {
                type_name: "int".to_string(),
                value: Value::Primitive {
                    kind: PrimitiveKind::Integral,
                    text: "-3".to_string(),
                },
            },
        );
        Counterexample {
            inputs,
            skipped: vec![SkippedInput {
                name: "arg1".to_string(),
                error: CexError::UnsupportedType("struct Unknown*".to_string()),
            }],
            reason: "assertion failed".to_string(),
        }
    }

    #[test]
    fn print_empty_does_not_panic() {
        print_counterexamples(&[]);
    }

    #[test]
    fn print_with_inputs_and_skips_does_not_panic() {
        print_counterexamples(&[sample_cex()]);
    }

    #[test]
    fn print_header_does_not_panic() {
        print_header("trace.xml");
    }
}
