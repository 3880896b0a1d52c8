/// Structured JSON output for reconstructed counterexamples.
///
/// Enables tooling integration by producing machine-readable
/// counterexamples via --json.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use jbmc_cex::Counterexample;

/// Complete counterexample report in JSON format.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    /// Trace source ("trace.xml", "jbmc MyClass.test", "<stdin>").
    pub source: String,
    pub counterexamples: Vec<JsonCounterexample>,
    pub summary: JsonSummary,
}

/// One failing execution in JSON format.
#[derive(Serialize, Deserialize)]
pub struct JsonCounterexample {
    pub reason: String,
    pub inputs: BTreeMap<String, JsonInput>,
    pub skipped: Vec<JsonSkipped>,
}

/// A single reconstructed input value.
#[derive(Serialize, Deserialize)]
pub struct JsonInput {
    #[serde(rename = "type")]
    pub ty: String,
    /// Structured value tree (objects carry a `__class` field).
    pub value: serde_json::Value,
    /// Human-readable rendering, same as the terminal output.
    pub display: String,
}

/// An input that could not be reconstructed.
#[derive(Serialize, Deserialize)]
pub struct JsonSkipped {
    pub name: String,
    pub error: String,
}

/// Summary over all failing executions.
#[derive(Serialize, Deserialize)]
pub struct JsonSummary {
    pub failing_executions: usize,
    pub inputs_reconstructed: usize,
    pub inputs_skipped: usize,
}

impl JsonReport {
    /// Build a report from reconstructed counterexamples.
    pub fn build(source: &str, counterexamples: &[Counterexample]) -> Self {
        let json_cexs: Vec<JsonCounterexample> = counterexamples
            .iter()
            .map(|cex| JsonCounterexample {
                reason: cex.reason.clone(),
                inputs: cex
                    .inputs
                    .iter()
                    .map(|(name, input)| {
                        (
                            name.clone(),
                            JsonInput {
                                ty: input.type_name.clone(),
                                value: input.value.to_json(),
                                display: input.value.display(),
                            },
                        )
                    })
                    .collect(),
                skipped: cex
                    .skipped
                    .iter()
                    .map(|s| JsonSkipped {
                        name: s.name.clone(),
                        error: s.error.to_string(),
                    })
                    .collect(),
            })
            .collect();

        let inputs_reconstructed = json_cexs.iter().map(|c| c.inputs.len()).sum();
        let inputs_skipped = json_cexs.iter().map(|c| c.skipped.len()).sum();
        let summary = JsonSummary {
            failing_executions: json_cexs.len(),
            inputs_reconstructed,
            inputs_skipped,
        };

        Self {
            source: source.to_string(),
            counterexamples: json_cexs,
            summary,
        }
    }
}

/// Print a JSON report to stdout.
///
/// IMPORTANT: JSON output MUST go to stdout only (not stderr).
/// All progress/warnings go to stderr when JSON mode is active.
pub fn print_json_report(report: &JsonReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json), // stdout for JSON
        Err(e) => {
            eprintln!("[jbmc-cex] Error serializing JSON report: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jbmc_cex::{CexError, InputValue, PrimitiveKind, SkippedInput, Value};

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
        inputs.insert(
            "arg1".to_string(),
            InputValue {
                type_name: "String".to_string(),
                value: Value::Str {
                    text: "abc".to_string(),
                    length: 3,
                },
            },
        );
        Counterexample {
            inputs,
            skipped: vec![SkippedInput {
                name: "arg2".to_string(),
                error: CexError::UnsupportedType("struct Unknown*".to_string()),
            }],
            reason: "assertion failed".to_string(),
        }
    }

    #[test]
    fn test_build_report_summary() {
        let report = JsonReport::build("trace.xml", &[sample_cex()]);
        assert_eq!(report.source, "trace.xml");
        assert_eq!(report.summary.failing_executions, 1);
        assert_eq!(report.summary.inputs_reconstructed, 2);
        assert_eq!(report.summary.inputs_skipped, 1);
    }

    #[test]
    fn test_report_serialization() {
        let report = JsonReport::build("trace.xml", &[sample_cex()]);
        let json = serde_json::to_string(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["source"], "trace.xml");
        let cex = &parsed["counterexamples"][0];
        assert_eq!(cex["reason"], "assertion failed");
        assert_eq!(cex["inputs"]["arg0"]["type"], "int");
        assert_eq!(cex["inputs"]["arg0"]["value"], -3);
        assert_eq!(cex["inputs"]["arg0"]["display"], "-3");
        assert_eq!(cex["inputs"]["arg1"]["value"], "abc");
        assert_eq!(cex["inputs"]["arg1"]["display"], "\"abc\"");
        assert_eq!(cex["skipped"][0]["name"], "arg2");
        assert_eq!(parsed["summary"]["inputs_skipped"], 1);
    }

    #[test]
    fn test_empty_report() {
        let report = JsonReport::build("<stdin>", &[]);
        let json = serde_json::to_string(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["counterexamples"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["summary"]["failing_executions"], 0);
    }

    #[test]
    fn test_type_field_renamed() {
        let input = JsonInput {
            ty: "int[]".to_string(),
            value: serde_json::json!([1, 9]),
            display: "[1, 9]".to_string(),
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"type\":\"int[]\""));
        assert!(!json.contains("\"ty\""));
    }

    #[test]
    fn test_print_json_report_does_not_panic() {
        let report = JsonReport::build("trace.xml", &[sample_cex()]);
        print_json_report(&report);
    }
}
