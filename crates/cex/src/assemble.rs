//! Per-execution counterexample assembly.
//!
//! Drives the [`Resolver`] over every top-level argument of a failing
//! execution, pairing the reconstructed value trees with the reported
//! failure reason. Reconstruction errors are recoverable per argument:
//! the failing argument is recorded as a [`SkippedInput`] and siblings and
//! subsequent executions proceed. Nothing here aborts the run.

use std::collections::BTreeMap;

use jbmc_cex_trace::{FailingTrace, Record};

use crate::classify::{classify, display_name};
use crate::error::CexError;
use crate::resolve::Resolver;
use crate::store::RecordStore;
use crate::value::Value;

/// Base-name prefix marking a top-level method argument in a JBMC trace.
pub const ARG_PREFIX: &str = "arg";

/// A reconstructed top-level input: the Java-facing type label and the
/// value tree.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValue {
    pub type_name: String,
    pub value: Value,
}

/// An argument whose reconstruction failed, with the error that caused the
/// skip.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedInput {
    pub name: String,
    pub error: CexError,
}

/// One failing execution's reconstructed inputs and failure reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Counterexample {
    pub inputs: BTreeMap<String, InputValue>,
    pub skipped: Vec<SkippedInput>,
    pub reason: String,
}

/// Assemble one [`Counterexample`] per failing execution, in document
/// order.
pub fn assemble(traces: &[FailingTrace]) -> Vec<Counterexample> {
    traces.iter().map(assemble_one).collect()
}

fn assemble_one(trace: &FailingTrace) -> Counterexample {
    let store = RecordStore::new(&trace.records);

    // Distinct argument base names, in first-appearance order.
    let mut names: Vec<&str> = Vec::new();
    for rec in store.iter() {
        if rec.base_name.starts_with(ARG_PREFIX) && !names.contains(&rec.base_name.as_str()) {
            names.push(&rec.base_name);
        }
    }

    let mut inputs = BTreeMap::new();
    let mut skipped = Vec::new();
    for name in names {
        // The last direct write at the root path carries the argument's
        // declared type and value token.
        let Some(rec) = store.last_write(name) else {
            skipped.push(SkippedInput {
                name: name.to_string(),
                error: CexError::MalformedTrace(format!(
                    "no direct assignment for argument `{name}`"
                )),
            });
            continue;
        };
        match reconstruct_input(rec, store) {
            Ok(input) => {
                inputs.insert(name.to_string(), input);
            }
            Err(error) => skipped.push(SkippedInput {
                name: name.to_string(),
                error,
            }),
        }
    }

    Counterexample {
        inputs,
        skipped,
        reason: trace.reason.clone(),
    }
}

fn reconstruct_input(rec: &Record, store: RecordStore<'_>) -> Result<InputValue, CexError> {
    let class = classify(&rec.declared_type)?;
    let type_name = display_name(&rec.declared_type, &class);
    let value = Resolver::new(store).resolve(&rec.value, &rec.declared_type)?;
    Ok(InputValue { type_name, value })
}
