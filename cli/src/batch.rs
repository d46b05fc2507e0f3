//! JSON batch files: an array of operations in, an array of outcomes out.

use std::path::Path;

use anyhow::Context as _;
use complex_lib::utils::{ComplexNumber, Float};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub(crate) enum Operation {
    Add {
        lhs: ComplexNumber,
        rhs: ComplexNumber,
    },
    Abs {
        value: ComplexNumber,
    },
    Reciprocal {
        value: ComplexNumber,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum Value {
    Complex(ComplexNumber),
    Real(Float),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Outcome {
    Ok(Value),
    Error(String),
}

impl Operation {
    pub(crate) fn evaluate(self) -> Outcome {
        match self {
            Operation::Add { lhs, rhs } => Outcome::Ok(Value::Complex(lhs + rhs)),
            Operation::Abs { value } => Outcome::Ok(Value::Real(value.abs().get())),
            Operation::Reciprocal { value } => match value.reciprocal() {
                Ok(result) => Outcome::Ok(Value::Complex(result)),
                Err(err) => Outcome::Error(err.to_string()),
            },
        }
    }
}

/// Failing operations become [`Outcome::Error`] and do not stop the batch
pub(crate) fn evaluate_json(json: &str) -> anyhow::Result<Vec<Outcome>> {
    let operations: Vec<Operation> = serde_json::from_str(json).context("invalid batch file")?;
    tracing::debug!(count = operations.len(), "evaluating batch");

    Ok(operations
        .into_iter()
        .enumerate()
        .map(|(index, operation)| {
            let outcome = operation.evaluate();
            if let Outcome::Error(err) = &outcome {
                tracing::warn!(index, ?operation, %err, "operation failed");
            }
            outcome
        })
        .collect())
}

pub(crate) fn run_file(path: &Path) -> anyhow::Result<Vec<Outcome>> {
    tracing::info!(?path, "loading batch");
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    evaluate_json(&json).with_context(|| format!("failed to evaluate {}", path.display()))
}
