//! Single Object Conditions
//!
//! The closed set of predicates the DSL can evaluate against an object's
//! type metadata, labels, and annotations.

use kube::core::DynamicObject;
use serde::Serialize;

// =============================================================================
// Condition
// =============================================================================

/// A single predicate over an unstructured object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Object kind equals the expected kind
    IsKind(String),
    /// Object apiVersion equals the expected group/version
    IsApiVersion(String),
    /// A metadata label with this key exists
    HasLabel(String),
    /// A metadata label with this key exists and holds this value
    LabelEquals { key: String, value: String },
    /// A metadata annotation with this key exists
    HasAnnotation(String),
    /// A metadata annotation with this key exists and holds this value
    AnnotationEquals { key: String, value: String },
}

/// Outcome of evaluating a single condition
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Whether the condition held
    pub passed: bool,
    /// Diagnostic reason, phrased for operators reading logs
    pub reason: String,
}

impl CheckResult {
    fn pass(reason: String) -> Self {
        Self {
            passed: true,
            reason,
        }
    }

    fn fail(reason: String) -> Self {
        Self {
            passed: false,
            reason,
        }
    }
}

impl Condition {
    /// Evaluate this condition against an object
    pub fn evaluate(&self, obj: &DynamicObject) -> CheckResult {
        match self {
            Condition::IsKind(expected) => {
                let found = obj
                    .types
                    .as_ref()
                    .map(|t| t.kind.as_str())
                    .unwrap_or("<none>");
                if found == expected {
                    CheckResult::pass(format!("kind is {}", expected))
                } else {
                    CheckResult::fail(format!(
                        "kind mismatch: expected {}, found {}",
                        expected, found
                    ))
                }
            }
            Condition::IsApiVersion(expected) => {
                let found = obj
                    .types
                    .as_ref()
                    .map(|t| t.api_version.as_str())
                    .unwrap_or("<none>");
                if found == expected {
                    CheckResult::pass(format!("apiVersion is {}", expected))
                } else {
                    CheckResult::fail(format!(
                        "apiVersion mismatch: expected {}, found {}",
                        expected, found
                    ))
                }
            }
            Condition::HasLabel(key) => {
                let present = obj
                    .metadata
                    .labels
                    .as_ref()
                    .is_some_and(|labels| labels.contains_key(key));
                if present {
                    CheckResult::pass(format!("label {} present", key))
                } else {
                    CheckResult::fail(format!("label {} not found", key))
                }
            }
            Condition::LabelEquals { key, value } => {
                match obj.metadata.labels.as_ref().and_then(|l| l.get(key)) {
                    None => CheckResult::fail(format!("label {} not found", key)),
                    Some(found) if found == value => {
                        CheckResult::pass(format!("label {}={}", key, value))
                    }
                    Some(found) => CheckResult::fail(format!(
                        "label {} mismatch: expected {}, found {}",
                        key, value, found
                    )),
                }
            }
            Condition::HasAnnotation(key) => {
                let present = obj
                    .metadata
                    .annotations
                    .as_ref()
                    .is_some_and(|annotations| annotations.contains_key(key));
                if present {
                    CheckResult::pass(format!("annotation {} present", key))
                } else {
                    CheckResult::fail(format!("annotation {} not found", key))
                }
            }
            Condition::AnnotationEquals { key, value } => {
                match obj.metadata.annotations.as_ref().and_then(|a| a.get(key)) {
                    None => CheckResult::fail(format!("annotation {} not found", key)),
                    Some(found) if found == value => {
                        CheckResult::pass(format!("annotation {}={}", key, value))
                    }
                    Some(found) => CheckResult::fail(format!(
                        "annotation {} mismatch: expected {}, found {}",
                        key, value, found
                    )),
                }
            }
        }
    }
}
