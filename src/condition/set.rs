//! Condition Sets
//!
//! Ordered lists of conditions combined with ALL or ANY semantics. The
//! default evaluation short-circuits; the eager variant evaluates every
//! member so callers get a complete diagnostic picture.

use kube::core::DynamicObject;
use serde::Serialize;

use super::check::{CheckResult, Condition};

// =============================================================================
// Combine Mode
// =============================================================================

/// How a condition set combines its members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineMode {
    /// Every condition must pass
    All,
    /// At least one condition must pass
    Any,
}

// =============================================================================
// Verdict
// =============================================================================

/// Result of evaluating a condition set against an object
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// Whether the set as a whole passed
    pub passed: bool,
    /// Per-condition outcomes, in evaluation order
    pub results: Vec<CheckResult>,
}

impl Verdict {
    /// Reasons for every failing condition, in evaluation order
    pub fn failures(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.reason.as_str())
            .collect()
    }
}

// =============================================================================
// Condition Set
// =============================================================================

/// An ordered set of conditions evaluated against one object
#[derive(Debug, Clone)]
pub struct ConditionSet {
    mode: CombineMode,
    conditions: Vec<Condition>,
}

impl ConditionSet {
    /// Create a set where every condition must pass
    pub fn all() -> Self {
        Self {
            mode: CombineMode::All,
            conditions: Vec::new(),
        }
    }

    /// Create a set where at least one condition must pass
    pub fn any() -> Self {
        Self {
            mode: CombineMode::Any,
            conditions: Vec::new(),
        }
    }

    /// Append a condition to the set
    pub fn with(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Number of conditions in the set
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether the set holds no conditions
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate with short-circuiting.
    ///
    /// ALL stops at the first failure, ANY stops at the first pass.
    /// An empty ALL set passes vacuously; an empty ANY set fails.
    pub fn evaluate(&self, obj: &DynamicObject) -> Verdict {
        let mut results = Vec::new();

        for condition in &self.conditions {
            let result = condition.evaluate(obj);
            let passed = result.passed;
            results.push(result);

            match self.mode {
                CombineMode::All if !passed => {
                    return Verdict {
                        passed: false,
                        results,
                    }
                }
                CombineMode::Any if passed => {
                    return Verdict {
                        passed: true,
                        results,
                    }
                }
                _ => {}
            }
        }

        Verdict {
            passed: self.mode == CombineMode::All,
            results,
        }
    }

    /// Evaluate every condition regardless of earlier outcomes.
    ///
    /// Same verdict as [`evaluate`](Self::evaluate), but the result list
    /// always covers the full set.
    pub fn evaluate_eager(&self, obj: &DynamicObject) -> Verdict {
        let results: Vec<CheckResult> = self
            .conditions
            .iter()
            .map(|condition| condition.evaluate(obj))
            .collect();

        let passed = match self.mode {
            CombineMode::All => results.iter().all(|r| r.passed),
            CombineMode::Any => results.iter().any(|r| r.passed),
        };

        Verdict { passed, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object() -> DynamicObject {
        serde_json::from_value(json!({
            "apiVersion": "openebs.io/v1alpha1",
            "kind": "BlockDevice",
            "metadata": {
                "name": "bd-1",
                "labels": { "kubernetes.io/hostname": "worker-1" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_all_short_circuits_on_failure() {
        let set = ConditionSet::all()
            .with(Condition::IsKind("Pod".into()))
            .with(Condition::HasLabel("kubernetes.io/hostname".into()));

        let verdict = set.evaluate(&object());
        assert!(!verdict.passed);
        // Second condition never ran
        assert_eq!(verdict.results.len(), 1);
        assert_eq!(verdict.failures().len(), 1);
    }

    #[test]
    fn test_any_short_circuits_on_pass() {
        let set = ConditionSet::any()
            .with(Condition::IsKind("BlockDevice".into()))
            .with(Condition::HasLabel("missing".into()));

        let verdict = set.evaluate(&object());
        assert!(verdict.passed);
        assert_eq!(verdict.results.len(), 1);
    }

    #[test]
    fn test_all_passes() {
        let set = ConditionSet::all()
            .with(Condition::IsKind("BlockDevice".into()))
            .with(Condition::IsApiVersion("openebs.io/v1alpha1".into()))
            .with(Condition::LabelEquals {
                key: "kubernetes.io/hostname".into(),
                value: "worker-1".into(),
            });

        let verdict = set.evaluate(&object());
        assert!(verdict.passed);
        assert_eq!(verdict.results.len(), 3);
        assert!(verdict.failures().is_empty());
    }

    #[test]
    fn test_eager_runs_every_condition() {
        let set = ConditionSet::all()
            .with(Condition::IsKind("Pod".into()))
            .with(Condition::HasLabel("kubernetes.io/hostname".into()))
            .with(Condition::HasAnnotation("missing".into()));

        let verdict = set.evaluate_eager(&object());
        assert!(!verdict.passed);
        assert_eq!(verdict.results.len(), 3);
        assert_eq!(verdict.failures().len(), 2);
    }

    #[test]
    fn test_empty_sets() {
        let obj = object();
        assert!(ConditionSet::all().evaluate(&obj).passed);
        assert!(!ConditionSet::any().evaluate(&obj).passed);
    }
}
