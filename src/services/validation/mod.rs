//! Declarative field validation for write payloads.
//!
//! A [`RuleSet`] is a table of `(field, predicate, message)` rules evaluated
//! in order. Every rule runs: failures are collected, never short-circuited.
//! The [`ValidatorRegistry`] maps a payload type to its rule set and is built
//! once at startup.
pub mod checks;
mod registry;

use std::collections::BTreeMap;
use std::fmt;

pub use registry::ValidatorRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Non-empty list of rule failures, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    failures: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn failures(&self) -> &[FieldError] {
        &self.failures
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.failures.iter().any(|f| f.field == field)
    }

    pub fn messages_for(&self, field: &str) -> Vec<&'static str> {
        self.failures
            .iter()
            .filter(|f| f.field == field)
            .map(|f| f.message)
            .collect()
    }

    /// Group messages by field, keeping rule order inside each field.
    pub fn into_field_map(self) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for failure in self.failures {
            map.entry(failure.field.to_string())
                .or_default()
                .push(failure.message.to_string());
        }
        map
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for failure in &self.failures {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", failure.field, failure.message)?;
            first = false;
        }
        Ok(())
    }
}

struct Rule<T> {
    field: &'static str,
    check: fn(&T) -> bool,
    message: &'static str,
}

pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> RuleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. `check` returns `true` when the value is acceptable.
    pub fn rule(mut self, field: &'static str, check: fn(&T) -> bool, message: &'static str) -> Self {
        self.rules.push(Rule {
            field,
            check,
            message,
        });
        self
    }

    pub fn validate(&self, dto: &T) -> Result<(), ValidationErrors> {
        let failures: Vec<FieldError> = self
            .rules
            .iter()
            .filter(|rule| !(rule.check)(dto))
            .map(|rule| FieldError {
                field: rule.field,
                message: rule.message,
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { failures })
        }
    }
}
