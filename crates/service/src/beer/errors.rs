use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// One failed input rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, rule: &'static str, message: impl Into<String>) -> Self {
        Self { field, rule, message: message.into() }
    }
}

/// Every violation found on a DTO, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, rule: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, rule, message));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has(&self, field: &str, rule: &str) -> bool {
        self.violations.iter().any(|v| v.field == field && v.rule == rule)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("unknown beer style '{0}'")]
    UnknownStyle(String),
}

/// Business errors for the beer operations
#[derive(Debug, Error)]
pub enum BeerError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("mapping failed: {0}")]
    Mapping(#[from] MappingError),
    #[error("beer {0} not found")]
    NotFound(Uuid),
    #[error("beer {id} was modified concurrently (stale version {version})")]
    Conflict { id: Uuid, version: i32 },
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
    /// Storage fault, e.g. a lost connection or a failing statement.
    #[error("repository error: {0}")]
    Repository(String),
}

impl BeerError {
    /// True when the caller sent something unacceptable, as opposed to a
    /// storage fault.
    pub fn is_client_error(&self) -> bool {
        match self {
            BeerError::Validation(_)
            | BeerError::Mapping(_)
            | BeerError::NotFound(_)
            | BeerError::Conflict { .. } => true,
            BeerError::Model(models::errors::ModelError::Validation(_)) => true,
            BeerError::Model(_) | BeerError::Repository(_) => false,
        }
    }
}
