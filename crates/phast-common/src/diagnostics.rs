//! Rule diagnostics.
//!
//! Every rule reports its findings as `RuleError` values. Diagnostics are
//! pure data: a message, an optional source line, an optional stable
//! identifier for machine-filterable suppression, and an open metadata
//! mapping for tooling integration. Analyzed-program defects are always
//! returned this way, never raised as faults.

use serde::Serialize;

/// A reported finding about the analyzed program.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuleError {
    pub message: String,
    /// One-based source line of the offending construct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Stable identifier, by convention namespaced `category.subcategory`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Free-form auxiliary data consumed by editors and tooling.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl RuleError {
    /// The diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stable identifier, if one was attached.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}

/// Builder for `RuleError`.
///
/// Start from a message, optionally attach a line, identifier, and
/// metadata entries; `build()` yields the immutable diagnostic. No
/// validation happens beyond message presence.
#[derive(Debug)]
pub struct RuleErrorBuilder {
    error: RuleError,
}

impl RuleErrorBuilder {
    /// Start a diagnostic from its message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: RuleError {
                message: message.into(),
                line: None,
                identifier: None,
                metadata: serde_json::Map::new(),
            },
        }
    }

    /// Attach the one-based source line.
    #[must_use]
    pub fn line(mut self, line: u32) -> Self {
        self.error.line = Some(line);
        self
    }

    /// Attach a stable identifier (`category.subcategory` by convention).
    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.error.identifier = Some(identifier.into());
        self
    }

    /// Attach one metadata entry.
    #[must_use]
    pub fn metadata_entry(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.error.metadata.insert(key.into(), value);
        self
    }

    /// Finish building the diagnostic.
    #[must_use]
    pub fn build(self) -> RuleError {
        self.error
    }
}
