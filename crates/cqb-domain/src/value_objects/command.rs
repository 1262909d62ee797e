//! Commands

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the server is asked to do with a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    /// Execute the statement directly
    Query,
    /// Prepare the statement for later execution
    Prepare,
}

/// A statement ready to be sent, produced by a command factory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Command kind
    pub kind: CommandKind,
    /// Statement text
    pub cql: String,
    /// Bound positional parameters
    pub parameters: Vec<Value>,
}

impl Command {
    /// Create a command without parameters
    pub fn new<S: Into<String>>(kind: CommandKind, cql: S) -> Self {
        Self {
            kind,
            cql: cql.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a positional parameter
    pub fn with_parameter(mut self, value: Value) -> Self {
        self.parameters.push(value);
        self
    }

    /// Number of `?` placeholders in the statement text, ignoring quoted literals
    pub fn placeholder_count(&self) -> usize {
        let mut in_literal = false;
        self.cql
            .chars()
            .filter(|c| {
                if *c == '\'' {
                    in_literal = !in_literal;
                }
                *c == '?' && !in_literal
            })
            .count()
    }
}
