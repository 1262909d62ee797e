//! CQL command factory

use std::sync::Arc;

use cqb_application::ports::activation::{BoundArgs, Constructor, TypeEntry};
use cqb_application::ports::registry::COMMAND_FACTORIES;
use cqb_domain::error::{Error, Result};
use cqb_domain::ports::CommandFactory;
use cqb_domain::value_objects::{Command, CommandKind};

/// Builds query and prepare commands from statement text
#[derive(Debug, Clone, Copy, Default)]
pub struct CqlCommandFactory;

impl CqlCommandFactory {
    /// Create a command factory
    pub fn new() -> Self {
        Self
    }

    fn build(kind: CommandKind, cql: &str) -> Result<Command> {
        let statement = cql.trim().trim_end_matches(';').trim_end();
        if statement.is_empty() {
            return Err(Error::invalid_argument("statement cannot be empty"));
        }
        Ok(Command::new(kind, statement))
    }
}

impl CommandFactory for CqlCommandFactory {
    fn provider_name(&self) -> &str {
        "cql"
    }

    fn query(&self, cql: &str) -> Result<Command> {
        Self::build(CommandKind::Query, cql)
    }

    fn prepare(&self, cql: &str) -> Result<Command> {
        Self::build(CommandKind::Prepare, cql)
    }
}

fn build_cql(_args: BoundArgs) -> Result<Arc<dyn CommandFactory>> {
    Ok(Arc::new(CqlCommandFactory::new()))
}

#[linkme::distributed_slice(COMMAND_FACTORIES)]
static CQL_COMMAND_FACTORY: TypeEntry<dyn CommandFactory> = TypeEntry {
    name: "cql",
    description: "Query and prepare commands from CQL text",
    constructors: &[Constructor {
        params: &[],
        build: build_cql,
    }],
};
