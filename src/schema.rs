use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::errors::PreconditionError;

/// JSON schema documents keyed by name (e.g. `image`, `member`)
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Value>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, schema: Value) -> Option<Value> {
        self.schemas.insert(name.into(), schema)
    }

    pub fn get(&self, name: &str) -> Result<&Value, PreconditionError> {
        self.schemas.get(name).ok_or_else(|| {
            debug!(schema = name, "Schema not registered");
            PreconditionError::schema_not_found(format!("schema '{}' is not registered", name))
        })
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
