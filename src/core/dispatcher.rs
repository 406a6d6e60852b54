use crate::core::registry::OperationRegistry;
use crate::utils::error::{CalcError, Result};
use std::sync::Arc;

/// Resolves an operator symbol against the registry and runs it.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<OperationRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<OperationRegistry>) -> Self {
        Self { registry }
    }

    /// Dispatcher over the built-in operations.
    pub fn with_builtins() -> Self {
        Self::new(Arc::new(OperationRegistry::with_builtins()))
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// Runs the operation registered under `symbol`.
    ///
    /// Unknown symbols fail with [`CalcError::InvalidOperation`]; failures
    /// raised by the operation itself are returned unchanged.
    pub fn execute(&self, symbol: &str, a: f64, b: f64) -> Result<f64> {
        let operation = self
            .registry
            .lookup(symbol)
            .ok_or_else(|| CalcError::invalid_operation(symbol))?;

        tracing::debug!("Dispatching {} {} {}", a, symbol, b);
        operation.execute(a, b)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}
