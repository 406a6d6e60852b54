use crate::domain::model::OperationInfo;
use crate::domain::operations::{Addition, Division, Multiplication, Subtraction};
use crate::domain::ports::Operation;

/// Fixed, read-only collection of the operations the calculator knows.
///
/// Built once at startup from a static list; there is no way to add or
/// remove entries afterwards, so shared references are all readers need.
#[derive(Debug)]
pub struct OperationRegistry {
    operations: Vec<Box<dyn Operation>>,
}

impl OperationRegistry {
    /// Registry holding the four built-in operations, in `+ - * /` order.
    pub fn with_builtins() -> Self {
        let builtins: Vec<Box<dyn Operation>> = vec![
            Box::new(Addition),
            Box::new(Subtraction),
            Box::new(Multiplication),
            Box::new(Division),
        ];

        let mut registry = Self {
            operations: Vec::with_capacity(builtins.len()),
        };
        for operation in builtins {
            registry.register(operation);
        }
        registry
    }

    // 同一符號只保留第一個註冊者
    fn register(&mut self, operation: Box<dyn Operation>) {
        if self.lookup(operation.symbol()).is_some() {
            tracing::warn!(
                "Duplicate operation symbol '{}' ignored",
                operation.symbol()
            );
            return;
        }
        tracing::debug!(
            "✓ Operation loaded: {} ({})",
            operation.description(),
            operation.symbol()
        );
        self.operations.push(operation);
    }

    pub fn lookup(&self, symbol: &str) -> Option<&dyn Operation> {
        self.operations
            .iter()
            .find(|op| op.symbol() == symbol)
            .map(|op| op.as_ref())
    }

    /// All operations in registration order.
    pub fn list(&self) -> &[Box<dyn Operation>] {
        &self.operations
    }

    pub fn description(&self, symbol: &str) -> Option<&'static str> {
        self.lookup(symbol).map(|op| op.description())
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.operations.iter().map(|op| op.symbol()).collect()
    }

    pub fn infos(&self) -> Vec<OperationInfo> {
        self.operations
            .iter()
            .map(|op| OperationInfo::from(op.as_ref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
