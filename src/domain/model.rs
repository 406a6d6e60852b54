use crate::domain::ports::Operation;
use serde::{Deserialize, Serialize};

/// Serializable snapshot of a registered operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationInfo {
    pub symbol: String,
    pub description: String,
}

impl From<&dyn Operation> for OperationInfo {
    fn from(operation: &dyn Operation) -> Self {
        Self {
            symbol: operation.symbol().to_string(),
            description: operation.description().to_string(),
        }
    }
}
