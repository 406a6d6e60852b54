pub mod dispatcher;
pub mod registry;

pub use crate::domain::model::OperationInfo;
pub use crate::domain::ports::Operation;
pub use crate::utils::error::Result;
pub use dispatcher::Dispatcher;
pub use registry::OperationRegistry;
