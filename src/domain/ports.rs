use crate::utils::error::Result;

/// Contract shared by every arithmetic behaviour the registry can hold.
///
/// Implementations are stateless and immutable after construction, so a
/// registry of boxed operations can be shared freely between readers.
pub trait Operation: Send + Sync {
    /// One-character symbol the operation is keyed by, e.g. `"+"`.
    fn symbol(&self) -> &'static str;

    /// Human-readable name shown when the operation is selected.
    fn description(&self) -> &'static str;

    fn execute(&self, a: f64, b: f64) -> Result<f64>;
}

impl std::fmt::Debug for dyn Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("symbol", &self.symbol())
            .field("description", &self.description())
            .finish()
    }
}
