mod context;

pub use context::{Alert, AlertKind, Context};
#[cfg(test)]
pub(crate) use context::test_context;
