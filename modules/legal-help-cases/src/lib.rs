pub mod analyzer;
pub mod generator;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod writer;

pub use writer::{CaseWriter, LlmCaseWriter, TEMPERATURE};
